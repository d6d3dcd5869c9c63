use crate::api::fill::{FillConfig, Filler};
use crate::core::constants::CELL_ID_SEPARATOR;
use crate::core::grid::HexIndex;
use crate::util::coord::CoordinateOrder;
use crate::util::error::PolyhexError;
use crate::util::parse::{parse_shape, polygon_to_geojson, polygon_to_wkt};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Output format for cell boundary geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

fn default_explode() -> bool {
    true
}

fn default_order() -> CoordinateOrder {
    CoordinateOrder::LngLat
}

/// Configuration for CSV polyfill jobs.
///
/// WKT and GeoJSON store longitude first, so the coordinate order defaults to
/// [`CoordinateOrder::LngLat`] here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvFillConfig {
    pub geometry_column: String,
    #[serde(default)]
    pub exclude_columns: Vec<String>,
    pub resolution: u8,
    #[serde(default = "default_order")]
    pub order: CoordinateOrder,
    #[serde(default)]
    pub overfill: bool,
    /// One output row per cell when true, otherwise ids are joined in one row.
    #[serde(default = "default_explode")]
    pub explode: bool,
    #[serde(default)]
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl CsvFillConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use polyhex::CsvFillConfig;
    ///
    /// let config = CsvFillConfig::new("geometry", 9).overfill(true);
    /// assert!(config.explode);
    /// ```
    pub fn new(geometry_column: impl Into<String>, resolution: u8) -> Self {
        Self {
            geometry_column: geometry_column.into(),
            exclude_columns: Vec::new(),
            resolution,
            order: default_order(),
            overfill: false,
            explode: true,
            include_cell_geometry: None,
        }
    }

    /// Loads a job configuration from JSON.
    ///
    /// ```
    /// use polyhex::CsvFillConfig;
    ///
    /// let config = CsvFillConfig::from_json(
    ///     r#"{"geometry_column": "wkt", "resolution": 8, "order": "lat_lng"}"#,
    /// ).unwrap();
    /// assert_eq!(config.resolution, 8);
    /// ```
    pub fn from_json(s: &str) -> Result<Self, PolyhexError> {
        serde_json::from_str(s).map_err(|e| PolyhexError::ConfigError(e.to_string()))
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    pub fn coordinate_order(mut self, order: CoordinateOrder) -> Self {
        self.order = order;
        self
    }

    pub fn overfill(mut self, overfill: bool) -> Self {
        self.overfill = overfill;
        self
    }

    pub fn explode(mut self, explode: bool) -> Self {
        self.explode = explode;
        self
    }

    /// Include the cell boundary in output. Only written in exploded mode.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }

    pub fn fill_config(&self) -> FillConfig {
        FillConfig::new(self.resolution)
            .coordinate_order(self.order)
            .overfill(self.overfill)
    }
}

pub trait CsvToCells {
    fn to_cells_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvFillConfig,
    ) -> Result<(), PolyhexError>;
}

impl<P: AsRef<Path>> CsvToCells for P {
    fn to_cells_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvFillConfig,
    ) -> Result<(), PolyhexError> {
        csv_to_cells_csv(self, output_path, config)
    }
}

/// Fills every geometry of a CSV column with H3 cells and writes the cell ids
/// alongside the remaining columns.
///
/// In exploded mode a row whose geometry fills to no cell (e.g. `POLYGON EMPTY`)
/// produces no output row; in joined mode it is written with an empty `cell_id`.
///
/// # Example
///
/// ```no_run
/// use polyhex::{csv_to_cells_csv, CsvFillConfig, GeometryFormat};
///
/// let config = CsvFillConfig::new("geometry", 9)
///     .exclude(vec!["notes".into()])
///     .with_cell_geometry(GeometryFormat::Wkt);
///
/// csv_to_cells_csv("districts.csv", "cells.csv", &config).unwrap();
/// ```
pub fn csv_to_cells_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvFillConfig,
) -> Result<(), PolyhexError> {
    fill_csv_with(&Filler::new(), csv_path, output_path, config)
}

/// Same as [`csv_to_cells_csv`] with a caller-provided filler.
pub fn fill_csv_with<I: HexIndex>(
    filler: &Filler<I>,
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvFillConfig,
) -> Result<(), PolyhexError> {
    let file = File::open(csv_path).map_err(|e| PolyhexError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| PolyhexError::CsvError(e.to_string()))?
        .clone();

    let geom_idx = headers
        .iter()
        .position(|h| h == config.geometry_column)
        .ok_or_else(|| {
            PolyhexError::CsvError(format!(
                "Geometry column '{}' not found",
                config.geometry_column
            ))
        })?;

    let mut exclude_indices = HashSet::from([geom_idx]);
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let fill_config = config.fill_config();
    let geometry_format = config.include_cell_geometry.filter(|_| config.explode);

    let out_file = File::create(output_path).map_err(|e| PolyhexError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["cell_id"];
    if geometry_format.is_some() {
        header_row.push("cell_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| PolyhexError::CsvError(e.to_string()))?;

    let mut rows_in = 0usize;
    let mut rows_out = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| PolyhexError::CsvError(e.to_string()))?;
        rows_in += 1;

        let geom_str = record.get(geom_idx).ok_or_else(|| {
            PolyhexError::CsvError(format!("Missing geometry column at index {}", geom_idx))
        })?;
        let shape = parse_shape(geom_str)?;

        let mut cells: Vec<String> = filler.fill(&shape, &fill_config)?.into_iter().collect();
        cells.sort();

        if cells.is_empty() && config.explode {
            debug!("row {} has no cells and is left out of the output", rows_in);
            continue;
        }

        let passthrough: Vec<&str> = record
            .iter()
            .enumerate()
            .filter(|(i, _)| !exclude_indices.contains(i))
            .map(|(_, field)| field)
            .collect();

        if config.explode {
            for cell in &cells {
                let mut row: Vec<String> = vec![cell.clone()];

                if let Some(format) = geometry_format {
                    let polygon = filler.index().cell_to_polygon(cell)?;
                    row.push(match format {
                        GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                        GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
                    });
                }

                row.extend(passthrough.iter().map(|f| f.to_string()));
                writer
                    .write_record(&row)
                    .map_err(|e| PolyhexError::CsvError(e.to_string()))?;
                rows_out += 1;
            }
        } else {
            let mut row: Vec<String> = vec![cells.join(CELL_ID_SEPARATOR)];
            row.extend(passthrough.iter().map(|f| f.to_string()));
            writer
                .write_record(&row)
                .map_err(|e| PolyhexError::CsvError(e.to_string()))?;
            rows_out += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| PolyhexError::IoError(e.to_string()))?;

    debug!("filled {} rows into {} output rows", rows_in, rows_out);
    Ok(())
}
