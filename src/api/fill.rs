use crate::core::constants::{MAX_RESOLUTION, OVERFILL_RING};
use crate::core::grid::{H3oIndex, HexIndex};
use crate::core::rings::extract_rings;
use crate::util::coord::CoordinateOrder;
use crate::util::error::PolyhexError;
use geo_types::{Coord, Geometry, MultiPolygon, Polygon};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The shapes that can be filled with cells.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyfillShape {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl From<Polygon<f64>> for PolyfillShape {
    fn from(polygon: Polygon<f64>) -> Self {
        PolyfillShape::Polygon(polygon)
    }
}

impl From<MultiPolygon<f64>> for PolyfillShape {
    fn from(multi: MultiPolygon<f64>) -> Self {
        PolyfillShape::MultiPolygon(multi)
    }
}

impl TryFrom<Geometry<f64>> for PolyfillShape {
    type Error = PolyhexError;

    fn try_from(geom: Geometry<f64>) -> Result<Self, Self::Error> {
        match geom {
            Geometry::Polygon(p) => Ok(PolyfillShape::Polygon(p)),
            Geometry::MultiPolygon(mp) => Ok(PolyfillShape::MultiPolygon(mp)),
            other => Err(PolyhexError::InvalidGeometryType(
                geometry_type_name(&other).to_string(),
            )),
        }
    }
}

/// Name of the `Geometry` variant, used in error messages.
pub fn geometry_type_name(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Parameters of a fill.
///
/// # Example
/// ```
/// use polyhex::{CoordinateOrder, FillConfig};
///
/// let config = FillConfig::new(9)
///     .coordinate_order(CoordinateOrder::LngLat)
///     .overfill(true);
/// assert_eq!(config.resolution, 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillConfig {
    /// Target resolution (0-15). Validated by the grid index, not here.
    pub resolution: u8,
    #[serde(default)]
    pub order: CoordinateOrder,
    /// Expand the result by one ring of neighbouring cells.
    #[serde(default)]
    pub overfill: bool,
}

impl FillConfig {
    pub fn new(resolution: u8) -> Self {
        Self {
            resolution,
            order: CoordinateOrder::default(),
            overfill: false,
        }
    }

    pub fn coordinate_order(mut self, order: CoordinateOrder) -> Self {
        self.order = order;
        self
    }

    /// Shorthand for `coordinate_order(CoordinateOrder::from_geo_json(geo_json))`.
    pub fn geo_json(self, geo_json: bool) -> Self {
        self.coordinate_order(CoordinateOrder::from_geo_json(geo_json))
    }

    pub fn overfill(mut self, overfill: bool) -> Self {
        self.overfill = overfill;
        self
    }
}

/// Fills polygons with the cells of a [`HexIndex`].
///
/// # Example
///
/// ```
/// use polyhex::{FillConfig, Filler, PolyfillShape};
/// use geo_types::polygon;
///
/// # fn main() -> Result<(), polyhex::PolyhexError> {
/// let square = polygon![
///     (x: -0.13, y: 51.50),
///     (x: -0.11, y: 51.50),
///     (x: -0.11, y: 51.52),
///     (x: -0.13, y: 51.52),
/// ];
/// let config = FillConfig::new(8).geo_json(true);
/// let cells = Filler::new().fill(&PolyfillShape::from(square), &config)?;
/// assert!(!cells.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Filler<I = H3oIndex> {
    index: I,
}

impl Filler<H3oIndex> {
    /// Creates a filler over the h3o implementation of H3.
    pub fn new() -> Self {
        Self { index: H3oIndex }
    }
}

impl Default for Filler<H3oIndex> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: HexIndex> Filler<I> {
    pub fn with_index(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn fill(
        &self,
        shape: &PolyfillShape,
        config: &FillConfig,
    ) -> Result<HashSet<String>, PolyhexError> {
        match shape {
            PolyfillShape::Polygon(p) => self.fill_polygon(p, config),
            PolyfillShape::MultiPolygon(mp) => self.fill_multi_polygon(mp, config),
        }
    }

    /// Classifies a `Geometry` and fills it. Anything other than a
    /// (Multi)Polygon fails with [`PolyhexError::InvalidGeometryType`]
    /// before the grid index is consulted.
    pub fn fill_geometry(
        &self,
        geometry: &Geometry<f64>,
        config: &FillConfig,
    ) -> Result<HashSet<String>, PolyhexError> {
        match geometry {
            Geometry::Polygon(p) => self.fill_polygon(p, config),
            Geometry::MultiPolygon(mp) => self.fill_multi_polygon(mp, config),
            other => Err(PolyhexError::InvalidGeometryType(
                geometry_type_name(other).to_string(),
            )),
        }
    }

    pub fn fill_polygon(
        &self,
        polygon: &Polygon<f64>,
        config: &FillConfig,
    ) -> Result<HashSet<String>, PolyhexError> {
        let (outer, inners) = extract_rings(polygon);

        let direct = self
            .index
            .fill_polygon(&outer, config.resolution, &inners, config.order)?;

        let cells = if direct.is_empty() {
            self.coarsen_from_finer(&outer, &inners, config)?
        } else {
            direct
        };

        if config.overfill {
            self.overfill(&cells)
        } else {
            Ok(cells)
        }
    }

    /// Union of the fills of every part. Parts are filled in parallel.
    pub fn fill_multi_polygon(
        &self,
        multi: &MultiPolygon<f64>,
        config: &FillConfig,
    ) -> Result<HashSet<String>, PolyhexError> {
        multi
            .0
            .par_iter()
            .map(|polygon| self.fill_polygon(polygon, config))
            .try_reduce(HashSet::new, |mut acc, cells| {
                acc.extend(cells);
                Ok(acc)
            })
    }

    /// Fills at the first finer resolution that yields any cell and maps
    /// those cells back to their ancestors at the requested resolution.
    /// Empty when nothing fills up to `MAX_RESOLUTION`.
    fn coarsen_from_finer(
        &self,
        outer: &[Coord<f64>],
        inners: &[Vec<Coord<f64>>],
        config: &FillConfig,
    ) -> Result<HashSet<String>, PolyhexError> {
        let target = config.resolution;
        debug!("no cell fits at resolution {}, trying finer ones", target);

        for finer in target.saturating_add(1)..=MAX_RESOLUTION {
            let cells = self.index.fill_polygon(outer, finer, inners, config.order)?;
            if cells.is_empty() {
                continue;
            }

            debug!(
                "{} cells fit at resolution {}, coarsening to {}",
                cells.len(),
                finer,
                target
            );
            return cells
                .iter()
                .map(|cell| {
                    let center = self.index.cell_to_center(cell)?;
                    self.index.coordinate_to_cell(&center, target)
                })
                .collect();
        }

        debug!("polygon is empty at every resolution up to {}", MAX_RESOLUTION);
        Ok(HashSet::new())
    }

    fn overfill(&self, cells: &HashSet<String>) -> Result<HashSet<String>, PolyhexError> {
        let mut expanded = HashSet::with_capacity(cells.len() * 7);
        for cell in cells {
            expanded.extend(self.index.k_ring(cell, OVERFILL_RING)?);
        }
        Ok(expanded)
    }
}

/// Fills a (Multi)Polygon with H3 cells using the default h3o index.
///
/// `geo_json` selects lng/lat coordinate order; `overfill` adds one ring of
/// neighbours around the result.
///
/// # Example
/// ```
/// use polyhex::{polyfill, PolyhexError};
/// use geo_types::{Geometry, point};
///
/// let err = polyfill(&Geometry::Point(point! { x: 1.0, y: 2.0 }), 5, false, false).unwrap_err();
/// assert_eq!(err, PolyhexError::InvalidGeometryType("Point".to_string()));
/// ```
pub fn polyfill(
    geometry: &Geometry<f64>,
    resolution: u8,
    geo_json: bool,
    overfill: bool,
) -> Result<HashSet<String>, PolyhexError> {
    let config = FillConfig::new(resolution)
        .geo_json(geo_json)
        .overfill(overfill);
    Filler::new().fill_geometry(geometry, &config)
}
