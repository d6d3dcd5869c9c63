//! # polyhex
//!
//! Fills polygons and multi-polygons with H3 cells.
//!
//! ### 1. `polyfill` - One-shot
//!
//! ```
//! use polyhex::polyfill;
//! use geo_types::{Geometry, polygon};
//!
//! # fn main() -> Result<(), polyhex::PolyhexError> {
//! // lng/lat order, hence geo_json = true
//! let square = polygon![
//!     (x: -0.13, y: 51.50),
//!     (x: -0.11, y: 51.50),
//!     (x: -0.11, y: 51.52),
//!     (x: -0.13, y: 51.52),
//! ];
//! let cells = polyfill(&Geometry::Polygon(square), 9, true, false)?;
//! assert!(!cells.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! Shapes too small to hold a cell center at the requested resolution are
//! filled at the first finer resolution that works and mapped back up, so a
//! non-degenerate polygon always yields at least one cell.
//!
//! ### 2. `Filler` - Reusable, pluggable grid
//!
//! ```
//! use polyhex::{CoordinateOrder, FillConfig, Filler, PolyfillShape};
//! use geo_types::{MultiPolygon, polygon};
//!
//! # fn main() -> Result<(), polyhex::PolyhexError> {
//! let a = polygon![(x: 51.50, y: -0.13), (x: 51.50, y: -0.11), (x: 51.52, y: -0.11)];
//! let b = polygon![(x: 48.85, y: 2.33), (x: 48.85, y: 2.36), (x: 48.87, y: 2.36)];
//!
//! let config = FillConfig::new(8)
//!     .coordinate_order(CoordinateOrder::LatLng)
//!     .overfill(true);
//! let cells = Filler::new().fill(&PolyfillShape::from(MultiPolygon(vec![a, b])), &config)?;
//! assert!(!cells.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToCells` - CSV File Conversion
//!
//! ```no_run
//! use polyhex::{CsvFillConfig, CsvToCells, GeometryFormat};
//!
//! let config = CsvFillConfig::new("geometry", 9)
//!     .overfill(true)
//!     .with_cell_geometry(GeometryFormat::GeoJson);
//!
//! "boroughs.csv".to_cells_csv("cells.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    CsvFillConfig, CsvToCells, FillConfig, Filler, GeometryFormat, PolyfillShape,
    csv_to_cells_csv, fill_csv_with, geometry_type_name, polyfill,
};
pub use core::{CELL_ID_SEPARATOR, H3oIndex, HexIndex, MAX_RESOLUTION, OVERFILL_RING, extract_rings};
pub use util::{
    CoordinateOrder, PolyhexError, parse_geometry, parse_shape, parse_wkt, polygon_to_geojson,
    polygon_to_wkt,
};

pub use geo_types;
