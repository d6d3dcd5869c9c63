pub mod fill;
pub mod hex_csv;

pub use fill::{FillConfig, Filler, PolyfillShape, geometry_type_name, polyfill};
pub use hex_csv::{CsvFillConfig, CsvToCells, GeometryFormat, csv_to_cells_csv, fill_csv_with};
