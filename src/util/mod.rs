pub mod coord;
pub mod error;
pub mod parse;

pub use coord::{CoordinateOrder, rings_to_lng_lat_polygon};
pub use error::PolyhexError;
pub use parse::{parse_geometry, parse_shape, parse_wkt, polygon_to_geojson, polygon_to_wkt};
