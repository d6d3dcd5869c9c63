pub mod constants;
pub mod grid;
pub mod rings;

pub use constants::{CELL_ID_SEPARATOR, MAX_RESOLUTION, OVERFILL_RING};
pub use grid::{H3oIndex, HexIndex};
pub use rings::{Rings, extract_rings, is_degenerate_ring};
