/// Finest resolution supported by H3. The fallback search never goes past it.
pub const MAX_RESOLUTION: u8 = 15;

/// Grid distance used when overfilling a result.
pub const OVERFILL_RING: u32 = 1;

/// Separator for joined cell ids in non-exploded CSV output.
pub const CELL_ID_SEPARATOR: &str = ";";
