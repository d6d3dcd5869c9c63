/// Error type for polyhex operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyhexError {
    /// The geometry is neither a Polygon nor a MultiPolygon. Carries the actual type name.
    InvalidGeometryType(String),
    /// The resolution is outside the valid range (0-15).
    InvalidResolution(u8),
    /// The string is not a valid H3 cell identifier.
    InvalidCellIndex(String),
    /// A coordinate could not be converted to a latitude/longitude pair.
    InvalidCoordinate(String),
    /// The grid tiler rejected the polygon (e.g., non-finite vertices).
    InvalidGeometry(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Job configuration could not be loaded.
    ConfigError(String),
}

impl std::fmt::Display for PolyhexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolyhexError::InvalidGeometryType(t) => write!(f, "Unknown geometry type: {}", t),
            PolyhexError::InvalidResolution(r) => write!(f, "Invalid resolution: {}", r),
            PolyhexError::InvalidCellIndex(id) => write!(f, "Invalid cell index: {}", id),
            PolyhexError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            PolyhexError::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
            PolyhexError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            PolyhexError::IoError(msg) => write!(f, "IO error: {}", msg),
            PolyhexError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            PolyhexError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for PolyhexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_geometry_type() {
        let err = PolyhexError::InvalidGeometryType("Point".to_string());
        assert_eq!(err.to_string(), "Unknown geometry type: Point");
    }

    #[test]
    fn test_display_resolution() {
        assert_eq!(
            PolyhexError::InvalidResolution(16).to_string(),
            "Invalid resolution: 16"
        );
    }
}
