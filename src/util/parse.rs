use crate::api::fill::PolyfillShape;
use crate::util::error::PolyhexError;
use geo_types::{Geometry, MultiPolygon, Polygon};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::{ToWkt, Wkt};

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
/// A GeoJSON document must hold exactly one geometry.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, PolyhexError> {
    let trimmed = s.trim();
    if !trimmed.starts_with('{') {
        return parse_wkt(trimmed);
    }

    let mut geometries = geojson_geometries(trimmed)?;
    match geometries.len() {
        1 => Ok(geometries.remove(0)),
        n => Err(PolyhexError::GeometryParseError(format!(
            "expected a single geometry, found {}",
            n
        ))),
    }
}

/// Parses a string straight into a fillable shape.
///
/// Non-(Multi)Polygon geometries fail with `InvalidGeometryType`. A GeoJSON
/// FeatureCollection is accepted when every feature is a (Multi)Polygon; its
/// parts are merged into one MultiPolygon.
///
/// ```
/// use polyhex::{PolyfillShape, parse_shape};
///
/// let shape = parse_shape("POLYGON((0 0, 1 0, 1 1, 0 0))").unwrap();
/// assert!(matches!(shape, PolyfillShape::Polygon(_)));
/// assert!(parse_shape("POINT(0 0)").is_err());
/// ```
pub fn parse_shape(s: &str) -> Result<PolyfillShape, PolyhexError> {
    let trimmed = s.trim();
    if !trimmed.starts_with('{') {
        return PolyfillShape::try_from(parse_wkt(trimmed)?);
    }

    let mut geometries = geojson_geometries(trimmed)?;
    if geometries.len() == 1 {
        return PolyfillShape::try_from(geometries.remove(0));
    }

    let mut parts: Vec<Polygon<f64>> = Vec::new();
    for geometry in geometries {
        match PolyfillShape::try_from(geometry)? {
            PolyfillShape::Polygon(p) => parts.push(p),
            PolyfillShape::MultiPolygon(mp) => parts.extend(mp.0),
        }
    }
    Ok(PolyfillShape::MultiPolygon(MultiPolygon(parts)))
}

/// Every geometry carried by a GeoJSON document, in document order.
fn geojson_geometries(s: &str) -> Result<Vec<Geometry<f64>>, PolyhexError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| PolyhexError::GeometryParseError(e.to_string()))?;

    let features = match geojson {
        GeoJson::Geometry(geom) => return Ok(vec![to_geo(geom)?]),
        GeoJson::Feature(feat) => vec![feat],
        GeoJson::FeatureCollection(fc) => fc.features,
    };

    features
        .into_iter()
        .map(|feat| {
            feat.geometry
                .ok_or_else(|| {
                    PolyhexError::GeometryParseError("Feature has no geometry".to_string())
                })
                .and_then(to_geo)
        })
        .collect()
}

fn to_geo(geom: geojson::Geometry) -> Result<Geometry<f64>, PolyhexError> {
    Geometry::try_from(geom).map_err(|e| PolyhexError::GeometryParseError(e.to_string()))
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, PolyhexError> {
    let wkt =
        Wkt::<f64>::from_str(s).map_err(|e| PolyhexError::GeometryParseError(e.to_string()))?;
    Geometry::try_from(wkt)
        .map_err(|_| PolyhexError::GeometryParseError(format!("unsupported WKT: {}", s)))
}

pub fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    polygon.wkt_string()
}

pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    geojson::Geometry::from(polygon).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::polygon;

    #[test]
    fn test_parse_geojson_polygon() -> Result<(), PolyhexError> {
        let json = r#"{"type":"Polygon","coordinates":[[[-0.1,51.5],[-0.2,51.5],[-0.2,51.6],[-0.1,51.5]]]}"#;
        match parse_geometry(json)? {
            Geometry::Polygon(poly) => {
                assert_eq!(poly.exterior().0.len(), 4);
                assert!(poly.interiors().is_empty());
            }
            other => panic!("Expected Polygon, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature() -> Result<(), PolyhexError> {
        let json = r#"{"type":"Feature","properties":{},"geometry":{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1],[0,0]]],[[[2,2],[3,2],[3,3],[2,2]]]]}}"#;
        match parse_geometry(json)? {
            Geometry::MultiPolygon(mp) => assert_eq!(mp.0.len(), 2),
            other => panic!("Expected MultiPolygon, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geometry_needs_single_geometry() {
        let json = r#"{"type":"FeatureCollection","features":[]}"#;
        assert!(matches!(
            parse_geometry(json),
            Err(PolyhexError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_shape_from_feature_collection() -> Result<(), PolyhexError> {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
            {"type":"Feature","properties":{},"geometry":{"type":"MultiPolygon","coordinates":[[[[2,2],[3,2],[3,3],[2,2]]],[[[4,4],[5,4],[5,5],[4,4]]]]}}
        ]}"#;
        match parse_shape(json)? {
            PolyfillShape::MultiPolygon(mp) => assert_eq!(mp.0.len(), 3),
            other => panic!("Expected MultiPolygon, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_shape_rejects_non_polygon_feature() {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[0,0]}}
        ]}"#;
        assert_eq!(
            parse_shape(json),
            Err(PolyhexError::InvalidGeometryType("Point".to_string()))
        );
    }

    #[test]
    fn test_shape_from_wkt() -> Result<(), PolyhexError> {
        assert!(matches!(
            parse_shape("MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)))")?,
            PolyfillShape::MultiPolygon(_)
        ));
        assert_eq!(
            parse_shape("LINESTRING(0 0, 1 1)"),
            Err(PolyhexError::InvalidGeometryType("LineString".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_parse_wkt_polygon_with_hole() -> Result<(), PolyhexError> {
        let wkt = "POLYGON((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 2))";
        match parse_geometry(wkt)? {
            Geometry::Polygon(poly) => assert_eq!(poly.interiors().len(), 1),
            other => panic!("Expected Polygon, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), PolyhexError> {
        let geom = parse_geometry("POINT(-0.1 51.5)")?;
        assert!(matches!(geom, Geometry::Point(_)));
        Ok(())
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_geometry("not a polygon").is_err());
    }

    #[test]
    fn test_polygon_output_formats() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)];
        assert!(polygon_to_wkt(&poly).starts_with("POLYGON"));

        let json = polygon_to_geojson(&poly);
        assert!(json.contains("\"Polygon\""));

        let back = parse_geometry(&json).unwrap();
        match back {
            Geometry::Polygon(p) => assert_eq!(p, poly),
            other => panic!("Expected Polygon, got {:?}", other),
        }
    }
}
