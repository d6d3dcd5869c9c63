use geo::MapCoords;
use geo_types::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

/// Axis order of the input coordinates.
///
/// `LatLng` is the classic H3 convention; `LngLat` is the GeoJSON one, where
/// the first ordinate is the longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateOrder {
    #[default]
    LatLng,
    LngLat,
}

impl CoordinateOrder {
    /// Maps the boolean `geo_json` flag onto an order. `true` means lng/lat.
    pub fn from_geo_json(geo_json: bool) -> Self {
        if geo_json {
            CoordinateOrder::LngLat
        } else {
            CoordinateOrder::LatLng
        }
    }
}

/// Builds a polygon with x = lng and y = lat from rings stored in `order`.
pub fn rings_to_lng_lat_polygon(
    outer: &[Coord<f64>],
    inners: &[Vec<Coord<f64>>],
    order: CoordinateOrder,
) -> Polygon<f64> {
    let polygon = Polygon::new(
        LineString::from(outer.to_vec()),
        inners
            .iter()
            .map(|ring| LineString::from(ring.clone()))
            .collect(),
    );

    match order {
        CoordinateOrder::LngLat => polygon,
        CoordinateOrder::LatLng => polygon.map_coords(|Coord { x, y }| Coord { x: y, y: x }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_default_is_lat_lng() {
        assert_eq!(CoordinateOrder::default(), CoordinateOrder::LatLng);
    }

    #[test]
    fn test_from_geo_json() {
        assert_eq!(CoordinateOrder::from_geo_json(true), CoordinateOrder::LngLat);
        assert_eq!(CoordinateOrder::from_geo_json(false), CoordinateOrder::LatLng);
    }

    #[test]
    fn test_lat_lng_rings_are_swapped() {
        let outer = vec![
            coord! { x: 51.0, y: -1.0 },
            coord! { x: 51.0, y: -0.5 },
            coord! { x: 51.5, y: -0.5 },
            coord! { x: 51.0, y: -1.0 },
        ];
        let polygon = rings_to_lng_lat_polygon(&outer, &[], CoordinateOrder::LatLng);
        assert_eq!(polygon.exterior().0[0], coord! { x: -1.0, y: 51.0 });
        assert_eq!(polygon.exterior().0[2], coord! { x: -0.5, y: 51.5 });
    }

    #[test]
    fn test_lng_lat_rings_keep_holes() {
        let outer = vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
            coord! { x: 0.0, y: 0.0 },
        ];
        let hole = vec![
            coord! { x: 0.5, y: 0.1 },
            coord! { x: 0.9, y: 0.1 },
            coord! { x: 0.9, y: 0.5 },
            coord! { x: 0.5, y: 0.1 },
        ];
        let polygon = rings_to_lng_lat_polygon(&outer, &[hole.clone()], CoordinateOrder::LngLat);
        assert_eq!(polygon.interiors().len(), 1);
        assert_eq!(polygon.interiors()[0].0, hole);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CoordinateOrder::LngLat).unwrap();
        assert_eq!(json, "\"lng_lat\"");
    }
}
