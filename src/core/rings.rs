use geo_types::{Coord, Polygon};

/// Outer ring and holes of a polygon, as plain coordinate sequences.
pub type Rings = (Vec<Coord<f64>>, Vec<Vec<Coord<f64>>>);

/// Extracts the coordinates of the outer and inner rings of a polygon.
pub fn extract_rings(polygon: &Polygon<f64>) -> Rings {
    let outer = polygon.exterior().0.clone();
    let inners = polygon
        .interiors()
        .iter()
        .map(|ring| ring.0.clone())
        .collect();
    (outer, inners)
}

/// True when a ring encloses no area because it has fewer than three
/// distinct vertices once repeated points and the closing point are removed.
pub fn is_degenerate_ring(ring: &[Coord<f64>]) -> bool {
    let mut vertices = ring.to_vec();
    vertices.dedup();
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    vertices.len() < 3
}
