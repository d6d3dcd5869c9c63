use crate::core::rings::is_degenerate_ring;
use crate::util::coord::{CoordinateOrder, rings_to_lng_lat_polygon};
use crate::util::error::PolyhexError;
use geo_types::{Coord, LineString, Point, Polygon};
use h3o::geom::{ContainmentMode, TilerBuilder};
use h3o::{CellIndex, LatLng, Resolution};
use log::trace;
use std::collections::HashSet;

/// The hexagonal grid operations the filler relies on.
///
/// Cell identifiers are opaque strings. Points returned by and passed to
/// the index use x = longitude, y = latitude, in degrees.
pub trait HexIndex: Sync {
    /// Cells whose centers fall inside the polygon described by the rings.
    ///
    /// Returns an empty set, not an error, when the polygon is too small to
    /// contain any cell center at `resolution`.
    fn fill_polygon(
        &self,
        outer: &[Coord<f64>],
        resolution: u8,
        inners: &[Vec<Coord<f64>>],
        order: CoordinateOrder,
    ) -> Result<HashSet<String>, PolyhexError>;

    fn cell_to_center(&self, cell: &str) -> Result<Point<f64>, PolyhexError>;

    fn coordinate_to_cell(&self, point: &Point<f64>, resolution: u8)
    -> Result<String, PolyhexError>;

    /// The cell itself plus every cell within grid distance `k`.
    fn k_ring(&self, cell: &str, k: u32) -> Result<HashSet<String>, PolyhexError>;

    /// Closed boundary polygon of a cell, in lng/lat order.
    fn cell_to_polygon(&self, cell: &str) -> Result<Polygon<f64>, PolyhexError>;
}

/// [`HexIndex`] backed by the `h3o` implementation of H3.
#[derive(Debug, Clone, Copy, Default)]
pub struct H3oIndex;

impl H3oIndex {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn to_resolution(resolution: u8) -> Result<Resolution, PolyhexError> {
    Resolution::try_from(resolution).map_err(|_| PolyhexError::InvalidResolution(resolution))
}

pub(crate) fn parse_cell(cell: &str) -> Result<CellIndex, PolyhexError> {
    cell.parse::<CellIndex>()
        .map_err(|_| PolyhexError::InvalidCellIndex(cell.to_string()))
}

impl HexIndex for H3oIndex {
    fn fill_polygon(
        &self,
        outer: &[Coord<f64>],
        resolution: u8,
        inners: &[Vec<Coord<f64>>],
        order: CoordinateOrder,
    ) -> Result<HashSet<String>, PolyhexError> {
        let res = to_resolution(resolution)?;
        if is_degenerate_ring(outer) {
            trace!("fill_polygon res={} degenerate exterior", resolution);
            return Ok(HashSet::new());
        }
        let holes: Vec<Vec<Coord<f64>>> = inners
            .iter()
            .filter(|ring| !is_degenerate_ring(ring))
            .cloned()
            .collect();
        let polygon = rings_to_lng_lat_polygon(outer, &holes, order);

        let mut tiler = TilerBuilder::new(res)
            .containment_mode(ContainmentMode::ContainsCentroid)
            .build();
        tiler
            .add(polygon)
            .map_err(|e| PolyhexError::InvalidGeometry(e.to_string()))?;

        let cells: HashSet<String> = tiler.into_coverage().map(|c| c.to_string()).collect();
        trace!("fill_polygon res={} cells={}", resolution, cells.len());
        Ok(cells)
    }

    fn cell_to_center(&self, cell: &str) -> Result<Point<f64>, PolyhexError> {
        let ll = LatLng::from(parse_cell(cell)?);
        Ok(Point::new(ll.lng(), ll.lat()))
    }

    fn coordinate_to_cell(
        &self,
        point: &Point<f64>,
        resolution: u8,
    ) -> Result<String, PolyhexError> {
        let res = to_resolution(resolution)?;
        let ll = LatLng::new(point.y(), point.x())
            .map_err(|e| PolyhexError::InvalidCoordinate(e.to_string()))?;
        Ok(ll.to_cell(res).to_string())
    }

    fn k_ring(&self, cell: &str, k: u32) -> Result<HashSet<String>, PolyhexError> {
        let cell = parse_cell(cell)?;
        Ok(cell
            .grid_disk::<Vec<_>>(k)
            .into_iter()
            .map(|c| c.to_string())
            .collect())
    }

    fn cell_to_polygon(&self, cell: &str) -> Result<Polygon<f64>, PolyhexError> {
        let boundary = parse_cell(cell)?.boundary();
        let coords: Vec<Coord<f64>> = boundary
            .iter()
            .map(|ll| Coord {
                x: ll.lng(),
                y: ll.lat(),
            })
            .collect();
        Ok(Polygon::new(LineString::from(coords), vec![]))
    }
}
