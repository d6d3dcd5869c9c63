use geo_types::Geometry;
use polyhex::{PolyhexError, parse_geometry, polyfill};

fn main() -> Result<(), PolyhexError> {
    let wkt = "POLYGON((-0.13 51.50, -0.11 51.50, -0.11 51.52, -0.13 51.52, -0.13 51.50))";
    let geometry: Geometry<f64> = parse_geometry(wkt)?;

    let cells = polyfill(&geometry, 8, true, false)?;
    println!("Cells at resolution 8: {}", cells.len());

    let overfilled = polyfill(&geometry, 8, true, true)?;
    println!("Cells with overfill: {}", overfilled.len());

    let mut sorted: Vec<_> = cells.into_iter().collect();
    sorted.sort();
    for cell in sorted {
        println!("{}", cell);
    }

    Ok(())
}
