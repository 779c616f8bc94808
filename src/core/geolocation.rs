use crate::io::GedReader;
use crate::types::{GedResult, Geolocation};

/// Literal object names from the V3 product layout. The product stores
/// its anchor grids under exactly these names; a container without them
/// violates the assumed layout and fails the run.
pub const GEOLOCATION_GROUP: &str = "Geolocation";
pub const LATITUDE_DATASET: &str = "Latitude";
pub const LONGITUDE_DATASET: &str = "Longitude";

/// Cell size in degrees for the 100 m product.
pub const CELL_SIZE_100M: f64 = 0.001;
/// Cell size in degrees for the 1 km product.
pub const CELL_SIZE_1KM: f64 = 0.01;

/// File-name token identifying the 100 m tiles.
const TOKEN_100M: &str = "AG100";

/// Cell size for a product file-name token. The resolution is a file-name
/// convention, never a value stored in the container.
pub fn cell_size_for_product(token: &str) -> f64 {
    if token == TOKEN_100M {
        CELL_SIZE_100M
    } else {
        CELL_SIZE_1KM
    }
}

/// Resolve the V3 upper-left anchor coordinate and cell size.
///
/// The Latitude/Longitude grids cover the tile itself, so their `[0, 0]`
/// element is the tile's upper-left geographic corner.
pub fn resolve_geolocation(reader: &GedReader) -> GedResult<Geolocation> {
    let lat = reader
        .dataset(GEOLOCATION_GROUP, LATITUDE_DATASET)?
        .read_2d::<f64>()?;
    let lon = reader
        .dataset(GEOLOCATION_GROUP, LONGITUDE_DATASET)?
        .read_2d::<f64>()?;

    let anchor = Geolocation {
        ul_lat: lat[[0, 0]],
        ul_lon: lon[[0, 0]],
        cell_size: cell_size_for_product(&reader.product_token()),
    };

    log::debug!(
        "Resolved anchor ({}, {}) with {}° cells",
        anchor.ul_lat,
        anchor.ul_lon,
        anchor.cell_size
    );

    Ok(anchor)
}
