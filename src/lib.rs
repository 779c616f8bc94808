//! asterged: a georeferencing converter for ASTER Global Emissivity Dataset products
//!
//! ASTER GED V3 and V4.1 files ship as HDF5 containers whose science datasets
//! carry no coordinate reference system, which leaves the tiles misplaced (by
//! a full 180° of longitude for V3) in GIS and remote sensing software. This
//! library walks a product file and re-emits every dataset as a GeoTIFF with
//! a north-up WGS84 geotransform. Pixel values and layout pass through
//! untouched; the fix is purely annotation.

pub mod core;
pub mod io;
pub mod types;

// Re-export main types and functions for easier access
pub use types::{
    GedError, GedResult, Geolocation, GeoTransform, OutputDataType, ProductVersion,
};

pub use crate::core::{convert, convert_v3, convert_v41, resolve_geolocation};
pub use crate::io::{write_geotiff, GedReader};
