//! Input/output: HDF5 container access and GeoTIFF emission

pub mod geotiff;
pub mod reader;

pub use geotiff::write_geotiff;
pub use reader::GedReader;
