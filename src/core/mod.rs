//! Core conversion logic for the ASTER GED products

pub mod convert;
pub mod geolocation;

// Re-export main operations
pub use convert::{
    convert, convert_v3, convert_v41, v3_output_type, v41_output_type, V41_GEOLOCATION,
    V41_SDS_GROUP,
};
pub use geolocation::{
    cell_size_for_product, resolve_geolocation, CELL_SIZE_100M, CELL_SIZE_1KM, GEOLOCATION_GROUP,
    LATITUDE_DATASET, LONGITUDE_DATASET,
};
