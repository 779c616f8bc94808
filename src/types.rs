use hdf5_metno as hdf5;
use serde::{Deserialize, Serialize};

/// Geospatial transformation parameters: the six-term affine mapping from
/// pixel/line coordinates to georeferenced coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform {
    pub top_left_x: f64,
    pub pixel_width: f64,
    pub rotation_x: f64,
    pub top_left_y: f64,
    pub rotation_y: f64,
    pub pixel_height: f64,
}

impl GeoTransform {
    /// North-up transform anchored at a tile's upper-left corner. Rows advance
    /// southward, hence the negated pixel height.
    pub fn north_up(ul_lon: f64, ul_lat: f64, cell_size: f64) -> Self {
        GeoTransform {
            top_left_x: ul_lon,
            pixel_width: cell_size,
            rotation_x: 0.0,
            top_left_y: ul_lat,
            rotation_y: 0.0,
            pixel_height: -cell_size,
        }
    }

    /// Six-element layout expected by GDAL.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.top_left_x,
            self.pixel_width,
            self.rotation_x,
            self.top_left_y,
            self.rotation_y,
            self.pixel_height,
        ]
    }
}

/// Upper-left anchor coordinate and angular cell size, constant for one
/// input file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    pub ul_lat: f64,
    pub ul_lon: f64,
    pub cell_size: f64,
}

impl Geolocation {
    /// Geotransform placing the anchor at the raster's upper-left corner.
    pub fn geo_transform(&self) -> GeoTransform {
        GeoTransform::north_up(self.ul_lon, self.ul_lat, self.cell_size)
    }
}

/// Output element types the ASTER GED products emit. Selected by dataset
/// naming convention, never read from stored metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputDataType {
    Byte,
    UInt16,
    Int16,
    Int32,
    Float32,
}

impl std::fmt::Display for OutputDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputDataType::Byte => write!(f, "uint8"),
            OutputDataType::UInt16 => write!(f, "uint16"),
            OutputDataType::Int16 => write!(f, "int16"),
            OutputDataType::Int32 => write!(f, "int32"),
            OutputDataType::Float32 => write!(f, "float32"),
        }
    }
}

/// ASTER GED product versions with distinct container layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductVersion {
    /// 1° x 1° tiles at 100 m or 1 km resolution, with a Geolocation group.
    V3,
    /// Global monthly product at 0.05° resolution, single SDS group.
    V41,
}

impl std::fmt::Display for ProductVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductVersion::V3 => write!(f, "V3"),
            ProductVersion::V41 => write!(f, "V4.1"),
        }
    }
}

/// Error types for GED conversion
#[derive(Debug, thiserror::Error)]
pub enum GedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("not an HDF5 product (expected a .h5 file): {0}")]
    NotHdf5(String),

    #[error("required group '{0}' not found in container")]
    MissingGroup(String),

    #[error("required dataset '{0}' not found in group '{1}'")]
    MissingDataset(String, String),

    #[error("unsupported array rank {0}: rasters are built from 2D or 3D datasets")]
    UnsupportedRank(usize),
}

/// Result type for GED conversion operations
pub type GedResult<T> = Result<T, GedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_up_transform() {
        let gt = GeoTransform::north_up(-105.0, 40.0, 0.001);

        assert_eq!(gt.top_left_x, -105.0);
        assert_eq!(gt.top_left_y, 40.0);
        assert_eq!(gt.pixel_width, 0.001);
        assert_eq!(gt.pixel_height, -0.001);
        assert_eq!(gt.rotation_x, 0.0);
        assert_eq!(gt.rotation_y, 0.0);

        assert_eq!(gt.to_array(), [-105.0, 0.001, 0.0, 40.0, 0.0, -0.001]);
    }

    #[test]
    fn test_geolocation_to_transform() {
        let anchor = Geolocation {
            ul_lat: 90.0,
            ul_lon: -180.0,
            cell_size: 0.05,
        };
        let gt = anchor.geo_transform();

        assert_eq!(gt.to_array(), [-180.0, 0.05, 0.0, 90.0, 0.0, -0.05]);
    }
}
