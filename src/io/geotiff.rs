use crate::types::{GedError, GedResult, GeoTransform};
use gdal::raster::{Buffer, GdalType};
use gdal::spatial_ref::SpatialRef;
use gdal::DriverManager;
use ndarray::{ArrayViewD, Axis};
use std::path::Path;

/// Write one science dataset as a georeferenced GeoTIFF.
///
/// A rank-3 array `(bands, rows, cols)` becomes a multi-band raster with
/// axis-0 slice `n` written into band `n + 1`; a rank-2 array `(rows, cols)`
/// becomes a single band. Pixel values pass through verbatim in the caller's
/// element type; the georeferencing fix is annotation only.
pub fn write_geotiff<T: GdalType + Copy>(
    array: ArrayViewD<'_, T>,
    path: &Path,
    transform: &GeoTransform,
) -> GedResult<()> {
    let (bands, height, width) = match *array.shape() {
        [bands, rows, cols] => (bands, rows, cols),
        [rows, cols] => (1, rows, cols),
        _ => return Err(GedError::UnsupportedRank(array.ndim())),
    };

    log::debug!(
        "Writing GeoTIFF {} ({} band(s), {}x{} pixels)",
        path.display(),
        bands,
        width,
        height
    );

    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let mut dataset = driver.create_with_band_type::<T, _>(
        path,
        width as isize,
        height as isize,
        bands as isize,
    )?;

    dataset.set_geo_transform(&transform.to_array())?;

    // CRS == WGS84, stored in the driver's well-known-text form
    dataset.set_spatial_ref(&SpatialRef::from_epsg(4326)?)?;

    if array.ndim() == 3 {
        for n in 0..bands {
            let slice = array.index_axis(Axis(0), n);
            let data: Vec<T> = slice.iter().copied().collect();
            let mut band = dataset.rasterband(n as isize + 1)?;
            band.write((0, 0), (width, height), &Buffer::new((width, height), data))?;
        }
    } else {
        let data: Vec<T> = array.iter().copied().collect();
        let mut band = dataset.rasterband(1)?;
        band.write((0, 0), (width, height), &Buffer::new((width, height), data))?;
    }

    Ok(())
}
