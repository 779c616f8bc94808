use crate::core::geolocation::resolve_geolocation;
use crate::io::{write_geotiff, GedReader};
use crate::types::{GedResult, Geolocation, GeoTransform, OutputDataType, ProductVersion};
use hdf5_metno as hdf5;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed group holding every V4.1 science dataset.
pub const V41_SDS_GROUP: &str = "SDS";

/// The one V4.1 dataset stored as unsigned 16-bit.
const V41_NDVI_DATASET: &str = "NDVI";

/// V4.1 grid anchor: a global product on 0.05° cells, upper-left corner at
/// (90°N, 180°W).
pub const V41_GEOLOCATION: Geolocation = Geolocation {
    ul_lat: 90.0,
    ul_lon: -180.0,
    cell_size: 0.05,
};

/// Output element type for one V3 dataset.
///
/// Fixed mapping from the product's known band semantics: multi-member
/// geolocation grids are float32, the mean temperature is int32, everything
/// else (including every single-member group) is int16.
pub fn v3_output_type(group: &str, member: &str, member_count: usize) -> OutputDataType {
    if member_count > 1 {
        if group.eq_ignore_ascii_case("geolocation") {
            OutputDataType::Float32
        } else if group.eq_ignore_ascii_case("temperature") {
            if member.eq_ignore_ascii_case("mean") {
                OutputDataType::Int32
            } else {
                OutputDataType::Int16
            }
        } else {
            OutputDataType::Int16
        }
    } else {
        OutputDataType::Int16
    }
}

/// Output element type for one V4.1 dataset. NDVI is the only 16-bit member
/// of the product; everything else is unsigned 8-bit.
pub fn v41_output_type(member: &str) -> OutputDataType {
    if member == V41_NDVI_DATASET {
        OutputDataType::UInt16
    } else {
        OutputDataType::Byte
    }
}

/// Convert one ASTER GED product file, dispatching on product version.
pub fn convert<P: AsRef<Path>>(input: P, version: ProductVersion) -> GedResult<Vec<PathBuf>> {
    match version {
        ProductVersion::V3 => convert_v3(input),
        ProductVersion::V41 => convert_v41(input),
    }
}

/// Convert an ASTER GED V3 tile into one GeoTIFF per science dataset.
///
/// Walks every top-level group sequentially and emits every member with the
/// anchor resolved from the tile's own Geolocation grids. Returns the written
/// paths in emission order. Any failure aborts the whole run; outputs written
/// before the failure are left in place.
pub fn convert_v3<P: AsRef<Path>>(input: P) -> GedResult<Vec<PathBuf>> {
    let reader = GedReader::open(input)?;
    let out_dir = prepare_output_dir(reader.path())?;
    let label = reader.file_label();

    let anchor = resolve_geolocation(&reader)?;
    let transform = anchor.geo_transform();

    let mut written = Vec::new();
    for group in reader.group_names()? {
        let members = reader.member_names(&group)?;
        for member in &members {
            let dtype = v3_output_type(&group, member, members.len());
            let out_path = out_dir.join(format!(
                "{}_{}_{}.tif",
                label,
                group.replace(' ', "_"),
                member
            ));
            emit_dataset(&reader.dataset(&group, member)?, dtype, &out_path, &transform)?;
            written.push(out_path);
        }
    }

    log::info!(
        "✅ Converted {} dataset(s) from {}",
        written.len(),
        reader.path().display()
    );
    Ok(written)
}

/// Convert an ASTER GED V4.1 global file into one GeoTIFF per science dataset.
///
/// Only the `SDS` group is walked; the anchor is the fixed global grid corner
/// rather than anything read from the container.
pub fn convert_v41<P: AsRef<Path>>(input: P) -> GedResult<Vec<PathBuf>> {
    let reader = GedReader::open(input)?;
    let out_dir = prepare_output_dir(reader.path())?;
    let label = reader.file_label();

    let transform = V41_GEOLOCATION.geo_transform();

    let mut written = Vec::new();
    for member in reader.member_names(V41_SDS_GROUP)? {
        let dtype = v41_output_type(&member);
        let out_path = out_dir.join(format!("{}_{}.tif", label, member));
        emit_dataset(
            &reader.dataset(V41_SDS_GROUP, &member)?,
            dtype,
            &out_path,
            &transform,
        )?;
        written.push(out_path);
    }

    log::info!(
        "✅ Converted {} dataset(s) from {}",
        written.len(),
        reader.path().display()
    );
    Ok(written)
}

/// Directory next to the input, named after it with `.h5` stripped. Created
/// once per run; an existing directory is reused.
fn prepare_output_dir(input: &Path) -> GedResult<PathBuf> {
    let dir = input.with_extension("");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Read one dataset as its destination element type and emit it. The HDF5
/// layer converts numerically on read; values are never rescaled.
fn emit_dataset(
    dataset: &hdf5::Dataset,
    dtype: OutputDataType,
    path: &Path,
    transform: &GeoTransform,
) -> GedResult<()> {
    log::info!("Emitting {} as {}", path.display(), dtype);

    match dtype {
        OutputDataType::Byte => write_geotiff(dataset.read_dyn::<u8>()?.view(), path, transform),
        OutputDataType::UInt16 => write_geotiff(dataset.read_dyn::<u16>()?.view(), path, transform),
        OutputDataType::Int16 => write_geotiff(dataset.read_dyn::<i16>()?.view(), path, transform),
        OutputDataType::Int32 => write_geotiff(dataset.read_dyn::<i32>()?.view(), path, transform),
        OutputDataType::Float32 => {
            write_geotiff(dataset.read_dyn::<f32>()?.view(), path, transform)
        }
    }
}
