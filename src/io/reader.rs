use crate::types::{GedError, GedResult};
use hdf5_metno as hdf5;
use std::path::{Path, PathBuf};

/// Read-only handle over one ASTER GED HDF5 container.
///
/// The handle stays open for the duration of a conversion run and is released
/// on drop, after the last dataset has been walked.
pub struct GedReader {
    file: hdf5::File,
    path: PathBuf,
}

impl GedReader {
    /// Open an ASTER GED `.h5` file read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> GedResult<Self> {
        let path = path.as_ref().to_path_buf();
        if path.extension().and_then(|e| e.to_str()) != Some("h5") {
            return Err(GedError::NotHdf5(path.display().to_string()));
        }

        log::info!("Opening ASTER GED container: {}", path.display());
        let file = hdf5::File::open(&path)?;

        Ok(GedReader { file, path })
    }

    /// Path of the underlying container.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level group names, in the container's name order.
    pub fn group_names(&self) -> GedResult<Vec<String>> {
        Ok(self.file.member_names()?)
    }

    /// Look up a top-level group by its exact name.
    pub fn group(&self, name: &str) -> GedResult<hdf5::Group> {
        self.file
            .group(name)
            .map_err(|_| GedError::MissingGroup(name.to_string()))
    }

    /// Member names within one top-level group, in name order.
    pub fn member_names(&self, group: &str) -> GedResult<Vec<String>> {
        Ok(self.group(group)?.member_names()?)
    }

    /// Look up a dataset inside a top-level group by its exact name.
    pub fn dataset(&self, group: &str, name: &str) -> GedResult<hdf5::Dataset> {
        self.group(group)?
            .dataset(name)
            .map_err(|_| GedError::MissingDataset(name.to_string(), group.to_string()))
    }

    /// Input file name with the `.h5` extension stripped. Names the output
    /// directory and prefixes every output file.
    pub fn file_label(&self) -> String {
        file_label_of(&self.path)
    }

    /// Leading file-name token up to the first `.`, e.g. `AG100` from
    /// `AG100.v003.44.-077.0001.h5`. Identifies the product resolution.
    pub fn product_token(&self) -> String {
        product_token_of(&self.path)
    }
}

fn file_label_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn product_token_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or_default()
        .to_string()
}
