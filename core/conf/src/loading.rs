//! Read dashboard configuration from YAML files.
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;

use crate::Conf;

/// Errors loading Dashgate configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file is not valid YAML or does not describe a [`Conf`] object.
    #[error("configuration file '{}' has invalid content", .0.display())]
    Decode(PathBuf),

    /// The file exists but could not be opened.
    #[error("unable to open configuration file '{}'", .0.display())]
    Open(PathBuf),

    /// There is no file to load.
    #[error("configuration file '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),
}

/// Load dashboard configuration from the YAML file at `path`.
///
/// Missing files are reported as [`Error::PathNotFound`] rather than defaulted.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Conf> {
    let path = path.as_ref();
    if !path.exists() {
        anyhow::bail!(Error::PathNotFound(path.to_path_buf()));
    }

    let reader = File::open(path).with_context(|| Error::Open(path.to_path_buf()))?;
    serde_yaml::from_reader(reader).with_context(|| Error::Decode(path.to_path_buf()))
}
