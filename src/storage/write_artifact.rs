use std::fs;
use std::path::Path;

use crate::core::data::artifact::Artifact;
use crate::storage::errors::DownloadError;

/// Writes the artifact bytes to `filepath`, creating missing parent directories.
pub fn write_artifact(artifact: &Artifact, filepath: impl AsRef<Path>) -> Result<(), DownloadError> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DownloadError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(filepath, artifact.bytes()).map_err(|source| DownloadError::Write {
        path: filepath.to_path_buf(),
        source,
    })
}
