use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::artifact::Artifact;
use crate::storage::errors::DownloadError;
use crate::storage::write_artifact::write_artifact;

/// Saves PNG artifacts to disk as-is.
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, artifact: &Artifact, filepath: impl AsRef<Path>) -> Result<(), DownloadError> {
        write_artifact(artifact, filepath)
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
