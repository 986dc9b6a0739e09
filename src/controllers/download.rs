use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::artifact::Artifact;
use crate::storage::errors::DownloadError;

pub const DOWNLOAD_FILE_NAME: &str = "qrcode.png";

/// Saves the published artifact under a fixed file name.
pub struct DownloadAction<P: FilePresenterPort> {
    presenter: P,
    directory: PathBuf,
}

impl<P: FilePresenterPort> DownloadAction<P> {
    pub fn new(presenter: P, directory: impl Into<PathBuf>) -> Self {
        Self {
            presenter,
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.directory.join(DOWNLOAD_FILE_NAME)
    }

    /// Whether the action does anything for this preview state.
    #[must_use]
    pub fn is_enabled(artifact: Option<&Artifact>) -> bool {
        artifact.is_some()
    }

    /// Saves `artifact` and returns where it went. An empty preview is a no-op.
    pub fn download(&self, artifact: Option<&Artifact>) -> Result<Option<PathBuf>, DownloadError> {
        let Some(artifact) = artifact else {
            debug!("download skipped: no artifact");
            return Ok(None);
        };

        let filepath = self.target_path();
        self.presenter.present(artifact, &filepath)?;
        info!("saved {}x{} QR code to {}", artifact.width(), artifact.height(), filepath.display());

        Ok(Some(filepath))
    }
}
