use std::path::Path;

use crate::core::data::artifact::Artifact;
use crate::storage::errors::DownloadError;

pub trait FilePresenterPort {
    fn present(&self, artifact: &Artifact, filepath: impl AsRef<Path>) -> Result<(), DownloadError>;
}
