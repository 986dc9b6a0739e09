use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use tokio::runtime::Handle;

use crate::controllers::download::DownloadAction;
use crate::controllers::interactive::ports::encoder::QrEncoderPort;
use crate::controllers::interactive::RecomputationController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::artifact::Artifact;
use crate::core::state::parameter_store::ParameterStore;
use crate::presenters::memory::artifact_store::ArtifactStore;
use crate::storage::errors::DownloadError;

/// Drives a full session without a window: edit parameters, wait for the
/// preview to settle, then download it.
pub struct HeadlessController<P: FilePresenterPort> {
    store: ParameterStore,
    recomputation: Arc<RecomputationController>,
    artifacts: Arc<ArtifactStore>,
    download: DownloadAction<P>,
}

impl<P: FilePresenterPort> HeadlessController<P> {
    pub fn new(
        encoder: Arc<dyn QrEncoderPort>,
        presenter: P,
        directory: impl Into<PathBuf>,
        runtime: Handle,
    ) -> Self {
        let artifacts = Arc::new(ArtifactStore::new());
        let recomputation = Arc::new(RecomputationController::new(
            encoder,
            artifacts.clone(),
            runtime,
        ));

        let mut store = ParameterStore::default();
        store.subscribe(recomputation.clone());

        Self {
            store,
            recomputation,
            artifacts,
            download: DownloadAction::new(presenter, directory),
        }
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParameterStore {
        &mut self.store
    }

    pub fn download_directory(&self) -> &Path {
        self.download.directory()
    }

    /// Waits for pending encodes and returns the published preview.
    pub async fn generate(&self) -> Option<Artifact> {
        self.recomputation.settle().await;

        let published = self.artifacts.snapshot();
        if let Some(artifact) = &published.artifact {
            info!(
                "generation {}: {}x{} preview ready",
                published.generation,
                artifact.width(),
                artifact.height()
            );
        }

        published.artifact
    }

    pub fn write(&self) -> Result<Option<PathBuf>, DownloadError> {
        self.download.download(self.artifacts.current().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::encoder::qrcode_png::QrcodePngEncoder;
    use crate::core::data::error_correction::ErrorCorrectionLevel;
    use crate::presenters::file::png::PngFilePresenter;

    fn controller(directory: &Path) -> HeadlessController<PngFilePresenter> {
        HeadlessController::new(
            Arc::new(QrcodePngEncoder::new()),
            PngFilePresenter::new(),
            directory,
            Handle::current(),
        )
    }

    #[tokio::test]
    async fn test_default_parameters_generate_a_preview() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller(dir.path());

        let artifact = controller.generate().await.unwrap();

        assert_eq!(artifact.width(), 300);
    }

    #[tokio::test]
    async fn test_latest_edit_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        controller.store_mut().set_pixel_size(150);
        controller.store_mut().set_error_correction(ErrorCorrectionLevel::H);
        controller.store_mut().set_pixel_size(420);

        let artifact = controller.generate().await.unwrap();

        assert_eq!(artifact.width(), 420);
    }

    #[tokio::test]
    async fn test_empty_content_clears_and_skips_download() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        controller.generate().await.unwrap();
        controller.store_mut().set_content("");

        assert_eq!(controller.generate().await, None);
        assert_eq!(controller.write().unwrap(), None);
        assert!(!dir.path().join("qrcode.png").exists());
    }

    #[tokio::test]
    async fn test_oversized_pixel_size_keeps_previous_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        let before = controller.generate().await.unwrap();
        controller.store_mut().set_pixel_size_input("60000").unwrap();

        assert_eq!(controller.store().parameters().pixel_size, 60_000);
        assert_eq!(controller.generate().await, Some(before.clone()));

        let path = controller.write().unwrap().unwrap();
        assert_eq!(std::fs::read(path).unwrap(), before.bytes());
    }

    #[tokio::test]
    async fn test_write_saves_fixed_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller(dir.path());

        let artifact = controller.generate().await.unwrap();
        let path = controller.write().unwrap().unwrap();

        assert_eq!(path, dir.path().join("qrcode.png"));
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes());
    }
}
