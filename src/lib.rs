mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use adapters::encoder::qrcode_png::{QrcodePngEncoder, encode_png};
pub use controllers::download::{DOWNLOAD_FILE_NAME, DownloadAction};
pub use controllers::headless::HeadlessController;
pub use controllers::interactive::{
    ArtifactFrame, EncodeError, PreviewEvent, PreviewPresenterPort, QrEncoderPort,
    RecomputationController, Submission,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::data::artifact::Artifact;
pub use crate::core::data::colour::{Colour, ColourParseError};
pub use crate::core::data::encode_request::{EncodeOptions, EncodeRequest};
pub use crate::core::data::error_correction::ErrorCorrectionLevel;
pub use crate::core::data::parameters::{
    DEFAULT_CONTENT, DEFAULT_PIXEL_SIZE, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, Parameters,
};
pub use crate::core::state::parameter_store::{CoercionError, ParameterStore, ParametersListener};
pub use presenters::file::png::PngFilePresenter;
pub use presenters::memory::artifact_store::{ArtifactStore, PublishedArtifact};
pub use storage::errors::DownloadError;

#[cfg(feature = "gui")]
pub use input::gui::command::gui_command::GuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
