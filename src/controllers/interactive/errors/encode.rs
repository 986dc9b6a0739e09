use thiserror::Error;

use crate::core::data::error_correction::ErrorCorrectionLevel;

/// Failure reported by the encoder for one generation.
///
/// The controller logs and absorbs every variant; none of them reach the
/// published preview.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("data does not fit in a QR code at error correction level {level}")]
    DataTooLong { level: ErrorCorrectionLevel },
    #[error("encoder rejected the input: {0}")]
    Rejected(String),
    #[error("failed to rasterize modules: {0}")]
    Raster(String),
    #[error("failed to encode PNG: {0}")]
    Png(String),
    #[error("encoder worker stopped before finishing: {0}")]
    WorkerStopped(String),
}
