use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, RgbaImage};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

use crate::controllers::interactive::errors::encode::EncodeError;
use crate::controllers::interactive::ports::encoder::QrEncoderPort;
use crate::core::actions::rasterize_modules::raster_layout::RasterLayout;
use crate::core::actions::rasterize_modules::rasterize_modules_parallel_rayon::rasterize_modules_parallel_rayon;
use crate::core::data::artifact::Artifact;
use crate::core::data::encode_request::EncodeRequest;
use crate::core::data::error_correction::ErrorCorrectionLevel;
use crate::core::data::module_matrix::ModuleMatrix;

/// Largest RGBA raster the encoder allocates, 4096 x 4096 pixels.
pub const MAX_RASTER_BYTES: usize = 4096 * 4096 * 4;

fn ec_level(level: ErrorCorrectionLevel) -> EcLevel {
    match level {
        ErrorCorrectionLevel::L => EcLevel::L,
        ErrorCorrectionLevel::M => EcLevel::M,
        ErrorCorrectionLevel::Q => EcLevel::Q,
        ErrorCorrectionLevel::H => EcLevel::H,
    }
}

fn map_qr_error(error: QrError, level: ErrorCorrectionLevel) -> EncodeError {
    match error {
        QrError::DataTooLong => EncodeError::DataTooLong { level },
        other => EncodeError::Rejected(other.to_string()),
    }
}

/// Encodes a request into PNG bytes on the calling thread.
///
/// The `qrcode` crate builds the module matrix; rows are rasterized with rayon
/// and the result is written as PNG.
pub fn encode_png(request: &EncodeRequest) -> Result<Artifact, EncodeError> {
    let level = request.options.error_correction;
    let code = QrCode::with_error_correction_level(request.data.as_bytes(), ec_level(level))
        .map_err(|e| map_qr_error(e, level))?;

    let dark_modules = code
        .to_colors()
        .into_iter()
        .map(|colour| colour.select(true, false))
        .collect();
    let matrix = ModuleMatrix::new(code.width(), dark_modules)
        .map_err(|e| EncodeError::Raster(e.to_string()))?;

    let layout = RasterLayout::new(matrix.width(), &request.options);
    let side = layout.image_width();

    match layout.rgba_len() {
        Some(len) if len <= MAX_RASTER_BYTES => {}
        _ => {
            return Err(EncodeError::Raster(format!(
                "{side}x{side} image exceeds the {MAX_RASTER_BYTES} byte raster limit"
            )));
        }
    }

    let rgba = rasterize_modules_parallel_rayon(
        &matrix,
        &layout,
        request.options.dark,
        request.options.light,
    );

    let image = RgbaImage::from_raw(side, side, rgba).ok_or_else(|| {
        EncodeError::Raster(format!("buffer does not match a {side}x{side} image"))
    })?;

    let mut png = Cursor::new(Vec::new());
    image
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| EncodeError::Png(e.to_string()))?;

    Ok(Artifact::png(png.into_inner(), side, side))
}

/// Default encoder: runs [`encode_png`] on tokio's blocking pool so the
/// caller's event loop never stalls.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodePngEncoder;

impl QrcodePngEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QrEncoderPort for QrcodePngEncoder {
    async fn encode(&self, request: EncodeRequest) -> Result<Artifact, EncodeError> {
        tokio::task::spawn_blocking(move || encode_png(&request))
            .await
            .map_err(|e| EncodeError::WorkerStopped(e.to_string()))?
    }
}
