use crate::core::data::colour::Colour;
use crate::core::data::error_correction::ErrorCorrectionLevel;
use crate::core::data::parameters::Parameters;

/// Quiet zone around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Requested image width in pixels.
    pub width: u32,
    /// Quiet zone in modules.
    pub margin: u32,
    pub dark: Colour,
    pub light: Colour,
    pub error_correction: ErrorCorrectionLevel,
}

/// Everything the encoder needs for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeRequest {
    pub data: String,
    pub options: EncodeOptions,
}

impl From<&Parameters> for EncodeRequest {
    fn from(parameters: &Parameters) -> Self {
        Self {
            data: parameters.content.clone(),
            options: EncodeOptions {
                width: parameters.pixel_size,
                margin: QUIET_ZONE_MODULES,
                dark: parameters.foreground,
                light: parameters.background,
                error_correction: parameters.error_correction,
            },
        }
    }
}
