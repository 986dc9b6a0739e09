use crate::core::actions::rasterize_modules::rasterize_modules::RGBA_BYTES_PER_PIXEL;
use crate::core::data::encode_request::EncodeOptions;

/// Pixels per module used when the requested width cannot fit the symbol.
pub const FALLBACK_SCALE: f64 = 4.0;

/// Maps image pixels onto modules.
///
/// When the requested width fits the symbol plus its quiet zone, the image is
/// exactly that wide and modules are stretched by a fractional scale. Otherwise
/// a fixed [`FALLBACK_SCALE`] is used and the image grows to fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterLayout {
    modules: usize,
    margin: u32,
    scale: f64,
    image_width: u32,
}

impl RasterLayout {
    #[must_use]
    pub fn new(modules: usize, options: &EncodeOptions) -> Self {
        let total_modules = modules as u32 + options.margin * 2;

        let (scale, image_width) = if options.width >= total_modules {
            (f64::from(options.width) / f64::from(total_modules), options.width)
        } else {
            (
                FALLBACK_SCALE,
                (f64::from(total_modules) * FALLBACK_SCALE).floor() as u32,
            )
        };

        Self {
            modules,
            margin: options.margin,
            scale,
            image_width,
        }
    }

    #[must_use]
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Bytes in the square RGBA raster, or `None` if that overflows `usize`.
    #[must_use]
    pub fn rgba_len(&self) -> Option<usize> {
        let width = self.image_width as usize;

        width.checked_mul(width)?.checked_mul(RGBA_BYTES_PER_PIXEL)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn scaled_margin(&self) -> f64 {
        f64::from(self.margin) * self.scale
    }

    /// Module index covering `pixel` along one axis, or `None` inside the quiet zone.
    #[must_use]
    pub fn module_at(&self, pixel: u32) -> Option<usize> {
        let position = f64::from(pixel);
        let scaled_margin = self.scaled_margin();

        if position < scaled_margin || position >= f64::from(self.image_width) - scaled_margin {
            return None;
        }

        let module = ((position - scaled_margin) / self.scale).floor() as usize;

        Some(module.min(self.modules.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::error_correction::ErrorCorrectionLevel;

    fn options(width: u32, margin: u32) -> EncodeOptions {
        EncodeOptions {
            width,
            margin,
            dark: Colour::BLACK,
            light: Colour::WHITE,
            error_correction: ErrorCorrectionLevel::M,
        }
    }

    #[test]
    fn test_requested_width_is_kept_when_symbol_fits() {
        let layout = RasterLayout::new(21, &options(300, 1));

        assert_eq!(layout.image_width(), 300);
        assert!((layout.scale() - 300.0 / 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_falls_back_to_fixed_scale_when_width_too_small() {
        let layout = RasterLayout::new(21, &options(10, 1));

        assert_eq!(layout.image_width(), 92);
        assert!((layout.scale() - FALLBACK_SCALE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quiet_zone_maps_to_no_module() {
        // 21 modules + 2 margin = 23 units at exactly 10px each.
        let layout = RasterLayout::new(21, &options(230, 1));

        assert_eq!(layout.module_at(0), None);
        assert_eq!(layout.module_at(9), None);
        assert_eq!(layout.module_at(10), Some(0));
        assert_eq!(layout.module_at(19), Some(0));
        assert_eq!(layout.module_at(20), Some(1));
        assert_eq!(layout.module_at(219), Some(20));
        assert_eq!(layout.module_at(220), None);
        assert_eq!(layout.module_at(229), None);
    }

    #[test]
    fn test_zero_margin_starts_modules_at_origin() {
        let layout = RasterLayout::new(21, &options(21, 0));

        assert_eq!(layout.module_at(0), Some(0));
        assert_eq!(layout.module_at(20), Some(20));
    }

    #[test]
    fn test_rgba_len_covers_the_square_image() {
        let layout = RasterLayout::new(21, &options(300, 1));

        assert_eq!(layout.rgba_len(), Some(300 * 300 * 4));
    }

    #[test]
    fn test_rgba_len_reports_overflow() {
        let layout = RasterLayout::new(21, &options(u32::MAX, 1));

        assert_eq!(layout.rgba_len(), None);
    }
}
