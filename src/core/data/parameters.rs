use std::ops::RangeInclusive;

use crate::core::data::colour::Colour;
use crate::core::data::error_correction::ErrorCorrectionLevel;

pub const DEFAULT_CONTENT: &str = "https://example.com";
pub const DEFAULT_PIXEL_SIZE: u32 = 300;
pub const MIN_PIXEL_SIZE: u32 = 150;
pub const MAX_PIXEL_SIZE: u32 = 500;

/// Snapshot of everything the user can tweak.
///
/// Fields are independent; no cross-field rule is enforced, so identical
/// foreground and background colours are accepted even though the result
/// will not scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub content: String,
    pub foreground: Colour,
    pub background: Colour,
    pub pixel_size: u32,
    pub error_correction: ErrorCorrectionLevel,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            content: DEFAULT_CONTENT.to_owned(),
            foreground: Colour::BLACK,
            background: Colour::WHITE,
            pixel_size: DEFAULT_PIXEL_SIZE,
            error_correction: ErrorCorrectionLevel::default(),
        }
    }
}

impl Parameters {
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Bounds offered by the size slider. The store itself does not clamp.
    #[must_use]
    pub const fn pixel_size_range() -> RangeInclusive<u32> {
        MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE
    }
}
