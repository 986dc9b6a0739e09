use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

pub const PNG_MIME_TYPE: &str = "image/png";

/// An encoded image produced for one parameters snapshot.
///
/// Never mutated; a new parameters snapshot produces a new artifact. Cloning
/// shares the underlying bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    bytes: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl Artifact {
    pub fn png(bytes: impl Into<Arc<[u8]>>, width: u32, height: u32) -> Self {
        Self {
            bytes: bytes.into(),
            width,
            height,
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        PNG_MIME_TYPE
    }

    /// Renders the artifact as a `data:` URI, the form browsers and webviews accept
    /// as an image source.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), STANDARD.encode(&self.bytes))
    }
}
