pub mod encoder;
#[cfg(feature = "gui")]
pub mod pixel_format;
