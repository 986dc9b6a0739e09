pub mod cancellation;
pub mod rasterize_modules;
