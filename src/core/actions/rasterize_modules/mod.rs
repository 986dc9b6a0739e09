pub mod raster_layout;
pub mod rasterize_modules;
pub mod rasterize_modules_parallel_rayon;
