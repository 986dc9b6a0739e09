use rayon::prelude::*;

use crate::core::actions::rasterize_modules::raster_layout::RasterLayout;
use crate::core::actions::rasterize_modules::rasterize_modules::{
    column_modules, fill_row, RGBA_BYTES_PER_PIXEL,
};
use crate::core::data::colour::Colour;
use crate::core::data::module_matrix::ModuleMatrix;

/// Rasterizes rows in parallel using rayon's work-stealing scheduler.
///
/// Produces exactly the same buffer as the serial row-by-row raster.
#[must_use]
pub fn rasterize_modules_parallel_rayon(
    matrix: &ModuleMatrix,
    layout: &RasterLayout,
    dark: Colour,
    light: Colour,
) -> Vec<u8> {
    let width = layout.image_width() as usize;
    let row_bytes = width * RGBA_BYTES_PER_PIXEL;
    let columns = column_modules(layout);
    let mut buffer = vec![0; row_bytes * width];

    buffer
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            fill_row(row, y as u32, &columns, matrix, layout, dark, light);
        });

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::rasterize_modules::rasterize_modules::rasterize_modules;
    use crate::core::data::encode_request::EncodeOptions;
    use crate::core::data::error_correction::ErrorCorrectionLevel;

    fn striped_matrix(width: usize) -> ModuleMatrix {
        let dark = (0..width * width).map(|i| (i / width + i % width) % 3 == 0).collect();
        ModuleMatrix::new(width, dark).unwrap()
    }

    fn options(width: u32) -> EncodeOptions {
        EncodeOptions {
            width,
            margin: 1,
            dark: Colour::rgb(20, 30, 40),
            light: Colour::rgb(240, 230, 220),
            error_correction: ErrorCorrectionLevel::Q,
        }
    }

    #[test]
    fn test_rayon_matches_serial_raster() {
        let matrix = striped_matrix(25);

        for width in [150, 301, 500] {
            let options = options(width);
            let layout = RasterLayout::new(matrix.width(), &options);

            let serial = rasterize_modules(&matrix, &layout, options.dark, options.light);
            let parallel =
                rasterize_modules_parallel_rayon(&matrix, &layout, options.dark, options.light);

            assert_eq!(parallel, serial, "raster mismatch at width {width}");
        }
    }

    #[test]
    fn test_fallback_scale_matches_serial_raster() {
        let matrix = striped_matrix(21);
        let options = options(10);
        let layout = RasterLayout::new(matrix.width(), &options);

        let serial = rasterize_modules(&matrix, &layout, options.dark, options.light);
        let parallel =
            rasterize_modules_parallel_rayon(&matrix, &layout, options.dark, options.light);

        assert_eq!(parallel.len(), 92 * 92 * 4);
        assert_eq!(parallel, serial);
    }
}
