use crate::core::actions::rasterize_modules::raster_layout::RasterLayout;
use crate::core::data::colour::Colour;
use crate::core::data::module_matrix::ModuleMatrix;

pub(crate) const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Module index for every column of the image, computed once per raster.
pub(crate) fn column_modules(layout: &RasterLayout) -> Vec<Option<usize>> {
    (0..layout.image_width())
        .map(|x| layout.module_at(x))
        .collect()
}

pub(crate) fn fill_row(
    row: &mut [u8],
    y: u32,
    columns: &[Option<usize>],
    matrix: &ModuleMatrix,
    layout: &RasterLayout,
    dark: Colour,
    light: Colour,
) {
    let row_module = layout.module_at(y);

    for (pixel, column_module) in row.chunks_exact_mut(RGBA_BYTES_PER_PIXEL).zip(columns) {
        let colour = match (*column_module, row_module) {
            (Some(mx), Some(my)) if matrix.is_dark(mx, my) => dark,
            _ => light,
        };

        pixel.copy_from_slice(&colour.to_rgba_array());
    }
}

/// Rasterizes the module matrix into a square RGBA buffer, one row at a time.
///
/// Reference output for the parallel rasterizer.
#[cfg(test)]
#[must_use]
pub(crate) fn rasterize_modules(
    matrix: &ModuleMatrix,
    layout: &RasterLayout,
    dark: Colour,
    light: Colour,
) -> Vec<u8> {
    let width = layout.image_width() as usize;
    let row_bytes = width * RGBA_BYTES_PER_PIXEL;
    let columns = column_modules(layout);
    let mut buffer = vec![0; row_bytes * width];

    for (y, row) in buffer.chunks_exact_mut(row_bytes).enumerate() {
        fill_row(row, y as u32, &columns, matrix, layout, dark, light);
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::encode_request::EncodeOptions;
    use crate::core::data::error_correction::ErrorCorrectionLevel;

    fn checker_matrix() -> ModuleMatrix {
        ModuleMatrix::new(2, vec![true, false, false, true]).unwrap()
    }

    fn layout(width: u32, margin: u32) -> RasterLayout {
        RasterLayout::new(
            2,
            &EncodeOptions {
                width,
                margin,
                dark: Colour::BLACK,
                light: Colour::WHITE,
                error_correction: ErrorCorrectionLevel::M,
            },
        )
    }

    fn pixel(buffer: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let index = (y * width + x) * RGBA_BYTES_PER_PIXEL;
        [
            buffer[index],
            buffer[index + 1],
            buffer[index + 2],
            buffer[index + 3],
        ]
    }

    #[test]
    fn test_buffer_is_square_rgba() {
        let buffer = rasterize_modules(&checker_matrix(), &layout(8, 1), Colour::BLACK, Colour::WHITE);

        assert_eq!(buffer.len(), 8 * 8 * 4);
    }

    #[test]
    fn test_modules_and_quiet_zone_use_the_right_colours() {
        let dark = Colour::rgb(1, 2, 3);
        let light = Colour::rgb(250, 251, 252);
        // 2 modules + 2 margin = 4 units at 2px each.
        let buffer = rasterize_modules(&checker_matrix(), &layout(8, 1), dark, light);

        assert_eq!(pixel(&buffer, 8, 0, 0), light.to_rgba_array());
        assert_eq!(pixel(&buffer, 8, 2, 2), dark.to_rgba_array());
        assert_eq!(pixel(&buffer, 8, 3, 3), dark.to_rgba_array());
        assert_eq!(pixel(&buffer, 8, 4, 2), light.to_rgba_array());
        assert_eq!(pixel(&buffer, 8, 5, 5), dark.to_rgba_array());
        assert_eq!(pixel(&buffer, 8, 7, 7), light.to_rgba_array());
    }

    #[test]
    fn test_identical_colours_produce_a_flat_image() {
        let grey = Colour::rgb(128, 128, 128);
        let buffer = rasterize_modules(&checker_matrix(), &layout(8, 1), grey, grey);

        assert!(buffer.chunks_exact(4).all(|p| p == grey.to_rgba_array()));
    }
}
