//! Pixel format helpers for presentation adapters.

/// Fills an RGBA frame with a single colour.
pub fn fill_rgba(dst: &mut [u8], colour: [u8; 4]) {
    for pixel in dst.chunks_exact_mut(4) {
        pixel.copy_from_slice(&colour);
    }
}

/// Copies an RGBA image into the centre of a larger RGBA frame.
///
/// Parts of the source that do not fit the frame are cropped evenly from
/// both sides. Pixels of `dst` outside the copied area are left untouched.
///
/// # Panics
/// Panics if either buffer length does not match its stated dimensions.
pub fn blit_rgba_centered(
    src: &[u8],
    src_width: u32,
    src_height: u32,
    dst: &mut [u8],
    dst_width: u32,
    dst_height: u32,
) {
    assert_eq!(
        src.len(),
        (src_width * src_height * 4) as usize,
        "src length {} does not match {}x{}",
        src.len(),
        src_width,
        src_height
    );
    assert_eq!(
        dst.len(),
        (dst_width * dst_height * 4) as usize,
        "dst length {} does not match {}x{}",
        dst.len(),
        dst_width,
        dst_height
    );

    let copy_width = src_width.min(dst_width) as usize;
    let copy_height = src_height.min(dst_height) as usize;
    let src_x = (src_width as usize - copy_width) / 2;
    let src_y = (src_height as usize - copy_height) / 2;
    let dst_x = (dst_width as usize - copy_width) / 2;
    let dst_y = (dst_height as usize - copy_height) / 2;

    let src_stride = src_width as usize * 4;
    let dst_stride = dst_width as usize * 4;
    let row_bytes = copy_width * 4;

    for row in 0..copy_height {
        let src_start = (src_y + row) * src_stride + src_x * 4;
        let dst_start = (dst_y + row) * dst_stride + dst_x * 4;

        dst[dst_start..dst_start + row_bytes]
            .copy_from_slice(&src[src_start..src_start + row_bytes]);
    }
}
