/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Black image with one full-height column set to 255.
pub fn bright_column_u8(width: usize, height: usize, column: usize) -> Vec<u8> {
    assert!(column < width, "column outside image");
    let mut img = vec![0u8; width * height];
    for row in img.chunks_exact_mut(width) {
        row[column] = 255;
    }
    img
}

/// Pack 8-bit luma as opaque gray ARGB, the way a camera preview hands it over.
pub fn pack_argb(luma: &[u8]) -> Vec<u32> {
    luma.iter()
        .map(|&y| {
            let y = u32::from(y);
            0xFF00_0000 | (y << 16) | (y << 8) | y
        })
        .collect()
}
