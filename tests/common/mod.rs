//! Common test utilities

use std::path::Path;

use image::{ImageError, Rgba, RgbaImage};

/// Write a solid-color PNG
pub fn write_solid_png(
    path: &Path,
    rgb: [u8; 3],
    width: u32,
    height: u32,
) -> Result<(), ImageError> {
    let img = RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]));
    img.save(path)
}

/// Write a PNG of equal-width vertical stripes
pub fn write_stripes_png(
    path: &Path,
    colors: &[[u8; 3]],
    width: u32,
    height: u32,
) -> Result<(), ImageError> {
    let band = width / colors.len() as u32;
    let mut img = RgbaImage::new(width, height);
    for (x, _y, pixel) in img.enumerate_pixels_mut() {
        let [r, g, b] = colors[((x / band) as usize).min(colors.len() - 1)];
        *pixel = Rgba([r, g, b, 255]);
    }
    img.save(path)
}
