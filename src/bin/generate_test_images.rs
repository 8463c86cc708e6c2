use std::path::Path;

use image::{Rgba, RgbaImage};

fn solid(w: u32, h: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

fn stripes(w: u32, h: u32, colors: &[[u8; 3]]) -> RgbaImage {
    let band = w / colors.len() as u32;
    let mut img = RgbaImage::new(w, h);
    for (x, _y, pixel) in img.enumerate_pixels_mut() {
        let [r, g, b] = colors[((x / band) as usize).min(colors.len() - 1)];
        *pixel = Rgba([r, g, b, 255]);
    }
    img
}

fn main() -> Result<(), image::ImageError> {
    let dir = Path::new("test_data");
    std::fs::create_dir_all(dir)?;

    // Exact palette hits
    solid(64, 64, [255, 0, 0]).save(dir.join("red.png"))?;
    solid(64, 64, [0, 0, 0]).save(dir.join("black.png"))?;

    // Slightly off salmon (250, 128, 114): exercises the nearest-neighbor path
    solid(64, 64, [250, 128, 120]).save(dir.join("near_salmon.png"))?;

    // Three-band flag for palette extraction
    stripes(96, 32, &[[255, 0, 0], [255, 255, 255], [0, 0, 255]]).save(dir.join("flag.png"))?;

    println!("Generated: red.png, black.png, near_salmon.png, flag.png");
    Ok(())
}
