//! Image loading and dominant-palette extraction

use std::collections::HashMap;

use image::RgbaImage;
use image::imageops;

use crate::classify::Rgb;

/// Pixels with alpha below this are left out of the histogram
const ALPHA_CUTOFF: u8 = 128;

/// Images are downsampled to fit within this box before counting
const SAMPLE_DIM: u32 = 128;

/// Decode an image file (PNG, JPEG or GIF) into RGBA pixels
pub fn load_image(filename: &str) -> Result<RgbaImage, String> {
    let img = image::open(filename).map_err(|e| format!("Error opening image: {}", e))?;
    Ok(img.to_rgba8())
}

/// Extract the `count` most common colors of an image.
///
/// The image is downsampled, opaque pixels are bucketed at 4 bits per
/// channel and each returned color is the average of its bucket. Buckets are
/// ranked by population with the bucket key as a tie-break, so the result is
/// deterministic for a given image. Returns fewer than `count` colors when
/// the image has fewer distinct buckets.
pub fn dominant_palette(img: &RgbaImage, count: usize) -> Vec<Rgb> {
    let small;
    let pixels = if img.width() > SAMPLE_DIM || img.height() > SAMPLE_DIM {
        small = imageops::thumbnail(img, SAMPLE_DIM, SAMPLE_DIM);
        &small
    } else {
        img
    };

    // bucket key -> (population, per-channel sums)
    let mut buckets: HashMap<u16, (u32, [u64; 3])> = HashMap::new();
    for pixel in pixels.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < ALPHA_CUTOFF {
            continue;
        }
        let key = ((r as u16 >> 4) << 8) | ((g as u16 >> 4) << 4) | (b as u16 >> 4);
        let bucket = buckets.entry(key).or_insert((0, [0; 3]));
        bucket.0 += 1;
        bucket.1[0] += r as u64;
        bucket.1[1] += g as u64;
        bucket.1[2] += b as u64;
    }

    let mut ranked: Vec<_> = buckets.into_iter().collect();
    ranked.sort_by(|&(key_a, (pop_a, _)), &(key_b, (pop_b, _))| {
        pop_b.cmp(&pop_a).then(key_a.cmp(&key_b))
    });

    ranked
        .into_iter()
        .take(count)
        .map(|(_, (n, sums))| {
            Rgb::new(
                (sums[0] / n as u64) as u8,
                (sums[1] / n as u64) as u8,
                (sums[2] / n as u64) as u8,
            )
        })
        .collect()
}
