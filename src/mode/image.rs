//! Image dominant-palette mode

use crate::classify::{classify, classify_palette};
use crate::image_io::{dominant_palette, load_image};
use crate::output::{get_display_name, print_error, print_match, print_names, print_warning};

use super::load_palette;

/// Name the dominant colors of an image file
pub fn run_image(filename: &str, count: usize, quiet: bool) {
    let img = load_image(filename).unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    });

    let colors = dominant_palette(&img, count);
    if colors.is_empty() {
        print_error("no opaque pixels found in image");
        std::process::exit(1);
    }
    if colors.len() < count {
        print_warning(&format!(
            "image has only {} distinct color groups",
            colors.len()
        ));
    }

    let palette = load_palette();

    if quiet {
        for name in classify_palette(&palette, &colors) {
            println!("{}", name);
        }
        return;
    }

    println!(
        "File: {} ({}x{})",
        get_display_name(filename),
        img.width(),
        img.height()
    );
    println!();
    println!("[Dominant Palette]");
    for &rgb in &colors {
        print_match(rgb, &classify(&palette, rgb));
    }
    println!();
    print_names(&classify_palette(&palette, &colors));
}
