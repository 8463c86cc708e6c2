//! CLI mode implementations

mod color;
mod image;
mod list;

pub use color::run_color;
pub use image::run_image;
pub use list::run_list;

use crate::classify::Palette;
use crate::output::print_error;

/// Load the reference palette or exit. A corrupt reference table is fatal
/// at startup; there is nothing to retry.
fn load_palette() -> Palette {
    Palette::load().unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    })
}
