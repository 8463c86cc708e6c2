//! Named-color classification core

mod color;
mod nearest;
mod palette;

pub use color::{InvalidColor, Rgb};
pub use nearest::{Match, classify, classify_palette};
pub use palette::{NamedColor, Palette, PaletteError};

#[cfg(test)]
mod tests;
