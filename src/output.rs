//! Terminal output helpers

use colored::*;

use crate::classify::{Match, NamedColor, Rgb};

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Two-cell swatch painted with the color itself
fn swatch(rgb: Rgb) -> ColoredString {
    "  ".on_truecolor(rgb.r, rgb.g, rgb.b)
}

/// One classified color: swatch, input hex, matched name, match kind
pub(crate) fn print_match(rgb: Rgb, m: &Match) {
    let kind = if m.exact {
        "exact".to_string()
    } else {
        format!("closest, distance {:.1}", m.distance)
    };
    println!(
        "  {} {}  {} ({})",
        swatch(rgb),
        rgb.to_hex(),
        m.name.bold(),
        kind
    );
}

/// One reference palette row for --list
pub(crate) fn print_palette_entry(entry: &NamedColor) {
    println!("  {} {}  {}", swatch(entry.rgb), entry.hex, entry.name);
}

/// Deduplicated name summary line
pub(crate) fn print_names(names: &[&str]) {
    println!("Names: {}", names.join(", "));
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}
