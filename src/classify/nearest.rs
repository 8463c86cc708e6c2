//! Exact-then-nearest classification against the reference palette

use super::color::Rgb;
use super::palette::Palette;

/// Classification result for a single color
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub name: &'static str,
    /// True when the input's canonical hex is a palette entry
    pub exact: bool,
    /// Euclidean RGB distance to the matched entry (0 for exact matches)
    pub distance: f64,
}

/// Squared Euclidean distance in RGB space (exact integer arithmetic)
fn dist2(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Map an RGB triple to the best reference palette name.
///
/// An exact hex hit short-circuits the scan. Otherwise a linear scan keeps
/// the first entry with the strictly smallest distance, so equidistant
/// entries resolve to the lexicographically earlier name.
pub fn classify(palette: &Palette, rgb: Rgb) -> Match {
    if let Some(name) = palette.exact_name_for(&rgb.to_hex()) {
        return Match {
            name,
            exact: true,
            distance: 0.0,
        };
    }

    // load() rejects an empty table, so there is always a champion
    let entries = palette.entries();
    let mut best = &entries[0];
    let mut best_d = dist2(rgb, best.rgb);
    for entry in &entries[1..] {
        let d = dist2(rgb, entry.rgb);
        if d < best_d {
            best_d = d;
            best = entry;
        }
    }

    Match {
        name: best.name,
        exact: false,
        distance: f64::from(best_d).sqrt(),
    }
}

/// Classify a sequence of colors into a deduplicated name list,
/// preserving first-seen order
pub fn classify_palette(palette: &Palette, colors: &[Rgb]) -> Vec<&'static str> {
    let mut names = Vec::new();
    for &rgb in colors {
        let name = classify(palette, rgb).name;
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
