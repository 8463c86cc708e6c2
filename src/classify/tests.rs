//! Unit tests for the classification core

use super::color::{InvalidColor, Rgb};
use super::nearest::{classify, classify_palette};
use super::palette::Palette;

fn palette() -> Palette {
    Palette::load().expect("reference palette should load")
}

// =============================================================================
// Reference palette
// =============================================================================

#[test]
fn test_palette_has_css3_size() {
    assert_eq!(palette().len(), 147);
}

#[test]
fn test_entries_sorted_by_name() {
    let palette = palette();
    for pair in palette.entries().windows(2) {
        assert!(
            pair[0].name < pair[1].name,
            "entries out of order: {} before {}",
            pair[0].name,
            pair[1].name
        );
    }
}

#[test]
fn test_hex_is_canonical_encoding_of_rgb() {
    for entry in palette().entries() {
        assert_eq!(entry.hex, entry.rgb.to_hex(), "entry: {}", entry.name);
    }
}

#[test]
fn test_exact_lookup() {
    let palette = palette();
    assert_eq!(palette.exact_name_for("#000000"), Some("black"));
    assert_eq!(palette.exact_name_for("#ffffff"), Some("white"));
    assert_eq!(palette.exact_name_for("#fa8072"), Some("salmon"));
    assert_eq!(palette.exact_name_for("#010203"), None);
}

#[test]
fn test_alias_resolves_to_first_name() {
    let palette = palette();
    assert_eq!(palette.exact_name_for("#00ffff"), Some("aqua"));
    assert_eq!(palette.exact_name_for("#ff00ff"), Some("fuchsia"));
    assert_eq!(palette.exact_name_for("#808080"), Some("gray"));
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_every_entry_classifies_exactly() {
    let palette = palette();
    for entry in palette.entries() {
        let m = classify(&palette, entry.rgb);
        assert!(m.exact, "{} should take the exact path", entry.name);
        assert_eq!(m.distance, 0.0);
        // Aliased hex values resolve to the first name with the same RGB
        let matched = palette
            .entries()
            .iter()
            .find(|e| e.name == m.name)
            .expect("matched name should be a palette entry");
        assert_eq!(matched.rgb, entry.rgb, "entry: {}", entry.name);
    }
}

#[test]
fn test_boundary_black_and_white() {
    let palette = palette();
    assert_eq!(classify(&palette, Rgb::new(0, 0, 0)).name, "black");
    assert_eq!(classify(&palette, Rgb::new(255, 255, 255)).name, "white");
}

#[test]
fn test_nearest_neighbor_path() {
    let palette = palette();
    // (250, 128, 120) is 6 away from salmon (250, 128, 114)
    let m = classify(&palette, Rgb::new(250, 128, 120));
    assert_eq!(m.name, "salmon");
    assert!(!m.exact);
    assert!((m.distance - 6.0).abs() < 1e-9, "distance: {}", m.distance);
}

#[test]
fn test_equidistant_resolves_to_earlier_name() {
    let palette = palette();
    // (0, 0, 230) is 25 away from both blue (0, 0, 255) and
    // mediumblue (0, 0, 205); "blue" comes first in the table
    let m = classify(&palette, Rgb::new(0, 0, 230));
    assert_eq!(m.name, "blue");
    assert!((m.distance - 25.0).abs() < 1e-9);
}

#[test]
fn test_classify_is_total_and_deterministic() {
    let palette = palette();
    for rgb in [
        Rgb::new(1, 2, 3),
        Rgb::new(128, 128, 127),
        Rgb::new(200, 100, 50),
        Rgb::new(17, 230, 94),
    ] {
        let first = classify(&palette, rgb);
        assert!(
            palette.entries().iter().any(|e| e.name == first.name),
            "result should be a palette name: {}",
            first.name
        );
        assert_eq!(classify(&palette, rgb), first);
    }
}

// =============================================================================
// Input validation
// =============================================================================

#[test]
fn test_channel_out_of_range() {
    assert_eq!(
        Rgb::from_channels(256, 0, 0),
        Err(InvalidColor::OutOfRange {
            channel: "red",
            value: 256
        })
    );
    assert_eq!(
        Rgb::from_channels(-1, 0, 0),
        Err(InvalidColor::OutOfRange {
            channel: "red",
            value: -1
        })
    );
    assert_eq!(
        Rgb::from_channels(0, 999, 0),
        Err(InvalidColor::OutOfRange {
            channel: "green",
            value: 999
        })
    );
    assert_eq!(Rgb::from_channels(0, 0, 255), Ok(Rgb::new(0, 0, 255)));
}

#[test]
fn test_non_integer_token_rejected() {
    let err = Rgb::from_tokens(["1.5", "0", "0"]).unwrap_err();
    assert_eq!(
        err,
        InvalidColor::NotAnInteger {
            channel: "red",
            value: "1.5".to_string()
        }
    );
}

#[test]
fn test_hex_parsing() {
    assert_eq!(Rgb::from_hex("#fa8072"), Ok(Rgb::new(250, 128, 114)));
    assert_eq!(Rgb::from_hex("#FA8072"), Ok(Rgb::new(250, 128, 114)));
    assert_eq!(Rgb::from_hex("fa8072"), Ok(Rgb::new(250, 128, 114)));
    assert!(matches!(Rgb::from_hex("#12345"), Err(InvalidColor::BadHex(_))));
    assert!(matches!(Rgb::from_hex("#gggggg"), Err(InvalidColor::BadHex(_))));
    assert!(matches!(Rgb::from_hex(""), Err(InvalidColor::BadHex(_))));
}

#[test]
fn test_hex_encoding_is_lowercase_canonical() {
    assert_eq!(Rgb::new(250, 128, 114).to_hex(), "#fa8072");
    assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
}

// =============================================================================
// Palette classification (dedup)
// =============================================================================

#[test]
fn test_classify_palette_dedups_by_name() {
    let palette = palette();
    let colors = [
        Rgb::new(255, 0, 0),
        Rgb::new(255, 0, 0),
        Rgb::new(0, 255, 0),
    ];
    assert_eq!(classify_palette(&palette, &colors), vec!["red", "lime"]);
}

#[test]
fn test_classify_palette_preserves_first_seen_order() {
    let palette = palette();
    // (0, 250, 0) is nearest to lime, (254, 1, 1) nearest to red
    let colors = [Rgb::new(0, 250, 0), Rgb::new(254, 1, 1)];
    assert_eq!(classify_palette(&palette, &colors), vec!["lime", "red"]);
}

#[test]
fn test_classify_palette_empty_input() {
    let palette = palette();
    assert!(classify_palette(&palette, &[]).is_empty());
}
