//! Explicit color arguments mode

use crate::classify::{InvalidColor, Rgb, classify, classify_palette};
use crate::output::{print_error, print_match, print_names};

use super::load_palette;

/// Parse positional color arguments: exactly three integer-looking tokens
/// are channel values, anything else is read as hex colors.
fn parse_colors(args: &[String]) -> Result<Vec<Rgb>, InvalidColor> {
    if args.iter().all(|a| a.trim().parse::<f64>().is_ok()) {
        if args.len() != 3 {
            return Err(InvalidColor::WrongChannelCount(args.len()));
        }
        let rgb = Rgb::from_tokens([&args[0], &args[1], &args[2]])?;
        return Ok(vec![rgb]);
    }
    args.iter().map(|a| Rgb::from_hex(a)).collect()
}

/// Classify colors given directly on the command line
pub fn run_color(args: &[String], quiet: bool) {
    let colors = parse_colors(args).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    let palette = load_palette();

    if quiet {
        for name in classify_palette(&palette, &colors) {
            println!("{}", name);
        }
        return;
    }

    for &rgb in &colors {
        print_match(rgb, &classify(&palette, rgb));
    }
    if colors.len() > 1 {
        println!();
        print_names(&classify_palette(&palette, &colors));
    }
}
