//! Reference palette listing mode

use crate::output::print_palette_entry;

use super::load_palette;

/// Print every reference palette entry
pub fn run_list(quiet: bool) {
    let palette = load_palette();

    if quiet {
        for entry in palette.entries() {
            println!("{}", entry.name);
        }
        return;
    }

    println!("Reference palette (CSS3): {} colors", palette.len());
    println!();
    for entry in palette.entries() {
        print_palette_entry(entry);
    }
}
