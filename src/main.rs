mod classify;
mod image_io;
mod mode;
mod output;

use clap::Parser;

use mode::{run_color, run_image, run_list};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "colorname",
    version,
    about = "Names RGB colors and image palettes using the CSS3 named colors",
    after_help = "Examples:
  colorname 250 128 114                  Classify one RGB triple
  colorname \"#fa8072\"                    Classify a hex color
  colorname \"#ff0000\" \"#00ff00\"          Several colors, names deduplicated
  colorname --image photo.jpg            Name the 5 dominant colors of an image
  colorname --image photo.jpg --count 8  Extract 8 dominant colors
  colorname --list                       Print the whole reference palette
  colorname --no-color 0 128 0           Disable colored output"
)]
struct Args {
    /// Color to classify: three channel values (0-255) or hex colors ("#rrggbb")
    #[arg(allow_negative_numbers = true)]
    color: Vec<String>,

    /// Classify the dominant palette of an image (PNG, JPEG, GIF)
    #[arg(short, long, value_name = "PATH")]
    image: Option<String>,

    /// Number of dominant colors to extract from the image
    #[arg(short, long, default_value = "5", value_name = "COUNT")]
    count: usize,

    /// List all reference palette colors
    #[arg(short, long)]
    list: bool,

    /// Print bare color names only
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate option combinations
    if args.list && (args.image.is_some() || !args.color.is_empty()) {
        print_error("--list cannot be combined with other inputs");
        std::process::exit(1);
    }

    if args.image.is_some() && !args.color.is_empty() {
        print_error("--image cannot be combined with color arguments");
        std::process::exit(1);
    }

    if args.image.is_none() && args.count != 5 {
        print_error("--count can only be used with --image");
        std::process::exit(1);
    }

    if !(1..=16).contains(&args.count) {
        print_error("--count must be between 1 and 16");
        std::process::exit(1);
    }

    // Dispatch to appropriate mode
    if args.list {
        run_list(args.quiet);
    } else if let Some(ref path) = args.image {
        run_image(path, args.count, args.quiet);
    } else if !args.color.is_empty() {
        run_color(&args.color, args.quiet);
    } else {
        print_error("no color given (pass R G B, hex colors, --image or --list)");
        std::process::exit(1);
    }
}
