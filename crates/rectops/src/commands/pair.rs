use clap::Args;

use rectops_core::config::OutputFormat;
use rectops_core::{Config, Point, Rectangle, log_error};

/// Two rectangles, each given by its upper-left and lower-right corner.
#[derive(Args)]
pub struct PairArgs {
    /// Upper-left corner of the first rectangle, as x,y
    #[arg(allow_hyphen_values = true)]
    first_upper_left: Point,
    /// Lower-right corner of the first rectangle, as x,y
    #[arg(allow_hyphen_values = true)]
    first_lower_right: Point,
    /// Upper-left corner of the second rectangle, as x,y
    #[arg(allow_hyphen_values = true)]
    second_upper_left: Point,
    /// Lower-right corner of the second rectangle, as x,y
    #[arg(allow_hyphen_values = true)]
    second_lower_right: Point,
    /// Print the result as JSON regardless of the configured format
    #[arg(long)]
    json: bool,
}

impl PairArgs {
    /// Builds both rectangles, exiting with status 1 if either is invalid.
    pub fn rectangles(&self) -> (Rectangle, Rectangle) {
        let first = build(self.first_upper_left, self.first_lower_right, "first");
        let second = build(self.second_upper_left, self.second_lower_right, "second");
        (first, second)
    }

    /// The output format after applying `--json` over the config.
    pub fn format(&self, config: &Config) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.output.format
        }
    }
}

fn build(upper_left: Point, lower_right: Point, which: &str) -> Rectangle {
    match Rectangle::new(upper_left, lower_right) {
        Ok(r) => r,
        Err(e) => {
            log_error!("{which} rectangle rejected: {e}");
            eprintln!("Error: {which} rectangle: {e}");
            std::process::exit(1);
        }
    }
}

/// Prints a serialized JSON document, exiting with status 1 on failure.
pub fn print_json(rendered: serde_json::Result<String>) {
    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: could not serialize result: {e}");
            std::process::exit(1);
        }
    }
}
