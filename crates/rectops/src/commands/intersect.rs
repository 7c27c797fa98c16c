use rectops_core::config::OutputFormat;
use rectops_core::{Config, intersect, log_info};

use super::pair::{PairArgs, print_json};

pub fn execute(args: &PairArgs, config: &Config) {
    let (first, second) = args.rectangles();
    let result = intersect(&first, &second);
    log_info!(
        "intersect {first} {second}: {} ({} points)",
        result.kind,
        result.points.len()
    );

    match args.format(config) {
        OutputFormat::Json => print_json(serde_json::to_string_pretty(&result)),
        OutputFormat::Text => println!("{result}"),
    }
}
