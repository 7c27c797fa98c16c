use rectops_core::config::OutputFormat;
use rectops_core::{Config, is_fully_contained_by, log_info};

use super::pair::{PairArgs, print_json};

pub fn execute(args: &PairArgs, config: &Config) {
    let (first, second) = args.rectangles();
    let contained = is_fully_contained_by(&first, &second);
    log_info!("contains {first} {second}: {contained}");

    match args.format(config) {
        OutputFormat::Json => print_json(serde_json::to_string_pretty(
            &serde_json::json!({ "contained": contained }),
        )),
        OutputFormat::Text => println!("{}", describe(contained)),
    }
}

/// Human-readable containment verdict for the first rectangle.
pub fn describe(contained: bool) -> &'static str {
    if contained {
        "First rectangle is fully contained within the second"
    } else {
        "First rectangle is not fully contained within the second"
    }
}
