use rectops_core::config::OutputFormat;
use rectops_core::{Adjacency, Config, find_adjacencies, log_info};

use super::pair::{PairArgs, print_json};

pub fn execute(args: &PairArgs, config: &Config) {
    let (first, second) = args.rectangles();
    let adjacencies = find_adjacencies(&first, &second);
    log_info!(
        "adjacency {first} {second}: {} segments",
        adjacencies.len()
    );

    match args.format(config) {
        OutputFormat::Json => print_json(serde_json::to_string_pretty(&adjacencies)),
        OutputFormat::Text => print!("{}", describe(&adjacencies)),
    }
}

/// One line per segment, or a single line saying there are none.
pub fn describe(adjacencies: &[Adjacency]) -> String {
    if adjacencies.is_empty() {
        return "No adjacencies found.\n".to_string();
    }
    adjacencies.iter().map(|a| format!("{a}\n")).collect()
}
