mod commands;

use clap::{Parser, Subcommand};

use commands::pair::PairArgs;
use rectops_core::{config, log, log_debug};

#[derive(Parser)]
#[command(
    name = "rectops",
    version,
    about = "Intersection, containment and adjacency of integer rectangles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List the lattice points where the two rectangles' borders meet
    Intersect(PairArgs),
    /// Check whether the first rectangle lies strictly inside the second
    Contains(PairArgs),
    /// List the border segments the two rectangles share
    Adjacency(PairArgs),
    /// Choose an operation and enter both rectangles at a prompt
    Menu,
}

fn main() {
    let cli = Cli::parse();

    let config = config::load();
    log::init(&config.logging);
    log_debug!("loaded config: {config:?}");

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Intersect(args) => commands::intersect::execute(&args, &config),
        Commands::Contains(args) => commands::contains::execute(&args, &config),
        Commands::Adjacency(args) => commands::adjacency::execute(&args, &config),
        Commands::Menu => commands::menu::execute(),
    }
}
