// src/main.rs — koi-indexer entry point

use clap::Parser;
use std::path::Path;

use koi_indexer::cli::{Cli, Commands};
use koi_indexer::infra::config::IndexerConfig;
use koi_indexer::infra::{logger, paths};

fn main() {
    let cli = Cli::parse();

    // Initialize logging (respects RUST_LOG)
    logger::init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root_override = paths::root_override(cli.root.as_deref().map(Path::new));

    // An explicit --config may name its own storage root;
    // --root / KOI_INDEXER_HOME still win when given.
    let config = match cli.config {
        Some(ref path) => {
            let mut config = IndexerConfig::load_from(Path::new(path))?;
            if let Some(root) = root_override {
                config.storage.root = root;
            }
            config
        }
        None => IndexerConfig::load(&paths::storage_root(root_override.as_deref()))?,
    };

    match cli.command {
        Some(Commands::Patterns) => koi_indexer::cli::patterns::show_patterns(&config),
        Some(Commands::Index { days }) => {
            koi_indexer::cli::index::run_index(&config, days.as_deref())
        }
        None => koi_indexer::cli::index::run_index(&config, None),
    }
}
