// src/cli/mod.rs — CLI definition (clap derive)

pub mod index;
pub mod patterns;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "koi-indexer",
    about = "Mine daily event logs for recurring tool sequences",
    version
)]
pub struct Cli {
    /// Storage root holding events/ and the index (overrides KOI_INDEXER_HOME)
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Config file path (defaults to <root>/indexer.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Analyze recent events and rewrite the pattern index (default)
    Index {
        /// Lookback window in days; zero or non-numeric falls back to the configured window
        days: Option<String>,
    },
    /// Print patterns from the last written index
    Patterns,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["koi-indexer"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_index_with_days() {
        let cli = Cli::try_parse_from(["koi-indexer", "index", "7"]).unwrap();
        match cli.command {
            Some(Commands::Index { days }) => assert_eq!(days.as_deref(), Some("7")),
            _ => panic!("expected index command"),
        }
    }

    #[test]
    fn test_index_accepts_unparsable_days() {
        let cli = Cli::try_parse_from(["koi-indexer", "index", "soon"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Index { days: Some(_) })));
    }

    #[test]
    fn test_global_root_after_subcommand() {
        let cli = Cli::try_parse_from(["koi-indexer", "patterns", "--root", "/tmp/mem"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Patterns)));
        assert_eq!(cli.root.as_deref(), Some("/tmp/mem"));
    }
}
