// src/cli/patterns.rs — `koi-indexer patterns`

use std::io::Write;

use crate::infra::config::IndexerConfig;
use crate::patterns::stored_patterns;

/// Print the stored patterns as pretty JSON. Silent if nothing is indexed yet.
pub fn show_patterns(config: &IndexerConfig) -> anyhow::Result<()> {
    write_patterns(config, &mut std::io::stdout().lock())
}

fn write_patterns(config: &IndexerConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match stored_patterns(config)? {
        Some(patterns) => writeln!(out, "{}", serde_json::to_string_pretty(&patterns)?)?,
        None => tracing::debug!(
            "No index at {}",
            config.storage.index_path().display()
        ),
    }
    Ok(())
}
