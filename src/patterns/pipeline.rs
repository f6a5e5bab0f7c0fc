// src/patterns/pipeline.rs — Load → extract → detect → index, once per run

use chrono::{DateTime, NaiveDate, Utc};

use crate::events::EventLoader;
use crate::infra::config::IndexerConfig;
use crate::infra::errors::Result;
use crate::patterns::index::{read_index, write_index, IndexBuilder, PatternIndex};
use crate::patterns::miner::{DetectedPattern, PatternMiner};
use crate::patterns::sequences::extract_sequences;

/// Analyze the lookback window ending at `today` without touching the index file.
pub fn build_index(
    config: &IndexerConfig,
    today: NaiveDate,
    generated_at: DateTime<Utc>,
) -> Result<PatternIndex> {
    let mining = &config.mining;
    tracing::info!("Analyzing events from last {} days", mining.days_back);

    let events = EventLoader::from_storage(&config.storage).load(today, mining.days_back)?;
    tracing::info!("Loaded {} events", events.len());

    let sequences = extract_sequences(&events, &mining.action_field, mining.window_size);
    let patterns = PatternMiner::new(mining.min_occurrences).detect(&sequences);
    tracing::info!(
        "Detected {} patterns across {} windows",
        patterns.len(),
        sequences.len()
    );

    Ok(IndexBuilder::new(&config.index, &mining.action_field).build(
        &events,
        &patterns,
        generated_at,
    ))
}

/// Build the index and persist it, replacing any previous snapshot.
pub fn generate_index(
    config: &IndexerConfig,
    today: NaiveDate,
    generated_at: DateTime<Utc>,
) -> Result<PatternIndex> {
    let index = build_index(config, today, generated_at)?;
    let path = config.storage.index_path();
    write_index(&path, &index)?;
    tracing::info!("Index written to {}", path.display());
    Ok(index)
}

/// Patterns from the last written index, or `None` if no index exists yet.
pub fn stored_patterns(config: &IndexerConfig) -> Result<Option<Vec<DetectedPattern>>> {
    Ok(read_index(&config.storage.index_path())?.map(|index| index.patterns))
}
