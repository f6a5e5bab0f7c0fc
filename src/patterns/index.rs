// src/patterns/index.rs — Pattern index snapshot: assembly and persistence
//
// The index is written as pretty JSON via temp file + rename, so readers see
// either the previous snapshot or the complete new one.
//
// `tool_frequency` keys are sorted by action name rather than first-seen
// order, so unchanged logs always produce byte-identical frequency tables.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use crate::events::EventRecord;
use crate::infra::config::IndexConfig;
use crate::infra::errors::{IndexerError, Result};
use crate::patterns::miner::DetectedPattern;

/// The persisted snapshot. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternIndex {
    #[serde(serialize_with = "serialize_millis")]
    pub generated_at: DateTime<Utc>,
    pub events_analyzed: usize,
    pub patterns: Vec<DetectedPattern>,
    pub tool_frequency: BTreeMap<String, u64>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub description: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    CreateSkill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
}

/// Assembles a [`PatternIndex`] from one run's events and ranked patterns.
pub struct IndexBuilder<'a> {
    limits: &'a IndexConfig,
    action_field: &'a str,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(limits: &'a IndexConfig, action_field: &'a str) -> Self {
        Self {
            limits,
            action_field,
        }
    }

    /// `patterns` must already be sorted by confidence, highest first.
    pub fn build(
        &self,
        events: &[EventRecord],
        patterns: &[DetectedPattern],
        generated_at: DateTime<Utc>,
    ) -> PatternIndex {
        let recommendations = patterns
            .iter()
            .filter(|p| p.confidence > self.limits.recommendation_threshold)
            .take(self.limits.max_recommendations)
            .map(|p| Recommendation {
                kind: RecommendationKind::CreateSkill,
                priority: Priority::High,
                description: p.suggestion.clone(),
                confidence: p.confidence,
            })
            .collect();

        PatternIndex {
            generated_at,
            events_analyzed: events.len(),
            patterns: patterns
                .iter()
                .take(self.limits.max_patterns)
                .cloned()
                .collect(),
            tool_frequency: action_frequency(events, self.action_field),
            recommendations,
        }
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2026-03-07T12:00:00.123Z`.
fn serialize_millis<S>(at: &DateTime<Utc>, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Occurrences of each action name across all actionable events.
pub fn action_frequency(events: &[EventRecord], action_field: &str) -> BTreeMap<String, u64> {
    let mut freq: BTreeMap<String, u64> = BTreeMap::new();
    for name in events.iter().filter_map(|e| e.action(action_field)) {
        *freq.entry(name.to_string()).or_default() += 1;
    }
    freq
}

/// Atomically replace the index at `path`, creating its directory if needed.
pub fn write_index(path: &Path, index: &PatternIndex) -> Result<()> {
    let json = serde_json::to_string_pretty(index)?;

    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(|e| IndexerError::io(&dir, e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pattern-index.json".into());
    let tmp = dir.join(format!(".{file_name}.tmp"));

    let written = write_synced(&tmp, json.as_bytes())
        .and_then(|()| std::fs::rename(&tmp, path));
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(IndexerError::io(path, e));
    }
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = std::fs::File::create(path)?;
    f.write_all(bytes)?;
    f.flush()?;
    f.sync_all()
}

/// Read a previously written index. `Ok(None)` when none exists yet.
pub fn read_index(path: &Path) -> Result<Option<PatternIndex>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(IndexerError::io(path, e)),
    };
    Ok(Some(serde_json::from_str(&content)?))
}
