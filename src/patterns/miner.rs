// src/patterns/miner.rs — Pattern detection from action sequences

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound on any confidence score.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Score every qualifying pattern starts from.
pub const BASE_CONFIDENCE: f64 = 0.1;

/// Counts recurring sequences and scores the ones that recur often enough.
pub struct PatternMiner {
    min_occurrences: u32,
}

/// A detected usage pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedPattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    pub sequence: String,
    pub occurrences: u32,
    pub confidence: f64,
    pub suggestion: String,
}

/// Types of patterns the miner can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// Chains of actions executed in order
    Workflow,
}

impl PatternMiner {
    pub fn new(min_occurrences: u32) -> Self {
        Self { min_occurrences }
    }

    /// Detect workflow patterns among extracted sequences.
    ///
    /// Results are ordered by confidence, highest first. Equal scores keep
    /// the order in which their sequence was first seen.
    pub fn detect(&self, sequences: &[String]) -> Vec<DetectedPattern> {
        let total_windows = sequences.len();

        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, u32)> = Vec::new();
        for seq in sequences {
            let slot = *slots.entry(seq.as_str()).or_insert_with(|| {
                counts.push((seq.as_str(), 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }

        let mut patterns: Vec<DetectedPattern> = counts
            .into_iter()
            .filter(|(_, count)| *count >= self.min_occurrences)
            .map(|(seq, count)| DetectedPattern {
                pattern_type: PatternType::Workflow,
                sequence: seq.to_string(),
                occurrences: count,
                confidence: confidence(count, total_windows),
                suggestion: suggestion(seq),
            })
            .collect();

        // Stable: ties stay in discovery order.
        patterns.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        patterns
    }
}

/// Linear score in the pattern's share of all windows, capped below certainty.
pub fn confidence(occurrences: u32, total_windows: usize) -> f64 {
    if total_windows == 0 {
        return BASE_CONFIDENCE;
    }
    let share = f64::from(occurrences) / total_windows as f64;
    (share * 2.0 + BASE_CONFIDENCE).min(MAX_CONFIDENCE)
}

fn suggestion(sequence: &str) -> String {
    format!("Consider creating a skill for: {sequence}")
}
