// src/cli/index.rs — `koi-indexer index [days]`

use chrono::Utc;

use crate::infra::config::IndexerConfig;
use crate::patterns::{generate_index, PatternIndex};

/// Number of patterns echoed to the terminal after indexing.
const SUMMARY_PATTERNS: usize = 5;

pub fn run_index(config: &IndexerConfig, days: Option<&str>) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(days) = days.and_then(parse_days) {
        config.mining.days_back = days;
    }

    println!(
        "Analyzing events from last {} days...",
        config.mining.days_back
    );
    let now = Utc::now();
    let index = generate_index(&config, now.date_naive(), now)?;
    println!("Loaded {} events", index.events_analyzed);
    println!("Index written to {}", config.storage.index_path().display());

    print!("{}", render_summary(&index));
    Ok(())
}

/// Leading decimal digits of `arg` as a positive day count. Zero, empty,
/// and non-numeric input yield `None` so the configured window applies.
pub fn parse_days(arg: &str) -> Option<u32> {
    let trimmed = arg.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    digits.parse::<u32>().ok().filter(|&d| d > 0)
}

/// Top patterns as `  [NN%] sequence (Kx)` lines.
pub fn render_summary(index: &PatternIndex) -> String {
    let mut out = String::from("\nTop patterns:\n");
    for p in index.patterns.iter().take(SUMMARY_PATTERNS) {
        out.push_str(&format!(
            "  [{:.0}%] {} ({}x)\n",
            p.confidence * 100.0,
            p.sequence,
            p.occurrences
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{DetectedPattern, PatternType};
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn index_with(n: usize) -> PatternIndex {
        PatternIndex {
            generated_at: Utc.with_ymd_and_hms(2026, 3, 7, 0, 0, 0).unwrap(),
            events_analyzed: 40,
            patterns: (0..n)
                .map(|i| DetectedPattern {
                    pattern_type: PatternType::Workflow,
                    sequence: format!("Read → Edit → Bash{i}"),
                    occurrences: 3,
                    confidence: 0.95,
                    suggestion: String::new(),
                })
                .collect(),
            tool_frequency: BTreeMap::new(),
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("7"), Some(7));
        assert_eq!(parse_days(" 14"), Some(14));
        assert_eq!(parse_days("10days"), Some(10));
        assert_eq!(parse_days("0"), None);
        assert_eq!(parse_days("soon"), None);
        assert_eq!(parse_days(""), None);
        assert_eq!(parse_days("-3"), None);
    }

    #[test]
    fn test_summary_formats_percent_and_count() {
        let summary = render_summary(&index_with(1));
        assert!(summary.contains("  [95%] Read → Edit → Bash0 (3x)"));
    }

    #[test]
    fn test_summary_caps_at_five() {
        let summary = render_summary(&index_with(8));
        assert_eq!(summary.lines().filter(|l| l.starts_with("  [")).count(), 5);
    }

    #[test]
    fn test_summary_empty_index() {
        assert_eq!(render_summary(&index_with(0)), "\nTop patterns:\n");
    }
}
