// src/events/loader.rs — Load daily JSONL logs within a lookback window

use chrono::{Days, NaiveDate};
use std::path::{Path, PathBuf};

use crate::events::record::EventRecord;
use crate::infra::config::StorageConfig;
use crate::infra::errors::{IndexerError, Result};

/// Reads the per-day event logs under one directory.
pub struct EventLoader {
    events_dir: PathBuf,
    extension: String,
}

/// Path of the log for `date`: `<dir>/YYYY-MM-DD.<ext>`.
pub fn daily_log_path(events_dir: &Path, date: NaiveDate, extension: &str) -> PathBuf {
    events_dir.join(format!("{}.{extension}", date.format("%Y-%m-%d")))
}

impl EventLoader {
    pub fn new(events_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            events_dir: events_dir.into(),
            extension: extension.into(),
        }
    }

    pub fn from_storage(storage: &StorageConfig) -> Self {
        Self::new(storage.events_path(), storage.event_extension.clone())
    }

    /// Load `days_back` days of events ending at `today`.
    ///
    /// Days are visited newest first, so the result holds today's events,
    /// then yesterday's, and so on. Each day keeps its own line order.
    /// Missing days contribute nothing.
    pub fn load(&self, today: NaiveDate, days_back: u32) -> Result<Vec<EventRecord>> {
        let mut events = Vec::new();
        for offset in 0..days_back {
            let Some(date) = today.checked_sub_days(Days::new(u64::from(offset))) else {
                break;
            };
            let path = daily_log_path(&self.events_dir, date, &self.extension);
            let day = self.load_day(&path)?;
            if !day.is_empty() {
                tracing::debug!("Loaded {} events from {}", day.len(), path.display());
            }
            events.extend(day);
        }
        Ok(events)
    }

    /// Read one daily log. A missing file is an empty day; any other read
    /// failure is an error.
    pub fn load_day(&self, path: &Path) -> Result<Vec<EventRecord>> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(IndexerError::io(path, e)),
        };
        let content = String::from_utf8_lossy(&bytes);
        let (events, skipped) = parse_log(&content);
        if skipped > 0 {
            tracing::debug!("Skipped {} malformed lines in {}", skipped, path.display());
        }
        Ok(events)
    }
}

/// Parse newline-delimited records, dropping lines that fail to parse.
/// Returns the records and the number of non-blank lines dropped.
pub fn parse_log(content: &str) -> (Vec<EventRecord>, usize) {
    let mut skipped = 0;
    let events = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = EventRecord::parse(line);
            if record.is_none() {
                skipped += 1;
            }
            record
        })
        .collect();
    (events, skipped)
}
