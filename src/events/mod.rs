// src/events/mod.rs — Daily event logs

pub mod loader;
pub mod record;

pub use loader::{daily_log_path, EventLoader};
pub use record::EventRecord;
