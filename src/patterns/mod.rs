// src/patterns/mod.rs — Recurring action sequence mining

pub mod index;
pub mod miner;
pub mod pipeline;
pub mod sequences;

pub use index::{IndexBuilder, PatternIndex, Recommendation};
pub use miner::{DetectedPattern, PatternMiner, PatternType};
pub use pipeline::{build_index, generate_index, stored_patterns};
