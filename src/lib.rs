// src/lib.rs — Library root for koi-indexer

pub mod cli;
pub mod events;
pub mod infra;
pub mod patterns;
