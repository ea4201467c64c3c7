// src/harvest/mod.rs
// =============================================================================
// This module drives a harvest run.
//
// Submodules:
// - pool: the bounded worker pool and the shared, locked result set
// - seeds: the built-in directory list and seeds-file loading
// =============================================================================

mod pool;
mod seeds;

pub use pool::{Harvester, ProgressCallback, SeedReport, DEFAULT_CONCURRENCY};
pub use seeds::{default_seeds, load_seeds_file, parse_seeds, DIRECTORY_SEEDS};
