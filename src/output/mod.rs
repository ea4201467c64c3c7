// src/output/mod.rs
// Everything that leaves the process at the end of a run: the CSV table and
// the optional JSON summary.

mod summary;
mod table;

pub use summary::HarvestSummary;
pub use table::{write_results, DEFAULT_OUTPUT};
