// src/output/summary.rs
// The end-of-run tally, printed as a table or (with --json) as JSON.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarvestSummary {
    /// Number of seed pages processed
    pub seeds: usize,
    /// Seeds whose fetch failed
    pub failed_seeds: Vec<String>,
    /// Unique URLs written
    pub urls: usize,
    /// Requested URL count; informational only
    pub target: usize,
    /// Path of the CSV file
    pub output: String,
}

impl HarvestSummary {
    pub fn target_reached(&self) -> bool {
        self.urls >= self.target
    }
}
