// src/harvest/seeds.rs
// =============================================================================
// The directory pages we harvest from.
//
// By default the built-in list below is used. A seeds file can replace it:
//
//   # UK business directories
//   https://www.yell.com
//   https://www.freeindex.co.uk
//
// Blank lines and lines starting with '#' are ignored. Lines that are not
// http(s) URLs are skipped with a warning rather than failing the run.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;
use url::Url;

/// Built-in directory pages, harvested in this order.
pub const DIRECTORY_SEEDS: &[&str] = &[
    "https://www.yell.com",
    "https://www.freeindex.co.uk",
    "https://www.thomsonlocal.com",
    "https://www.hotfrog.co.uk",
    "https://www.scoot.co.uk",
    "https://www.cylex-uk.co.uk",
    "https://uk.kompass.com",
    "https://www.touch-local.com",
    "https://www.find-open.co.uk",
    "https://www.opendi.co.uk",
    "https://www.gov.uk/government/organisations",
    "https://www.bbc.co.uk/news",
    "https://www.britishcouncil.org",
];

/// Owned copy of the built-in list.
pub fn default_seeds() -> Vec<String> {
    DIRECTORY_SEEDS.iter().map(|s| s.to_string()).collect()
}

/// Reads a seeds file from disk.
pub fn load_seeds_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seeds file {}", path.display()))?;
    Ok(parse_seeds(&contents))
}

/// Parses seeds file contents, one URL per line.
pub fn parse_seeds(contents: &str) -> Vec<String> {
    let mut seeds = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match Url::parse(line) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                seeds.push(line.to_string());
            }
            _ => warn!(line = index + 1, value = %line, "skipping invalid seed URL"),
        }
    }

    seeds
}
