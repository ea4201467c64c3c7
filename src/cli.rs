// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: a run always harvests the directory list and
// writes one CSV file. Every flag has a default, so running the binary with
// no arguments does the standard .uk harvest into ./uk_sites.csv.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use uk_link_harvester::collect::DEFAULT_SUFFIX;
use uk_link_harvester::config::{HarvestConfig, DEFAULT_TARGET};
use uk_link_harvester::fetch::DEFAULT_TIMEOUT;
use uk_link_harvester::harvest::DEFAULT_CONCURRENCY;
use uk_link_harvester::output::DEFAULT_OUTPUT;

#[derive(Parser, Debug)]
#[command(
    name = "uk-link-harvester",
    version = "0.1.0",
    about = "Harvest .uk links from web directories into a CSV file",
    long_about = "uk-link-harvester fetches a fixed list of web directory pages concurrently, \
                  keeps every linked URL whose host ends in the target suffix, and writes the \
                  deduplicated, sorted result as url,domain rows."
)]
pub struct Cli {
    /// Number of URLs we hope to collect
    ///
    /// Only used for the final report: the whole seed list is always
    /// harvested, whether or not the target is reached.
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub target: usize,

    /// CSV file to write (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// How many directory pages to fetch at the same time
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Domain suffix to keep (e.g. "uk", "co.uk")
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// File with one seed URL per line, replacing the built-in list
    #[arg(long)]
    pub seeds_file: Option<PathBuf>,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Show debug logs (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> HarvestConfig {
        HarvestConfig {
            target: self.target,
            output: self.output.clone(),
            concurrency: self.concurrency,
            timeout: Duration::from_secs(self.timeout),
            suffix: self.suffix.clone(),
            seeds_file: self.seeds_file.clone(),
            json: self.json,
        }
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why default_value_t vs default_value?
//    - default_value_t takes a typed Rust value (usize, u64 ...)
//    - default_value takes a string that clap parses like user input,
//      which is what we want for paths and the suffix
//
// 2. --target is informational
//    - The full seed list is always harvested
//    - The summary only says whether the target was met
// -----------------------------------------------------------------------------
