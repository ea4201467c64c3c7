// src/config.rs
// =============================================================================
// Run settings, resolved once from the command line.
//
// The CLI struct (cli.rs) only describes what the user typed; this is what
// the rest of the program consumes. Keeping them apart lets tests build a
// config without going through clap.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::collect::DEFAULT_SUFFIX;
use crate::fetch::DEFAULT_TIMEOUT;
use crate::harvest::DEFAULT_CONCURRENCY;
use crate::output::DEFAULT_OUTPUT;

/// URL count the run aims for. Reported on, never enforced.
pub const DEFAULT_TARGET: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    pub target: usize,
    pub output: PathBuf,
    pub concurrency: usize,
    pub timeout: Duration,
    pub suffix: String,
    /// When set, replaces the built-in directory list
    pub seeds_file: Option<PathBuf>,
    pub json: bool,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            output: PathBuf::from(DEFAULT_OUTPUT),
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
            suffix: DEFAULT_SUFFIX.to_string(),
            seeds_file: None,
            json: false,
        }
    }
}

impl HarvestConfig {
    /// Rejects settings that would make the run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            bail!("concurrency must be at least 1");
        }
        if self.timeout.is_zero() {
            bail!("timeout must be at least 1 second");
        }
        if self.suffix.trim().trim_matches('.').is_empty() {
            bail!("domain suffix must not be empty");
        }
        Ok(())
    }
}
