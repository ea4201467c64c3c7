// src/lib.rs
// =============================================================================
// uk-link-harvester: collect links to sites under a national domain suffix
// from a list of web directories.
//
// Pipeline, one seed at a time (many seeds at once):
//   fetch::DirectoryFetcher  -> page HTML
//   collect::extract_links   -> on-target, normalized links
//   harvest::Harvester       -> merged into one shared set
//   output::write_results    -> sorted url,domain CSV
// =============================================================================

pub mod collect;
pub mod config;
pub mod error;
pub mod fetch;
pub mod harvest;
pub mod output;

pub use collect::{extract_links, is_target_domain, DomainFilter};
pub use config::HarvestConfig;
pub use error::{FetchError, WriteError};
pub use fetch::{DirectoryFetcher, Fetch};
pub use harvest::{Harvester, SeedReport};
pub use output::{write_results, HarvestSummary};
