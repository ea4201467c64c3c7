// src/fetch/mod.rs
// =============================================================================
// Network side of the harvester.
//
// Submodules:
// - directory: the Fetch trait and the reqwest-backed DirectoryFetcher
// - identity: the pool of User-Agent strings
// =============================================================================

mod directory;
mod identity;

pub use directory::{DirectoryFetcher, Fetch, DEFAULT_TIMEOUT};
pub use identity::{random_user_agent, USER_AGENTS};
