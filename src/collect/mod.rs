// src/collect/mod.rs
// =============================================================================
// Everything that turns a fetched page into a set of links we want to keep.
//
// Submodules:
// - domain: the host-suffix predicate (is this a .uk site?)
// - links: anchor extraction, resolution and normalization
// =============================================================================

mod domain;
mod links;

pub use domain::{is_target_domain, DomainFilter, DEFAULT_SUFFIX};
pub use links::extract_links;
