// src/collect/domain.rs
// =============================================================================
// Decides whether a URL belongs to the national namespace we are collecting.
//
// A URL matches when its host is the suffix itself or ends with ".<suffix>".
// With the default suffix "uk" that accepts:
//   https://www.gov.uk/...        (host ends with ".uk")
//   https://shop.example.co.uk/   (host ends with ".uk")
// and rejects:
//   https://uk.kompass.com/       ("uk" is a label, not the suffix)
//   https://example.com/
//
// The check must never fail: anything that does not parse as a URL with a
// host is simply "not a match".
// =============================================================================

use url::Url;

/// Suffix used when none is configured.
pub const DEFAULT_SUFFIX: &str = "uk";

/// Host-suffix predicate over URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFilter {
    // Stored lower-case, without leading or trailing dots
    suffix: String,
}

impl DomainFilter {
    /// Creates a filter for the given suffix ("uk", "co.uk", ".fr" ...)
    pub fn new(suffix: &str) -> Self {
        let suffix = suffix.trim().trim_matches('.').to_ascii_lowercase();
        Self { suffix }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns true when the URL's host falls under the suffix.
    pub fn matches(&self, url: &str) -> bool {
        if self.suffix.is_empty() {
            return false;
        }

        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        match parsed.host_str() {
            Some(host) => self.host_matches(host),
            None => false,
        }
    }

    fn host_matches(&self, host: &str) -> bool {
        // A fully-qualified host may carry a trailing root dot
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        if host.is_empty() {
            return false;
        }

        host == self.suffix
            || (host.len() > self.suffix.len()
                && host.ends_with(&self.suffix)
                && host.as_bytes()[host.len() - self.suffix.len() - 1] == b'.')
    }
}

impl Default for DomainFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIX)
    }
}

/// Shorthand for `DomainFilter::default().matches(url)`.
pub fn is_target_domain(url: &str) -> bool {
    DomainFilter::default().matches(url)
}
