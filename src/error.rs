// src/error.rs
// =============================================================================
// Typed errors for the two fallible edges of a harvest:
// - FetchError: one directory page could not be downloaded. The harvester
//   logs it and moves on; it never ends the run.
// - WriteError: the CSV file could not be written. This one is fatal.
//
// Malformed URLs and HTML never produce an error at all; they just yield
// "no links" (see the collect module).
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} answered HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Classifies a transport error, the same way for request and body reads.
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            FetchError::Timeout { url }
        } else if error.is_connect() {
            FetchError::Connect { url, source: error }
        } else if error.is_body() || error.is_decode() {
            FetchError::Body { url, source: error }
        } else {
            FetchError::Request { url, source: error }
        }
    }
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("could not write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode CSV row for {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}
