// src/output/table.rs
// =============================================================================
// Writes the harvested links to a CSV file:
//
//   url,domain
//   https://www.acme.co.uk/contact,www.acme.co.uk
//   https://www.gov.uk/browse,www.gov.uk
//
// Rows are sorted by URL so two runs over the same pages produce the same
// file. Any existing file at the path is overwritten.
// =============================================================================

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use tracing::info;
use url::Url;

use crate::error::WriteError;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "uk_sites.csv";

/// Writes `urls` to `path` as a sorted `url,domain` table.
pub fn write_results(urls: &HashSet<String>, path: &Path) -> Result<(), WriteError> {
    let shown = path.display().to_string();

    let file = File::create(path).map_err(|source| WriteError::Io {
        path: shown.clone(),
        source,
    })?;
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    writer
        .write_record(["url", "domain"])
        .map_err(|source| csv_error(&shown, source))?;

    for (url, domain) in sorted_rows(urls) {
        writer
            .write_record([url, domain.as_str()])
            .map_err(|source| csv_error(&shown, source))?;
    }

    writer.flush().map_err(|source| WriteError::Io {
        path: shown.clone(),
        source,
    })?;

    info!(path = %shown, rows = urls.len(), "results written");
    Ok(())
}

// (url, host) pairs in ascending URL order
fn sorted_rows(urls: &HashSet<String>) -> Vec<(&str, String)> {
    let mut sorted: Vec<&str> = urls.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    sorted
        .into_iter()
        .map(|url| (url, host_of(url)))
        .collect()
}

fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

fn csv_error(path: &str, source: csv::Error) -> WriteError {
    WriteError::Csv {
        path: path.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(urls: &[&str]) -> HashSet<String> {
        urls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rows_are_sorted_with_hosts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let urls = set(&[
            "https://www.gov.uk/browse",
            "https://www.acme.co.uk/contact",
            "https://bbc.co.uk:8080/news",
        ]);

        write_results(&urls, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "url,domain\n\
             https://bbc.co.uk:8080/news,bbc.co.uk\n\
             https://www.acme.co.uk/contact,www.acme.co.uk\n\
             https://www.gov.uk/browse,www.gov.uk\n"
        );
    }

    #[test]
    fn test_empty_set_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_results(&HashSet::new(), &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "url,domain\n");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale,content\nmore,stale\nrows,here\n").unwrap();

        write_results(&set(&["https://www.gov.uk/"]), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "url,domain\nhttps://www.gov.uk/,www.gov.uk\n");
    }

    #[test]
    fn test_urls_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_results(&set(&["https://www.acme.co.uk/a,b"]), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"https://www.acme.co.uk/a,b\",www.acme.co.uk"));
    }

    #[test]
    fn test_write_is_logged_with_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logged.csv");
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            write_results(&set(&["https://www.gov.uk/"]), &path)
        });

        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");

        let err = write_results(&set(&["https://www.gov.uk/"]), &path).unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }), "got {err:?}");
    }
}
