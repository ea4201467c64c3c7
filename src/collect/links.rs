// src/collect/links.rs
// =============================================================================
// This module pulls candidate links out of a directory page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (it never fails; broken markup is repaired)
// - Lets us select every <a href="..."> with a CSS selector
//
// Link rules:
// - "/path"           -> joined onto the page URL
// - "http(s)://..."   -> kept as-is
// - anything else     -> dropped (relative paths, mailto:, javascript:, #top)
//
// Kept links must pass the DomainFilter and are stored without their
// query string or fragment, so "https://a.co.uk/x?utm=1#top" and
// "https://a.co.uk/x" count as the same link. Nothing else is rewritten:
// an absolute href keeps its exact spelling ("https://www.gov.uk" stays
// without a trailing slash, host case and path encoding are untouched).
// =============================================================================

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use super::domain::DomainFilter;

/// Extracts every on-target link from `html`, resolving root-relative
/// references against `base_url`.
///
/// Returns an empty set when nothing qualifies. Never fails.
pub fn extract_links(base_url: &str, html: &str, filter: &DomainFilter) -> HashSet<String> {
    let mut links = HashSet::new();

    let document = Html::parse_document(html);

    // Constant selector, known to be valid
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return links,
    };

    // An unparseable base only disables root-relative resolution
    let base = Url::parse(base_url).ok();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(absolute) = resolve_href(base.as_ref(), href) else {
            continue;
        };

        if !filter.matches(&absolute) {
            continue;
        }

        links.insert(strip_query_and_fragment(&absolute).to_string());
    }

    links
}

// Turns an href into an absolute http(s) URL string, or None if it should
// be skipped. Url is only used to join and to check the scheme.
//
// Examples (base = "https://www.freeindex.co.uk/categories/"):
//   "/profile/acme"              -> https://www.freeindex.co.uk/profile/acme
//   "https://acme.co.uk"         -> https://acme.co.uk
//   "profile/acme"               -> None (plain relative path)
//   "mailto:hi@acme.co.uk"       -> None
//   "#main"                      -> None
fn resolve_href(base: Option<&Url>, href: &str) -> Option<String> {
    let href = href.trim();

    if href.starts_with('/') {
        return base?.join(href).ok().map(|url| url.to_string());
    }

    match Url::parse(href) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(href.to_string()),
        _ => None,
    }
}

// Everything from the first '?' or '#' is dropped
fn strip_query_and_fragment(url: &str) -> &str {
    match url.find(|c: char| c == '?' || c == '#') {
        Some(cut) => &url[..cut],
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uk() -> DomainFilter {
        DomainFilter::default()
    }

    #[test]
    fn test_no_anchors_yields_empty_set() {
        let html = "<html><body><p>No links here</p></body></html>";
        assert!(extract_links("https://www.gov.uk", html, &uk()).is_empty());
    }

    #[test]
    fn test_root_relative_link_is_resolved_and_stripped() {
        let html = r#"<a href="/about?ref=home#team">About</a>"#;
        let links = extract_links("https://example.co.uk", html, &uk());
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://example.co.uk/about"));
    }

    #[test]
    fn test_absolute_links_are_filtered_by_domain() {
        let html = r#"
            <a href="https://www.acme.co.uk/contact">Acme</a>
            <a href="https://example.com/page">Elsewhere</a>
        "#;
        let links = extract_links("https://www.yell.com", html, &uk());
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://www.acme.co.uk/contact"));
    }

    #[test]
    fn test_off_target_base_drops_root_relative_links() {
        let html = r#"<a href="/page">Page</a>"#;
        let links = extract_links("https://example.com", html, &uk());
        assert!(links.is_empty());
    }

    #[test]
    fn test_skips_non_http_references() {
        let html = r##"
            <a href="mailto:hello@acme.co.uk">Mail</a>
            <a href="javascript:void(0)">JS</a>
            <a href="tel:+440000000">Call</a>
            <a href="#top">Top</a>
            <a href="">Empty</a>
            <a href="listing/42">Relative</a>
            <a href="ftp://files.acme.co.uk/pub">FTP</a>
        "##;
        let links = extract_links("https://www.acme.co.uk/dir/", html, &uk());
        assert!(links.is_empty());
    }

    #[test]
    fn test_duplicates_collapse_after_normalization() {
        let html = r#"
            <a href="https://www.acme.co.uk/shop?page=1">1</a>
            <a href="https://www.acme.co.uk/shop?page=2">2</a>
            <a href="https://www.acme.co.uk/shop#reviews">reviews</a>
            <a href="/shop">relative</a>
        "#;
        let links = extract_links("https://www.acme.co.uk", html, &uk());
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://www.acme.co.uk/shop"));
    }

    #[test]
    fn test_malformed_markup_still_yields_links() {
        let html = r#"<div><a href="https://www.bbc.co.uk/news">News<p><a href=/sport>Sport</div"#;
        let links = extract_links("https://www.bbc.co.uk", html, &uk());
        assert!(links.contains("https://www.bbc.co.uk/news"));
        assert!(links.contains("https://www.bbc.co.uk/sport"));
    }

    #[test]
    fn test_invalid_base_keeps_absolute_links_only() {
        let html = r#"
            <a href="/relative">Relative</a>
            <a href="https://www.gov.uk/browse">Browse</a>
        "#;
        let links = extract_links("not a url", html, &uk());
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://www.gov.uk/browse"));
    }

    #[test]
    fn test_absolute_links_keep_their_spelling() {
        let html = r#"
            <a href="https://www.gov.uk">Gov</a>
            <a href="https://Shop.Example.CO.UK/My Page?x=1">Shop</a>
            <a href="https://café.co.uk/x#menu">Cafe</a>
        "#;
        let links = extract_links("https://www.yell.com", html, &uk());
        let expected: HashSet<String> = [
            "https://www.gov.uk",
            "https://Shop.Example.CO.UK/My Page",
            "https://café.co.uk/x",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(links, expected);
    }

    #[test]
    fn test_bare_host_and_trailing_slash_stay_distinct() {
        let html = r#"
            <a href="https://a.co.uk">bare</a>
            <a href="https://a.co.uk/">slash</a>
            <a href="https://a.co.uk?ref=dir">query</a>
        "#;
        let links = extract_links("https://www.yell.com", html, &uk());
        assert_eq!(links.len(), 2);
        assert!(links.contains("https://a.co.uk"));
        assert!(links.contains("https://a.co.uk/"));
    }

    #[test]
    fn test_protocol_relative_link_uses_base_scheme() {
        let html = r#"<a href="//static.example.co.uk/logo">Logo</a>"#;
        let links = extract_links("https://www.example.co.uk", html, &uk());
        assert!(links.contains("https://static.example.co.uk/logo"));
    }
}
