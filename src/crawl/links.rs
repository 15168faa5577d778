// src/crawl/links.rs
// =============================================================================
// This module finds the same-domain links on a fetched page.
//
// The same-site test is deliberately cheap: the raw href text must contain
// the target domain as a substring. That skips almost every relative link
// and external site in one pass; strict host comparison is not needed for a
// bounded, best-effort sweep.
//
// Rust concepts:
// - HashSet alongside a Vec: Dedup while preserving encounter order
// - let-else: Bail out of one iteration without nesting
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

use super::state::CrawlState;

// Every element carrying an href, not just <a> - some sites put contact
// links on <area> or <link> elements
static HREF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[href]").expect("href selector is valid"));

/// Discovers in-domain, navigable link targets on a page.
///
/// Skips mailto:/tel:/fragment targets and anything already visited,
/// resolves relative hrefs against the page's own URL, dedupes in encounter
/// order, and truncates to the remaining page budget.
pub fn discover_links(html: &str, base_url: &str, domain: &str, state: &CrawlState) -> Vec<String> {
    let document = Html::parse_document(html);

    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Warning: Invalid base URL: {}", base_url);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&HREF_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if href.starts_with("mailto:") || href.starts_with("tel:") || href.starts_with('#') {
            continue;
        }
        // Cheap same-site heuristic: the href text must mention the domain
        if !href.contains(domain) {
            continue;
        }

        let Some(absolute) = resolve_href(&base, href) else {
            continue;
        };
        // Only navigable web pages are worth dispatching
        if !absolute.starts_with("http://") && !absolute.starts_with("https://") {
            continue;
        }
        if state.is_visited(&absolute) {
            continue;
        }

        if seen.insert(absolute.clone()) {
            links.push(absolute);
        }
    }

    links.truncate(state.remaining());
    links
}

// Absolute hrefs pass through as-is; anything else is resolved against the
// page URL (which handles protocol-relative "//host/path" forms too)
fn resolve_href(base: &Url, href: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    base.join(href).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.example.com/";

    fn discover(html: &str, state: &CrawlState) -> Vec<String> {
        discover_links(html, BASE, "example.com", state)
    }

    #[test]
    fn test_keeps_in_domain_links_only() {
        let html = r#"
            <a href="https://www.example.com/contact">Contact</a>
            <a href="https://other.com/about">Elsewhere</a>
        "#;
        let links = discover(html, &CrawlState::new());
        assert_eq!(links, vec!["https://www.example.com/contact".to_string()]);
    }

    #[test]
    fn test_skips_mailto_tel_and_fragments() {
        let html = r##"
            <a href="mailto:info@example.com">Email</a>
            <a href="tel:+441234567890">Call</a>
            <a href="#example.com-section">Jump</a>
        "##;
        assert!(discover(html, &CrawlState::new()).is_empty());
    }

    #[test]
    fn test_resolves_protocol_relative_hrefs() {
        let html = r#"<a href="//www.example.com/about">About</a>"#;
        let links = discover(html, &CrawlState::new());
        assert_eq!(links, vec!["https://www.example.com/about".to_string()]);
    }

    #[test]
    fn test_dedupes_preserving_encounter_order() {
        let html = r#"
            <a href="https://www.example.com/b">B</a>
            <a href="https://www.example.com/a">A</a>
            <a href="https://www.example.com/b">B again</a>
        "#;
        let links = discover(html, &CrawlState::new());
        assert_eq!(
            links,
            vec![
                "https://www.example.com/b".to_string(),
                "https://www.example.com/a".to_string(),
            ]
        );
    }

    #[test]
    fn test_excludes_already_visited() {
        let mut state = CrawlState::new();
        state.mark_visited("https://www.example.com/contact");

        let html = r#"
            <a href="https://www.example.com/contact">Contact</a>
            <a href="https://www.example.com/about">About</a>
        "#;
        let links = discover(html, &state);
        assert_eq!(links, vec!["https://www.example.com/about".to_string()]);
    }

    #[test]
    fn test_truncates_to_remaining_budget() {
        let mut state = CrawlState::new();
        // Burn the budget down to 2 remaining
        for i in 0..(super::super::state::PAGE_BUDGET - 2) {
            state.mark_visited(&format!("https://www.example.com/old{}", i));
        }

        let html = r#"
            <a href="https://www.example.com/1">1</a>
            <a href="https://www.example.com/2">2</a>
            <a href="https://www.example.com/3">3</a>
        "#;
        let links = discover(html, &state);
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_non_anchor_href_elements_count() {
        let html = r#"<area href="https://www.example.com/map">"#;
        let links = discover(html, &CrawlState::new());
        assert_eq!(links, vec!["https://www.example.com/map".to_string()]);
    }
}
