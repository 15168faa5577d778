// src/extract/industries.rs
// =============================================================================
// This module infers industry tags from page metadata.
//
// The vocabulary lives in data/industries.txt (embedded at compile time) so
// the list can grow without touching the matching code. An entry matches if:
// - it equals a token of the keywords meta tag (comma-split, trimmed), or
// - it appears as a substring of the description text
//   (description meta, falling back to og:description)
//
// Both tests are case-insensitive; the result is a set, so an entry hit by
// both sources shows up once.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::page::meta_content;

// Parsed once on first use. Lines are lower-cased and trimmed on the right
// only: a few entries keep a leading space (" ai") so a short keyword cannot
// match inside longer words during the substring test
static VOCABULARY: LazyLock<Vec<String>> = LazyLock::new(|| {
    include_str!("../../data/industries.txt")
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| line.trim_end().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
});

static KEYWORDS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="keywords"], meta[name="Keywords"]"#)
        .expect("keywords selector is valid")
});
static DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("description selector is valid")
});
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:description"]"#).expect("og:description selector is valid")
});

/// Matches the industry vocabulary against the page's metadata.
pub fn find_industries(document: &Html) -> BTreeSet<String> {
    let raw_keywords = meta_content(document, &KEYWORDS_SELECTOR)
        .unwrap_or_default()
        .to_lowercase();
    let keywords: Vec<&str> = raw_keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .collect();

    let description = meta_content(document, &DESCRIPTION_SELECTOR)
        .or_else(|| meta_content(document, &OG_DESCRIPTION_SELECTOR))
        .unwrap_or_default()
        .to_lowercase();

    let mut matched = BTreeSet::new();

    for entry in VOCABULARY.iter() {
        let keyword_hit = keywords.iter().any(|k| *k == entry.as_str());
        let description_hit = !description.is_empty() && description.contains(entry.as_str());

        if keyword_hit || description_hit {
            // Report the clean form even for entries stored with padding
            matched.insert(entry.trim().to_string());
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn industries_in(html: &str) -> BTreeSet<String> {
        find_industries(&Html::parse_document(html))
    }

    #[test]
    fn test_keywords_meta_matches_tokens() {
        let html = r#"<head><meta name="keywords" content="Joinery, Bespoke Furniture, construction"></head>"#;
        let found = industries_in(html);
        assert!(found.contains("joinery"));
        assert!(found.contains("construction"));
        // "Bespoke Furniture" is a token but no vocabulary entry equals it
        assert!(!found.contains("bespoke furniture"));
    }

    #[test]
    fn test_description_matches_substrings() {
        let html = r#"<head><meta name="description" content="A family-run HOSPITALITY business"></head>"#;
        let found = industries_in(html);
        assert!(found.contains("hospitality"));
    }

    #[test]
    fn test_og_description_is_a_fallback() {
        let html =
            r#"<head><meta property="og:description" content="healthcare for everyone"></head>"#;
        assert!(industries_in(html).contains("healthcare"));
    }

    #[test]
    fn test_hit_in_both_sources_appears_once() {
        let html = r#"<head>
            <meta name="keywords" content="joinery">
            <meta name="description" content="Quality joinery since 1987">
        </head>"#;
        let found = industries_in(html);
        assert_eq!(found.iter().filter(|i| *i == "joinery").count(), 1);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = r#"<head><meta name="keywords" content="retail, finance"></head>"#;
        assert_eq!(industries_in(html), industries_in(html));
    }

    #[test]
    fn test_no_metadata_means_no_industries() {
        assert!(industries_in("<p>construction everywhere</p>").is_empty());
    }
}
