// src/extract/address.rs
// =============================================================================
// This module detects postal addresses in page text.
//
// The heuristic is UK-biased and deliberately conservative. For each
// block/inline text element we test two patterns:
// - a UK postcode (e.g. "NW1 6XE", "SW1A 1AA")
// - a street line (a number followed by words ending in a street-type
//   suffix, e.g. "221B Baker Street")
//
// Both patterns matching = high confidence, keep the whole cleaned text.
// Postcode alone = keep just the postcode. Street alone = too weak, drop it.
//
// Rust concepts:
// - LazyLock: Compile regexes and selectors once
// - match on a tuple: One arm per confidence level
// =============================================================================

use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

// Elements whose text is worth testing. Anything bigger (whole sections,
// body) concatenates too much text and is rejected by the length cap anyway
static BLOCK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p, a, span, address, li, div, h1, h2, h3, h4, h5, h6")
        .expect("block selector is valid")
});

// UK postcode: 1-2 letters, 1-2 digits, optional letter, optional space,
// digit, 2 letters
static POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Z]{1,2}\d{1,2}[A-Z]?\s?\d[A-Z]{2}\b").expect("postcode regex is valid")
});

// Street line: a (possibly lettered) house number, then word tokens, ending
// in a known street-type suffix
static STREET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d+[a-z]?(?:\s+[a-z']+)*\s+(?:Street|St|Road|Rd|Avenue|Ave|Drive|Dr|Lane|Ln|Estate|Close|Court|Crescent|Way|Place|Square|Village)\b",
    )
    .expect("street regex is valid")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));
static COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("comma regex is valid"));

// Longer texts are paragraphs that happen to mention an address, not
// addresses themselves
const MAX_ADDRESS_LEN: usize = 160;

/// Scans every block/inline text element for an address, deduplicated in
/// encounter order.
pub fn find_addresses(document: &Html) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for element in document.select(&BLOCK_SELECTOR) {
        let text = element.text().collect::<Vec<_>>().join(" ");
        let text = text.trim();

        if text.is_empty() || text.len() > MAX_ADDRESS_LEN {
            continue;
        }
        // An '@' means this is an email line, a currency symbol means it is
        // a price - both would otherwise fool the patterns below
        if text.contains('@') {
            continue;
        }
        if text.contains('£') || text.contains('$') || text.contains('€') {
            continue;
        }

        let postcode = POSTCODE_RE.find(text);
        let has_street = STREET_RE.is_match(text);

        let address = match (postcode, has_street) {
            // Postcode and street together: keep the whole cleaned text
            (Some(_), true) => Some(clean_address(text)),
            // Postcode alone is still a solid signal
            (Some(m), false) => Some(m.as_str().to_uppercase()),
            // A street pattern alone is not confident enough to report
            _ => None,
        };

        if let Some(address) = address {
            if seen.insert(address.clone()) {
                found.push(address);
            }
        }
    }

    found
}

// Collapses whitespace runs and normalizes comma spacing so the same
// address rendered with different markup dedupes to one entry
fn clean_address(text: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(text, " ");
    COMMA_RE.replace_all(&collapsed, ", ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses_in(html: &str) -> Vec<String> {
        find_addresses(&Html::parse_document(html))
    }

    #[test]
    fn test_full_address_with_postcode_and_street() {
        let found = addresses_in("<p>221B Baker Street, London NW1 6XE</p>");
        assert_eq!(found, vec!["221B Baker Street, London NW1 6XE".to_string()]);
    }

    #[test]
    fn test_postcode_alone_is_kept_uppercased() {
        let found = addresses_in("<span>sw1a 1aa</span>");
        assert_eq!(found, vec!["SW1A 1AA".to_string()]);
    }

    #[test]
    fn test_street_alone_is_discarded() {
        let found = addresses_in("<p>Visit us at 12 High Street</p>");
        assert!(found.is_empty());
    }

    #[test]
    fn test_currency_symbol_disqualifies() {
        let found = addresses_in("<p>Only £19.99 at 12 High Street, Leeds LS1 4AP</p>");
        assert!(found.is_empty());
    }

    #[test]
    fn test_email_like_text_disqualifies() {
        let found = addresses_in("<p>Write to office@example.com, 10 Mill Lane, York YO1 7LZ</p>");
        assert!(found.is_empty());
    }

    #[test]
    fn test_overlong_text_disqualified() {
        let padding = "We have been proudly serving the local community with ".repeat(4);
        let html = format!("<p>{} 10 Mill Lane, York YO1 7LZ</p>", padding);
        assert!(addresses_in(&html).is_empty());
    }

    #[test]
    fn test_whitespace_and_comma_normalization() {
        let found = addresses_in("<p>10 Mill   Lane ,   York YO1 7LZ</p>");
        assert_eq!(found, vec!["10 Mill Lane, York YO1 7LZ".to_string()]);
    }

    #[test]
    fn test_duplicate_elements_dedupe() {
        let html = "<p>10 Mill Lane, York YO1 7LZ</p><div>10 Mill Lane, York YO1 7LZ</div>";
        assert_eq!(addresses_in(html).len(), 1);
    }
}
