// src/extract/entities.rs
// =============================================================================
// This module recognizes email addresses and phone numbers in page text.
//
// The recognizers run over a "text view" of the page: the rendered body text
// plus a trailer of every mailto:/tel: href value found in the markup. Many
// sites only expose contact details inside such links (icons, obfuscated
// text), so scanning visible text alone would miss them.
//
// Rust concepts:
// - LazyLock: Compile the regexes once, on first use
// - Iterators: find_iter() walks every non-overlapping match
// =============================================================================

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[a-z0-9][a-z0-9._%+-]*@[a-z0-9][a-z0-9.-]*\.[a-z]{2,}\b")
        .expect("email regex is valid")
});

// Deliberately loose: anything digit-heavy with phone punctuation. The
// digit-count gate in find_phones rejects the worst false positives
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+(]?\d[\d\s().-]{6,18}\d").expect("phone regex is valid"));

static HREF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[href]").expect("href selector is valid"));

/// Builds the text the recognizers scan.
///
/// The document must already have script/style/noscript content stripped;
/// this function only flattens what is left and appends the contact-link
/// trailer.
pub fn text_view(document: &Html) -> String {
    let mut text: String = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    // Trailer: the value of every mailto:/tel: href, prefix stripped, so
    // off-visible-text contact links are still recognized
    for element in document.select(&HREF_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(rest) = href.strip_prefix("mailto:") {
            text.push('\n');
            text.push_str(rest.trim());
        } else if let Some(rest) = href.strip_prefix("tel:") {
            text.push('\n');
            text.push_str(rest.trim());
        }
    }

    text
}

/// Finds every email-shaped substring, lower-cased.
///
/// No filtering happens here; the page extractor layers its tracking-domain
/// and image-filename filters on top.
pub fn find_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Finds phone-number candidates.
///
/// A candidate only counts if it carries a plausible number of digits
/// (7 to 15, the E.164 ceiling) - this throws away bare years, prices
/// and similar digit runs the loose pattern also matches.
pub fn find_phones(text: &str) -> Vec<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|candidate| {
            let digits = candidate.chars().filter(|c| c.is_ascii_digit()).count();
            (7..=15).contains(&digits)
        })
        .collect()
}
