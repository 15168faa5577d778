// src/extract/page.rs
// =============================================================================
// This module produces one ExtractionRecord from one page's HTML.
//
// Pipeline:
// 1. Strip script/style/noscript blocks so embedded code and CSS cannot
//    pollute the text heuristics
// 2. Parse the remaining markup once; every extractor works off that DOM
// 3. Title from metadata, emails/phones from the recognizers, addresses
//    from the per-element heuristic, industries from the vocabulary
//
// The email filters live here rather than in the recognizer: discarding
// tracking-domain addresses and image-filename false positives is page
// policy, not part of recognizing an email shape.
// =============================================================================

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::address::find_addresses;
use super::entities::{find_emails, find_phones, text_view};
use super::industries::find_industries;
use super::record::ExtractionRecord;

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("script regex is valid")
});
static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?</style>").expect("style regex is valid")
});
static NOSCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<noscript\b[^>]*>.*?</noscript>").expect("noscript regex is valid")
});

static OG_SITE_NAME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:site_name"]"#).expect("og:site_name selector is valid")
});
static APPLICATION_NAME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="application-name"]"#).expect("application-name selector is valid")
});
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));

static IMAGE_EXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(png|jpe?g|gif|webp|bmp|svg)$").expect("image extension regex is valid")
});

// Addresses on these domains come from error-reporting/analytics snippets,
// never from the business itself
const TRACKING_DOMAINS: &[&str] = &["sentry.io"];

/// Extracts the full contact record from one page.
pub fn extract_page(html: &str, domain: &str) -> ExtractionRecord {
    let stripped = strip_inert_markup(html);
    let document = Html::parse_document(&stripped);

    let text = text_view(&document);

    let emails = find_emails(&text)
        .into_iter()
        .filter(|email| keep_email(email))
        .collect();

    ExtractionRecord {
        domain: domain.to_string(),
        title: extract_title(&document),
        emails,
        phones: find_phones(&text).into_iter().collect(),
        addresses: find_addresses(&document).into_iter().collect(),
        industries: find_industries(&document),
    }
}

// Removes script/style/noscript sections from the raw markup. Done on the
// string before parsing so their text never reaches the DOM the heuristics
// walk
fn strip_inert_markup(html: &str) -> String {
    let html = SCRIPT_RE.replace_all(html, "");
    let html = STYLE_RE.replace_all(&html, "");
    NOSCRIPT_RE.replace_all(&html, "").into_owned()
}

// Title preference order: og:site_name, application-name, <title>
fn extract_title(document: &Html) -> String {
    if let Some(name) = meta_content(document, &OG_SITE_NAME_SELECTOR) {
        return name;
    }
    if let Some(name) = meta_content(document, &APPLICATION_NAME_SELECTOR) {
        return name;
    }

    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// First non-empty content attribute for a meta selector.
pub(super) fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .find_map(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

fn keep_email(email: &str) -> bool {
    if TRACKING_DOMAINS.iter().any(|d| email.contains(d)) {
        return false;
    }
    // Malformed markup sometimes glues an image filename onto an address
    // ("logo@example.com.png") - drop those outright
    !IMAGE_EXT_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_prefers_og_site_name() {
        let html = r#"<head>
            <meta property="og:site_name" content="Example Ltd">
            <meta name="application-name" content="Example App">
            <title>Welcome</title>
        </head>"#;
        let record = extract_page(html, "example.com");
        assert_eq!(record.title, "Example Ltd");
    }

    #[test]
    fn test_title_falls_back_to_application_name_then_title() {
        let html = r#"<head>
            <meta name="application-name" content="Example App">
            <title>Welcome</title>
        </head>"#;
        assert_eq!(extract_page(html, "example.com").title, "Example App");

        let html = "<head><title>  Welcome  </title></head>";
        assert_eq!(extract_page(html, "example.com").title, "Welcome");
    }

    #[test]
    fn test_title_empty_when_nothing_present() {
        assert_eq!(extract_page("<p>hi</p>", "example.com").title, "");
    }

    #[test]
    fn test_emails_are_lowercased_and_deduped() {
        let html = "<p>Info@Example.com or info@example.com</p>";
        let record = extract_page(html, "example.com");
        assert_eq!(record.emails.len(), 1);
        assert!(record.emails.contains("info@example.com"));
    }

    #[test]
    fn test_tracking_domain_emails_are_filtered() {
        let html = "<p>info@example.com admin@sentry.io</p>";
        let record = extract_page(html, "example.com");
        assert!(record.emails.contains("info@example.com"));
        assert!(!record.emails.contains("admin@sentry.io"));
    }

    #[test]
    fn test_image_filename_emails_are_filtered() {
        let html = r#"<a href="mailto:logo@example.com.png">x</a>
                      <a href="mailto:real@example.com">y</a>"#;
        let record = extract_page(html, "example.com");
        assert!(record.emails.contains("real@example.com"));
        assert!(!record.emails.contains("logo@example.com.png"));
    }

    #[test]
    fn test_script_and_style_content_is_ignored() {
        let html = r#"
            <script>var a = "ghost@example.com";</script>
            <style>.x { content: "ghost@example.com"; }</style>
            <noscript>ghost@example.com</noscript>
            <p>real@example.com</p>
        "#;
        let record = extract_page(html, "example.com");
        assert_eq!(record.emails.len(), 1);
        assert!(record.emails.contains("real@example.com"));
    }

    #[test]
    fn test_domain_is_carried_through() {
        assert_eq!(extract_page("<p></p>", "example.com").domain, "example.com");
    }

    #[test]
    fn test_full_page_extraction() {
        let html = r#"
            <head>
                <meta property="og:site_name" content="Acme Joinery">
                <meta name="keywords" content="joinery, carpentry">
                <meta name="description" content="Bespoke joinery workshop">
            </head>
            <body>
                <p>10 Mill Lane, York YO1 7LZ</p>
                <a href="mailto:info@acme.example">Email us</a>
                <p>Call +44 1904 555 123</p>
            </body>
        "#;
        let record = extract_page(html, "acme.example");

        assert_eq!(record.title, "Acme Joinery");
        assert!(record.emails.contains("info@acme.example"));
        assert!(record.phones.contains("+44 1904 555 123"));
        assert!(record.addresses.contains("10 Mill Lane, York YO1 7LZ"));
        assert!(record.industries.contains("joinery"));
        assert!(record.industries.contains("carpentry"));
    }
}
