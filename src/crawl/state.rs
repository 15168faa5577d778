// src/crawl/state.rs
// =============================================================================
// This module owns the mutable state of one crawl attempt.
//
// CrawlState tracks which URLs have already been dispatched and how much of
// the page budget remains. It is created fresh for every seed-candidate
// attempt and passed explicitly to whoever needs it - there is no global
// visited set, so concurrent crawls of different domains cannot interfere.
//
// Rust concepts:
// - HashSet: O(1) membership test for visited URLs
// - &mut self methods: Mutation is explicit at every call site
// =============================================================================

use std::collections::HashSet;

/// Crawl-wide cap on distinct URLs fetched for one domain.
pub const PAGE_BUDGET: usize = 100;

/// The visited-URL set and remaining page budget for one crawl attempt.
///
/// The set and the counter are separate on purpose: a page can be known
/// under two URLs (requested and post-redirect) but only one fetch happened,
/// so only one budget slot is spent.
#[derive(Debug)]
pub struct CrawlState {
    visited: HashSet<String>,
    remaining: usize,
}

impl CrawlState {
    pub fn new() -> Self {
        Self {
            visited: HashSet::new(),
            remaining: PAGE_BUDGET,
        }
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Marks a URL as dispatched for fetching, consuming one budget slot.
    ///
    /// Returns false (and consumes no budget) when the URL was already
    /// visited or the budget is exhausted. The membership test gates the
    /// budget, so no URL is ever counted twice.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        if self.visited.contains(url) || self.remaining == 0 {
            return false;
        }
        self.visited.insert(url.to_string());
        self.remaining -= 1;
        true
    }

    /// Records another URL for a page that was already counted (the
    /// post-redirect form of a dispatched seed). Consumes no budget.
    pub fn note_alias(&mut self, url: &str) {
        self.visited.insert(url.to_string());
    }

    /// How many more pages this crawl may fetch.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// How many pages have actually been dispatched for fetching.
    pub fn fetched_count(&self) -> usize {
        PAGE_BUDGET - self.remaining
    }
}

/// Derives the domain from an email address: the substring after the '@'.
///
/// No well-formedness validation is attempted. Input without an '@' is used
/// as-is, on the assumption the caller passed a bare domain.
pub fn domain_from_email(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or(email)
}
