// src/extract/record.rs
// =============================================================================
// This module defines the extraction record and how records combine.
//
// One ExtractionRecord is produced per fetched page; the same shape is also
// the final, domain-level result. The four collection fields are BTreeSets:
// deduplication is structural (you cannot hold a duplicate) and iteration
// order is stable, which keeps JSON output deterministic.
//
// Rust concepts:
// - BTreeSet: An ordered set; extend() is exactly the set union we need
// - #[derive(Serialize, Deserialize)]: JSON conversion via serde
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The structured bundle of contact signals for one page (or, after
/// merging, for a whole domain).
///
/// Callers must treat the four collections as sets: no duplicates, no
/// meaningful order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// The domain this record was extracted for
    pub domain: String,
    /// Site title (og:site_name, application-name, or <title>; may be empty)
    pub title: String,
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
    pub addresses: BTreeSet<String>,
    pub industries: BTreeSet<String>,
}

impl ExtractionRecord {
    /// An empty record for a domain.
    ///
    /// Used as the contribution of a secondary page whose fetch failed -
    /// merging it changes nothing.
    pub fn empty(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            title: String::new(),
            emails: BTreeSet::new(),
            phones: BTreeSet::new(),
            addresses: BTreeSet::new(),
            industries: BTreeSet::new(),
        }
    }
}

/// Merges per-page records into one domain-level record.
///
/// Field-wise set union over the four collections. The title and domain come
/// only from the seed record; whatever the secondary pages claim about
/// themselves is ignored.
pub fn merge_records(seed: ExtractionRecord, pages: Vec<ExtractionRecord>) -> ExtractionRecord {
    let mut merged = seed;

    for page in pages {
        merged.emails.extend(page.emails);
        merged.phones.extend(page.phones);
        merged.addresses.extend(page.addresses);
        merged.industries.extend(page.industries);
    }

    merged
}
