// src/extract/mod.rs
// =============================================================================
// This module turns raw page HTML into structured contact signals.
//
// Submodules:
// - record: The ExtractionRecord type and the merge (set union) over records
// - page: Per-page extraction (title, emails, phones, addresses, industries)
// - entities: Regex recognizers for emails and phone numbers
// - address: Heuristic postal-address detection (UK-biased)
// - industries: Keyword-vocabulary matching against page metadata
//
// This file (mod.rs) is the module root - it re-exports the public API that
// other parts of our application can use.
// =============================================================================

mod address;
mod entities;
mod industries;
mod page;
mod record;

// Re-export public items from submodules
pub use page::extract_page;
pub use record::{merge_records, ExtractionRecord};
