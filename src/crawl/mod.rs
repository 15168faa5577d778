// src/crawl/mod.rs
// =============================================================================
// This module drives the crawl of one domain.
//
// Submodules:
// - state: The visited-URL set and page budget for one crawl attempt
// - links: Same-domain link discovery on a fetched page
// - orchestrator: Seed-candidate fallback, concurrent page fan-out, and
//   aggregation into the final record
//
// This file (mod.rs) is the module root - it re-exports the public API that
// other parts of our application can use.
// =============================================================================

mod links;
mod orchestrator;
mod state;

// Re-export public items from submodules
pub use orchestrator::{crawl_domain, CrawlError};
pub use state::domain_from_email;
