// src/fetch/mod.rs
// =============================================================================
// This module handles fetching single pages over HTTP(S).
//
// Submodules:
// - http: Builds the shared client and performs one GET with manual
//   redirect following, browser-like headers, and a hard timeout
//
// This file (mod.rs) is the module root - it re-exports the public API that
// other parts of our application can use.
// =============================================================================

mod http;

// Re-export public items so callers write `fetch::fetch_page()` instead of
// `fetch::http::fetch_page()`
pub use http::{build_client, fetch_page, FetchError, FetchedPage, MAX_REDIRECTS};
