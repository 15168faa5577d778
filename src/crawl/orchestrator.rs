// src/crawl/orchestrator.rs
// =============================================================================
// This module runs the whole crawl for one domain.
//
// How it works:
// 1. Try each seed-URL template in order (https://www, https://, http://,
//    http://www) until one fetches successfully
// 2. Extract the seed page's record and discover its in-domain links
// 3. Mark every discovered link visited, then fetch them ALL concurrently
// 4. Wait for every fetch to settle; a failed secondary page contributes an
//    empty record and is otherwise ignored
// 5. Fold everything into one record by set union
//
// Seed attempts are strictly sequential (one candidate in flight at a time);
// only the secondary pages fan out. The visited set is fully populated
// before the fan-out starts, so the concurrent tasks never touch it.
//
// Rust concepts:
// - join_all: Fan-out/fan-in over independent futures, no early return
// - Client::clone(): Cheap (reference-counted), one per task
// =============================================================================

use futures::future;
use reqwest::Client;
use thiserror::Error;

use crate::extract::{extract_page, merge_records, ExtractionRecord};
use crate::fetch::{build_client, fetch_page, FetchError};

use super::links::discover_links;
use super::state::CrawlState;

/// Terminal failures of a whole-domain crawl.
///
/// Individual fetch failures are not in here: a failed seed just advances
/// to the next candidate, and a failed secondary page is absorbed.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Every seed candidate failed
    #[error("No valid site found for {domain}")]
    NoSiteFound { domain: String },

    /// The HTTP client could not be constructed at all
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// The seed-URL templates for a domain, in trial order.
pub fn candidate_urls(domain: &str) -> Vec<String> {
    vec![
        format!("https://www.{}", domain),
        format!("https://{}", domain),
        format!("http://{}", domain),
        format!("http://www.{}", domain),
    ]
}

/// Crawls one domain and returns the aggregated contact record.
///
/// Candidates are tried strictly sequentially; the first one whose seed
/// page fetches successfully wins. Exhausting all four is NoSiteFound.
pub async fn crawl_domain(domain: &str) -> Result<ExtractionRecord, CrawlError> {
    let client = build_client()?;

    for candidate in candidate_urls(domain) {
        match crawl_candidate(&client, &candidate, domain).await {
            Ok(record) => return Ok(record),
            Err(e) => println!("{}, trying next...", e),
        }
    }

    Err(CrawlError::NoSiteFound {
        domain: domain.to_string(),
    })
}

// One seed-candidate attempt, with a fresh CrawlState: the visited set
// restarts per scheme/host combination, so nothing leaks between attempts
async fn crawl_candidate(
    client: &Client,
    seed_url: &str,
    domain: &str,
) -> Result<ExtractionRecord, FetchError> {
    let mut state = CrawlState::new();

    let seed = fetch_page(client, seed_url).await?;

    // Both forms of the seed are visible to dedup (a page often links back
    // to its own post-redirect URL) but only one fetch happened, so only
    // one budget slot is spent
    state.mark_visited(seed_url);
    if seed.final_url != seed_url {
        state.note_alias(&seed.final_url);
    }

    let seed_record = extract_page(&seed.body, domain);

    let links = discover_links(&seed.body, &seed.final_url, domain, &state);
    if links.is_empty() {
        return Ok(seed_record);
    }

    // Pre-populate the visited set so no URL can be dispatched twice, then
    // fan out with no per-batch concurrency limit
    for link in &links {
        state.mark_visited(link);
    }

    println!("Following {} in-domain link(s)...", links.len());

    let tasks = links.into_iter().map(|link| {
        let client = client.clone();
        let domain = domain.to_string();
        async move {
            match fetch_page(&client, &link).await {
                Ok(page) => extract_page(&page.body, &domain),
                // Secondary failures degrade silently to an empty record
                Err(_) => ExtractionRecord::empty(&domain),
            }
        }
    });

    // Join barrier: every fetch settles before aggregation, success or not
    let page_records = future::join_all(tasks).await;

    println!("📄 Crawled {} page(s)", state.fetched_count());

    Ok(merge_records(seed_record, page_records))
}
