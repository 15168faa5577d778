// src/fetch/http.rs
// =============================================================================
// This module fetches a single web page.
//
// Key functionality:
// - One GET per call, with fixed browser-like headers (many business sites
//   serve a different or empty page to obvious bots)
// - Manual redirect following: reqwest's automatic policy is disabled so we
//   can log every hop and stop at a hard limit
// - A 5 second timeout per request attempt
// - Typed failures (timeout, redirect limit, bad status, transport) so the
//   orchestrator can decide what each one means
//
// There is NO retry at this layer. Retrying by moving on to the next seed
// candidate is the orchestrator's job.
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E> with a custom error enum derived via thiserror
// - loop + explicit hop counter instead of recursion
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, LOCATION, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Maximum number of chained redirects before a fetch gives up.
pub const MAX_REDIRECTS: usize = 5;

/// Timeout applied to every request attempt. Each redirect hop is a new
/// request and gets a fresh 5 seconds.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

// Header values sent with every request. The User-Agent mimics a current
// desktop browser and the Accept header advertises HTML/XML.
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT_VALUE: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "en-GB,en-US;q=0.9,en;q=0.8";

/// Everything that can go wrong while fetching one page.
///
/// thiserror derives Display and Error for us, so these print nicely and
/// still carry structured data for callers that want the status code or URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded FETCH_TIMEOUT
    #[error("Timeout when fetching {url}")]
    Timeout { url: String },

    /// More than MAX_REDIRECTS chained redirects (redirect loop or worse)
    #[error("Too many redirects when fetching {url}")]
    RedirectLimit { url: String },

    /// A response outside 2xx, or a 3xx without a usable Location header
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// DNS failure, connection refused, reset, TLS trouble, ...
    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A successfully fetched page.
///
/// `final_url` is the URL we actually landed on after following redirects.
/// Link discovery resolves relative hrefs against it, not the seed URL.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub final_url: String,
    pub body: String,
}

/// Builds the HTTP client shared by every fetch in a crawl.
///
/// Redirects are deliberately NOT handled by reqwest: fetch_page follows
/// them itself so the hop chain stays observable and bounded.
pub fn build_client() -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

    Client::builder()
        .default_headers(headers)
        .timeout(FETCH_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

/// Fetches one page, following up to MAX_REDIRECTS redirects by hand.
///
/// Returns the full body and the final (post-redirect) URL on success, or a
/// typed FetchError describing the first thing that went wrong.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let mut current = url.to_string();
    let mut hops = 0;

    loop {
        println!("Fetching: {}", current);

        let response = client
            .get(&current)
            .send()
            .await
            .map_err(|e| classify_error(&current, e))?;

        let status = response.status();

        if status.is_redirection() {
            // Pull out the Location header; a 3xx we cannot follow is
            // reported as a plain status failure
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            let location = match location {
                Some(location) => location,
                None => {
                    return Err(FetchError::Status {
                        status: status.as_u16(),
                        url: current,
                    })
                }
            };

            hops += 1;
            if hops > MAX_REDIRECTS {
                return Err(FetchError::RedirectLimit {
                    url: url.to_string(),
                });
            }

            current = match resolve_location(&current, &location) {
                Some(next) => next,
                None => {
                    return Err(FetchError::Status {
                        status: status.as_u16(),
                        url: current,
                    })
                }
            };

            println!("Redirected to: {}", current);
            continue;
        }

        if status.is_success() {
            // Accumulate the whole body; extraction needs the complete page
            let body = response
                .text()
                .await
                .map_err(|e| classify_error(&current, e))?;

            return Ok(FetchedPage {
                final_url: current,
                body,
            });
        }

        return Err(FetchError::Status {
            status: status.as_u16(),
            url: current,
        });
    }
}

// Location headers may be absolute ("https://other/") or relative ("/login");
// relative ones are resolved against the URL that produced the redirect
fn resolve_location(current: &str, location: &str) -> Option<String> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return Some(location.to_string());
    }

    let base = Url::parse(current).ok()?;
    base.join(location).ok().map(|u| u.to_string())
}

// Maps a reqwest error onto our typed variants. Timeouts get their own
// variant; everything else at this level is a transport failure
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}
