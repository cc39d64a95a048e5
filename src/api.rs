//! HTTP client for the finance API (earnings overview, graph, payout requests).
//!
//! Thin typed wrappers: each call is one GET, decoded into a model. Transport
//! failures and non-2xx statuses propagate as `reqwest::Error` unmodified; no
//! retries, no caching. Base URL and auth come from [`crate::config`].

use crate::config;
use crate::models::{FinanceGraph, FinanceOverview, PayoutRequestPage};
use once_cell::sync::Lazy;

#[cfg(not(target_arch = "wasm32"))]
static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("reqwest client")
});

// The wasm client has no timeout knob; the browser owns request lifetimes.
#[cfg(target_arch = "wasm32")]
static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

fn authed(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match config::token() {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

/// GET /earnings/overview?start_date=...
pub async fn get_finance_overview(
    start_date: Option<&str>,
) -> Result<FinanceOverview, reqwest::Error> {
    let url = format!("{}/earnings/overview", config::base_url());
    log::debug!("GET {} start_date={:?}", url, start_date);
    let mut req = CLIENT.get(&url);
    if let Some(date) = start_date {
        req = req.query(&[("start_date", date)]);
    }
    authed(req).send().await?.error_for_status()?.json().await
}

/// GET /earnings/graph?start_date=...
pub async fn get_finance_graph(start_date: Option<&str>) -> Result<FinanceGraph, reqwest::Error> {
    let url = format!("{}/earnings/graph", config::base_url());
    log::debug!("GET {} start_date={:?}", url, start_date);
    let mut req = CLIENT.get(&url);
    if let Some(date) = start_date {
        req = req.query(&[("start_date", date)]);
    }
    authed(req).send().await?.error_for_status()?.json().await
}

/// GET /withdrawal/requests?limit=&offset=&search=
/// An empty `search` is dropped from the query string entirely.
pub async fn get_payout_requests(
    limit: u32,
    offset: u32,
    search: &str,
) -> Result<PayoutRequestPage, reqwest::Error> {
    let url = format!("{}/withdrawal/requests", config::base_url());
    let query = payout_query(limit, offset, search);
    log::debug!("GET {} {:?}", url, query);
    authed(CLIENT.get(&url).query(&query))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Query parameters for the payout-request list. Split out so the
/// search-omission rule is testable without a server.
pub fn payout_query(limit: u32, offset: u32, search: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("limit", limit.to_string()),
        ("offset", offset.to_string()),
    ];
    if !search.is_empty() {
        query.push(("search", search.to_string()));
    }
    query
}
