//! API client query construction and config handling (no server required).

use finboard_frontend::{api, config};
use pretty_assertions::assert_eq;

#[test]
fn payout_query_omits_empty_search() {
    let query = api::payout_query(20, 0, "");
    assert_eq!(
        query,
        vec![("limit", "20".to_string()), ("offset", "0".to_string())]
    );
}

#[test]
fn payout_query_includes_non_empty_search() {
    let query = api::payout_query(20, 0, "alice");
    assert_eq!(
        query,
        vec![
            ("limit", "20".to_string()),
            ("offset", "0".to_string()),
            ("search", "alice".to_string()),
        ]
    );
}

#[test]
fn payout_query_stringifies_limit_and_offset() {
    let query = api::payout_query(10, 30, "");
    assert_eq!(
        query,
        vec![("limit", "10".to_string()), ("offset", "30".to_string())]
    );
}

// Config is a process-wide static; keep all mutation in one test so parallel
// test threads never race on it.
#[test]
fn base_url_trailing_slash_is_stripped() {
    config::set_base_url("https://api.example.com/v1/");
    assert_eq!(config::base_url(), "https://api.example.com/v1");

    config::set_base_url("https://api.example.com/v1");
    assert_eq!(config::base_url(), "https://api.example.com/v1");

    config::set_token(Some("secret"));
    assert_eq!(config::token().as_deref(), Some("secret"));
    config::set_token(None);
    assert_eq!(config::token(), None);
}
