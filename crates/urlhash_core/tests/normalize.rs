use pretty_assertions::assert_eq;
use urlhash_core::{normalize_url, normalize_urls};

#[test]
fn missing_scheme_defaults_to_http() {
    assert_eq!(normalize_url("google.com"), "http://google.com");
    assert_eq!(
        normalize_url("example.com/a/b?q=1"),
        "http://example.com/a/b?q=1"
    );
    assert_eq!(normalize_url("//example.com"), "http://example.com");
}

#[test]
fn host_with_port_gets_a_scheme() {
    assert_eq!(normalize_url("localhost:8080"), "http://localhost:8080");
    assert_eq!(normalize_url("127.0.0.1:3000/x"), "http://127.0.0.1:3000/x");
}

#[test]
fn absolute_urls_are_kept_verbatim() {
    assert_eq!(normalize_url("https://google.com"), "https://google.com");
    assert_eq!(normalize_url("http://example.com/x"), "http://example.com/x");
}

#[test]
fn unrepairable_input_is_left_alone() {
    assert_eq!(normalize_url("http://"), "http://");
    assert_eq!(normalize_url(""), "");
}

#[test]
fn normalizes_every_entry_in_order() {
    assert_eq!(
        normalize_urls(["a.com", "https://b.com"]),
        vec!["http://a.com".to_string(), "https://b.com".to_string()]
    );
}
