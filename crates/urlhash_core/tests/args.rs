use std::num::NonZeroUsize;

use pretty_assertions::assert_eq;
use urlhash_core::{parse_args, ArgsError, Invocation, DEFAULT_WORKERS};

fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn no_arguments_is_rejected() {
    let err = parse_args::<&str>(&[]).unwrap_err();
    assert_eq!(err, ArgsError::NoUrls);
    assert_eq!(err.to_string(), "You should provide at least one URL");
}

#[test]
fn bare_urls_use_default_workers() {
    let parsed = parse_args(&["google.com"]).unwrap();
    assert_eq!(
        parsed,
        Invocation {
            workers: DEFAULT_WORKERS,
            urls: vec!["http://google.com".to_string()],
        }
    );
    assert_eq!(DEFAULT_WORKERS.get(), 10);
}

#[test]
fn parallel_flag_sets_workers_and_normalizes_urls() {
    let parsed = parse_args(&["-parallel", "5", "https://google.com", "example.com"]).unwrap();
    assert_eq!(parsed.workers, workers(5));
    assert_eq!(
        parsed.urls,
        vec![
            "https://google.com".to_string(),
            "http://example.com".to_string()
        ]
    );
}

#[test]
fn invalid_parallel_values_are_rejected() {
    let cases: &[&[&str]] = &[
        &["-parallel", "foobar"],
        &["-parallel"],
        &["-parallel", "google.com", "apple.com"],
        &["-parallel", "-5", "google.com", "example.com"],
        &["-parallel", "0", "google.com", "example.com"],
    ];
    for args in cases {
        let err = parse_args(*args).unwrap_err();
        assert_eq!(err, ArgsError::InvalidParallel, "args: {args:?}");
        assert_eq!(err.to_string(), "Incorrect \"-parallel\" argument");
    }
}

#[test]
fn parallel_without_urls_is_rejected() {
    assert_eq!(
        parse_args(&["-parallel", "3"]).unwrap_err(),
        ArgsError::NoUrls
    );
}

#[test]
fn order_and_duplicates_are_preserved() {
    let parsed = parse_args(&["b.com", "a.com", "b.com"]).unwrap();
    assert_eq!(
        parsed.urls,
        vec![
            "http://b.com".to_string(),
            "http://a.com".to_string(),
            "http://b.com".to_string()
        ]
    );
}

#[test]
fn accepts_owned_strings() {
    let args: Vec<String> = vec!["-parallel".into(), "1".into(), "http://x.org".into()];
    let parsed = parse_args(&args).unwrap();
    assert_eq!(parsed.workers, workers(1));
    assert_eq!(parsed.urls, vec!["http://x.org".to_string()]);
}
