use url::{ParseError, Url};

/// Scheme given to URLs typed without one.
pub const DEFAULT_SCHEME: &str = "http";

/// Prefixes [`DEFAULT_SCHEME`] when `raw` has no scheme of its own.
///
/// Absolute URLs are returned verbatim so the printed URL matches what the
/// user typed. Input that cannot be repaired is also returned verbatim; the
/// request fails later and the user sees why.
pub fn normalize_url(raw: &str) -> String {
    let raw = raw.trim();
    match Url::parse(raw) {
        // `localhost:8080` parses with `localhost` as the scheme.
        Ok(parsed) if parsed.cannot_be_a_base() => with_default_scheme(raw),
        Ok(_) => raw.to_string(),
        Err(ParseError::RelativeUrlWithoutBase) => with_default_scheme(raw),
        Err(_) => raw.to_string(),
    }
}

pub fn normalize_urls<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(|u| normalize_url(u.as_ref())).collect()
}

fn with_default_scheme(raw: &str) -> String {
    let candidate = format!("{DEFAULT_SCHEME}://{}", raw.trim_start_matches('/'));
    match Url::parse(&candidate) {
        Ok(parsed) if parsed.has_host() => candidate,
        _ => raw.to_string(),
    }
}
