use std::fmt;

use thiserror::Error;

/// Tag shared by every failure message, used to tell errors apart from digests.
pub const ERROR_PREFIX: &str = "MyHTTP_Error";

/// Largest `Content-Length` accepted before the body is skipped.
pub const MAX_BODY_BYTES: u64 = 10 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection, DNS, timeout or body-read failure.
    Transport,
    HttpStatus(u16),
    TooLarge { max_bytes: u64, declared: u64 },
}

/// A classified fetch failure. `Display` yields the text recorded as the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", ERROR_PREFIX, .message)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.into(),
        }
    }

    pub fn http_status(code: u16) -> Self {
        Self {
            kind: FailureKind::HttpStatus(code),
            message: format!("Status code {code}"),
        }
    }

    pub fn too_large(max_bytes: u64, declared: u64) -> Self {
        Self {
            kind: FailureKind::TooLarge {
                max_bytes,
                declared,
            },
            message: format!("Response body above {max_bytes} bytes threshold: {declared}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Digest or error message, exactly as printed.
    pub fn text(&self) -> &str {
        match self {
            Outcome::Success(digest) => digest,
            Outcome::Failure(message) => message,
        }
    }
}

impl From<Result<String, FetchError>> for Outcome {
    fn from(result: Result<String, FetchError>) -> Self {
        match result {
            Ok(digest) => Outcome::Success(digest),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultEntry {
    pub url: String,
    pub outcome: Outcome,
}

impl ResultEntry {
    pub fn new(url: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            url: url.into(),
            outcome,
        }
    }
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.url, self.outcome)
    }
}

/// Errors raised by the pool itself, never by an individual task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("worker limit must be at least 1, got {0}")]
    InvalidWorkerLimit(usize),
}
