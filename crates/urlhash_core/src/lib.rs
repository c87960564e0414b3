//! urlhash core: pure command-line parsing and URL normalization.
mod args;
mod normalize;

pub use args::{parse_args, ArgsError, Invocation, DEFAULT_WORKERS, PARALLEL_FLAG};
pub use normalize::{normalize_url, normalize_urls, DEFAULT_SCHEME};
