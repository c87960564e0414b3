use std::num::NonZeroUsize;

use thiserror::Error;

use crate::normalize::normalize_urls;

/// Flag that sets the worker limit; takes the next argument as its value.
pub const PARALLEL_FLAG: &str = "-parallel";

/// Worker limit when [`PARALLEL_FLAG`] is absent.
pub const DEFAULT_WORKERS: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(workers) => workers,
    None => unreachable!(),
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("You should provide at least one URL")]
    NoUrls,
    #[error("Incorrect \"-parallel\" argument")]
    InvalidParallel,
}

/// A validated request to hash `urls` with at most `workers` in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub workers: NonZeroUsize,
    pub urls: Vec<String>,
}

/// Parses `[-parallel N] URL...` (program name already stripped).
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, ArgsError> {
    let (workers, urls) = match args.split_first() {
        None => return Err(ArgsError::NoUrls),
        Some((first, rest)) if first.as_ref() == PARALLEL_FLAG => {
            let (count, urls) = rest.split_first().ok_or(ArgsError::InvalidParallel)?;
            (parse_workers(count.as_ref())?, urls)
        }
        Some(_) => (DEFAULT_WORKERS, args),
    };

    if urls.is_empty() {
        return Err(ArgsError::NoUrls);
    }

    Ok(Invocation {
        workers,
        urls: normalize_urls(urls),
    })
}

fn parse_workers(raw: &str) -> Result<NonZeroUsize, ArgsError> {
    raw.parse::<NonZeroUsize>()
        .map_err(|_| ArgsError::InvalidParallel)
}
