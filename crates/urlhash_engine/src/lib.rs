//! urlhash engine: bounded-concurrency fetch and hash pipeline.
mod collector;
mod engine;
mod fetch;
mod hash;
mod pool;
mod types;

pub use collector::ResultCollector;
pub use engine::{EngineConfig, EngineError, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use hash::{content_digest, ContentHasher, Md5Hasher};
pub use pool::TaskRunner;
pub use types::{
    FailureKind, FetchError, Outcome, PoolError, ResultEntry, ERROR_PREFIX, MAX_BODY_BYTES,
};
