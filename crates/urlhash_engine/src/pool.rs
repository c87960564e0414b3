use std::collections::HashMap;
use std::sync::Arc;

use engine_logging::{engine_debug, engine_error, engine_info};
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};

use crate::collector::ResultCollector;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::hash::{ContentHasher, Md5Hasher};
use crate::types::{Outcome, PoolError, ResultEntry, ERROR_PREFIX};

/// Runs fetch-then-hash for many URLs with at most `max_workers` in flight.
#[derive(Clone)]
pub struct TaskRunner {
    fetcher: Arc<dyn Fetcher>,
    hasher: Arc<dyn ContentHasher>,
}

impl TaskRunner {
    pub fn new(fetcher: Arc<dyn Fetcher>, hasher: Arc<dyn ContentHasher>) -> Self {
        Self { fetcher, hasher }
    }

    /// Production wiring: reqwest for the network, MD5 for the digest.
    pub fn with_settings(settings: FetchSettings) -> Self {
        Self::new(
            Arc::new(ReqwestFetcher::new(settings)),
            Arc::new(Md5Hasher),
        )
    }

    /// Returns one entry per input URL, in completion order.
    ///
    /// Per-URL failures become [`Outcome::Failure`] entries; the only error is
    /// a zero worker limit, rejected before any request is issued.
    pub async fn run(
        &self,
        urls: Vec<String>,
        max_workers: usize,
    ) -> Result<Vec<ResultEntry>, PoolError> {
        if max_workers == 0 {
            return Err(PoolError::InvalidWorkerLimit(max_workers));
        }

        let total = urls.len();
        let gate = Arc::new(Semaphore::new(max_workers.min(Semaphore::MAX_PERMITS)));
        let collector = Arc::new(ResultCollector::with_capacity(total));
        let mut tasks = JoinSet::new();
        let mut in_flight: HashMap<task::Id, String> = HashMap::with_capacity(total);

        for url in urls {
            // The gate is never closed, so acquisition only fails if that changes.
            let permit = match Arc::clone(&gate).acquire_owned().await {
                Ok(permit) => permit,
                Err(err) => {
                    engine_error!("concurrency gate unavailable for {url}: {err}");
                    collector.add(ResultEntry::new(
                        url,
                        Outcome::Failure(format!("{ERROR_PREFIX}: {err}")),
                    ));
                    continue;
                }
            };

            let fetcher = Arc::clone(&self.fetcher);
            let hasher = Arc::clone(&self.hasher);
            let collector = Arc::clone(&collector);
            let task_url = url.clone();
            let handle = tasks.spawn(async move {
                // Held until the task ends or unwinds.
                let _permit = permit;
                let entry = process(fetcher.as_ref(), hasher.as_ref(), task_url).await;
                collector.add(entry);
            });
            engine_debug!("admitted {url}");
            in_flight.insert(handle.id(), url);
        }

        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((id, ())) => {
                    in_flight.remove(&id);
                }
                Err(err) => {
                    let Some(url) = in_flight.remove(&err.id()) else {
                        continue;
                    };
                    engine_error!("worker for {url} died: {err}");
                    collector.add(ResultEntry::new(
                        url,
                        Outcome::Failure(format!("{ERROR_PREFIX}: worker panicked")),
                    ));
                }
            }
        }

        let entries = collector.drain();
        let succeeded = entries.iter().filter(|e| e.outcome.is_success()).count();
        engine_info!(
            "run finished: {} urls, {} hashed, {} failed, {} workers",
            total,
            succeeded,
            entries.len() - succeeded,
            max_workers
        );
        Ok(entries)
    }
}

async fn process(fetcher: &dyn Fetcher, hasher: &dyn ContentHasher, url: String) -> ResultEntry {
    let outcome = Outcome::from(fetcher.fetch(&url).await.map(|body| hasher.digest(&body)));
    match &outcome {
        Outcome::Success(digest) => engine_debug!("{url} hashed to {digest}"),
        Outcome::Failure(message) => engine_info!("{url} failed: {message}"),
    }
    ResultEntry::new(url, outcome)
}
