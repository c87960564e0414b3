use std::io;

use engine_logging::engine_debug;
use thiserror::Error;
use tokio::runtime::{Builder, Runtime};

use crate::fetch::FetchSettings;
use crate::pool::TaskRunner;
use crate::types::{PoolError, ResultEntry};

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    /// Runtime worker threads; `None` lets tokio pick one per core.
    pub runtime_threads: Option<usize>,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Blocking entry point for synchronous callers. Owns its tokio runtime.
///
/// Must not be used from inside another tokio runtime.
pub struct EngineHandle {
    runtime: Runtime,
    runner: TaskRunner,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let runner = TaskRunner::with_settings(config.fetch.clone());
        Self::with_runner(&config, runner)
    }

    pub fn with_runner(config: &EngineConfig, runner: TaskRunner) -> Result<Self, EngineError> {
        let mut builder = Builder::new_multi_thread();
        builder.enable_all().thread_name("urlhash-worker");
        if let Some(threads) = config.runtime_threads {
            builder.worker_threads(threads.max(1));
        }
        let runtime = builder.build()?;
        engine_debug!("engine runtime started");
        Ok(Self { runtime, runner })
    }

    pub fn run(
        &self,
        urls: Vec<String>,
        max_workers: usize,
    ) -> Result<Vec<ResultEntry>, EngineError> {
        Ok(self.runtime.block_on(self.runner.run(urls, max_workers))?)
    }
}
