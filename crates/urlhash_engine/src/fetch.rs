use std::time::Duration;

use engine_logging::{engine_debug, engine_trace};

use crate::types::{FetchError, MAX_BODY_BYTES};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: MAX_BODY_BYTES,
        }
    }
}

/// One HTTP GET with status and size policy applied.
///
/// Implementations must be safe to call from many tasks at once.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        // A fresh client per call keeps tasks from sharing connection state.
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(status.as_u16()));
        }

        // Only a declared length is checked; chunked bodies are read in full.
        if let Some(declared) = response.content_length() {
            if declared > self.settings.max_bytes {
                engine_debug!("skipping body of {url}: declared {declared} bytes");
                return Err(FetchError::too_large(self.settings.max_bytes, declared));
            }
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        engine_trace!("read {} bytes from {url}", body.len());
        Ok(body.to_vec())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        engine_debug!("request timed out: {err}");
    }
    FetchError::transport(err.to_string())
}
