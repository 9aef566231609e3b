/**
 * sqliprobe - Prober and Baseliner
 * One timed GET per (target, payload); the empty-payload probe establishes
 * the baseline every classification heuristic compares against
 */

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::errors::{ScanError, ScanResult};
use crate::http_client::HttpClient;
use crate::types::{Baseline, ProbeResult, ProbeTarget};

pub struct Prober {
    client: Arc<HttpClient>,
    timeout: Duration,
}

impl Prober {
    pub fn new(client: Arc<HttpClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Issue a single GET against `target` with `payload` appended verbatim.
    ///
    /// Never retries. Failures produce a result with success=false and a
    /// human-readable cause; response_time reflects elapsed wall time up to
    /// the failure.
    pub async fn probe(&self, target: &ProbeTarget, payload: &str) -> ProbeResult {
        let url = format!("{}{}", target.base_url, payload);
        let start = Instant::now();

        match self.client.get(&url, target.cookie.as_deref()).await {
            Ok(response) => {
                let elapsed = start.elapsed().as_secs_f64();
                debug!(
                    "probe {} -> {} ({} bytes, {:.2}s)",
                    url,
                    response.status_code,
                    response.body.len(),
                    elapsed
                );
                ProbeResult::completed(url, elapsed, response.body)
            }
            Err(e) => {
                let elapsed = start.elapsed().as_secs_f64();
                let error = ScanError::from_request_error(e, self.timeout);
                debug!("probe {} failed after {:.2}s: {}", url, elapsed, error);
                ProbeResult::failure(url, elapsed, error.to_string())
            }
        }
    }

    /// Establish a target's reference timing and body size with an
    /// unpayloaded request. Failure aborts scanning for the entire target:
    /// no payload is attempted without a valid baseline.
    pub async fn baseline(&self, target: &ProbeTarget) -> ScanResult<Baseline> {
        let result = self.probe(target, "").await;

        if !result.success {
            return Err(ScanError::BaselineFailed {
                url: target.base_url.clone(),
                reason: result
                    .error
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(Baseline {
            response_time: result.response_time,
            body_size: result.body_size,
        })
    }
}
