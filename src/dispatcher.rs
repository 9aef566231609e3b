/**
 * sqliprobe - Probe Dispatcher
 * Baselines each target, then fans out one task per (target, payload)
 * under a shared semaphore; the result channel closes only after every
 * scheduled unit has finished
 */

use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, warn};

use crate::classifier;
use crate::config::clamp_concurrency;
use crate::errors::ScanError;
use crate::prober::Prober;
use crate::types::{Baseline, ProbeResult, ProbeTarget};

pub struct Dispatcher {
    prober: Arc<Prober>,
    concurrency: usize,
}

impl Dispatcher {
    /// Out-of-range `concurrency` silently resets to the default.
    pub fn new(prober: Arc<Prober>, concurrency: usize) -> Self {
        Self {
            prober,
            concurrency: clamp_concurrency(concurrency),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Run the full (target x payload) matrix.
    ///
    /// Baselines are acquired sequentially per target before any of that
    /// target's payload work is scheduled; a baseline failure skips the
    /// target entirely (returned in the failure list, no results emitted for
    /// it). All payload tasks across all targets share one semaphore. The
    /// channel is sized to the total unit count so producers never block on
    /// send; consumers observe completion as end-of-stream.
    pub async fn run(
        &self,
        targets: Vec<ProbeTarget>,
        payloads: Vec<String>,
    ) -> (mpsc::Receiver<ProbeResult>, Vec<ScanError>) {
        let capacity = (targets.len() * payloads.len()).max(1);
        let (tx, rx) = mpsc::channel(capacity);
        let semaphore = Arc::new(Semaphore::new(self.concurrency));

        let mut baseline_failures = Vec::new();
        let mut handles = Vec::new();

        for target in targets {
            let baseline = match self.prober.baseline(&target).await {
                Ok(baseline) => baseline,
                Err(e) => {
                    warn!("{}", e);
                    baseline_failures.push(e);
                    continue;
                }
            };

            debug!(
                "baseline for {}: {:.2}s, {} bytes",
                target.base_url, baseline.response_time, baseline.body_size
            );

            for payload in &payloads {
                let prober = Arc::clone(&self.prober);
                let semaphore = Arc::clone(&semaphore);
                let tx = tx.clone();
                let target = target.clone();
                let payload = payload.clone();

                handles.push(tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.unwrap();
                    let result = probe_one(&prober, &target, &payload, baseline).await;
                    // Channel capacity covers every unit, so this never blocks.
                    let _ = tx.send(result).await;
                }));
            }
        }

        // Completion barrier: wait for every outstanding unit, then drop the
        // last sender so the receiver sees end-of-stream.
        tokio::spawn(async move {
            for handle in handles {
                let _ = handle.await;
            }
            drop(tx);
        });

        (rx, baseline_failures)
    }
}

async fn probe_one(
    prober: &Prober,
    target: &ProbeTarget,
    payload: &str,
    baseline: Baseline,
) -> ProbeResult {
    let result = prober.probe(target, payload).await;
    classifier::classify(result, baseline)
}
