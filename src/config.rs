use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

/// Per-request timeout. Fixed; not exposed on the CLI. The only bound on an
/// individual probe's lifetime - there is no global abort.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Valid concurrency range for the dispatcher semaphore.
pub const MIN_CONCURRENCY: usize = 1;
pub const MAX_CONCURRENCY: usize = 20;

/// Fallback when the requested concurrency is out of range.
pub const DEFAULT_CONCURRENCY: usize = 5;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub concurrency: usize,
    pub log_path: PathBuf,
}

impl ScanConfig {
    pub fn new(concurrency: usize, log_path: PathBuf) -> Self {
        Self {
            concurrency: clamp_concurrency(concurrency),
            log_path,
        }
    }
}

/// Out-of-range values silently fall back to the default rather than failing
/// the scan.
pub fn clamp_concurrency(requested: usize) -> usize {
    if (MIN_CONCURRENCY..=MAX_CONCURRENCY).contains(&requested) {
        requested
    } else {
        debug!(
            "concurrency {} outside {}-{}, using default {}",
            requested, MIN_CONCURRENCY, MAX_CONCURRENCY, DEFAULT_CONCURRENCY
        );
        DEFAULT_CONCURRENCY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_concurrency_is_kept() {
        assert_eq!(clamp_concurrency(1), 1);
        assert_eq!(clamp_concurrency(5), 5);
        assert_eq!(clamp_concurrency(20), 20);
    }

    #[test]
    fn out_of_range_concurrency_resets_to_default() {
        assert_eq!(clamp_concurrency(0), DEFAULT_CONCURRENCY);
        assert_eq!(clamp_concurrency(21), DEFAULT_CONCURRENCY);
        assert_eq!(clamp_concurrency(50), DEFAULT_CONCURRENCY);
    }
}
