/**
 * sqliprobe - Classifier
 * Priority-ordered, baseline-relative verdicts: time-based, then
 * error-based, then anomaly-based, else none
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Baseline, Classification, ProbeResult};

/// Minimum multiple of the baseline response time for the time-based signal.
const TIME_MULTIPLIER: f64 = 3.0;

/// Absolute floor in seconds. Prevents false positives on already-slow
/// baselines with small multiplicative drift.
const TIME_FLOOR_SECS: f64 = 5.0;

/// One vendor error signature: a case-insensitive pattern and the database
/// it points at. The label is kept per entry so each signature can be tested
/// independently; only the category survives into the verdict.
pub struct ErrorSignature {
    pub label: &'static str,
    pub pattern: Regex,
}

/// Ordered vendor error signatures. First match wins; later entries are not
/// evaluated.
static ERROR_SIGNATURES: Lazy<Vec<ErrorSignature>> = Lazy::new(|| {
    [
        ("MySQL", r"(?i)mysql_fetch"),
        ("generic", r"(?i)sql syntax"),
        ("MySQL", r"(?i)mysql error"),
        ("SQL Server", r"(?i)unclosed quotation"),
        ("generic", r"(?i)unknown column"),
        ("SQL Server", r"(?i)sql server"),
        ("SQLite", r"(?i)sqlite3"),
        ("PostgreSQL", r"(?i)postgres"),
    ]
    .iter()
    .map(|&(label, pattern)| ErrorSignature {
        label,
        pattern: Regex::new(pattern).unwrap(),
    })
    .collect()
});

/// Label of the first vendor signature matching `body`, if any.
pub fn match_error_signature(body: &str) -> Option<&'static str> {
    ERROR_SIGNATURES
        .iter()
        .find(|sig| sig.pattern.is_match(body))
        .map(|sig| sig.label)
}

/// Attach `baseline` and a verdict to a probed result.
///
/// Pure and deterministic: classification never re-queries the network, and
/// runs strictly after both body and timing are available.
pub fn classify(mut result: ProbeResult, baseline: Baseline) -> ProbeResult {
    result.baseline = baseline;
    result.classification = verdict(&result, baseline);
    result
}

fn verdict(result: &ProbeResult, baseline: Baseline) -> Classification {
    // A failed request carries no usable body or timing signal.
    if !result.success {
        return Classification::None;
    }

    // Time-based first: the costliest signal to fake accidentally, and not
    // confounded by body content.
    if result.response_time >= baseline.response_time * TIME_MULTIPLIER
        && result.response_time >= TIME_FLOOR_SECS
    {
        return Classification::TimeBased;
    }

    // A vendor error string is near-unambiguous evidence.
    if match_error_signature(&result.body).is_some() {
        return Classification::ErrorBased;
    }

    // Size anomaly is the weakest signal and the fallback. A zero-size
    // baseline means no anomaly signal is available at all.
    if baseline.body_size > 0
        && (result.body_size < baseline.body_size / 2
            || result.body_size > baseline.body_size * 2)
    {
        return Classification::AnomalyBased;
    }

    Classification::None
}
