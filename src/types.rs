use serde::{Deserialize, Serialize};

/// A URL under test, plus the cookie sent verbatim with every request to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeTarget {
    pub base_url: String,

    #[serde(default)]
    pub cookie: Option<String>,
}

impl ProbeTarget {
    pub fn new(base_url: impl Into<String>, cookie: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cookie,
        }
    }
}

/// Reference measurements from the unpayloaded request against a target.
///
/// Computed once per target before any payload probing and never refreshed:
/// a long scan compares every probe against this single snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    /// Wall-clock seconds for the unpayloaded request.
    pub response_time: f64,
    /// Response body size in bytes.
    pub body_size: usize,
}

/// Verdict category for a single probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    TimeBased,
    ErrorBased,
    AnomalyBased,
    #[default]
    None,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::TimeBased => "time-based",
            Classification::ErrorBased => "error-based",
            Classification::AnomalyBased => "anomaly-based",
            Classification::None => "none",
        }
    }

    /// True for any verdict other than `None`.
    pub fn is_finding(&self) -> bool {
        !matches!(self, Classification::None)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one (target, payload) probe.
///
/// Created once per pair and immutable after classification. A failed request
/// still produces a result (success=false, error set) so no probe is ever
/// silently dropped from the stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    pub success: bool,
    /// Full request URL (target + payload).
    pub url: String,
    /// Wall-clock seconds, measured up to the point of failure when the
    /// request did not complete.
    pub response_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Response body text. Not serialized; kept only for classification.
    #[serde(skip)]
    pub body: String,
    pub body_size: usize,
    pub baseline: Baseline,
    pub classification: Classification,
}

impl ProbeResult {
    /// Result for a request that never produced a usable response.
    pub fn failure(url: String, response_time: f64, error: String) -> Self {
        Self {
            success: false,
            url,
            response_time,
            error: Some(error),
            body: String::new(),
            body_size: 0,
            baseline: Baseline::default(),
            classification: Classification::None,
        }
    }

    pub fn completed(url: String, response_time: f64, body: String) -> Self {
        let body_size = body.len();
        Self {
            success: true,
            url,
            response_time,
            error: None,
            body,
            body_size,
            baseline: Baseline::default(),
            classification: Classification::None,
        }
    }
}
