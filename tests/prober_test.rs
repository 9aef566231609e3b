/**
 * sqliprobe - Prober Tests
 * Payload concatenation, cookie forwarding, latency measurement, and
 * baseline acquisition against a mock server
 */

use std::sync::Arc;
use std::time::Duration;

use sqliprobe::errors::ScanError;
use sqliprobe::http_client::HttpClient;
use sqliprobe::prober::Prober;
use sqliprobe::types::ProbeTarget;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const TIMEOUT: Duration = Duration::from_secs(15);

fn prober() -> Prober {
    let client = Arc::new(HttpClient::new(TIMEOUT).unwrap());
    Prober::new(client, TIMEOUT)
}

#[tokio::test]
async fn probe_success_captures_body_and_timing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello world"))
        .mount(&mock_server)
        .await;

    let target = ProbeTarget::new(format!("{}/item?id=1", mock_server.uri()), None);
    let result = prober().probe(&target, "").await;

    assert!(result.success);
    assert!(result.error.is_none());
    assert_eq!(result.body, "hello world");
    assert_eq!(result.body_size, 11);
    assert!(result.response_time > 0.0);
}

#[tokio::test]
async fn payload_is_appended_verbatim_to_the_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let base = format!("{}/search?q=1", mock_server.uri());
    let target = ProbeTarget::new(base.clone(), None);
    let payload = "'OR'1'='1--";
    let result = prober().probe(&target, payload).await;

    // No escaping: the result URL is the exact concatenation.
    assert_eq!(result.url, format!("{}{}", base, payload));
    assert!(result.success);
}

#[tokio::test]
async fn cookie_header_is_forwarded_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/private"))
        .and(header("Cookie", "session=abc123; theme=dark"))
        .respond_with(ResponseTemplate::new(200).set_body_string("authed"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let target = ProbeTarget::new(
        format!("{}/private", mock_server.uri()),
        Some("session=abc123; theme=dark".to_string()),
    );
    let result = prober().probe(&target, "").await;

    assert!(result.success);
    assert_eq!(result.body, "authed");
}

#[tokio::test]
async fn failed_probe_reports_cause_and_elapsed_time() {
    // Nothing listens here; the connection is refused.
    let target = ProbeTarget::new("http://127.0.0.1:1/", None);
    let result = prober().probe(&target, "'--").await;

    assert!(!result.success);
    assert!(result.error.is_some());
    assert_eq!(result.body_size, 0);
    assert!(result.response_time >= 0.0);
}

#[tokio::test]
async fn baseline_reflects_the_unpayloaded_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(250)))
        .mount(&mock_server)
        .await;

    let target = ProbeTarget::new(format!("{}/page", mock_server.uri()), None);
    let baseline = prober().baseline(&target).await.unwrap();

    assert_eq!(baseline.body_size, 250);
    assert!(baseline.response_time > 0.0);
}

#[tokio::test]
async fn baseline_failure_propagates_the_probe_error() {
    let target = ProbeTarget::new("http://127.0.0.1:1/", None);
    let err = prober().baseline(&target).await.unwrap_err();

    match err {
        ScanError::BaselineFailed { url, reason } => {
            assert_eq!(url, "http://127.0.0.1:1/");
            assert!(!reason.is_empty());
        }
        other => panic!("expected BaselineFailed, got {other}"),
    }
}
