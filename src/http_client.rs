/**
 * sqliprobe - HTTP Client
 * Thin reqwest wrapper for single-shot GET probes. No retry: a failed
 * attempt is final for its (target, payload) pair, and a retry would
 * distort the timing signal the classifier depends on.
 */

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Browser User-Agent so probes are not trivially filtered as a bot.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Maximum response body size (10MB) to prevent memory exhaustion.
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

const POOL_IDLE_PER_HOST: usize = 32;
const POOL_IDLE_TIMEOUT: u64 = 90;

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(POOL_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT))
            .tcp_keepalive(Duration::from_secs(60))
            .tcp_nodelay(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Single GET. The cookie header is attached verbatim when present.
    ///
    /// The URL arrives with the payload already concatenated and is sent
    /// as-is; payloads carry intentional SQL metacharacters that must reach
    /// the server unescaped.
    pub async fn get(
        &self,
        url: &str,
        cookie: Option<&str>,
    ) -> Result<HttpResponse, reqwest::Error> {
        let mut request = self.client.get(url);
        if let Some(cookie) = cookie.filter(|c| !c.is_empty()) {
            request = request.header("Cookie", cookie);
        }

        let response = request.send().await?;
        let status_code = response.status().as_u16();

        let body_bytes = response.bytes().await?;
        let body = if body_bytes.len() > MAX_BODY_SIZE {
            String::from_utf8_lossy(&body_bytes[..MAX_BODY_SIZE]).to_string()
        } else {
            String::from_utf8_lossy(&body_bytes).to_string()
        };

        Ok(HttpResponse { status_code, body })
    }
}
