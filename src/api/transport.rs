//! HTTP transport with retry and error classification
//!
//! Every jpdb endpoint is a JSON POST. `HttpTransport` retries network
//! failures and rate limiting a bounded number of times and fails fast on
//! rejections.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, RETRY_AFTER, USER_AGENT};
use serde_json::Value;

use crate::config::RetrySettings;
use crate::error::{ExportError, ExportResult};
use crate::models::ApiKey;

/// Issues authenticated JSON requests against the API
pub trait Transport {
    /// POST `body` to `endpoint` (relative to the API root) and return the
    /// parsed response body
    fn post(&self, endpoint: &str, body: &Value) -> ExportResult<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, endpoint: &str, body: &Value) -> ExportResult<Value> {
        (**self).post(endpoint, body)
    }
}

/// Bounded retry schedule for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    /// Wait before retrying after a network error
    pub fn network_delay(&self, attempt: u32) -> Duration {
        self.backoff_base * attempt
    }

    /// Wait before retrying after HTTP 429
    pub fn rate_limit_delay(&self, attempt: u32, retry_after: Duration) -> Duration {
        self.backoff_base * attempt + retry_after
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetrySettings::default())
    }
}

impl From<&RetrySettings> for RetryPolicy {
    fn from(settings: &RetrySettings) -> Self {
        Self {
            max_attempts: settings.max_attempts.max(1),
            backoff_base: Duration::from_millis(settings.backoff_base_ms),
        }
    }
}

/// Run `op` under `policy`, sleeping with `sleep` between attempts
///
/// Only network errors and rate limiting are retried. A network error on the
/// last attempt is returned as-is; running out of attempts otherwise gives
/// `RetriesExhausted`.
pub fn with_retries<F, S>(policy: &RetryPolicy, mut sleep: S, mut op: F) -> ExportResult<Value>
where
    F: FnMut() -> ExportResult<Value>,
    S: FnMut(Duration),
{
    for attempt in 1..=policy.max_attempts {
        let err = match op() {
            Ok(body) => return Ok(body),
            Err(err) if err.is_retryable() => err,
            Err(err) => return Err(err),
        };

        match err {
            ExportError::RateLimited { retry_after } => {
                let wait = policy.rate_limit_delay(attempt, retry_after);
                tracing::warn!(
                    attempt,
                    max = policy.max_attempts,
                    wait_secs = wait.as_secs_f64(),
                    "rate limited (429), waiting before retry"
                );
                sleep(wait);
            }
            network => {
                tracing::warn!(attempt, max = policy.max_attempts, error = %network, "network error");
                if attempt >= policy.max_attempts {
                    return Err(network);
                }
                sleep(policy.network_delay(attempt));
            }
        }
    }

    Err(ExportError::RetriesExhausted)
}

/// Map an HTTP status and body to a result
///
/// `retry_after` is the raw `Retry-After` header, in seconds.
pub fn classify_response(
    status: u16,
    retry_after: Option<&str>,
    body: Option<Value>,
) -> ExportResult<Value> {
    let server_message = body
        .as_ref()
        .and_then(|b| b.get("error_message"))
        .and_then(Value::as_str)
        .map(str::to_string);

    match status {
        200 => body.ok_or_else(|| ExportError::Json("response body is not valid JSON".into())),
        429 => {
            let secs = retry_after
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(1);
            Err(ExportError::RateLimited {
                retry_after: Duration::from_secs(secs),
            })
        }
        403 => Err(ExportError::AuthRejected(
            server_message.unwrap_or_else(|| "Forbidden (403) - check API key".into()),
        )),
        400 => Err(ExportError::BadRequest(
            server_message.unwrap_or_else(|| "Bad request (400)".into()),
        )),
        other => Err(ExportError::Http {
            status: other,
            message: server_message,
        }),
    }
}

/// Blocking reqwest transport authenticated with a bearer key
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_key: ApiKey,
    policy: RetryPolicy,
}

impl HttpTransport {
    pub fn new(base_url: &str, api_key: ApiKey, retry: &RetrySettings) -> ExportResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(retry.timeout_secs))
            .build()
            .map_err(|e| ExportError::Config(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            policy: RetryPolicy::from(retry),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn send_once(&self, url: &str, body: &Value) -> ExportResult<Value> {
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, concat!("jpdb-export/", env!("CARGO_PKG_VERSION")))
            .bearer_auth(self.api_key.expose())
            .json(body)
            .send()
            .map_err(|e| ExportError::TransientNetwork(format!("POST {}: {}", url, e)))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.json::<Value>().ok();

        tracing::debug!(%url, status, "response received");
        classify_response(status, retry_after.as_deref(), body)
    }
}

impl Transport for HttpTransport {
    fn post(&self, endpoint: &str, body: &Value) -> ExportResult<Value> {
        let url = self.url(endpoint);
        with_retries(&self.policy, std::thread::sleep, || self.send_once(&url, body))
    }
}
