//! Production `HttpClient` backed by a blocking `ureq` agent.
//!
//! # Design
//! Every `get` runs on its own worker thread, so the completion can never fire
//! before `get` returns. The agent is configured with
//! `http_status_as_error(false)`: 4xx/5xx responses come back as data and the
//! loader decides what they mean. Only failures where no response was
//! obtained (DNS, connect, timeout before the status line) become
//! `TransportError`. A body that cannot be read in full, including one over
//! `max_body_bytes`, is delivered as an empty body with the received status.

use std::thread;
use std::time::Duration;

use url::Url;

use crate::http::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse, TransportError};

/// Settings for `UreqHttpClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Upper bound for the whole request, including reading the body.
    /// `None` disables the timeout.
    pub timeout: Option<Duration>,
    /// Largest body read into memory. A longer body is discarded and the
    /// response is delivered with its status and an empty body.
    pub max_body_bytes: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            max_body_bytes: 64 * 1024 * 1024,
        }
    }
}

/// `HttpClient` that performs real HTTP GETs.
#[derive(Clone)]
pub struct UreqHttpClient {
    agent: ureq::Agent,
    max_body_bytes: u64,
}

impl UreqHttpClient {
    pub fn new(config: HttpClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self {
            agent,
            max_body_bytes: config.max_body_bytes,
        }
    }
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new(HttpClientConfig::default())
    }
}

impl HttpClient for UreqHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let agent = self.agent.clone();
        let max_body_bytes = self.max_body_bytes;
        let url = url.clone();
        thread::spawn(move || {
            let result = match execute(&agent, &url, max_body_bytes) {
                Ok(response) => HttpClientResult::Success(response),
                Err(e) => {
                    tracing::debug!(error = %e, %url, "GET failed");
                    HttpClientResult::Failure(TransportError::new(e.to_string()))
                }
            };
            completion(result);
        });
    }
}

/// Only a failure before the status line is an error. Once a status has
/// arrived a response exists, so a failed body read yields an empty body.
fn execute(agent: &ureq::Agent, url: &Url, max_body_bytes: u64) -> Result<HttpResponse, ureq::Error> {
    let mut response = agent.get(url.as_str()).call()?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .with_config()
        .limit(max_body_bytes)
        .read_to_vec()
        .unwrap_or_else(|e| {
            tracing::debug!(error = %e, %url, status, "response body discarded");
            Vec::new()
        });

    Ok(HttpResponse {
        url: url.clone(),
        status,
        headers,
        body,
    })
}
