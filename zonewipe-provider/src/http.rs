//! HTTP execution layer shared by all client operations.
//!
//! Handles sending requests, logging, status triage, and bounded retry with
//! backoff. Endpoint-specific concerns (URLs, auth headers, envelope parsing)
//! stay in [`crate::client`]; this module only deals in `RequestBuilder`s and
//! response text.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{CloudflareError, Result};

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Maximum backoff delay between retries.
const MAX_BACKOFF_MS: u64 = 30_000;

/// Performs an HTTP request and returns the status code and response text.
///
/// Unified processing: sending the request, logging, status triage.
///
/// # Returns
/// * `Ok((status_code, response_text))` on success (any status outside the
///   retryable set, including 4xx — envelope parsing decides what they mean)
/// * `Err(CloudflareError::Timeout)` when the request timed out
/// * `Err(CloudflareError::Network)` on transport errors or HTTP 502–504
/// * `Err(CloudflareError::RateLimited)` on HTTP 429, carrying `Retry-After`
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    method: &str,
    path: &str,
) -> Result<(u16, String)> {
    log::debug!("[cloudflare] {method} {path}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            CloudflareError::Timeout {
                detail: e.to_string(),
            }
        } else {
            CloudflareError::Network {
                detail: e.to_string(),
            }
        }
    })?;

    let status_code = response.status().as_u16();
    log::debug!("[cloudflare] Response Status: {status_code}");

    // Extract Retry-After header (before consuming response body)
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    if status_code == 429 {
        let body = response.text().await.unwrap_or_default();
        log::warn!("[cloudflare] Rate limited (HTTP 429), retry_after={retry_after:?}");
        return Err(CloudflareError::RateLimited {
            retry_after,
            raw_message: Some(body),
        });
    }

    // 502/503/504 are transient upstream failures, retryable
    if matches!(status_code, 502..=504) {
        let body = response.text().await.unwrap_or_default();
        log::warn!("[cloudflare] Server error (HTTP {status_code})");
        return Err(CloudflareError::Network {
            detail: format!("HTTP {status_code}: {body}"),
        });
    }

    let response_text = response.text().await.map_err(|e| CloudflareError::Network {
        detail: format!("Failed to read response body: {e}"),
    })?;

    log::debug!(
        "[cloudflare] Response Body: {}",
        truncate_for_log(&response_text)
    );

    Ok((status_code, response_text))
}

/// Performs an HTTP request with bounded retry and backoff.
///
/// Only transient errors (network, timeout, rate limit) are retried; business
/// errors surface immediately. A 429 response with a `Retry-After` header
/// waits that long (capped at 30 s), otherwise the delay follows an
/// exponential schedule: 1 s, 2 s, 4 s, ... capped at 30 s.
///
/// `max_retries` counts retries, not attempts: `max_retries = 5` means up to
/// six requests total.
pub(crate) async fn execute_with_retry(
    request_builder: RequestBuilder,
    method: &str,
    path: &str,
    max_retries: u32,
) -> Result<(u16, String)> {
    if max_retries == 0 {
        return execute_request(request_builder, method, path).await;
    }

    let mut last_error = None;

    for attempt in 0..=max_retries {
        // RequestBuilder is single-use; clone per attempt
        let Some(req) = request_builder.try_clone() else {
            // Unable to clone (body stream), fallback to a single attempt
            log::warn!("[cloudflare] Cannot clone request, disabling retry");
            return execute_request(request_builder, method, path).await;
        };

        match execute_request(req, method, path).await {
            Ok(resp) => return Ok(resp),
            Err(e) if attempt < max_retries && is_retryable(&e) => {
                let delay = retry_delay(&e, attempt);
                log::warn!(
                    "[cloudflare] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                    attempt + 1,
                    max_retries,
                    delay.as_secs_f32(),
                    e
                );
                tokio::time::sleep(delay).await;
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_error.unwrap_or_else(|| CloudflareError::Network {
        detail: "All retries exhausted with no error captured".to_string(),
    }))
}

/// Parses a JSON response body, logging the raw text on failure.
pub(crate) fn parse_json<T>(response_text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("[cloudflare] JSON parse failed: {e}");
        log::error!(
            "[cloudflare] Raw response: {}",
            truncate_for_log(response_text)
        );
        CloudflareError::Parse {
            detail: e.to_string(),
        }
    })
}

/// Determine whether the error can be retried.
///
/// Network errors, timeouts, and rate limiting are transient; business errors
/// (bad credentials, zone does not exist) are not.
fn is_retryable(error: &CloudflareError) -> bool {
    matches!(
        error,
        CloudflareError::Network { .. }
            | CloudflareError::Timeout { .. }
            | CloudflareError::RateLimited { .. }
    )
}

/// Calculate retry delay.
///
/// Uses the server's `Retry-After` value (capped at 30 s) when the error is
/// `RateLimited` and carries one, otherwise exponential backoff.
fn retry_delay(error: &CloudflareError, attempt: u32) -> Duration {
    if let CloudflareError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Calculate exponential backoff delay: 1s, 2s, 4s, 8s, ... capped at 30s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = 1_000_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(MAX_BACKOFF_MS))
}

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for safe logging.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}
