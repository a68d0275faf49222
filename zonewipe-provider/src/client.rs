//! Cloudflare API client: zone resolution, deletion, credential verification.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::credentials::Credentials;
use crate::error::{CloudflareError, Result};
use crate::http;
use crate::types::{CloudflareResponse, TokenVerification, Zone};

/// Cloudflare API v4 base URL.
pub const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Maximum retries for transient failures (429, 502-504, transport errors).
pub const MAX_RETRIES: u32 = 5;

/// Cloudflare zones API 最大 per_page 是 50
const MAX_PAGE_SIZE_ZONES: u32 = 50;

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Cloudflare REST API v4.
///
/// Credentials are fixed at construction; there is no way to swap them on a
/// live client. Cloning is cheap (the underlying `reqwest::Client` is an
/// `Arc` internally).
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    client: reqwest::Client,
    credentials: Credentials,
}

impl CloudflareClient {
    /// Creates a client with the given credentials.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("zonewipe/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CloudflareError::Network {
                detail: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            credentials,
        })
    }

    /// Credential mode in use, for status display.
    #[must_use]
    pub fn credential_mode(&self) -> &'static str {
        self.credentials.mode()
    }

    /// Looks up the zone whose name exactly matches `domain`.
    ///
    /// The domain is trimmed and lowercased before the lookup. Cloudflare's
    /// `name` filter can return partial matches, so the result list is
    /// re-checked for an exact name match. Returns `Ok(None)` when no zone
    /// with that exact name exists on the account.
    pub async fn resolve_zone(&self, domain: &str) -> Result<Option<Zone>> {
        let domain = domain.trim().to_ascii_lowercase();
        let path = format!(
            "/zones?name={}&per_page={MAX_PAGE_SIZE_ZONES}",
            urlencoding::encode(&domain)
        );

        let zones: Vec<Zone> = self
            .call(self.get(&path), "GET", &path, Some(&domain))
            .await?
            .unwrap_or_default();

        Ok(zones
            .into_iter()
            .find(|z| z.name.eq_ignore_ascii_case(&domain)))
    }

    /// Deletes the zone with the given id.
    pub async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        let path = format!("/zones/{zone_id}");
        self.call::<serde_json::Value>(self.delete(&path), "DELETE", &path, None)
            .await?;
        Ok(())
    }

    /// Best-effort credential check before a run.
    ///
    /// Token mode hits `GET /user/tokens/verify` and reports whether the
    /// token is active. The verify endpoint is token-only, so legacy mode
    /// returns `Ok(true)` without a network call; a bad key surfaces on
    /// first use instead.
    pub async fn verify_credentials(&self) -> Result<bool> {
        if matches!(self.credentials, Credentials::Legacy { .. }) {
            return Ok(true);
        }

        let path = "/user/tokens/verify";
        let verification: Option<TokenVerification> =
            self.call(self.get(path), "GET", path, None).await?;

        Ok(verification.is_some_and(|v| v.status == "active"))
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.with_auth(self.client.get(format!("{CF_API_BASE}{path}")))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.with_auth(self.client.delete(format!("{CF_API_BASE}{path}")))
    }

    fn with_auth(&self, mut builder: RequestBuilder) -> RequestBuilder {
        for (name, value) in self.credentials.auth_headers() {
            builder = builder.header(name, value);
        }
        builder.header("Content-Type", "application/json")
    }

    /// Executes a request with retry, parses the Cloudflare envelope, and
    /// maps envelope errors. Returns the envelope's `result` field.
    async fn call<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &str,
        path: &str,
        domain: Option<&str>,
    ) -> Result<Option<T>> {
        let (status, body) = http::execute_with_retry(builder, method, path, MAX_RETRIES).await?;

        let envelope: CloudflareResponse<T> = match http::parse_json(&body) {
            Ok(env) => env,
            // Non-2xx without a parseable envelope (proxy error pages etc.)
            Err(_) if !(200..300).contains(&status) => {
                return Err(CloudflareError::Api {
                    raw_code: Some(status.to_string()),
                    raw_message: format!("HTTP {status}"),
                });
            }
            Err(e) => return Err(e),
        };

        if !envelope.success {
            let (code, message) = envelope
                .errors
                .and_then(|errors| {
                    errors
                        .first()
                        .map(|e| (Some(e.code.to_string()), e.message.clone()))
                })
                .unwrap_or_else(|| (None, "Unknown error".to_string()));
            let err = map_error(code.as_deref(), message, domain);
            if err.is_expected() {
                log::warn!("[cloudflare] API error: {err}");
            } else {
                log::error!("[cloudflare] API error: {err}");
            }
            return Err(err);
        }

        Ok(envelope.result)
    }
}

/// Cloudflare error code mapping
/// Reference: <https://api.cloudflare.com/#getting-started-responses>
fn map_error(code: Option<&str>, message: String, domain: Option<&str>) -> CloudflareError {
    match code {
        // Authentication error
        // 6003: Invalid request headers
        // 6103: Invalid format for X-Auth-Key header
        // 6111: Invalid format for Authorization header
        // 10000: Authentication error
        Some("6003" | "6103" | "6111" | "10000") => CloudflareError::InvalidCredentials {
            raw_message: Some(message),
        },

        // 9109: Unauthorized to access requested resource
        Some("9109") => CloudflareError::PermissionDenied {
            raw_message: Some(message),
        },

        // Zone/domain name does not exist
        // 7000: No route for that URI
        // 7003: Could not route to /path. perhaps your object identifier is invalid?
        Some("7000" | "7003") => CloudflareError::ZoneNotFound {
            domain: domain.unwrap_or("<unknown>").to_string(),
            raw_message: Some(message),
        },

        // Other error fallback
        _ => CloudflareError::Api {
            raw_code: code.map(ToString::to_string),
            raw_message: message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Auth errors ----

    #[test]
    fn auth_error_6003() {
        let err = map_error(Some("6003"), "bad header".into(), None);
        assert!(matches!(err, CloudflareError::InvalidCredentials { .. }));
    }

    #[test]
    fn auth_error_6103() {
        let err = map_error(Some("6103"), "invalid X-Auth-Key".into(), None);
        assert!(matches!(err, CloudflareError::InvalidCredentials { .. }));
    }

    #[test]
    fn auth_error_6111() {
        let err = map_error(Some("6111"), "invalid Authorization header".into(), None);
        assert!(matches!(err, CloudflareError::InvalidCredentials { .. }));
    }

    #[test]
    fn auth_error_10000() {
        let err = map_error(Some("10000"), "auth error".into(), None);
        assert!(matches!(err, CloudflareError::InvalidCredentials { .. }));
    }

    // ---- Permission denied ----

    #[test]
    fn permission_denied_9109() {
        let err = map_error(Some("9109"), "unauthorized".into(), None);
        assert!(matches!(err, CloudflareError::PermissionDenied { .. }));
    }

    // ---- Zone not found ----

    #[test]
    fn zone_not_found_7000() {
        let err = map_error(Some("7000"), "no route".into(), Some("example.com"));
        assert!(matches!(
            err,
            CloudflareError::ZoneNotFound { domain, .. } if domain == "example.com"
        ));
    }

    #[test]
    fn zone_not_found_7003() {
        let err = map_error(Some("7003"), "could not route".into(), Some("example.com"));
        assert!(matches!(err, CloudflareError::ZoneNotFound { .. }));
    }

    #[test]
    fn zone_not_found_default_context() {
        let err = map_error(Some("7000"), "no route".into(), None);
        assert!(matches!(
            err,
            CloudflareError::ZoneNotFound { domain, .. } if domain == "<unknown>"
        ));
    }

    // ---- Fallback ----

    #[test]
    fn fallback_unknown_code() {
        let err = map_error(Some("99999"), "something unexpected".into(), None);
        assert!(matches!(
            err,
            CloudflareError::Api { raw_code, raw_message }
                if raw_code.as_deref() == Some("99999") && raw_message == "something unexpected"
        ));
    }

    #[test]
    fn fallback_no_code() {
        let err = map_error(None, "no code at all".into(), None);
        assert!(matches!(
            err,
            CloudflareError::Api { raw_code: None, raw_message } if raw_message == "no code at all"
        ));
    }

    // ---- Client construction ----

    #[test]
    fn client_is_constructible() {
        let client = CloudflareClient::new(Credentials::Token {
            api_token: "tok".into(),
        });
        assert!(client.is_ok());
    }

    // ---- verify_credentials ----

    #[tokio::test]
    async fn verify_legacy_credentials_answers_locally() {
        // The verify endpoint is token-only; legacy mode must not hit the network
        let client = CloudflareClient::new(Credentials::Legacy {
            email: "user@example.com".into(),
            api_key: "key".into(),
        })
        .unwrap();
        let result = client.verify_credentials().await;
        assert!(matches!(result, Ok(true)), "unexpected result: {result:?}");
    }

    #[test]
    fn credential_mode_passthrough() {
        let client = CloudflareClient::new(Credentials::Legacy {
            email: "user@example.com".into(),
            api_key: "key".into(),
        })
        .unwrap();
        assert_eq!(client.credential_mode(), "email + global key");
    }
}
