//! Credential loading for the Cloudflare API.
//!
//! Two authentication modes are supported, mirroring what the API itself
//! accepts:
//!
//! - **Token** — a scoped API token sent as `Authorization: Bearer <token>`.
//!   Preferred.
//! - **Legacy** — the account email plus the Global API Key sent as
//!   `X-Auth-Email` / `X-Auth-Key` headers.
//!
//! Credentials are resolved once at startup from the process environment
//! (a `.env` file in the working directory is honored) and are immutable
//! for the lifetime of the client.

use std::env;

/// Environment variable holding a scoped API token.
pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
/// Environment variable holding the account email (legacy mode).
pub const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
/// Environment variable holding the Global API Key (legacy mode).
pub const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";

/// Cloudflare API credentials, in one of the two supported modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Scoped API token (`Authorization: Bearer`).
    Token { api_token: String },
    /// Account email + Global API Key (`X-Auth-Email` / `X-Auth-Key`).
    Legacy { email: String, api_key: String },
}

impl Credentials {
    /// Loads credentials from the environment, honoring a `.env` file.
    ///
    /// Returns `None` when neither a token nor a complete email/key pair is
    /// present. A token takes precedence when both modes are configured.
    /// Values that are empty or whitespace-only count as absent.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        // Missing .env file is fine; real env vars still apply.
        dotenvy::dotenv().ok();
        Self::from_vars(
            env::var(ENV_API_TOKEN).ok(),
            env::var(ENV_EMAIL).ok(),
            env::var(ENV_API_KEY).ok(),
        )
    }

    /// Selects a credential mode from raw variable values.
    ///
    /// Split out of [`from_env`](Self::from_env) so the precedence rules are
    /// testable without touching the process environment.
    #[must_use]
    pub fn from_vars(
        token: Option<String>,
        email: Option<String>,
        api_key: Option<String>,
    ) -> Option<Self> {
        if let Some(t) = non_empty(token) {
            return Some(Self::Token { api_token: t });
        }
        match (non_empty(email), non_empty(api_key)) {
            (Some(email), Some(api_key)) => Some(Self::Legacy { email, api_key }),
            _ => None,
        }
    }

    /// HTTP headers to attach to every API request for this credential mode.
    #[must_use]
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Token { api_token } => {
                vec![("Authorization", format!("Bearer {api_token}"))]
            }
            Self::Legacy { email, api_key } => vec![
                ("X-Auth-Email", email.clone()),
                ("X-Auth-Key", api_key.clone()),
            ],
        }
    }

    /// Short human-readable mode name, for status lines and logs.
    #[must_use]
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Token { .. } => "api token",
            Self::Legacy { .. } => "email + global key",
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_selected_when_present() {
        let creds = Credentials::from_vars(Some("tok123".into()), None, None);
        assert_eq!(
            creds,
            Some(Credentials::Token {
                api_token: "tok123".into()
            })
        );
    }

    #[test]
    fn token_takes_precedence_over_legacy() {
        let creds = Credentials::from_vars(
            Some("tok123".into()),
            Some("user@example.com".into()),
            Some("key456".into()),
        );
        assert_eq!(
            creds,
            Some(Credentials::Token {
                api_token: "tok123".into()
            })
        );
    }

    #[test]
    fn legacy_selected_when_no_token() {
        let creds =
            Credentials::from_vars(None, Some("user@example.com".into()), Some("key456".into()));
        assert_eq!(
            creds,
            Some(Credentials::Legacy {
                email: "user@example.com".into(),
                api_key: "key456".into(),
            })
        );
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let creds = Credentials::from_vars(
            Some("   ".into()),
            Some("user@example.com".into()),
            Some("key456".into()),
        );
        assert!(matches!(creds, Some(Credentials::Legacy { .. })));
    }

    #[test]
    fn incomplete_legacy_pair_is_missing() {
        assert_eq!(
            Credentials::from_vars(None, Some("user@example.com".into()), None),
            None
        );
        assert_eq!(Credentials::from_vars(None, None, Some("key456".into())), None);
    }

    #[test]
    fn nothing_set_is_missing() {
        assert_eq!(Credentials::from_vars(None, None, None), None);
    }

    #[test]
    fn token_auth_headers() {
        let creds = Credentials::Token {
            api_token: "tok123".into(),
        };
        assert_eq!(
            creds.auth_headers(),
            vec![("Authorization", "Bearer tok123".to_string())]
        );
    }

    #[test]
    fn legacy_auth_headers() {
        let creds = Credentials::Legacy {
            email: "user@example.com".into(),
            api_key: "key456".into(),
        };
        assert_eq!(
            creds.auth_headers(),
            vec![
                ("X-Auth-Email", "user@example.com".to_string()),
                ("X-Auth-Key", "key456".to_string()),
            ]
        );
    }

    #[test]
    fn from_env_reads_process_environment() {
        temp_env::with_vars(
            [
                (ENV_API_TOKEN, Some("envtok")),
                (ENV_EMAIL, None),
                (ENV_API_KEY, None),
            ],
            || {
                assert_eq!(
                    Credentials::from_env(),
                    Some(Credentials::Token {
                        api_token: "envtok".into()
                    })
                );
            },
        );
    }

    #[test]
    fn from_env_missing_everything() {
        temp_env::with_vars(
            [
                (ENV_API_TOKEN, None::<&str>),
                (ENV_EMAIL, None),
                (ENV_API_KEY, None),
            ],
            || {
                assert_eq!(Credentials::from_env(), None);
            },
        );
    }
}
