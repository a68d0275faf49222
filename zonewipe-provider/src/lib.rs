//! # zonewipe-provider
//!
//! Cloudflare API client for zone resolution and deletion.
//!
//! The crate exposes a small surface: load [`Credentials`] from the
//! environment, build a [`CloudflareClient`], then call
//! [`resolve_zone`](CloudflareClient::resolve_zone) and
//! [`delete_zone`](CloudflareClient::delete_zone). Transient failures
//! (timeouts, HTTP 429/502-504) are retried internally with bounded backoff;
//! everything else surfaces as a typed [`CloudflareError`].
//!
//! [`verify_credentials`](CloudflareClient::verify_credentials) is an
//! optional pre-flight check callers may run before the first destructive
//! call: token mode asks Cloudflare whether the token is active, legacy mode
//! answers locally (the verify endpoint is token-only).
//!
//! ## Example
//!
//! ```no_run
//! use zonewipe_provider::{CloudflareClient, Credentials};
//!
//! # async fn run() -> zonewipe_provider::Result<()> {
//! let credentials = Credentials::from_env().ok_or(
//!     zonewipe_provider::CloudflareError::InvalidCredentials { raw_message: None },
//! )?;
//! let client = CloudflareClient::new(credentials)?;
//!
//! if let Some(zone) = client.resolve_zone("example.com").await? {
//!     client.delete_zone(&zone.id).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod credentials;
mod error;
mod http;
mod types;

pub use client::{CF_API_BASE, CloudflareClient, MAX_RETRIES};
pub use credentials::{Credentials, ENV_API_KEY, ENV_API_TOKEN, ENV_EMAIL};
pub use error::{CloudflareError, Result};
pub use types::Zone;
