//! One-time secret sharing.
//!
//! Posts text to the onetimesecret.com share API and returns a single-use
//! link. The region (`us`/`eu`) comes from `config.ini`.
//!
//! Sending a credential transmits its plaintext, password included, to a
//! third party. Only do it on an explicit user request.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::config::{Region, RegionConfig};
use crate::core::constants;
use crate::core::domain::Credential;
use crate::core::store::CredentialStore;
use crate::error::{Result, SenderError};

/// Share endpoint path, relative to the regional base URL.
const SHARE_PATH: &str = "/api/v1/share";

/// Transport options for [`SecretSender`].
#[derive(Debug, Clone)]
pub struct SenderOptions {
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Replaces `https://{region}.onetimesecret.com`, e.g. for a self-hosted
    /// instance.
    pub base_url: Option<String>,
}

impl Default for SenderOptions {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS)),
            base_url: None,
        }
    }
}

/// Expected share response. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct ShareResponse {
    secret_key: Option<String>,
}

/// Client for the one-time secret service.
#[derive(Debug)]
pub struct SecretSender {
    config: RegionConfig,
    client: Client,
    base_url: Option<String>,
}

impl SecretSender {
    /// Create a sender using the region config in `dir`.
    pub fn new(dir: &Path) -> Result<Self> {
        Self::with_options(dir, SenderOptions::default())
    }

    /// Create a sender with explicit transport options.
    ///
    /// # Errors
    ///
    /// Returns a config error if `config.ini` cannot be read or created, or
    /// `SenderError::Network` if the HTTP client cannot be built.
    pub fn with_options(dir: &Path, options: SenderOptions) -> Result<Self> {
        let config = RegionConfig::load_or_init(dir)?;

        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SenderError::Network)?;

        Ok(Self {
            config,
            client,
            base_url: options
                .base_url
                .map(|url| url.trim_end_matches('/').to_string()),
        })
    }

    /// Region used for the next send.
    pub fn region(&self) -> Result<Region> {
        self.config.region()
    }

    /// Persist the region used by this and every later send.
    pub fn set_region(&self, region: Region) -> Result<()> {
        self.config.set_region(region)
    }

    /// Base URL the next send goes to.
    pub fn base_url(&self) -> Result<String> {
        match &self.base_url {
            Some(url) => Ok(url.clone()),
            None => Ok(self.region()?.base_url()),
        }
    }

    /// Share arbitrary text and return the secret link.
    ///
    /// `ttl` defaults to one hour. An empty passphrase is treated as none.
    ///
    /// # Errors
    ///
    /// Returns `SenderError::Network` on transport failure,
    /// `SenderError::Status` on a non-success status, and `SenderError::Api`
    /// when the response lacks a usable `secret_key`.
    pub fn send_secret(
        &self,
        text: &str,
        passphrase: Option<&str>,
        ttl: Option<u64>,
    ) -> Result<String> {
        let region = self.region()?;
        let base = self.base_url()?;
        let ttl = ttl.unwrap_or(constants::DEFAULT_TTL).to_string();

        let passphrase = passphrase.filter(|p| !p.is_empty());
        let mut form = vec![("secret", text), ("ttl", ttl.as_str())];
        if let Some(passphrase) = passphrase {
            form.push(("passphrase", passphrase));
        }

        info!(%region, ttl = %ttl, passphrase = passphrase.is_some(), "sharing secret");

        let response = self
            .client
            .post(format!("{}{}", base, SHARE_PATH))
            .form(&form)
            .send()
            .map_err(SenderError::Network)?;

        let status = response.status();
        let body = response.text().map_err(SenderError::Network)?;
        debug!(status = status.as_u16(), "share response received");

        if !status.is_success() {
            return Err(SenderError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let secret_key = parse_secret_key(&body)?;
        Ok(format!("{}/secret/{}", base, secret_key))
    }

    /// Share one stored credential and return the secret link.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `conn_id` is absent, otherwise the
    /// errors of [`SecretSender::send_secret`].
    pub fn send_credential(
        &self,
        store: &CredentialStore,
        conn_id: &str,
        passphrase: Option<&str>,
        ttl: Option<u64>,
    ) -> Result<String> {
        let credential = store.get(conn_id)?;
        let message = credential_message(conn_id, &credential)?;
        info!(conn_id, kind = %credential.kind(), "sharing credential");
        self.send_secret(&message, passphrase, ttl)
    }
}

/// Human-readable block for a credential: one `key: value` line per field,
/// then the stored JSON.
///
/// ```text
/// user: svc
/// password: hunter2
///
/// Original JSON:
/// "svc": {"kind":"secret","user":"svc","password":"hunter2"}
/// ```
pub fn credential_message(conn_id: &str, credential: &Credential) -> Result<Zeroizing<String>> {
    let mut lines = Zeroizing::new(String::new());
    for (key, value) in credential.fields() {
        let value = Zeroizing::new(value);
        if !lines.is_empty() {
            lines.push('\n');
        }
        lines.push_str(key);
        lines.push_str(": ");
        lines.push_str(&value);
    }
    let json = Zeroizing::new(serde_json::to_string(credential)?);

    Ok(Zeroizing::new(format!(
        "{}\n\nOriginal JSON:\n\"{}\": {}",
        lines.as_str(),
        conn_id,
        json.as_str()
    )))
}

/// Pull a non-empty, URL-safe `secret_key` out of a share response body.
fn parse_secret_key(body: &str) -> Result<String> {
    let response: ShareResponse = serde_json::from_str(body)
        .map_err(|e| SenderError::Api(format!("malformed JSON: {}", e)))?;

    let key = response
        .secret_key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| SenderError::Api("response has no secret_key".to_string()))?;

    if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(SenderError::Api(format!("secret_key '{}' is not alphanumeric", key)).into());
    }

    Ok(key)
}
