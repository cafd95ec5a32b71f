// Jamf API HTTP client
//
// Wraps `reqwest::Client` with Jamf-specific URL construction, bearer auth,
// and JSON decoding. The resource endpoints (users, user groups, accounts,
// sites) are implemented as inherent methods in separate files to keep this
// module focused on transport mechanics.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Everything needed to build a [`JamfClient`] except the bearer token.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Jamf Pro server root, e.g. `https://acme.jamfcloud.com`.
    pub instance_url: Url,
    /// Classic API root, e.g. `https://acme.jamfcloud.com/JSSResource`.
    pub base_url: Url,
    pub transport: TransportConfig,
}

/// Resource client for a single Jamf server.
///
/// Holds an injected `reqwest::Client`, a bearer token, and two roots:
/// the Classic API `base_url` (users, user groups, sites) and the
/// `instance_url` (auth and `/api/v1` accounts). Nothing here is mutated
/// after construction, and construction performs no network I/O.
pub struct JamfClient {
    http: reqwest::Client,
    token: SecretString,
    base_url: Url,
    instance_url: Url,
}

impl JamfClient {
    /// Create a client with a pre-built `reqwest::Client`.
    pub fn new(
        http: reqwest::Client,
        token: SecretString,
        base_url: Url,
        instance_url: Url,
    ) -> Self {
        Self {
            http,
            token,
            base_url,
            instance_url,
        }
    }

    /// Build the transport from `config` and create a client.
    pub fn from_config(config: &ClientConfig, token: SecretString) -> Result<Self, Error> {
        let http = config.transport.build_client()?;
        Ok(Self::new(
            http,
            token,
            config.base_url.clone(),
            config.instance_url.clone(),
        ))
    }

    /// The Classic API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The Jamf Pro server root.
    pub fn instance_url(&self) -> &Url {
        &self.instance_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base_url}/{segments...}`.
    pub(crate) fn resource_url(&self, segments: &[&str]) -> Result<Url, Error> {
        join_segments(&self.base_url, segments)
    }

    /// Build `{instance_url}/{segments...}`.
    pub(crate) fn instance_api_url(&self, segments: &[&str]) -> Result<Url, Error> {
        join_segments(&self.instance_url, segments)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send an authenticated GET and decode the JSON body into `T`.
    ///
    /// The status code is not inspected: whatever comes back is decoded,
    /// and a body that doesn't fit `T` surfaces as `Error::Deserialization`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(Error::Transport)?;

        decode_json(resp).await
    }
}

/// Append path segments to `base`, keeping any path prefix it already has.
///
/// `https://host/JSSResource` + `["users", "id", "5"]` gives
/// `https://host/JSSResource/users/id/5`. A trailing slash on `base` does
/// not produce an empty segment.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::InvalidBaseUrl {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Read the whole body, then decode it. Reading to completion releases the
/// connection back to the pool whether or not decoding succeeds.
pub(crate) async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(Error::Transport)?;

    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        status,
        body,
    })
}
