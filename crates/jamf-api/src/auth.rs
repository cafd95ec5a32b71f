// Jamf Pro API authentication
//
// Bearer tokens are minted with HTTP Basic credentials against
// `/api/v1/auth/token`; `/api/v1/auth` reports who a token belongs to.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::client::{JamfClient, decode_json, join_segments};
use crate::error::Error;
use crate::models::{AuthResponse, TokenDetails};

/// Request a bearer token and return the full `{ token, expires }` response.
///
/// `POST {server_instance}/api/v1/auth/token` with Basic credentials.
/// Like every other call in this crate the status code is not inspected;
/// a rejected login surfaces as a decode error carrying the server's body.
pub async fn request_token(
    http: &reqwest::Client,
    server_instance: &Url,
    username: &str,
    password: &SecretString,
) -> Result<AuthResponse, Error> {
    let url = join_segments(server_instance, &["api", "v1", "auth", "token"])?;
    debug!("requesting bearer token at {}", url);

    let resp = http
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .basic_auth(username, Some(password.expose_secret()))
        .send()
        .await
        .map_err(Error::Transport)?;

    let auth: AuthResponse = decode_json(resp).await?;
    debug!(expires = %auth.expires, "bearer token issued");
    Ok(auth)
}

/// Request a bearer token and return only the token.
pub async fn issue_token(
    http: &reqwest::Client,
    server_instance: &Url,
    username: &str,
    password: &SecretString,
) -> Result<SecretString, Error> {
    let auth = request_token(http, server_instance, username, password).await?;
    Ok(SecretString::from(auth.token))
}

impl JamfClient {
    /// Describe the account, accessible sites, and auth type behind the
    /// client's token.
    ///
    /// `GET {instance_url}/api/v1/auth`
    pub async fn token_details(&self) -> Result<TokenDetails, Error> {
        let url = self.instance_api_url(&["api", "v1", "auth"])?;
        self.get_json(url).await
    }
}
