//! Shared configuration for jamfctl.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `jamf_api::ClientConfig`. The CLI adds
//! `GlobalOpts`-aware overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use jamf_api::{ClientConfig, TlsMode, TransportConfig};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Keyring service name for stored tokens and passwords.
pub const KEYRING_SERVICE: &str = "jamfctl";

/// Environment variable consulted for the password when a profile doesn't
/// name its own.
pub const PASSWORD_ENV: &str = "JAMF_PASSWORD";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named Jamf server profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named Jamf server profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Jamf Pro server root (e.g., "https://acme.jamfcloud.com").
    pub instance: String,

    /// Classic API root. Defaults to `{instance}/JSSResource`.
    pub base_url: Option<String>,

    /// Username for token issuance.
    pub username: Option<String>,

    /// Plaintext password; keyring or env var take precedence.
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Plaintext pre-issued bearer token.
    pub token: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

/// How the CLI obtains a bearer token for a profile.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// A token that is used as-is.
    Token(SecretString),
    /// Basic credentials exchanged for a token before the first request.
    Credentials {
        username: String,
        password: SecretString,
    },
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "jamfctl", "jamfctl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("jamfctl");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
///
/// A missing file yields the defaults; a file that fails to parse is an error.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path`, layered under `JAMF_`-prefixed env vars.
///
/// Nested keys use a double underscore: `JAMF_DEFAULTS__TIMEOUT=60`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("JAMF_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Keyring ─────────────────────────────────────────────────────────

fn keyring_get(key: &str) -> Option<String> {
    keyring::Entry::new(KEYRING_SERVICE, key)
        .and_then(|entry| entry.get_password())
        .ok()
}

/// Store a secret for `{profile_name}/{kind}` in the system keyring.
pub fn store_secret(profile_name: &str, kind: &str, secret: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/{kind}"))?;
    entry.set_password(secret)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve a pre-issued bearer token: plaintext profile value, then keyring.
///
/// Returns `None` when the profile should authenticate with a password.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Option<SecretString> {
    resolve_token_from(profile, profile_name, &keyring_get)
}

fn resolve_token_from(
    profile: &Profile,
    profile_name: &str,
    keyring: &dyn Fn(&str) -> Option<String>,
) -> Option<SecretString> {
    profile
        .token
        .clone()
        .or_else(|| keyring(&format!("{profile_name}/token")))
        .map(SecretString::from)
}

/// Resolve username + password without CLI flags.
///
/// Password order: `password_env` var, `JAMF_PASSWORD`, keyring, plaintext.
pub fn resolve_credentials(
    profile: &Profile,
    profile_name: &str,
) -> Result<(String, SecretString), ConfigError> {
    resolve_credentials_from(
        profile,
        profile_name,
        &|name| std::env::var(name).ok(),
        &keyring_get,
    )
}

fn resolve_credentials_from(
    profile: &Profile,
    profile_name: &str,
    env: &dyn Fn(&str) -> Option<String>,
    keyring: &dyn Fn(&str) -> Option<String>,
) -> Result<(String, SecretString), ConfigError> {
    let no_credentials = || ConfigError::NoCredentials {
        profile: profile_name.into(),
    };

    let username = profile
        .username
        .clone()
        .or_else(|| env("JAMF_USERNAME"))
        .ok_or_else(no_credentials)?;

    let password = profile
        .password_env
        .as_deref()
        .and_then(env)
        .or_else(|| env(PASSWORD_ENV))
        .or_else(|| keyring(&format!("{profile_name}/password")))
        .or_else(|| profile.password.clone())
        .ok_or_else(no_credentials)?;

    Ok((username, SecretString::from(password)))
}

/// Resolve `AuthCredentials` for a profile: a stored token wins, otherwise
/// username + password.
pub fn resolve_auth(profile: &Profile, profile_name: &str) -> Result<AuthCredentials, ConfigError> {
    if let Some(token) = resolve_token(profile, profile_name) {
        return Ok(AuthCredentials::Token(token));
    }
    let (username, password) = resolve_credentials(profile, profile_name)?;
    Ok(AuthCredentials::Credentials { username, password })
}

// ── Translation ─────────────────────────────────────────────────────

/// Parse a URL-valued config field, naming the field on failure.
pub fn parse_url(field: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL '{value}': {e}"),
    })
}

/// The Classic API root for an instance: `{instance}/JSSResource`.
pub fn default_base_url(instance: &Url) -> Result<Url, ConfigError> {
    let mut url = instance.clone();
    url.path_segments_mut()
        .map_err(|()| ConfigError::Validation {
            field: "instance".into(),
            reason: format!("'{instance}' cannot be used as a base URL"),
        })?
        .pop_if_empty()
        .push("JSSResource");
    Ok(url)
}

/// Build a `ClientConfig` from a profile and global defaults, without CLI
/// flag overrides.
pub fn profile_to_client_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let instance_url = parse_url("instance", &profile.instance)?;
    let base_url = match profile.base_url.as_deref() {
        Some(raw) => parse_url("base_url", raw)?,
        None => default_base_url(&instance_url)?,
    };

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(ClientConfig {
        instance_url,
        base_url,
        transport: TransportConfig { tls, timeout },
    })
}
