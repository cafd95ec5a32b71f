//! CLI error types with miette diagnostics.
//!
//! Maps `jamf_api::Error` and `ConfigError` into user-facing errors with
//! actionable help text and exit codes.

use miette::Diagnostic;
use thiserror::Error;

use jamf_config::ConfigError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to Jamf server at {url}")]
    #[diagnostic(
        code(jamfctl::connection_failed),
        help(
            "Check that the server is reachable.\n\
             URL: {url}\n\
             For self-signed certificates try: jamfctl --insecure ..."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: jamf_api::Error,
    },

    #[error("Request to {url} timed out")]
    #[diagnostic(
        code(jamfctl::timeout),
        help("Increase the timeout with --timeout or check server responsiveness.")
    )]
    Timeout {
        url: String,
        #[source]
        source: jamf_api::Error,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Could not obtain a bearer token for profile '{profile}'")]
    #[diagnostic(
        code(jamfctl::auth_failed),
        help(
            "Verify the username and password.\n\
             Run: jamfctl config set-password --profile {profile}"
        )
    )]
    AuthFailed {
        profile: String,
        #[source]
        source: jamf_api::Error,
    },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(jamfctl::no_credentials),
        help(
            "Configure credentials with: jamfctl config init\n\
             Or set JAMF_TOKEN, or JAMF_USERNAME and JAMF_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Jamf API request failed")]
    #[diagnostic(
        code(jamfctl::api_error),
        help(
            "The server answered with something other than the expected JSON.\n\
             Check the URLs, the token's privileges, and that the record exists.\n\
             Re-run with -vv to see each request."
        )
    )]
    Api(#[source] jamf_api::Error),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(jamfctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(jamfctl::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: jamfctl config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No Jamf server configured")]
    #[diagnostic(
        code(jamfctl::no_config),
        help(
            "Create a profile with: jamfctl config init\n\
             Or pass --instance (JAMF_INSTANCE).\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(jamfctl::config))]
    Config(ConfigError),

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::NoConfig { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }

    /// Classify a failed API call against `url`.
    pub fn from_api(url: &url::Url, err: jamf_api::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                source: err,
            }
        } else if err.is_transient() {
            Self::ConnectionFailed {
                url: url.to_string(),
                source: err,
            }
        } else {
            Self::Api(err)
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}
