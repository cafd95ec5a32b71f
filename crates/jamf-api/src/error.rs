use thiserror::Error;

/// Top-level error type for the `jamf-api` crate.
///
/// Three failure classes exist: the request could not be built, the
/// transport failed, or the body did not decode into the expected shape.
/// None of them are retried, and "not found" is not told apart from any
/// other failure -- callers read the message.
#[derive(Debug, Error)]
pub enum Error {
    // ── Request construction ────────────────────────────────────────
    /// The configured base URL cannot have path segments appended
    /// (e.g. `mailto:` or `data:` URLs).
    #[error("Invalid base URL '{url}': cannot append path segments")]
    InvalidBaseUrl { url: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Building the underlying `reqwest::Client` failed.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the status and raw body for debugging.
    #[error("Deserialization error (HTTP {status}): {message}")]
    Deserialization {
        message: String,
        status: u16,
        body: String,
    },
}

impl Error {
    /// Returns `true` if this is a connection-level error where the
    /// server was never reached or never answered.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if the request timed out in the transport.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
