//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod accounts;
pub mod auth;
pub mod config_cmd;
pub mod man;
pub mod sites;
pub mod user_groups;
pub mod users;

use jamf_api::JamfClient;
use jamf_config::AuthCredentials;
use tracing::debug;

use crate::cli::{Command, GlobalOpts};
use crate::config::Resolved;
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    resolved: &Resolved,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Auth(args) => auth::handle(args, resolved, global).await,
        Command::Users(args) => users::handle(&connect(resolved).await?, args, global).await,
        Command::UserGroups(args) => {
            user_groups::handle(&connect(resolved).await?, args, global).await
        }
        Command::Accounts(args) => accounts::handle(&connect(resolved).await?, args, global).await,
        Command::Sites(args) => sites::handle(&connect(resolved).await?, args, global).await,
        // Config, Completions and Man are handled before dispatch
        Command::Config(_) | Command::Completions(_) | Command::Man(_) => unreachable!(),
    }
}

/// Build the transport and obtain a bearer token, issuing one from
/// username + password when no token is configured.
pub async fn connect(resolved: &Resolved) -> Result<JamfClient, CliError> {
    let cfg = &resolved.client;
    let http = cfg
        .transport
        .build_client()
        .map_err(|e| CliError::from_api(&cfg.instance_url, e))?;

    let token = match jamf_config::resolve_auth(&resolved.profile, &resolved.profile_name)? {
        AuthCredentials::Token(token) => token,
        AuthCredentials::Credentials { username, password } => {
            debug!(%username, "issuing bearer token");
            jamf_api::issue_token(&http, &cfg.instance_url, &username, &password)
                .await
                .map_err(|e| auth_error(resolved, e))?
        }
    };

    Ok(JamfClient::new(
        http,
        token,
        cfg.base_url.clone(),
        cfg.instance_url.clone(),
    ))
}

/// Token issuance failures that never reached the server keep their
/// connection/timeout classification; anything else is a failed login.
pub(crate) fn auth_error(resolved: &Resolved, err: jamf_api::Error) -> CliError {
    if err.is_transient() {
        CliError::from_api(&resolved.client.instance_url, err)
    } else {
        CliError::AuthFailed {
            profile: resolved.profile_name.clone(),
            source: err,
        }
    }
}
