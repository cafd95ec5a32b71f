//! Auth command handlers.

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::config::Resolved;
use crate::error::CliError;
use crate::output;

use super::{auth_error, connect};

pub async fn handle(
    args: AuthArgs,
    resolved: &Resolved,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Token => {
            let cfg = &resolved.client;
            let (username, password) =
                jamf_config::resolve_credentials(&resolved.profile, &resolved.profile_name)?;
            let http = cfg
                .transport
                .build_client()
                .map_err(|e| CliError::from_api(&cfg.instance_url, e))?;

            let auth = jamf_api::request_token(&http, &cfg.instance_url, &username, &password)
                .await
                .map_err(|e| auth_error(resolved, e))?;

            output::print_output(&auth.token, global.quiet);
            if !global.quiet && !auth.expires.is_empty() {
                eprintln!("expires: {}", auth.expires);
            }
            Ok(())
        }

        AuthCommand::Whoami => {
            let client = connect(resolved).await?;
            let details = client
                .token_details()
                .await
                .map_err(|e| CliError::from_api(client.instance_url(), e))?;

            let out = output::render_single(
                &global.output,
                &details,
                |d| {
                    let sites = d
                        .sites
                        .iter()
                        .map(|s| s.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    output::detail_lines(&[
                        ("Account ID", d.account.id.clone()),
                        ("Username", d.account.username.clone()),
                        ("Real name", d.account.real_name.clone()),
                        ("Email", d.account.email.clone()),
                        ("Auth type", d.authentication_type.clone()),
                        ("Sites", sites),
                    ])
                },
                |d| d.account.username.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

