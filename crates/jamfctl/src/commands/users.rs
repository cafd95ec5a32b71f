//! User command handlers.

use jamf_api::{JamfClient, User};
use tabled::Tabled;

use crate::cli::{GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Full Name")]
    full_name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Sites")]
    sites: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.base.id,
            name: u.base.name.clone(),
            full_name: u.full_name.clone(),
            email: u.preferred_email().to_owned(),
            sites: site_names(u),
        }
    }
}

fn site_names(u: &User) -> String {
    u.sites
        .iter()
        .map(|m| m.site.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn detail(u: &User) -> String {
    output::detail_lines(&[
        ("ID", u.base.id.to_string()),
        ("Name", u.base.name.clone()),
        ("Username", u.username.clone()),
        ("Full name", u.full_name.clone()),
        ("Email", u.preferred_email().to_owned()),
        ("Sites", site_names(u)),
    ])
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &JamfClient,
    args: UsersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let api_err = |e| CliError::from_api(client.base_url(), e);

    match args.command {
        UsersCommand::List => {
            let users = client.list_users().await.map_err(api_err)?;
            let out = output::render_list(
                &global.output,
                &users,
                |u| UserRow::from(u),
                |u| u.base.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Get { id } => {
            let user = client.get_user(id).await.map_err(api_err)?;
            let out = output::render_single(&global.output, &user, detail, |u| {
                u.base.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
