//! Account command handlers.
//!
//! Accounts and account groups come back from one listing call; the table
//! view prints them as two tables, structured formats print the aggregate.

use jamf_api::{Accounts, Group, JamfClient, UserAccount};
use tabled::Tabled;

use crate::cli::{AccountsArgs, AccountsCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Full Name")]
    full_name: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
    #[tabled(rename = "Access")]
    access_level: String,
    #[tabled(rename = "Privileges")]
    privilege_set: String,
    #[tabled(rename = "Site")]
    site: String,
}

impl From<&UserAccount> for AccountRow {
    fn from(a: &UserAccount) -> Self {
        Self {
            id: a.base.id,
            name: a.base.name.clone(),
            full_name: a.full_name.clone(),
            enabled: if a.is_enabled() { "yes" } else { "no" }.into(),
            access_level: a.access_level.clone(),
            privilege_set: a.privilege_set.clone(),
            site: a.site.name.clone(),
        }
    }
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Group")]
    name: String,
    #[tabled(rename = "Access")]
    access_level: String,
    #[tabled(rename = "Privileges")]
    privilege_set: String,
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Members")]
    members: usize,
}

impl From<&Group> for GroupRow {
    fn from(g: &Group) -> Self {
        Self {
            id: g.base.id,
            name: g.base.name.clone(),
            access_level: g.access_level.clone(),
            privilege_set: g.privilege_set.clone(),
            site: g.site.name.clone(),
            members: g.members.len(),
        }
    }
}

fn render(format: &OutputFormat, accounts: &Accounts) -> String {
    match format {
        OutputFormat::Table | OutputFormat::Plain => {
            let users = output::render_list(
                format,
                &accounts.users,
                |a| AccountRow::from(a),
                |a| a.base.name.clone(),
            );
            let groups = output::render_list(
                format,
                &accounts.groups,
                |g| GroupRow::from(g),
                |g| g.base.name.clone(),
            );
            [users, groups]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        }
        _ => output::render_single(format, accounts, |_| String::new(), |_| String::new()),
    }
}

pub async fn handle(
    client: &JamfClient,
    args: AccountsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AccountsCommand::List => {
            let accounts = client
                .list_accounts()
                .await
                .map_err(|e| CliError::from_api(client.instance_url(), e))?;
            output::print_output(&render(&global.output, &accounts), global.quiet);
            Ok(())
        }
    }
}
