//! User group command handlers.

use jamf_api::{JamfClient, UserGroup};
use tabled::Tabled;

use crate::cli::{GlobalOpts, UserGroupsArgs, UserGroupsCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct UserGroupRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Smart")]
    smart: String,
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Members")]
    members: usize,
}

impl From<&UserGroup> for UserGroupRow {
    fn from(g: &UserGroup) -> Self {
        Self {
            id: g.base.id,
            name: g.base.name.clone(),
            smart: if g.is_smart { "yes" } else { "no" }.into(),
            site: g.site.base.name.clone(),
            members: g.users.len(),
        }
    }
}

fn detail(g: &UserGroup) -> String {
    let members = g
        .users
        .iter()
        .map(|u| format!("{} ({})", u.base.name, u.base.id))
        .collect::<Vec<_>>()
        .join(", ");
    output::detail_lines(&[
        ("ID", g.base.id.to_string()),
        ("Name", g.base.name.clone()),
        ("Smart", g.is_smart.to_string()),
        ("Site", g.site.base.name.clone()),
        ("Members", members),
    ])
}

pub async fn handle(
    client: &JamfClient,
    args: UserGroupsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let api_err = |e| CliError::from_api(client.base_url(), e);

    match args.command {
        UserGroupsCommand::List => {
            let groups = client.list_user_groups().await.map_err(api_err)?;
            let out = output::render_list(
                &global.output,
                &groups,
                |g| UserGroupRow::from(g),
                |g| g.base.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UserGroupsCommand::Get { id } => {
            let group = client.get_user_group(id).await.map_err(api_err)?;
            let out = output::render_single(&global.output, &group, detail, |g| {
                g.base.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
