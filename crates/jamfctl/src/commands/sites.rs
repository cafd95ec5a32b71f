//! Site command handlers.

use jamf_api::{JamfClient, Site};
use tabled::Tabled;

use crate::cli::{GlobalOpts, SitesArgs, SitesCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Site> for SiteRow {
    fn from(s: &Site) -> Self {
        Self {
            id: s.base.id,
            name: s.base.name.clone(),
        }
    }
}

pub async fn handle(
    client: &JamfClient,
    args: SitesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SitesCommand::List => {
            let sites = client
                .list_sites()
                .await
                .map_err(|e| CliError::from_api(client.base_url(), e))?;
            let out = output::render_list(
                &global.output,
                &sites,
                |s| SiteRow::from(s),
                |s| s.base.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
