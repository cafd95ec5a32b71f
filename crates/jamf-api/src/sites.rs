// Classic API site endpoint
//
// Sites come back fully populated from the listing, so there is no
// per-site detail request.

use serde::Deserialize;

use crate::client::JamfClient;
use crate::error::Error;
use crate::models::Site;

#[derive(Deserialize)]
struct SitesEnvelope {
    sites: Vec<Site>,
}

impl JamfClient {
    /// `GET {base_url}/sites`
    pub async fn list_sites(&self) -> Result<Vec<Site>, Error> {
        let url = self.resource_url(&["sites"])?;
        let envelope: SitesEnvelope = self.get_json(url).await?;
        Ok(envelope.sites)
    }
}
