// Classic API user group endpoints

use serde::Deserialize;
use tracing::debug;

use crate::client::JamfClient;
use crate::error::Error;
use crate::models::{BaseSummary, UserGroup};

#[derive(Deserialize)]
struct UserGroupsEnvelope {
    user_groups: Vec<BaseSummary>,
}

/// The detail endpoint reuses the plural `user_groups` key for a single
/// object; some server versions send `user_group` instead.
#[derive(Deserialize)]
struct UserGroupEnvelope {
    #[serde(alias = "user_group")]
    user_groups: UserGroup,
}

impl JamfClient {
    /// List every user group with its site and members, in summary order.
    ///
    /// Fails as a whole on the first error: no partial list is returned.
    pub async fn list_user_groups(&self) -> Result<Vec<UserGroup>, Error> {
        let url = self.resource_url(&["usergroups"])?;
        let envelope: UserGroupsEnvelope = self.get_json(url).await?;
        debug!(count = envelope.user_groups.len(), "fetching user group details");

        let mut groups = Vec::with_capacity(envelope.user_groups.len());
        for summary in &envelope.user_groups {
            groups.push(self.get_user_group(summary.id).await?);
        }
        Ok(groups)
    }

    /// `GET {base_url}/usergroups/id/{id}`
    pub async fn get_user_group(&self, id: i64) -> Result<UserGroup, Error> {
        let id = id.to_string();
        let url = self.resource_url(&["usergroups", "id", &id])?;
        let envelope: UserGroupEnvelope = self.get_json(url).await?;
        Ok(envelope.user_groups)
    }
}
