// Jamf Pro API account endpoints
//
// `/api/v1/accounts` returns bare `{ users, groups }` summaries. Each list
// is enriched by its own detail loop; users are fetched before groups.

use serde::Deserialize;
use tracing::debug;

use crate::client::JamfClient;
use crate::error::Error;
use crate::models::{Accounts, BaseSummary, Group, UserAccount};

#[derive(Deserialize)]
struct AccountSummaries {
    users: Vec<BaseSummary>,
    groups: Vec<BaseSummary>,
}

impl JamfClient {
    /// List every management account and account group with full details.
    ///
    /// Issues `1 + users + groups` requests on success. A failure in either
    /// detail loop aborts the call and drops everything fetched so far.
    pub async fn list_accounts(&self) -> Result<Accounts, Error> {
        let url = self.instance_api_url(&["api", "v1", "accounts"])?;
        let summaries: AccountSummaries = self.get_json(url).await?;
        debug!(
            users = summaries.users.len(),
            groups = summaries.groups.len(),
            "fetching account details"
        );

        let mut users = Vec::with_capacity(summaries.users.len());
        for summary in &summaries.users {
            users.push(self.get_user_account(summary.id).await?);
        }

        let mut groups = Vec::with_capacity(summaries.groups.len());
        for summary in &summaries.groups {
            groups.push(self.get_group(summary.id).await?);
        }

        Ok(Accounts { users, groups })
    }

    /// `GET {instance_url}/api/v1/users/{id}`
    pub async fn get_user_account(&self, id: i64) -> Result<UserAccount, Error> {
        let id = id.to_string();
        let url = self.instance_api_url(&["api", "v1", "users", &id])?;
        self.get_json(url).await
    }

    /// `GET {instance_url}/api/v1/groups/{id}`
    pub async fn get_group(&self, id: i64) -> Result<Group, Error> {
        let id = id.to_string();
        let url = self.instance_api_url(&["api", "v1", "groups", &id])?;
        self.get_json(url).await
    }
}
