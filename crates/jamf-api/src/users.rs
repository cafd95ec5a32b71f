// Classic API user endpoints
//
// `users` only returns `{ id, name }` summaries, so a full listing is a
// summary fetch followed by one `users/id/{id}` request per entry.

use serde::Deserialize;
use tracing::debug;

use crate::client::JamfClient;
use crate::error::Error;
use crate::models::{BaseSummary, User};

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<BaseSummary>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

impl JamfClient {
    /// List every user with full details, in the order the summary
    /// endpoint returns them.
    ///
    /// Fails as a whole on the first error: no partial list is returned.
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        let summaries = self.list_user_summaries().await?;
        debug!(count = summaries.len(), "fetching user details");

        let mut users = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            users.push(self.get_user(summary.id).await?);
        }
        Ok(users)
    }

    /// `GET {base_url}/users`
    pub async fn list_user_summaries(&self) -> Result<Vec<BaseSummary>, Error> {
        let url = self.resource_url(&["users"])?;
        let envelope: UsersEnvelope = self.get_json(url).await?;
        Ok(envelope.users)
    }

    /// `GET {base_url}/users/id/{id}`
    pub async fn get_user(&self, id: i64) -> Result<User, Error> {
        let id = id.to_string();
        let url = self.resource_url(&["users", "id", &id])?;
        let envelope: UserEnvelope = self.get_json(url).await?;
        Ok(envelope.user)
    }
}
