// Jamf API response types
//
// Records decoded from Classic (`JSSResource`) and Pro (`/api/v1`) responses.
// Fields use `#[serde(default)]` liberally because Jamf omits empty fields
// and the summary endpoints only carry `id` + `name`. The identifying fields
// (`id`, `account`) stay required so an error body never decodes as a record.

use serde::{Deserialize, Serialize};

// ── Summary ──────────────────────────────────────────────────────────

/// Minimal `{ id, name }` reference returned by list endpoints and nested
/// inside detail records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSummary {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A site, used both as a standalone resource and as a nested reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    #[serde(flatten)]
    pub base: BaseSummary,
}

// ── Users ────────────────────────────────────────────────────────────

/// Full user record from `users/id/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseSummary,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub sites: Vec<SiteMembership>,
}

impl User {
    /// Jamf populates either `email` or `email_address` depending on the
    /// record's origin. Prefer `email`.
    pub fn preferred_email(&self) -> &str {
        if self.email.is_empty() {
            &self.email_address
        } else {
            &self.email
        }
    }
}

/// `{ "site": { id, name } }` wrapper used in a user's site list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMembership {
    #[serde(default)]
    pub site: BaseSummary,
}

/// User group from `usergroups/id/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    #[serde(flatten)]
    pub base: BaseSummary,
    #[serde(default)]
    pub is_smart: bool,
    #[serde(default)]
    pub site: Site,
    #[serde(default)]
    pub users: Vec<User>,
}

// ── Accounts ─────────────────────────────────────────────────────────

/// Management account from `/api/v1/users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(flatten)]
    pub base: BaseSummary,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub email_address: String,
    /// `"Enabled"` or `"Disabled"`.
    #[serde(default)]
    pub enabled: String,
    #[serde(default)]
    pub access_level: String,
    #[serde(default)]
    pub privilege_set: String,
    #[serde(default)]
    pub site: BaseSummary,
}

impl UserAccount {
    pub fn is_enabled(&self) -> bool {
        self.enabled.eq_ignore_ascii_case("enabled") || self.enabled.eq_ignore_ascii_case("true")
    }
}

/// Account group from `/api/v1/groups/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(flatten)]
    pub base: BaseSummary,
    #[serde(default)]
    pub access_level: String,
    #[serde(default)]
    pub privilege_set: String,
    #[serde(default)]
    pub site: BaseSummary,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

/// `{ "user": { id, name } }` wrapper used in a group's member list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    #[serde(default)]
    pub user: BaseSummary,
}

/// Aggregate result of an accounts listing: every management account and
/// every account group, each fully populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accounts {
    pub users: Vec<UserAccount>,
    pub groups: Vec<Group>,
}

// ── Auth ─────────────────────────────────────────────────────────────

/// Response from `POST /api/v1/auth/token`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub expires: String,
}

/// Response from `GET /api/v1/auth`: who the current token belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    pub account: TokenAccount,
    #[serde(default)]
    pub sites: Vec<TokenSite>,
    #[serde(default)]
    pub authentication_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccount {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub email: String,
}

/// Site the token can access. The Pro API returns string IDs here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSite {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}
