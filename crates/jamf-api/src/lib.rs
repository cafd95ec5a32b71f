// jamf-api: Async Rust client for the Jamf device-management API (Classic + Pro)

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod accounts;
mod sites;
mod user_groups;
mod users;

pub use auth::{issue_token, request_token};
pub use client::{ClientConfig, JamfClient};
pub use error::Error;
pub use models::{
    Accounts, AuthResponse, BaseSummary, Group, GroupMember, Site, SiteMembership, TokenAccount,
    TokenDetails, TokenSite, User, UserAccount, UserGroup,
};
pub use transport::{TlsMode, TransportConfig};
