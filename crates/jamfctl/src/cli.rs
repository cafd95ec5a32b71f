//! Clap derive structures for the `jamfctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! `jamfctl man` renders its man pages from this same tree.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// jamfctl -- list Jamf users, groups, accounts, and sites
#[derive(Debug, Parser)]
#[command(
    name = "jamfctl",
    version,
    about = "Query a Jamf device-management server from the command line",
    long_about = "Lists users, user groups, management accounts, and sites from a Jamf\n\
        server. Summary listings are enriched with one detail request per\n\
        entry; any failed request fails the whole listing.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "JAMF_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Jamf server URL (overrides profile)
    #[arg(long, short = 'i', env = "JAMF_INSTANCE", global = true)]
    pub instance: Option<String>,

    /// Classic API root (defaults to {instance}/JSSResource)
    #[arg(long, env = "JAMF_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Pre-issued bearer token
    #[arg(long, env = "JAMF_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Username for token issuance
    #[arg(long, short = 'u', env = "JAMF_USERNAME", global = true)]
    pub username: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "JAMF_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "JAMF_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile, default 30)
    #[arg(long, env = "JAMF_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Issue bearer tokens and inspect the current one
    Auth(AuthArgs),

    /// List and inspect users
    #[command(alias = "u")]
    Users(UsersArgs),

    /// List and inspect user groups
    #[command(alias = "ug")]
    UserGroups(UserGroupsArgs),

    /// List management accounts and account groups
    #[command(alias = "acct")]
    Accounts(AccountsArgs),

    /// List sites
    Sites(SitesArgs),

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print a man page in roff format
    Man(ManArgs),
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Exchange username + password for a bearer token and print it
    Token,
    /// Show the account, sites, and auth type behind the current token
    Whoami,
}

// ── Users ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List all users with details
    #[command(alias = "ls")]
    List,
    /// Show a single user
    Get {
        /// User ID
        id: i64,
    },
}

// ── User groups ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UserGroupsArgs {
    #[command(subcommand)]
    pub command: UserGroupsCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserGroupsCommand {
    /// List all user groups with members
    #[command(alias = "ls")]
    List,
    /// Show a single user group
    Get {
        /// User group ID
        id: i64,
    },
}

// ── Accounts ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AccountsArgs {
    #[command(subcommand)]
    pub command: AccountsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AccountsCommand {
    /// List management accounts and account groups
    #[command(alias = "ls")]
    List,
}

// ── Sites ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SitesArgs {
    #[command(subcommand)]
    pub command: SitesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// List all sites
    #[command(alias = "ls")]
    List,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactively create or update a profile
    Init,
    /// Show the current configuration (secrets masked)
    Show,
    /// Print the config file path
    Path,
    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },
    /// Store the profile's password in the system keyring
    SetPassword,
    /// Store a pre-issued bearer token in the system keyring
    SetToken,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}

// ── Man pages ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ManArgs {
    /// Subcommand to document (e.g. `users`); the top-level page by default
    pub command: Option<String>,
}
