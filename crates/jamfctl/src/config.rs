//! CLI configuration: a thin wrapper around `jamf_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--instance, --token, etc.).

use jamf_api::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use jamf_config::{
    Config, Defaults, Profile, config_path, load_config, profile_to_client_config, save_config,
};

/// A profile with CLI overrides applied, plus the client config derived
/// from it.
#[derive(Debug)]
pub struct Resolved {
    pub profile_name: String,
    pub profile: Profile,
    pub client: ClientConfig,
}

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Overlay CLI flags onto a profile. Flags win over profile values.
pub fn apply_overrides(mut profile: Profile, global: &GlobalOpts) -> Profile {
    if let Some(ref instance) = global.instance {
        profile.instance.clone_from(instance);
    }
    if global.base_url.is_some() {
        profile.base_url.clone_from(&global.base_url);
    }
    if global.username.is_some() {
        profile.username.clone_from(&global.username);
    }
    if global.token.is_some() {
        profile.token.clone_from(&global.token);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }
    profile
}

/// Resolve the effective profile and client config from the config file,
/// the active profile, and CLI overrides.
///
/// Without a stored profile, `--instance` alone is enough to proceed.
pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Resolved, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let base = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.instance.is_some() => Profile::default(),
        None if global.profile.is_some() => {
            let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
            names.sort();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if names.is_empty() {
                    "(none)".into()
                } else {
                    names.join(", ")
                },
            });
        }
        None => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    let profile = apply_overrides(base, global);
    let client = profile_to_client_config(&profile, &cfg.defaults)?;

    Ok(Resolved {
        profile_name,
        profile,
        client,
    })
}
