//! Config subcommand handlers.

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking sensitive fields.
fn format_config_redacted(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "instance = \"{}\"", p.instance);
        if let Some(ref base) = p.base_url {
            let _ = writeln!(out, "base_url = \"{base}\"");
        }
        if let Some(ref u) = p.username {
            let _ = writeln!(out, "username = \"{u}\"");
        }
        if p.password.is_some() {
            let _ = writeln!(out, "password = \"****\"");
        }
        if let Some(ref env) = p.password_env {
            let _ = writeln!(out, "password_env = \"{env}\"");
        }
        if p.token.is_some() {
            let _ = writeln!(out, "token = \"****\"");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out
}

/// Copy of the config with every stored secret replaced by `****`.
fn redacted(cfg: &Config) -> Config {
    let mask = |s: &Option<String>| s.as_ref().map(|_| "****".to_owned());
    Config {
        default_profile: cfg.default_profile.clone(),
        defaults: config::Defaults {
            insecure: cfg.defaults.insecure,
            timeout: cfg.defaults.timeout,
        },
        profiles: cfg
            .profiles
            .iter()
            .map(|(name, p)| {
                let profile = Profile {
                    password: mask(&p.password),
                    token: mask(&p.token),
                    ..p.clone()
                };
                (name.clone(), profile)
            })
            .collect(),
    }
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
    names.sort();
    if names.is_empty() {
        "(none)".into()
    } else {
        names.join(", ")
    }
}

/// Prompt for a secret without echo, rejecting empty input.
fn prompt_secret(prompt: &str, field: &str) -> Result<String, CliError> {
    let secret = rpassword::prompt_password(prompt).map_err(prompt_err)?;
    if secret.is_empty() {
        return Err(CliError::Validation {
            field: field.into(),
            reason: "value cannot be empty".into(),
        });
    }
    Ok(secret)
}

/// Offer to store a secret in the system keyring or return it for plaintext config.
///
/// Returns `Some(secret)` if the user chose plaintext, `None` if stored in keyring.
fn prompt_keyring_storage(
    secret: &str,
    profile_name: &str,
    kind: &str,
    label: &str,
) -> Result<Option<String>, CliError> {
    let choices = &[
        "Store in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt(format!("Where to store the {}?", label.to_lowercase()))
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    if selection == 0 {
        jamf_config::store_secret(profile_name, kind, secret)?;
        eprintln!("   ✓ {label} stored in system keyring");
        Ok(None)
    } else {
        Ok(Some(secret.to_owned()))
    }
}

/// Look up a profile by name, failing with the list of known profiles.
fn require_profile<'a>(cfg: &'a Config, name: &str) -> Result<&'a Profile, CliError> {
    cfg.profiles
        .get(name)
        .ok_or_else(|| CliError::ProfileNotFound {
            name: name.to_owned(),
            available: available_profiles(cfg),
        })
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("jamfctl configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let instance: String = Input::new()
                .with_prompt("Jamf Pro URL")
                .default("https://example.jamfcloud.com".into())
                .interact_text()
                .map_err(prompt_err)?;
            jamf_config::parse_url("instance", &instance)?;

            let username: String = Input::new()
                .with_prompt("Username")
                .interact_text()
                .map_err(prompt_err)?;
            if username.is_empty() {
                return Err(CliError::Validation {
                    field: "username".into(),
                    reason: "username cannot be empty".into(),
                });
            }

            let pass = prompt_secret("Password: ", "password")?;
            let password = prompt_keyring_storage(&pass, &profile_name, "password", "Password")?;

            let mut cfg = config::load_config()?;
            cfg.profiles.insert(
                profile_name.clone(),
                Profile {
                    instance,
                    username: Some(username),
                    password,
                    ..Profile::default()
                },
            );
            cfg.default_profile = Some(profile_name.clone());
            config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: jamfctl auth whoami");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = redacted(&config::load_config()?);
            let out = output::render_single(&global.output, &cfg, format_config_redacted, |_| {
                "config".into()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            require_profile(&cfg, &name)?;

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }

        // ── Secrets into the keyring ────────────────────────────────
        ConfigCommand::SetPassword => {
            let cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);
            require_profile(&cfg, &profile_name)?;

            let secret = prompt_secret("Password: ", "password")?;
            jamf_config::store_secret(&profile_name, "password", &secret)?;
            eprintln!("✓ Password stored in system keyring for profile '{profile_name}'");
            Ok(())
        }

        ConfigCommand::SetToken => {
            let cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);
            require_profile(&cfg, &profile_name)?;

            let secret = prompt_secret("Bearer token: ", "token")?;
            jamf_config::store_secret(&profile_name, "token", &secret)?;
            eprintln!("✓ Token stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn sample() -> Config {
        let mut profiles = HashMap::new();
        profiles.insert(
            "prod".to_owned(),
            Profile {
                instance: "https://acme.jamfcloud.com".into(),
                username: Some("admin".into()),
                password: Some("hunter2".into()),
                token: Some("eyJ.secret".into()),
                ..Profile::default()
            },
        );
        Config {
            default_profile: Some("prod".into()),
            profiles,
            ..Config::default()
        }
    }

    #[test]
    fn redacted_text_masks_secrets() {
        let out = format_config_redacted(&sample());
        assert!(out.contains("[profiles.prod]"));
        assert!(out.contains("username = \"admin\""));
        assert!(out.contains("password = \"****\""));
        assert!(out.contains("token = \"****\""));
        assert!(!out.contains("hunter2"));
        assert!(!out.contains("eyJ.secret"));
    }

    #[test]
    fn redacted_structured_copy_masks_secrets() {
        let cfg = redacted(&sample());
        let prod = &cfg.profiles["prod"];
        assert_eq!(prod.password.as_deref(), Some("****"));
        assert_eq!(prod.token.as_deref(), Some("****"));
        assert_eq!(prod.username.as_deref(), Some("admin"));
        assert_eq!(cfg.default_profile.as_deref(), Some("prod"));
    }

    #[test]
    fn missing_profile_lists_known_names() {
        let err = require_profile(&sample(), "staging").unwrap_err();
        match err {
            CliError::ProfileNotFound { name, available } => {
                assert_eq!(name, "staging");
                assert_eq!(available, "prod");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
