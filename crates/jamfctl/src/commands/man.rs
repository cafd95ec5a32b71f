//! Man page rendering.

use std::io::Write;

use clap::CommandFactory;

use crate::cli::{Cli, ManArgs};
use crate::error::CliError;

/// Render the roff page for `jamfctl` or one of its subcommands.
///
/// Subcommand pages are titled `jamfctl-<name>` so they install side by
/// side with the top-level page.
fn render(command: Option<&str>) -> Result<Vec<u8>, CliError> {
    let root = Cli::command();
    let cmd = match command {
        None => root,
        Some(name) => {
            let sub = root
                .find_subcommand(name)
                .ok_or_else(|| CliError::Validation {
                    field: "command".into(),
                    reason: format!(
                        "unknown command '{name}'. Available: {}",
                        root.get_subcommands()
                            .map(clap::Command::get_name)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                })?;
            sub.clone()
                .name(format!("{}-{}", root.get_name(), sub.get_name()))
        }
    };

    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buf)?;
    Ok(buf)
}

pub fn handle(args: &ManArgs) -> Result<(), CliError> {
    let page = render(args.command.as_deref())?;
    std::io::stdout().lock().write_all(&page)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn top_level_page_lists_subcommands() {
        let page = String::from_utf8(render(None).unwrap()).unwrap();
        assert!(page.contains(".TH"), "{page}");
        assert!(page.contains("jamfctl"), "{page}");
        assert!(page.contains("accounts"), "{page}");
    }

    #[test]
    fn subcommand_page_documents_only_that_command() {
        let page = String::from_utf8(render(Some("sites")).unwrap()).unwrap();
        assert!(page.contains(".TH"), "{page}");
        assert!(page.contains("sites"), "{page}");
        assert!(!page.contains("accounts"), "{page}");
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        match render(Some("devices")) {
            Err(CliError::Validation { field, reason }) => {
                assert_eq!(field, "command");
                assert!(reason.contains("users"), "{reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
