//! Clap adapter for the config commands.
//!
//! Compiled only with the `clap` feature (on by default). [`ConfigArgs`] can
//! be flattened into a larger clap `Parser`; [`ConfigArgs::into_action`] is
//! the only bridge to the framework-agnostic [`ConfigAction`].

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::{ConfigAction, Format};

/// Clap-derived args for the config commands.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Directory containing `server.config`.
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Print `show` output as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

/// Available config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show every resolved configuration value.
    Show,
    /// Show the resolved value of one key.
    Get {
        /// Dotted key path (e.g. "threads.queue").
        key: String,
    },
    /// Write a default `server.config` into the directory.
    Gen,
}

impl ConfigArgs {
    /// Convert clap-parsed args into a framework-agnostic `ConfigAction`.
    ///
    /// No subcommand means `show`. `--json` only affects `show`.
    pub fn into_action(self) -> ConfigAction {
        let dir = self.dir;
        let format = if self.json { Format::Json } else { Format::Plain };
        match self.action {
            None | Some(ConfigSubcommand::Show) => ConfigAction::Show { dir, format },
            Some(ConfigSubcommand::Get { key }) => ConfigAction::Get { dir, key },
            Some(ConfigSubcommand::Gen) => ConfigAction::Gen { dir },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    fn parse(args: &[&str]) -> ConfigAction {
        TestCli::try_parse_from(args).unwrap().config.into_action()
    }

    #[test]
    fn bare_is_plain_show_in_cwd() {
        assert_eq!(
            parse(&["test"]),
            ConfigAction::Show {
                dir: PathBuf::from("."),
                format: Format::Plain,
            }
        );
    }

    #[test]
    fn show_json() {
        assert_eq!(
            parse(&["test", "show", "--json"]),
            ConfigAction::Show {
                dir: PathBuf::from("."),
                format: Format::Json,
            }
        );
    }

    #[test]
    fn bare_json_is_json_show() {
        assert_eq!(
            parse(&["test", "--json"]),
            ConfigAction::Show {
                dir: PathBuf::from("."),
                format: Format::Json,
            }
        );
    }

    #[test]
    fn json_before_subcommand() {
        assert_eq!(
            parse(&["test", "--json", "-d", "conf", "show"]),
            ConfigAction::Show {
                dir: PathBuf::from("conf"),
                format: Format::Json,
            }
        );
    }

    #[test]
    fn gen_targets_dir_not_output_flag() {
        assert!(TestCli::try_parse_from(["test", "gen", "-o", "out"]).is_err());
        assert_eq!(
            parse(&["test", "gen", "--dir", "out"]),
            ConfigAction::Gen {
                dir: PathBuf::from("out"),
            }
        );
    }

    #[test]
    fn get_with_dir_before_subcommand() {
        assert_eq!(
            parse(&["test", "--dir", "/etc/keeper", "get", "threads.queue"]),
            ConfigAction::Get {
                dir: PathBuf::from("/etc/keeper"),
                key: "threads.queue".into(),
            }
        );
    }

    #[test]
    fn gen_with_short_dir_after_subcommand() {
        assert_eq!(
            parse(&["test", "gen", "-d", "conf"]),
            ConfigAction::Gen {
                dir: PathBuf::from("conf"),
            }
        );
    }

    #[test]
    fn get_requires_key() {
        assert!(TestCli::try_parse_from(["test", "get"]).is_err());
    }

    #[test]
    fn invalid_subcommand_errors() {
        assert!(TestCli::try_parse_from(["test", "nope"]).is_err());
    }
}
