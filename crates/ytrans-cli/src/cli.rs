//! Command line definition

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use ytrans_i18n::FormatArgs;

#[derive(Debug, Parser)]
#[command(name = "ytrans")]
#[command(version)]
#[command(about = "Look up nested translations stored as YAML, JSON or TOML files")]
#[command(long_about = None)]
pub struct Cli {
    /// Translation root directory, one subdirectory per group
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Extension read as a translation file; repeat for several
    #[arg(long = "ext", global = true, value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Configuration file (YAML or TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output encoding
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,

    /// Log loading details at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List translation groups
    Groups,

    /// List the languages of a group
    Languages {
        /// Group name
        #[arg(value_name = "GROUP")]
        group: String,
    },

    /// Look up a key path in one language
    Get {
        /// Group name
        #[arg(value_name = "GROUP")]
        group: String,

        /// Colon-separated key path, e.g. home:menu:open
        #[arg(value_name = "PATH")]
        path: String,

        /// Language code
        #[arg(value_name = "LANG")]
        language: String,

        /// Text printed when the path does not resolve
        #[arg(short, long)]
        default: Option<String>,

        /// Placeholder value, NAME=VALUE
        #[arg(short, long = "arg", value_name = "NAME=VALUE", value_parser = parse_format_arg)]
        args: Vec<(String, String)>,
    },

    /// Look up a key path in every language of a group
    GetAll {
        /// Group name
        #[arg(value_name = "GROUP")]
        group: String,

        /// Colon-separated key path
        #[arg(value_name = "PATH")]
        path: String,

        /// Placeholder value, NAME=VALUE
        #[arg(short, long = "arg", value_name = "NAME=VALUE", value_parser = parse_format_arg)]
        args: Vec<(String, String)>,

        /// Group the result by key instead of by language
        #[arg(long)]
        by_key: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

fn parse_format_arg(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

/// `None` when no placeholder values were given, so lookups skip formatting
pub fn to_format_args(args: &[(String, String)]) -> Option<FormatArgs> {
    if args.is_empty() {
        None
    } else {
        Some(args.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytrans_i18n::FormatValue;

    #[test]
    fn test_parse_get() {
        let cli = Cli::try_parse_from([
            "ytrans", "get", "site", "home:greeting", "en", "--arg", "name=Ana", "-a", "n=1=2",
            "--default", "N/A",
        ])
        .unwrap();

        match cli.command {
            Commands::Get {
                group,
                path,
                language,
                default,
                args,
            } => {
                assert_eq!(group, "site");
                assert_eq!(path, "home:greeting");
                assert_eq!(language, "en");
                assert_eq!(default.as_deref(), Some("N/A"));
                assert_eq!(
                    args,
                    vec![
                        ("name".to_string(), "Ana".to_string()),
                        ("n".to_string(), "1=2".to_string()),
                    ]
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.output, OutputFormat::Yaml);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ytrans", "groups", "--root", "locales", "--ext", "json", "--ext", "yaml", "-o",
            "json", "-v",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Groups));
        assert_eq!(cli.root, Some(PathBuf::from("locales")));
        assert_eq!(cli.extensions, vec!["json", "yaml"]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_bad_format_arg_is_rejected() {
        assert!(Cli::try_parse_from(["ytrans", "get-all", "site", "a", "--arg", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["ytrans", "get-all", "site", "a", "--arg", "=x"]).is_err());
    }

    #[test]
    fn test_to_format_args() {
        assert!(to_format_args(&[]).is_none());
        let args = to_format_args(&[("name".to_string(), "Ana".to_string())]).unwrap();
        assert_eq!(args.get("name"), Some(&FormatValue::from("Ana")));
    }
}
