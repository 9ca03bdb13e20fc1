//! CLI command definitions.

use crate::{examples, examples_section};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const GENERATE_EXAMPLES: &str = examples![
    "stackgen generate                          " # "Interactive mode",
    "stackgen generate -s postgresql -s minio   " # "Skip the service selection",
    "stackgen generate -o deploy/compose.yml    " # "Write to a custom path",
    "stackgen generate --stdout                 " # "Print the manifest instead of writing it",
    "stackgen generate -y                       " # "Use config defaults, no prompts",
    "stackgen --config ci.toml generate -y      " # "Use a specific config file",
];

const SERVICES_EXAMPLES: &str = examples![
    "stackgen services                          " # "List the service catalog",
    "stackgen services -c                       " # "Concise output for scripts",
    "stackgen services --json                   " # "JSON output for parsing",
];

const CLI_EXAMPLES: &str = concat!(
    examples![
        "stackgen generate                          " # "Pick services and write docker-compose.yml",
        "stackgen services                          " # "Show available services",
    ],
    "\n\n",
    examples_section!["Configuration (~/.stackgen/config.toml):";
        "output = \"docker-compose.yml\"              " # "Default output file",
        "services = [\"postgresql\"]                  " # "Default selection",
        "[defaults.postgresql]                      " # "Per-service username, password, port",
    ],
);

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// stackgen - Generate docker-compose manifests for common services.
#[derive(Debug, Parser)]
#[command(name = "stackgen", author, version, styles = styles())]
#[command(
    about = "Generate docker-compose manifests for common infrastructure services",
    after_help = CLI_EXAMPLES
)]
pub struct Cli {
    /// Concise output for scripts (minimal formatting, machine-parseable).
    #[arg(short, long, global = true)]
    pub concise: bool,

    /// Suppress header line in concise mode (requires -c).
    #[arg(short = 'H', long, global = true)]
    pub no_header: bool,

    /// Path to a TOML file with wizard defaults.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Select services and generate a compose file.
    #[command(visible_alias = "init", after_help = GENERATE_EXAMPLES)]
    Generate {
        /// Service to include (repeatable). Skips the selection prompt.
        #[arg(short, long = "service", value_name = "ID")]
        services: Vec<String>,

        /// Output file (defaults to docker-compose.yml).
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Skip prompts and take credentials from the config file.
        #[arg(short, long)]
        yes: bool,

        /// Print the manifest to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },

    /// List the services the wizard can provision.
    #[command(after_help = SERVICES_EXAMPLES)]
    Services {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Help styles for clap.
pub fn styles() -> Styles {
    let accent = |color| Style::new().bold().fg_color(Some(Color::Ansi(color)));

    Styles::styled()
        .header(accent(AnsiColor::Blue))
        .usage(accent(AnsiColor::Blue))
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
        .error(accent(AnsiColor::Red))
        .invalid(accent(AnsiColor::Red))
        .valid(accent(AnsiColor::Green))
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "stackgen", "generate", "-s", "postgresql", "-s", "minio", "-o", "out.yml", "-y",
        ])
        .unwrap();

        match cli.command {
            Command::Generate {
                services,
                output,
                yes,
                stdout,
            } => {
                assert_eq!(services, vec!["postgresql", "minio"]);
                assert_eq!(output, Some(PathBuf::from("out.yml")));
                assert!(yes);
                assert!(!stdout);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_init_alias_and_globals() {
        let cli = Cli::try_parse_from(["stackgen", "init", "--config", "c.toml", "-c"]).unwrap();
        assert!(cli.concise);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Command::Generate { .. }));
    }

    #[test]
    fn test_examples_macro() {
        assert!(SERVICES_EXAMPLES.starts_with("Examples:\n  stackgen services"));
        assert!(SERVICES_EXAMPLES.contains("# JSON output for parsing"));
    }
}
