//! `stackgen` is the primary CLI binary.

use clap::Parser;
use colored::Colorize;
use stackgen::handlers::{self, GenerateOptions};
use stackgen::{CONFIG_PATH_ENV, Cli, Command, Output, StackError, StackResult};
use tracing_subscriber::EnvFilter;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

fn main() {
    // Logging is opt-in so the prompts stay clean.
    init_tracing();

    if let Err(e) = run() {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print an error with appropriate formatting based on error type.
fn print_error(e: &StackError) {
    eprintln!();
    match e {
        StackError::Serialization(err) => {
            eprintln!("  {} Could not encode manifest", "error".bright_red().bold());
            eprintln!();
            eprintln!("    {}", err);
        }
        StackError::Write { path, source } => {
            eprintln!(
                "  {} Could not write {}",
                "error".bright_red().bold(),
                path.display().to_string().bright_white()
            );
            eprintln!();
            eprintln!("    {}", source);
        }
        StackError::ConfigParse { path, message } => {
            eprintln!("  {} Invalid configuration", "error".bright_red().bold());
            eprintln!();
            eprintln!("    {}: {}", "File".dimmed(), path.display());
            for line in message.lines() {
                eprintln!("    {}", line);
            }
        }
        StackError::ConfigNotFound(path) => {
            eprintln!(
                "  {} Configuration file not found",
                "error".bright_red().bold()
            );
            eprintln!();
            eprintln!("    {}: {}", "Searched".dimmed(), path.display());
            eprintln!();
            eprintln!(
                "    {}: Check --config or {}",
                "hint".bright_blue().bold(),
                CONFIG_PATH_ENV.bright_white()
            );
        }
        StackError::NoServices => {
            eprintln!("  {} No services selected", "error".bright_red().bold());
            eprintln!();
            eprintln!(
                "    {}: Pass {} or set {} in the config file",
                "hint".bright_blue().bold(),
                "--service <ID>".bright_white(),
                "services = [...]".bright_white()
            );
        }
        StackError::Cancelled => {
            eprintln!("  {} Operation cancelled", "✗".bright_red());
        }
        _ => {
            eprintln!("  {} {}", "error".bright_red().bold(), e);
        }
    }
    eprintln!();
}

/// Initialize tracing. Only enables logging when RUST_LOG is set.
fn init_tracing() {
    let rust_log_set = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .is_some();

    // Without a subscriber, all tracing events are discarded.
    if !rust_log_set {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run() -> StackResult<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.concise, cli.no_header);

    match cli.command {
        Command::Generate {
            services,
            output: output_path,
            yes,
            stdout,
        } => handlers::generate(
            GenerateOptions {
                services,
                output: output_path,
                yes,
                stdout,
            },
            cli.config.as_deref(),
            output,
        ),

        Command::Services { json } => handlers::list_services(json, output),
    }
}
