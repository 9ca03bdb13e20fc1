//! Command handlers.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::compose::{CATALOG, ComposeManifest, assemble, is_known_service, service_ids};
use crate::concise::{Output, format_service_list};
use crate::config::{ConfiguredCredentials, WizardConfig};
use crate::error::{StackError, StackResult};
use crate::output::ServiceSummary;
use crate::prompt::{PromptCredentials, begin_wizard, finish_wizard, prompt_services};
use crate::suggest::{find_similar_services, format_suggestions};
use crate::writer::write_manifest;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Options for `stackgen generate`.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Services given with `--service`.
    pub services: Vec<String>,
    /// Output path given with `--output`.
    pub output: Option<PathBuf>,
    /// Run without prompts.
    pub yes: bool,
    /// Print instead of writing.
    pub stdout: bool,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Run the wizard and emit the manifest.
pub fn generate(
    options: GenerateOptions,
    config_path: Option<&Path>,
    output: Output,
) -> StackResult<()> {
    let config = WizardConfig::load(config_path)?;

    let manifest = if options.yes {
        let services = non_interactive_services(&options.services, &config)?;
        warn_unknown_services(&services, output);
        assemble(&services, &mut ConfiguredCredentials::new(&config))?
    } else {
        warn_unknown_services(&options.services, output);
        begin_wizard()?;
        let services = if options.services.is_empty() {
            prompt_services(&config.services)?
        } else {
            options.services
        };
        tracing::info!(?services, "Selected services");
        let manifest = assemble(&services, &mut PromptCredentials::new(&config))?;
        finish_wizard(manifest.len())?;
        manifest
    };

    if options.stdout {
        print!("{}", manifest.to_yaml()?);
        return Ok(());
    }

    let path = config.output_path(options.output);
    tracing::info!(path = %path.display(), services = manifest.len(), "Writing manifest");
    write_manifest(&manifest, &path)?;
    report_written(&manifest, &path, output);

    Ok(())
}

/// List the service catalog.
pub fn list_services(json: bool, output: Output) -> StackResult<()> {
    let summaries: Vec<ServiceSummary> = CATALOG.iter().map(ServiceSummary::from).collect();

    if json {
        return output.json(&summaries);
    }

    if output.concise {
        println!("{}", format_service_list(&summaries, output.no_header));
        return Ok(());
    }

    let width = summaries.iter().map(|s| s.id.len()).max().unwrap_or(0);
    println!();
    println!("  {}", "Available services".bold());
    println!();
    for s in &summaries {
        println!(
            "    {:width$}  {}  {}",
            s.id.bright_cyan(),
            s.image.dimmed(),
            format!(":{}", s.port).dimmed(),
            width = width
        );
        println!("    {:width$}  {}", "", s.description, width = width);
    }
    println!();

    Ok(())
}

/// Services for a `--yes` run: flags first, then the configuration.
fn non_interactive_services(flags: &[String], config: &WizardConfig) -> StackResult<Vec<String>> {
    if !flags.is_empty() {
        return Ok(flags.to_vec());
    }
    if !config.services.is_empty() {
        return Ok(config.services.clone());
    }
    Err(StackError::NoServices)
}

/// Warn about identifiers outside the catalog; they still resolve to a minimal definition.
fn warn_unknown_services(services: &[String], output: Output) {
    for service in services.iter().filter(|s| !is_known_service(s)) {
        let suggestions = find_similar_services(service, service_ids());
        tracing::warn!(service = %service, ?suggestions, "Service is not in the catalog");

        let mut message = format!(
            "'{}' is not a known service; it will be added without an image",
            service
        );
        if let Some(hint) = format_suggestions(&suggestions) {
            message.push_str(". ");
            message.push_str(&hint);
        }
        output.warn(&message);
    }
}

fn report_written(manifest: &ComposeManifest, path: &Path, output: Output) {
    if output.concise {
        println!("{}", path.display());
        return;
    }

    output.blank();
    output.success(&format!(
        "Docker Compose file generated at {}",
        path.display().to_string().bright_white()
    ));
    for (id, service) in &manifest.services {
        output.progress(&format!(
            "{} {}",
            id.bright_cyan(),
            service.ports.join(", ").dimmed()
        ));
    }
    output.blank();
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_services_prefers_flags() {
        let config = WizardConfig::parse("services = [\"mysql\"]\n", Path::new("c.toml")).unwrap();

        let flags = vec!["minio".to_string()];
        assert_eq!(
            non_interactive_services(&flags, &config).unwrap(),
            vec!["minio"]
        );
        assert_eq!(
            non_interactive_services(&[], &config).unwrap(),
            vec!["mysql"]
        );
    }

    #[test]
    fn test_non_interactive_services_requires_selection() {
        let result = non_interactive_services(&[], &WizardConfig::default());
        assert!(matches!(result, Err(StackError::NoServices)));
    }

    #[test]
    fn test_generate_non_interactive_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        let out_path = dir.path().join("compose.yml");
        std::fs::write(
            &config_path,
            "[defaults.postgresql]\nusername = \"app\"\npassword = \"pw\"\nport = \"6543\"\n",
        )
        .unwrap();

        let options = GenerateOptions {
            services: vec!["postgresql".to_string(), "mysql".to_string()],
            output: Some(out_path.clone()),
            yes: true,
            stdout: false,
        };
        generate(options, Some(&config_path), Output::new(true, true)).unwrap();

        let manifest =
            ComposeManifest::from_yaml(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
        assert_eq!(manifest.len(), 2);

        let pg = manifest.service("postgresql").unwrap();
        assert_eq!(pg.ports, vec!["6543:5432"]);
        assert_eq!(pg.environment[0], "POSTGRES_USER=app");
        assert_eq!(pg.environment[1], "POSTGRES_PASSWORD=pw");

        let mysql = manifest.service("mysql").unwrap();
        assert_eq!(mysql.ports, vec!["3306:3306"]);
    }
}
