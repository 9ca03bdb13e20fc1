//! Wizard defaults loaded from a TOML configuration file.
//!
//! The file is looked up in order: `--config`, `$STACKGEN_CONFIG`, then
//! `~/.stackgen/config.toml`. Only the last may be absent.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::compose::{CredentialInput, CredentialSource, internal_port};
use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_FILE};
use crate::error::{StackError, StackResult};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Defaults applied to the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WizardConfig {
    /// Output file used when `--output` is not given.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Services selected when none are given on the command line.
    #[serde(default)]
    pub services: Vec<String>,

    /// Per-service credential defaults.
    #[serde(default)]
    pub defaults: BTreeMap<String, ServiceDefaults>,
}

/// Credential defaults for one service.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDefaults {
    pub username: Option<String>,
    pub password: Option<String>,
    pub port: Option<String>,
}

/// Credential source backed by the configuration file, for `--yes` runs.
pub struct ConfiguredCredentials<'a> {
    config: &'a WizardConfig,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl WizardConfig {
    /// Load the configuration, honoring an explicit path first.
    pub fn load(explicit: Option<&Path>) -> StackResult<Self> {
        Self::load_from(
            explicit,
            std::env::var_os(CONFIG_PATH_ENV),
            &DEFAULT_CONFIG_PATH,
        )
    }

    fn load_from(
        explicit: Option<&Path>,
        from_env: Option<OsString>,
        default_path: &Path,
    ) -> StackResult<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "Using configuration from --config");
            return Self::read_required(path);
        }

        if let Some(path) = from_env.filter(|v| !v.is_empty()) {
            let path = PathBuf::from(path);
            tracing::debug!(path = %path.display(), "Using configuration from {}", CONFIG_PATH_ENV);
            return Self::read_required(&path);
        }

        if default_path.exists() {
            tracing::debug!(path = %default_path.display(), "Using default configuration file");
            Self::read_required(default_path)
        } else {
            tracing::debug!("No configuration file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    fn read_required(path: &Path) -> StackResult<Self> {
        if !path.exists() {
            return Err(StackError::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse configuration content; `path` is used for error reporting.
    pub fn parse(content: &str, path: &Path) -> StackResult<Self> {
        toml::from_str(content).map_err(|e| StackError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Defaults for a service, if configured.
    pub fn defaults_for(&self, service: &str) -> Option<&ServiceDefaults> {
        self.defaults.get(service)
    }

    /// Configured username for a service.
    pub fn username(&self, service: &str) -> Option<&str> {
        self.defaults_for(service)?.username.as_deref()
    }

    /// Configured password for a service.
    pub fn password(&self, service: &str) -> Option<&str> {
        self.defaults_for(service)?.password.as_deref()
    }

    /// Host port for a service: configured value, else the service's internal port.
    pub fn port(&self, service: &str) -> String {
        self.defaults_for(service)
            .and_then(|d| d.port.clone())
            .unwrap_or_else(|| internal_port(service).to_string())
    }

    /// Resolve the output path: flag, then configuration, then `docker-compose.yml`.
    pub fn output_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

impl<'a> ConfiguredCredentials<'a> {
    /// Create a source reading from `config`.
    pub fn new(config: &'a WizardConfig) -> Self {
        Self { config }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl std::fmt::Debug for ServiceDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceDefaults")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .finish()
    }
}

impl CredentialSource for ConfiguredCredentials<'_> {
    fn credentials(&mut self, service: &str) -> StackResult<CredentialInput> {
        let username = self.config.username(service).unwrap_or_default();
        let password = self.config.password(service).unwrap_or_else(|| {
            tracing::warn!(service, "No password configured, using an empty one");
            ""
        });

        Ok(CredentialInput::new(
            service,
            username,
            password,
            self.config.port(service),
        ))
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
output = "deploy/docker-compose.yml"
services = ["postgresql", "minio"]

[defaults.postgresql]
username = "app"
password = "secret"
port = "5433"

[defaults.minio]
username = "root"
"#;

    fn sample() -> WizardConfig {
        WizardConfig::parse(SAMPLE, Path::new("config.toml")).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let config = sample();
        assert_eq!(
            config.output,
            Some(PathBuf::from("deploy/docker-compose.yml"))
        );
        assert_eq!(config.services, vec!["postgresql", "minio"]);
        assert_eq!(config.username("postgresql"), Some("app"));
        assert_eq!(config.password("postgresql"), Some("secret"));
        assert_eq!(config.username("minio"), Some("root"));
        assert_eq!(config.password("minio"), None);
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let result = WizardConfig::parse("version = \"3.9\"\n", Path::new("c.toml"));
        assert!(matches!(result, Err(StackError::ConfigParse { .. })));

        let result = WizardConfig::parse(
            "[defaults.mysql]\nuser = \"x\"\n",
            Path::new("c.toml"),
        );
        assert!(matches!(result, Err(StackError::ConfigParse { .. })));
    }

    #[test]
    fn test_port_defaults_to_internal_port() {
        let config = sample();
        assert_eq!(config.port("postgresql"), "5433");
        assert_eq!(config.port("minio"), "9000");
        assert_eq!(config.port("mysql"), "3306");
        assert_eq!(config.port("redis"), "80");
    }

    #[test]
    fn test_output_path_precedence() {
        let config = sample();
        assert_eq!(
            config.output_path(Some(PathBuf::from("x.yml"))),
            PathBuf::from("x.yml")
        );
        assert_eq!(
            config.output_path(None),
            PathBuf::from("deploy/docker-compose.yml")
        );
        assert_eq!(
            WizardConfig::default().output_path(None),
            PathBuf::from("docker-compose.yml")
        );
    }

    #[test]
    fn test_load_precedence() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("explicit.toml");
        let from_env = dir.path().join("env.toml");
        let default = dir.path().join("default.toml");
        std::fs::write(&explicit, "services = [\"mysql\"]\n").unwrap();
        std::fs::write(&from_env, "services = [\"mssql\"]\n").unwrap();
        std::fs::write(&default, "services = [\"minio\"]\n").unwrap();

        let config =
            WizardConfig::load_from(Some(&explicit), Some(from_env.clone().into()), &default)
                .unwrap();
        assert_eq!(config.services, vec!["mysql"]);

        let config = WizardConfig::load_from(None, Some(from_env.into()), &default).unwrap();
        assert_eq!(config.services, vec!["mssql"]);

        let config = WizardConfig::load_from(None, Some(OsString::new()), &default).unwrap();
        assert_eq!(config.services, vec!["minio"]);
    }

    #[test]
    fn test_load_missing_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");

        let config = WizardConfig::load_from(None, None, &missing).unwrap();
        assert_eq!(config, WizardConfig::default());

        let result = WizardConfig::load_from(Some(&missing), None, &missing);
        assert!(matches!(result, Err(StackError::ConfigNotFound(_))));

        let result = WizardConfig::load_from(None, Some(missing.clone().into()), &missing);
        assert!(matches!(result, Err(StackError::ConfigNotFound(_))));
    }

    #[test]
    fn test_configured_credentials() {
        let config = sample();
        let mut source = ConfiguredCredentials::new(&config);

        let pg = source.credentials("postgresql").unwrap();
        assert_eq!(pg, CredentialInput::new("postgresql", "app", "secret", "5433"));

        let minio = source.credentials("minio").unwrap();
        assert_eq!(minio, CredentialInput::new("minio", "root", "", "9000"));

        let unknown = source.credentials("redis").unwrap();
        assert_eq!(unknown, CredentialInput::new("redis", "", "", "80"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = sample();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
