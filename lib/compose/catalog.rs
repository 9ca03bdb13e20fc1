//! Static catalog of the services the wizard knows how to provision.

use crate::constants::FALLBACK_INTERNAL_PORT;

use super::resolver::CredentialInput;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Every service the wizard offers, in prompt order.
pub static CATALOG: &[ServiceTemplate] = &[
    ServiceTemplate {
        id: "minio",
        image: "minio/minio:latest",
        internal_port: 9000,
        environment: &[
            EnvTemplate::username("MINIO_ROOT_USER"),
            EnvTemplate::password("MINIO_ROOT_PASSWORD"),
        ],
        // Web console.
        extra_ports: &["9001:9001"],
        volumes: &["./minio/data:/data"],
        description: "S3-compatible object storage",
    },
    ServiceTemplate {
        id: "postgresql",
        image: "postgres:latest",
        internal_port: 5432,
        environment: &[
            EnvTemplate::username("POSTGRES_USER"),
            EnvTemplate::password("POSTGRES_PASSWORD"),
            EnvTemplate::literal("POSTGRES_DB", "mydatabase"),
        ],
        extra_ports: &[],
        volumes: &["./postgresql/data:/var/lib/postgresql/data"],
        description: "PostgreSQL relational database",
    },
    ServiceTemplate {
        id: "mssql",
        image: "mcr.microsoft.com/mssql/server:2022-latest",
        internal_port: 1433,
        environment: &[
            EnvTemplate::literal("ACCEPT_EULA", "Y"),
            EnvTemplate::password("SA_PASSWORD"),
            EnvTemplate::literal("MSSQL_PID", "Express"),
        ],
        extra_ports: &[],
        volumes: &["./mssql/data:/var/opt/mssql/data"],
        description: "Microsoft SQL Server (Express edition)",
    },
    ServiceTemplate {
        id: "mysql",
        image: "mysql:latest",
        internal_port: 3306,
        environment: &[
            EnvTemplate::password("MYSQL_ROOT_PASSWORD"),
            EnvTemplate::username("MYSQL_USER"),
            EnvTemplate::password("MYSQL_PASSWORD"),
            EnvTemplate::literal("MYSQL_DATABASE", "mydatabase"),
        ],
        extra_ports: &[],
        volumes: &["./mysql/data:/var/lib/mysql"],
        description: "MySQL relational database",
    },
];

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Where an environment entry takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvValue {
    /// Fixed value baked into the catalog.
    Literal(&'static str),
    /// The username supplied for the service.
    Username,
    /// The password supplied for the service.
    Password,
}

/// One `KEY=VALUE` entry of a service's environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvTemplate {
    /// Variable name.
    pub key: &'static str,
    /// Value source.
    pub value: EnvValue,
}

/// Definition template for a catalog service.
#[derive(Debug)]
pub struct ServiceTemplate {
    /// Identifier used as the compose service key.
    pub id: &'static str,
    /// Container image reference.
    pub image: &'static str,
    /// Port the service listens on inside the container.
    pub internal_port: u16,
    /// Environment entries, in output order.
    pub environment: &'static [EnvTemplate],
    /// Port mappings appended after the user-facing one.
    pub extra_ports: &'static [&'static str],
    /// Volume mappings.
    pub volumes: &'static [&'static str],
    /// Short description shown in prompts and listings.
    pub description: &'static str,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl EnvTemplate {
    /// Entry with a fixed value.
    pub const fn literal(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value: EnvValue::Literal(value),
        }
    }

    /// Entry filled with the username.
    pub const fn username(key: &'static str) -> Self {
        Self {
            key,
            value: EnvValue::Username,
        }
    }

    /// Entry filled with the password.
    pub const fn password(key: &'static str) -> Self {
        Self {
            key,
            value: EnvValue::Password,
        }
    }

    /// Render as `KEY=VALUE` using the given credentials.
    pub fn render(&self, credentials: &CredentialInput) -> String {
        let value = match self.value {
            EnvValue::Literal(v) => v,
            EnvValue::Username => credentials.username.as_str(),
            EnvValue::Password => credentials.password.as_str(),
        };
        format!("{}={}", self.key, value)
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Look up a catalog entry by identifier.
pub fn lookup(id: &str) -> Option<&'static ServiceTemplate> {
    CATALOG.iter().find(|t| t.id == id)
}

/// Check whether an identifier belongs to the catalog.
pub fn is_known_service(id: &str) -> bool {
    lookup(id).is_some()
}

/// Identifiers of every catalog service, in prompt order.
pub fn service_ids() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|t| t.id)
}

/// Internal container port for a service (80 for anything outside the catalog).
pub fn internal_port(id: &str) -> u16 {
    lookup(id).map_or(FALLBACK_INTERNAL_PORT, |t| t.internal_port)
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
