//! Resolution of a service identifier and credentials into a service definition.

use std::fmt;

use super::catalog;
use super::manifest::ServiceDefinition;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Credentials and host port collected for one service.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialInput {
    /// Service identifier the credentials were collected for.
    pub service: String,
    /// Username (may be empty).
    pub username: String,
    /// Password (may be empty).
    pub password: String,
    /// Host port exposed for the service. Not validated as a number.
    pub port: String,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl CredentialInput {
    /// Create a new credential input.
    pub fn new(
        service: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            username: username.into(),
            password: password.into(),
            port: port.into(),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialInput")
            .field("service", &self.service)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Container name for a service.
pub fn container_name(service: &str) -> String {
    format!("{}-container", service)
}

/// Resolve a service identifier into a complete service definition.
///
/// The first port mapping always exposes `credentials.port` on the service's
/// internal port. Identifiers outside the catalog yield a definition with only
/// the container name and that mapping (on port 80).
pub fn resolve(service: &str, credentials: &CredentialInput) -> ServiceDefinition {
    let mut ports = vec![format!(
        "{}:{}",
        credentials.port,
        catalog::internal_port(service)
    )];

    let Some(template) = catalog::lookup(service) else {
        return ServiceDefinition {
            container_name: container_name(service),
            ports,
            ..Default::default()
        };
    };

    ports.extend(template.extra_ports.iter().map(|p| p.to_string()));

    ServiceDefinition {
        image: template.image.to_string(),
        container_name: container_name(service),
        environment: template
            .environment
            .iter()
            .map(|entry| entry.render(credentials))
            .collect(),
        ports,
        volumes: template.volumes.iter().map(|v| v.to_string()).collect(),
    }
}
