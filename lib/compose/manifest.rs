//! Compose manifest types for serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::COMPOSE_FORMAT_VERSION;
use crate::error::StackResult;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A single service entry of a compose manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Container image reference (empty for services outside the catalog).
    #[serde(default)]
    pub image: String,

    /// Container name.
    #[serde(default)]
    pub container_name: String,

    /// Environment entries as `KEY=VALUE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,

    /// Port mappings as `host:container`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,

    /// Volume mappings as `host-path:container-path`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
}

/// The top-level `docker-compose.yml` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeManifest {
    /// Compose file format version.
    pub version: String,

    /// Service definitions keyed by service identifier.
    #[serde(default)]
    pub services: BTreeMap<String, ServiceDefinition>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ComposeManifest {
    /// Create an empty manifest at the current format version.
    pub fn new() -> Self {
        Self {
            version: COMPOSE_FORMAT_VERSION.to_string(),
            services: BTreeMap::new(),
        }
    }

    /// Insert a service, returning the definition it replaced if any.
    pub(crate) fn insert(
        &mut self,
        id: impl Into<String>,
        service: ServiceDefinition,
    ) -> Option<ServiceDefinition> {
        self.services.insert(id.into(), service)
    }

    /// Get a service by identifier.
    pub fn service(&self, id: &str) -> Option<&ServiceDefinition> {
        self.services.get(id)
    }

    /// Number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the manifest has no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Encode as YAML.
    pub fn to_yaml(&self) -> StackResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Decode from YAML.
    pub fn from_yaml(content: &str) -> StackResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl Default for ComposeManifest {
    fn default() -> Self {
        Self::new()
    }
}
