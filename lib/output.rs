//! Output types for JSON rendering of CLI commands.

use serde::{Deserialize, Serialize};

use crate::compose::ServiceTemplate;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Catalog entry for `stackgen services --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: String,
    pub image: String,
    pub port: u16,
    pub description: String,
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl From<&ServiceTemplate> for ServiceSummary {
    fn from(template: &ServiceTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            image: template.image.to_string(),
            port: template.internal_port,
            description: template.description.to_string(),
        }
    }
}
