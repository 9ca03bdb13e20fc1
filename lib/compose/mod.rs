//! Service catalog, resolution and manifest assembly.

mod assembler;
mod catalog;
mod manifest;
mod resolver;


//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use assembler::{CredentialSource, assemble};
pub use catalog::{
    CATALOG, EnvTemplate, EnvValue, ServiceTemplate, internal_port, is_known_service, lookup,
    service_ids,
};
pub use manifest::{ComposeManifest, ServiceDefinition};
pub use resolver::{CredentialInput, container_name, resolve};
