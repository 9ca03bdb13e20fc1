//! Assembly of selected services into a compose manifest.

use crate::error::StackResult;

use super::manifest::ComposeManifest;
use super::resolver::{CredentialInput, resolve};

//--------------------------------------------------------------------------------------------------
// Traits
//--------------------------------------------------------------------------------------------------

/// Supplies credentials for a service during assembly.
///
/// Implemented by the interactive prompts, by the configuration file for
/// non-interactive runs, and by any `FnMut(&str) -> StackResult<CredentialInput>`.
pub trait CredentialSource {
    /// Obtain credentials for `service`.
    fn credentials(&mut self, service: &str) -> StackResult<CredentialInput>;
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl<F> CredentialSource for F
where
    F: FnMut(&str) -> StackResult<CredentialInput>,
{
    fn credentials(&mut self, service: &str) -> StackResult<CredentialInput> {
        self(service)
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Build a manifest from the selected services.
///
/// Services are visited in order; a repeated identifier replaces the earlier
/// definition. Any credential failure aborts the whole assembly.
pub fn assemble<S, C>(selected: &[S], source: &mut C) -> StackResult<ComposeManifest>
where
    S: AsRef<str>,
    C: CredentialSource + ?Sized,
{
    let mut manifest = ComposeManifest::new();

    for service in selected {
        let service = service.as_ref();
        let credentials = source.credentials(service)?;
        let definition = resolve(service, &credentials);

        tracing::debug!(
            service,
            image = %definition.image,
            ports = ?definition.ports,
            "Resolved service"
        );

        if manifest.insert(service, definition).is_some() {
            tracing::debug!(service, "Replaced duplicate service definition");
        }
    }

    Ok(manifest)
}
