//! Writing manifests to disk.
//!
//! The manifest is encoded in full before the filesystem is touched, then
//! written to a temporary file next to the destination and renamed over it.
//! An existing file is therefore either replaced whole or left untouched.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::compose::ComposeManifest;
use crate::error::{StackError, StackResult};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Encode `manifest` as YAML and write it to `path`.
pub fn write_manifest(manifest: &ComposeManifest, path: &Path) -> StackResult<()> {
    let yaml = manifest.to_yaml()?;
    write_atomic(path, yaml.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = yaml.len(), "Wrote manifest");
    Ok(())
}

/// Replace `path` with `contents` via a temporary file in the same directory.
fn write_atomic(path: &Path, contents: &[u8]) -> StackResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir).map_err(|e| StackError::write(path, e))?;

    // Dropping `file` on any early return removes the temporary.
    let mut file = NamedTempFile::new_in(dir).map_err(|e| StackError::write(path, e))?;
    file.write_all(contents)
        .and_then(|_| file.flush())
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| StackError::write(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o644))
            .map_err(|e| StackError::write(path, e))?;
    }

    file.persist(path)
        .map_err(|e| StackError::write(path, e.error))?;

    Ok(())
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{CredentialInput, assemble};
    use crate::error::StackResult;
    use tempfile::TempDir;

    fn sample_manifest() -> ComposeManifest {
        let mut source = |service: &str| -> StackResult<CredentialInput> {
            Ok(CredentialInput::new(service, "user", "pass", "8080"))
        };
        assemble(&["postgresql", "minio"], &mut source).unwrap()
    }

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docker-compose.yml");

        let manifest = sample_manifest();
        write_manifest(&manifest, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(ComposeManifest::from_yaml(&content).unwrap(), manifest);
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docker-compose.yml");
        std::fs::write(&path, "old: content\n").unwrap();

        write_manifest(&sample_manifest(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old: content"));
        assert!(content.contains("postgresql-container"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deploy/local/docker-compose.yml");

        write_manifest(&sample_manifest(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_leaves_no_temporaries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docker-compose.yml");

        write_manifest(&sample_manifest(), &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("docker-compose.yml")]);
    }

    #[test]
    fn test_write_failure_keeps_existing_target() {
        let dir = TempDir::new().unwrap();
        // A directory at the destination cannot be replaced by a file.
        let path = dir.path().join("docker-compose.yml");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep.txt"), "keep").unwrap();

        let result = write_manifest(&sample_manifest(), &path);
        assert!(matches!(result, Err(StackError::Write { .. })));
        assert!(path.join("keep.txt").exists());

        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
