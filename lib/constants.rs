//! Constants for stackgen.
//!
//! Paths, file names and environment variables used across the crate.

use std::path::PathBuf;
use std::sync::LazyLock;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Compose file format version written to every manifest.
pub const COMPOSE_FORMAT_VERSION: &str = "3.8";

/// Default output file, relative to the current directory.
pub const DEFAULT_OUTPUT_FILE: &str = "docker-compose.yml";

/// Internal port used for services outside the catalog.
pub const FALLBACK_INTERNAL_PORT: u16 = 80;

/// Environment variable for a custom configuration file.
pub const CONFIG_PATH_ENV: &str = "STACKGEN_CONFIG";

/// Configuration file name inside the home directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default home directory for stackgen configuration.
pub static DEFAULT_HOME_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    dirs::home_dir()
        .map(|h| h.join(".stackgen"))
        .unwrap_or_else(|| PathBuf::from(".stackgen"))
});

/// Default path for the configuration file.
pub static DEFAULT_CONFIG_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| DEFAULT_HOME_PATH.join(CONFIG_FILE_NAME));
