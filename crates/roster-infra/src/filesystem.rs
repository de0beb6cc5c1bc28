//! Data directory layout for Roster.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `ROSTER_DATA_DIR` environment variable
/// 2. `~/.roster` in the user's home directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".roster");
    }

    // Last resort: current directory
    PathBuf::from(".roster")
}

/// Environment variable naming a built front-end directory.
pub const WEB_DIR_ENV: &str = "ROSTER_WEB_DIR";

/// Resolve the front-end directory: the configured `web_dir` first, then
/// `ROSTER_WEB_DIR`. `None` when neither is set.
pub fn resolve_web_dir(configured: Option<&Path>) -> Option<PathBuf> {
    web_dir_from(configured, std::env::var(WEB_DIR_ENV).ok().as_deref())
}

fn web_dir_from(configured: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Path of the configuration file inside a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}
