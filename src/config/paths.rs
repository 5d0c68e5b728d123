// Filesystem locations for config and logs.
// Resolved through the platform project directories, with an env override for the config file.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Env var that points at an explicit config file.
pub const CONFIG_ENV: &str = "BUSOPS_CONFIG";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "busops")
}

/// Base config directory (~/.config/busops on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Base cache directory (~/.cache/busops on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Config file path. `BUSOPS_CONFIG` wins over the platform default.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
        return Some(path);
    }
    config_dir().map(|dir| dir.join("config.json"))
}

/// Default log file. The terminal belongs to the UI, so logs go here.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("busops.log"))
}
