//! Locations of the editor's settings and log files.
//!
//! Settings live in `tilemap-editor/config.json` under the platform config
//! directory (`~/.config` on Linux, `%APPDATA%` on Windows, `~/Library/Application
//! Support` on macOS) unless `TILEMAP_EDITOR_CONFIG` names another file. Nothing
//! is ever written to the working directory.

use std::ffi::OsString;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "tilemap-editor";

/// Environment variable overriding the settings file location
pub const CONFIG_ENV_VAR: &str = "TILEMAP_EDITOR_CONFIG";

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const LOG_FILE_NAME: &str = "tilemap-editor.log";

/// Settings file, or `None` when the platform has no config directory and no
/// override is set.
pub fn config_file() -> Option<PathBuf> {
    resolve_config_file(std::env::var_os(CONFIG_ENV_VAR), dirs::config_dir())
}

fn resolve_config_file(
    env_override: Option<OsString>,
    platform_config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    match env_override {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => platform_config_dir.map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
    }
}

/// Log file used by `--log`: the platform state directory where one exists
/// (Linux), the local data directory elsewhere.
pub fn default_log_file() -> Option<PathBuf> {
    log_file_under(dirs::state_dir().or_else(dirs::data_local_dir))
}

fn log_file_under(base: Option<PathBuf>) -> Option<PathBuf> {
    base.map(|dir| dir.join(APP_DIR_NAME).join("logs").join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let path = resolve_config_file(
            Some(OsString::from("/tmp/other.json")),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(path, Some(PathBuf::from("/tmp/other.json")));
    }

    #[test]
    fn test_empty_override_falls_back_to_platform_dir() {
        let path = resolve_config_file(Some(OsString::new()), Some(PathBuf::from("/home/u/.config")));
        assert_eq!(
            path,
            Some(PathBuf::from("/home/u/.config/tilemap-editor/config.json"))
        );
    }

    #[test]
    fn test_no_location_without_platform_dir() {
        assert_eq!(resolve_config_file(None, None), None);
        assert_eq!(log_file_under(None), None);
    }

    #[test]
    fn test_log_file_layout() {
        let path = log_file_under(Some(PathBuf::from("/state"))).unwrap();
        assert!(path.starts_with("/state/tilemap-editor/logs"));
        assert!(path.ends_with(LOG_FILE_NAME));
    }
}
