use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::constants::{DEFAULT_FILL_RADIUS, DEFAULT_TILE_PIXEL_SIZE, MAX_RECENT_MAPS};
use crate::map::DisplayMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config serialization error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Edge length in pixels of one rendered cell
    #[serde(default = "default_tile_pixel_size")]
    pub tile_pixel_size: u32,

    #[serde(default = "default_true")]
    pub show_tiles: bool,

    #[serde(default = "default_true")]
    pub show_objects: bool,

    /// Cells on each side of the clicked cell a flood fill may reach
    #[serde(default = "default_fill_radius")]
    pub fill_radius: u32,

    /// Last opened map file path (not auto-loaded, just remembered for quick access)
    #[serde(default)]
    pub last_map_path: Option<PathBuf>,

    /// Recently opened maps, most recent first
    #[serde(default)]
    pub recent_maps: Vec<PathBuf>,
}

fn default_tile_pixel_size() -> u32 {
    DEFAULT_TILE_PIXEL_SIZE
}

fn default_fill_radius() -> u32 {
    DEFAULT_FILL_RADIUS
}

fn default_true() -> bool {
    true
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            tile_pixel_size: DEFAULT_TILE_PIXEL_SIZE,
            show_tiles: true,
            show_objects: true,
            fill_radius: DEFAULT_FILL_RADIUS,
            last_map_path: None,
            recent_maps: Vec::new(),
        }
    }
}

impl AppConfigData {
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::new(self.show_tiles, self.show_objects)
    }
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Settings file; `None` keeps settings in memory only
    pub config_path: Option<PathBuf>,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: None,
            dirty: false,
        }
    }
}

impl AppConfig {
    /// Remember `path` as the last opened map and move it to the front of
    /// the recent list.
    pub fn push_recent_map(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();

        // Remove if already in list (to move it to front)
        self.data.recent_maps.retain(|p| p != &path);
        self.data.recent_maps.insert(0, path.clone());
        self.data.recent_maps.truncate(MAX_RECENT_MAPS);

        self.data.last_map_path = Some(path);
        self.dirty = true;
    }

    /// Save if anything changed since the last save.
    pub fn save_if_dirty(&mut self) -> Result<(), ConfigError> {
        if self.dirty {
            save_config(self)?;
            self.dirty = false;
        }
        Ok(())
    }
}

/// Result of loading config from disk
#[derive(Debug)]
pub struct LoadConfigResult {
    pub config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    pub reset_reason: Option<String>,
}

/// Load configuration from the platform config location. Without one the
/// defaults are used and nothing is saved.
pub fn load_config() -> LoadConfigResult {
    match crate::paths::config_file() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("No config directory available; settings will not be saved");
            LoadConfigResult {
                config: AppConfig::default(),
                reset_reason: None,
            }
        }
    }
}

/// Load configuration from `config_path`, falling back to defaults.
pub fn load_config_from(config_path: &Path) -> LoadConfigResult {
    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path: Some(config_path.to_path_buf()),
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to its file. A config without a file is left unsaved.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let Some(path) = &config.config_path else {
        debug!("Config has no file; not saving");
        return Ok(());
    };
    let json = serde_json::to_string_pretty(&config.data)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    info!("Config saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.tile_pixel_size, 36);
        assert_eq!(data.fill_radius, 25);
        assert_eq!(data.display_mode(), DisplayMode::ALL);
        assert!(data.recent_maps.is_empty());
        assert!(data.last_map_path.is_none());
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            tile_pixel_size: 24,
            show_tiles: false,
            show_objects: true,
            fill_radius: 10,
            last_map_path: Some(PathBuf::from("/maps/town.cmp")),
            recent_maps: vec![PathBuf::from("/maps/town.cmp"), PathBuf::from("/maps/cave.map")],
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: AppConfigData = serde_json::from_str(r#"{"show_objects": false}"#).unwrap();
        assert_eq!(parsed.tile_pixel_size, DEFAULT_TILE_PIXEL_SIZE);
        assert!(parsed.show_tiles);
        assert!(!parsed.show_objects);
    }

    #[test]
    fn test_push_recent_map_dedups_and_caps() {
        let mut config = AppConfig::default();
        for i in 0..7 {
            config.push_recent_map(format!("map{}.map", i));
        }
        config.push_recent_map("map4.map");

        let recent = &config.data.recent_maps;
        assert_eq!(recent.len(), MAX_RECENT_MAPS);
        assert_eq!(recent[0], PathBuf::from("map4.map"));
        assert_eq!(recent.iter().filter(|p| p.ends_with("map4.map")).count(), 1);
        assert_eq!(config.data.last_map_path, Some(PathBuf::from("map4.map")));
        assert!(config.dirty);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("config.json"));
        assert!(result.reset_reason.is_none());
        assert_eq!(result.config.data, AppConfigData::default());
    }

    #[test]
    fn test_load_corrupted_file_reports_reason() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_config_from(&path);
        assert!(result.reset_reason.unwrap().contains("corrupted"));
        assert_eq!(result.config.data, AppConfigData::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = load_config_from(&path).config;
        config.data.fill_radius = 5;
        config.push_recent_map("a.cmp");
        config.save_if_dirty().unwrap();
        assert!(!config.dirty);

        let reloaded = load_config_from(&path);
        assert_eq!(reloaded.config.data, config.data);
    }

    #[test]
    fn test_in_memory_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        assert!(config.config_path.is_none());

        config.push_recent_map(dir.path().join("a.map"));
        config.save_if_dirty().unwrap();
        assert!(!config.dirty);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_loaded_config_remembers_its_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let result = load_config_from(&path);
        assert_eq!(result.config.config_path.as_deref(), Some(path.as_path()));
    }
}
