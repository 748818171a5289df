//! Map configuration documents

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    error::MapError,
    map::{
        DEFAULT_HEIGHT, DEFAULT_HILL_SIZE, DEFAULT_MAX_SPAWN_ATTEMPTS, DEFAULT_NUM_HILLS,
        DEFAULT_WIDTH,
    },
    MapGenerator,
};

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_num_hills() -> u32 {
    DEFAULT_NUM_HILLS
}

fn default_hill_size() -> f64 {
    DEFAULT_HILL_SIZE
}

fn default_max_spawn_attempts() -> u32 {
    DEFAULT_MAX_SPAWN_ATTEMPTS
}

fn default_cell_size() -> u32 {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub name: String,
    pub seed: u64,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_num_hills")]
    pub num_hills: u32,
    #[serde(default = "default_hill_size")]
    pub hill_size: f64,
    #[serde(default = "default_max_spawn_attempts")]
    pub max_spawn_attempts: u32,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    /// PNG path; `<name>.png` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl MapConfig {
    /// Configuration matching the classic 100x80, four hill-pair map.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            seed,
            width: default_width(),
            height: default_height(),
            num_hills: default_num_hills(),
            hill_size: default_hill_size(),
            max_spawn_attempts: default_max_spawn_attempts(),
            render: RenderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.render
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.png", self.name)))
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse map config")
    }

    pub fn to_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self).context("Failed to serialize map config")?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write map config {}", path.display()))
    }

    /// Checks everything the generator would reject, without building it.
    pub fn validate(&self) -> Result<(), MapError> {
        MapGenerator::from_config(self).map(|_| ())
    }
}

pub struct MapConfigLoader {
    base_dir: PathBuf,
}

impl MapConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<MapConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read map config {}", path.display()))?;
        let config: MapConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config = MapConfig::from_yaml_str("name: arena\nseed: 3\n").unwrap();
        assert_eq!(config, MapConfig::new("arena", 3));
        assert_eq!(config.render.cell_size, 20);
        assert_eq!(config.render.output, None);
        assert_eq!(config.output_path(), PathBuf::from("arena.png"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = "\
name: small
seed: 9
width: 12
height: 6
num_hills: 0
hill_size: 2.5
render:
  cell_size: 4
";
        let config = MapConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 6);
        assert_eq!(config.num_hills, 0);
        assert_eq!(config.hill_size, 2.5);
        assert_eq!(config.render.cell_size, 4);
        assert_eq!(config.output_path(), PathBuf::from("small.png"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_output_wins_over_name() {
        let yaml = "name: arena\nseed: 1\nrender:\n  output: maps/out.png\n";
        let config = MapConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.output_path(), PathBuf::from("maps/out.png"));
    }

    #[test]
    fn test_missing_seed_is_an_error() {
        assert!(MapConfig::from_yaml_str("name: broken\n").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = MapConfig::new("bad", 1);
        config.height = 0;
        assert_eq!(
            config.validate(),
            Err(MapError::InvalidDimensions {
                width: 100,
                height: 0
            })
        );

        let mut config = MapConfig::new("bad", 1);
        config.hill_size = -3.0;
        assert_eq!(config.validate(), Err(MapError::InvalidHillSize(-3.0)));
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = MapConfig::new("roundtrip", 123);
        config.num_hills = 7;
        config.to_yaml(dir.path().join("map.yaml")).unwrap();

        let loaded = MapConfigLoader::new(dir.path()).load("map.yaml").unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_loader_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MapConfigLoader::new(dir.path()).load("nope.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read map config"));
    }
}
