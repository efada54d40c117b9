//! Configuration system

pub use serde::{Serialize, Deserialize};

use crate::debug::CollisionDebugColors;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Collision engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Also test the axis from the nearest triangle vertex to the circle center
    ///
    /// Without it only edge normals are tested, which can report contact
    /// for circles sitting just off a triangle corner.
    pub closest_vertex_axis: bool,

    /// Emit hit triangles to the renderer when one is supplied
    pub visualize_hits: bool,

    /// Colors and layers for hit visualization
    pub debug: CollisionDebugColors,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            closest_vertex_axis: true,
            visualize_hits: true,
            debug: CollisionDebugColors::default(),
        }
    }
}

impl Config for CollisionConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("collision_engine_{}_{}", std::process::id(), name));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("config.toml");
        let config = CollisionConfig {
            closest_vertex_axis: false,
            ..CollisionConfig::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = CollisionConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("config.ron");
        let mut config = CollisionConfig::default();
        config.debug.outline_layer = 7;

        config.save_to_file(&path).unwrap();
        let loaded = CollisionConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.debug.outline_layer, 7);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CollisionConfig = toml::from_str("visualize_hits = false").unwrap();
        assert!(!config.visualize_hits);
        assert!(config.closest_vertex_axis);
    }

    #[test]
    fn test_unsupported_format() {
        let result = CollisionConfig::default().save_to_file("config.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
