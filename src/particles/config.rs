use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::emitter::{DEFAULT_GROWTH_FACTOR, DEFAULT_PARTICLE_SIZE};
use crate::particles::{Angle, Color};

/// Emission parameters of a particle engine
///
/// Everything except the texture, which is a runtime handle. Missing keys
/// in a preset file fall back to the engine defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Rendered particle size in scene units
    pub particle_size: Vec2,
    /// Origin point for new particles
    pub emitter: Vec2,
    /// Mean emission direction (degrees in preset files)
    pub direction: Angle,
    /// Full angular spread around `direction` (degrees in preset files)
    pub dispersion: Angle,
    /// Speed of new particles
    pub velocity: f32,
    /// Particles spawned per second while emitting
    pub respawn_rate: f32,
    /// Extents of the spawn jitter rectangle
    pub respawn_area: Vec2,
    /// Upper bound of the sampled lifetime
    pub lifetime: f32,
    /// Per-frame scale multiplier
    pub exponential_growth: Vec2,
    /// Continuous emission enabled
    pub emitted: bool,
    /// Alpha fades with remaining lifetime
    pub attenuated: bool,
    /// Base color of new particles
    pub color: Color,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            particle_size: Vec2::splat(DEFAULT_PARTICLE_SIZE),
            emitter: Vec2::ZERO,
            direction: Angle::ZERO,
            dispersion: Angle::ZERO,
            velocity: 0.0,
            respawn_rate: 0.0,
            respawn_area: Vec2::ZERO,
            lifetime: 0.0,
            exponential_growth: Vec2::splat(DEFAULT_GROWTH_FACTOR),
            emitted: false,
            attenuated: false,
            color: Color::WHITE,
        }
    }
}

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(ConfigFormat::Json),
            Some("toml") => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Emitter preset loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read emitter preset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML emitter preset: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON emitter preset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported emitter preset format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl EmitterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a preset, picking the format from the file extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match format {
            ConfigFormat::Toml => Self::from_toml_str(&source)?,
            ConfigFormat::Json => Self::from_json_str(&source)?,
        };

        log::info!("Loaded emitter preset: {}", path.display());
        Ok(config)
    }
}
