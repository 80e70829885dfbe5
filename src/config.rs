//! Visualizer configuration loaded from JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors that can occur while loading or validating a [`BarsConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("num_bars must be at least 1")]
    ZeroBars,
    #[error("Output size must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Host-side settings for drawing the spectrum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarsConfig {
    /// Number of bars, i.e. the magnitude buffer length.
    pub num_bars: u32,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Clear color as `#rrggbb` (or `#rrggbbaa`, alpha ignored).
    pub background: String,
}

impl Default for BarsConfig {
    fn default() -> Self {
        Self {
            num_bars: 88,
            width: 1200,
            height: 600,
            background: "#000000".to_string(),
        }
    }
}

impl BarsConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_bars == 0 {
            return Err(ConfigError::ZeroBars);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        self.background_rgb()?;
        Ok(())
    }

    /// Background as linear RGB floats.
    pub fn background_rgb(&self) -> Result<[f32; 3], ConfigError> {
        parse_hex_color(&self.background)
            .ok_or_else(|| ConfigError::InvalidColor(self.background.clone()))
    }

    /// Background as an opaque clear color.
    pub fn clear_color(&self) -> Result<wgpu::Color, ConfigError> {
        let [r, g, b] = self.background_rgb()?;
        Ok(wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        })
    }
}

/// Parse hex color to RGB floats (accepts 6-char RGB or 8-char RGBA, alpha is ignored).
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.trim_start_matches('#');
    if (hex.len() != 6 && hex.len() != 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;
    Some([r, g, b])
}
