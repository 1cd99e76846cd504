/*
 *  config.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  Board construction configuration: YAML loading and validation.
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::VERTICES_PER_CELL;
use crate::glyphs::DEFAULT_GLYPHS;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

fn default_speed() -> f32 {
    0.005
}

fn default_chars() -> String {
    DEFAULT_GLYPHS.to_string()
}

/// Construction parameters for a [`Board`](crate::Board).
///
/// The atlas texture itself is a device handle and is passed to
/// `Board::new` separately; everything declared here is plain data and
/// round-trips through YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Ordered glyph characters matching the atlas layout; the last
    /// entry must be the blank flap.
    #[serde(default = "default_chars")]
    pub chars: String,
    pub rows: usize,
    pub cols: usize,
    /// Animation-progress gain per unit of elapsed time.
    #[serde(default = "default_speed")]
    pub speed: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            chars: default_chars(),
            rows: 1,
            cols: 16,
            speed: default_speed(),
        }
    }
}

impl BoardConfig {
    /// Loads and validates a config from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let cfg: Self = serde_yaml::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Validation(format!(
                "grid must be non-empty, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.chars.is_empty() {
            return Err(ConfigError::Validation("glyph set is empty".into()));
        }
        if self.speed <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        // the index buffer addresses vertices with u16
        let vertices = self.rows * self.cols * VERTICES_PER_CELL;
        if vertices > u16::MAX as usize + 1 {
            return Err(ConfigError::Validation(format!(
                "{}x{} grid needs {} vertices, over the 16-bit index limit",
                self.rows, self.cols, vertices
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = BoardConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.speed, 0.005);
        assert!(cfg.chars.ends_with(' '));
    }

    #[test]
    fn rejects_empty_grid() {
        let cfg = BoardConfig { rows: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn rejects_grid_beyond_u16_indexing() {
        let cfg = BoardConfig { rows: 64, cols: 65, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
        let cfg = BoardConfig { rows: 64, cols: 64, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parses_yaml() {
        let cfg: BoardConfig = serde_yaml::from_str("rows: 2\ncols: 12\n").unwrap();
        assert_eq!(cfg.rows, 2);
        assert_eq!(cfg.cols, 12);
        assert_eq!(cfg.speed, 0.005);
        assert_eq!(cfg.chars, DEFAULT_GLYPHS);
    }
}
