//! UI Configuration for the tic-tac-toe window
//!
//! Window geometry, frame rate and every colour the board is drawn with.
//! Loaded from a JSON file when one is given; command-line flags are applied
//! on top by the binary.

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Smallest window side that still leaves room for the marks
pub const MIN_WINDOW_SIZE: f32 = 90.0;

/// Complete UI configuration for the game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Board visual configuration
    pub board: BoardConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Side of the square, non-resizable window in points
    pub size: f32,
    /// Frames per second the loop repaints at
    pub target_fps: u32,
    /// Show the result instead of closing when the game ends
    pub keep_open: bool,
    /// Background color
    pub background_color: SerializableColor,
}

/// Board visual configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Grid line color
    pub grid_color: SerializableColor,
    /// Grid line width
    pub grid_line_width: f32,
    /// Cross color
    pub x_color: SerializableColor,
    /// Nought color
    pub o_color: SerializableColor,
    /// Width of the cross strokes
    pub mark_line_width: f32,
    /// Hover outline color
    pub hover_color: SerializableColor,
    /// Hover outline width
    pub hover_line_width: f32,
    /// Hover corner rounding as a fraction of half the cell
    pub hover_roundness: f32,
    /// Inset of the hover box and nought ring from the cell edge
    pub offset: f32,
    /// Color of the stroke through a winning line
    pub win_line_color: SerializableColor,
}

/// Serializable color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_array();
        Self { r, g, b, a }
    }
}

impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Errors loading, saving or validating a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Window size {0} is below the minimum of {min}", min = MIN_WINDOW_SIZE)]
    WindowTooSmall(f32),

    #[error("Target frame rate must be at least 1")]
    ZeroFrameRate,

    #[error("Offset {offset} does not fit in a cell of size {cell}")]
    OffsetTooLarge { offset: f32, cell: f32 },
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tic-tac-toe".to_string(),
            size: 640.0,
            target_fps: 60,
            keep_open: false,
            background_color: Color32::WHITE.into(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_color: Color32::BLACK.into(),
            grid_line_width: 1.0,
            x_color: Color32::from_rgb(230, 41, 55).into(), // Red
            o_color: Color32::from_rgb(0, 121, 241).into(), // Blue
            mark_line_width: 1.0,
            hover_color: Color32::from_rgb(0, 121, 241).into(),
            hover_line_width: 1.0,
            hover_roundness: 0.15,
            offset: 20.0,
            win_line_color: Color32::from_rgb(51, 51, 51).into(),
        }
    }
}

impl UiConfig {
    /// Load config from file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject values the renderer cannot draw sensibly
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.size.is_nan() || self.window.size < MIN_WINDOW_SIZE {
            return Err(ConfigError::WindowTooSmall(self.window.size));
        }

        if self.window.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        // The nought ring has radius cell/2 - offset and must stay positive.
        let cell = self.cell_size();
        if self.board.offset < 0.0 || self.board.offset >= cell / 2.0 {
            return Err(ConfigError::OffsetTooLarge {
                offset: self.board.offset,
                cell,
            });
        }

        Ok(())
    }

    /// Side of one cell
    pub fn cell_size(&self) -> f32 {
        self.window.size / tictactoe_core::BOARD_COLUMNS as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.window.size, 640.0);
        assert_eq!(config.window.target_fps, 60);
        assert_eq!(config.window.title, "Tic-tac-toe");
        assert!(!config.window.keep_open);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_color_conversion() {
        let egui_color = Color32::from_rgb(100, 150, 200);
        let ser_color: SerializableColor = egui_color.into();
        let back_color: Color32 = ser_color.into();
        assert_eq!(egui_color, back_color);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = UiConfig::default();
        config.window.size = 60.0;
        assert!(matches!(config.validate(), Err(ConfigError::WindowTooSmall(_))));
        assert_eq!(
            ConfigError::WindowTooSmall(60.0).to_string(),
            format!("Window size 60 is below the minimum of {}", MIN_WINDOW_SIZE)
        );

        let mut config = UiConfig::default();
        config.window.target_fps = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroFrameRate)));

        let mut config = UiConfig::default();
        config.board.offset = config.cell_size() / 2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OffsetTooLarge { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: UiConfig =
            serde_json::from_str(r#"{ "window": { "keep_open": true } }"#).unwrap();
        assert!(config.window.keep_open);
        assert_eq!(config.window.size, 640.0);
        assert_eq!(config.board, BoardConfig::default());
    }
}
