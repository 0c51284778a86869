//! Bootstrap settings
//!
//! Read once from `<config_dir>/glshard_editor/config.json` before the window
//! opens. Every field is optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::files::DEFAULT_SHADER_PATH;

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("glshard_editor").join("config.json"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub shader_path: PathBuf,
    pub vsync: bool,
    pub editor_font_size: f32,
    /// TTF used for proportional UI text
    pub ui_font: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "GLShard Editor".to_string(),
            shader_path: PathBuf::from(DEFAULT_SHADER_PATH),
            vsync: true,
            editor_font_size: 14.0,
            ui_font: None,
        }
    }
}

impl EditorConfig {
    /// Load from the user config dir, falling back to defaults on any error
    pub fn load() -> Self {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("No config directory on this platform, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                log::info!("Loading config from {}", path.display());
                Self::from_json_str(&contents)
            }
            Err(e) => {
                log::debug!("No config at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_json_str(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("Malformed config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.width.is_finite() && self.width >= 1.0) {
            self.width = defaults.width;
        }
        if !(self.height.is_finite() && self.height >= 1.0) {
            self.height = defaults.height;
        }
        if !self.editor_font_size.is_finite() {
            self.editor_font_size = defaults.editor_font_size;
        }
        self.editor_font_size = self.editor_font_size.clamp(12.0, 48.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = EditorConfig::default();
        assert_eq!((c.width, c.height), (1280.0, 720.0));
        assert_eq!(c.shader_path, PathBuf::from("shaders/default.fsh"));
        assert!(c.vsync);
        assert!(c.ui_font.is_none());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let c = EditorConfig::from_json_str(r#"{ "width": 1920, "vsync": false }"#);
        assert_eq!(c.width, 1920.0);
        assert_eq!(c.height, 720.0);
        assert!(!c.vsync);
        assert_eq!(c.editor_font_size, 14.0);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(EditorConfig::from_json_str("{ width: "), EditorConfig::default());
    }

    #[test]
    fn test_out_of_range_values_sanitized() {
        let c = EditorConfig::from_json_str(
            r#"{ "width": 0, "height": -5, "editor_font_size": 200 }"#,
        );
        assert_eq!((c.width, c.height), (1280.0, 720.0));
        assert_eq!(c.editor_font_size, 48.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("glshard_editor_no_such_config.json");
        assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
    }
}
