//! Playground settings.
//!
//! Everything has a hardcoded default. An optional `config.json` in the user's config
//! directory can override any subset of the fields.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

const APP_DIR: &str = "glyph-playground";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Explicit font file. When unset the platform candidates are searched.
    pub font_path: Option<PathBuf>,
    pub pixel_size: f32,
    pub character: char,
    pub glyph_color: [f32; 4],
    pub clear_color: [f32; 4],
    pub draw_triangle: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "OpenGL Playground".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            font_path: None,
            pixel_size: 30.0,
            character: 't',
            glyph_color: [1.0, 1.0, 1.0, 1.0],
            clear_color: [0.0, 0.0, 0.0, 1.0],
            draw_triangle: false,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }

    /// Where the optional config file lives, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads the user config, falling back to defaults when there is none.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads `path`. A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&contents).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
    }

    pub fn log_level(&self) -> Result<log::LevelFilter, String> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| format!("Unknown log level '{}'", self.log_level))
    }

    /// The font to open: the explicit path if one is configured, otherwise the first
    /// platform candidate that exists on disk.
    pub fn resolve_font_path(&self) -> Result<PathBuf, String> {
        if let Some(path) = &self.font_path {
            return Ok(path.clone());
        }
        first_existing(&font_candidates())
            .ok_or_else(|| "No font file found; set font_path in the config".to_string())
    }
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

fn font_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if cfg!(target_os = "windows") {
        if let Some(local) = dirs::data_local_dir() {
            candidates.push(local.join(r"Microsoft\Windows\Fonts\Roboto-Regular.ttf"));
        }
        candidates.push(PathBuf::from(r"C:\Windows\Fonts\arial.ttf"));
    } else if cfg!(target_os = "macos") {
        if let Some(fonts) = dirs::font_dir() {
            candidates.push(fonts.join("Roboto-Regular.ttf"));
        }
        candidates.push(PathBuf::from("/Library/Fonts/Arial Unicode.ttf"));
        candidates.push(PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"));
    } else {
        if let Some(fonts) = dirs::font_dir() {
            candidates.push(fonts.join("Roboto-Regular.ttf"));
        }
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/roboto/unhinted/RobotoTTF/Roboto-Regular.ttf",
        ));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        ));
        candidates.push(PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"));
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "glyph-playground-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn defaults_match_the_original_window() {
        let config = Config::default();
        assert_eq!(config.title, "OpenGL Playground");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.character, 't');
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0, 1.0]);
        assert!(!config.draw_triangle);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = Config::from_json(r#"{ "character": "A", "pixel_size": 48.0 }"#).unwrap();
        assert_eq!(config.character, 'A');
        assert_eq!(config.pixel_size, 48.0);
        assert_eq!(config.width, 800);
        assert_eq!(config.title, "OpenGL Playground");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::from_json(r#"{ "fullscreen": true }"#).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ width: 800").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = scratch_dir("missing").join("nope.json");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn file_overrides_are_applied() {
        let path = scratch_dir("load").join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "draw_triangle": true, "log_level": "debug" }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(config.draw_triangle);
        assert_eq!(config.log_level().unwrap(), log::LevelFilter::Debug);
    }

    #[test]
    fn log_level_parsing() {
        let mut config = Config::default();
        assert_eq!(config.log_level().unwrap(), log::LevelFilter::Info);
        config.log_level = "TRACE".to_string();
        assert_eq!(config.log_level().unwrap(), log::LevelFilter::Trace);
        config.log_level = "loud".to_string();
        assert!(config.log_level().is_err());
    }

    #[test]
    fn explicit_font_path_wins() {
        let config = Config {
            font_path: Some(PathBuf::from("/fonts/custom.otf")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_font_path().unwrap(),
            PathBuf::from("/fonts/custom.otf")
        );
    }

    #[test]
    fn first_existing_candidate_is_picked() {
        let dir = scratch_dir("fonts");
        let present = dir.join("present.ttf");
        std::fs::write(&present, b"").unwrap();
        let candidates = vec![dir.join("absent.ttf"), present.clone(), dir.join("later.ttf")];
        assert_eq!(first_existing(&candidates), Some(present));
        assert_eq!(first_existing(&[dir.join("absent.ttf")]), None);
    }

    #[test]
    fn directories_are_not_font_files() {
        let dir = scratch_dir("dirs");
        assert_eq!(first_existing(&[dir]), None);
    }
}
