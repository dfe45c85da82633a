//! Settings loaded from TOML
//!
//! Read from ~/.config/termtris/settings.toml (or platform equivalent).
//! The file is optional and never written back.

use crate::clock::DEFAULT_GRAVITY;
use crate::render::Glyphs;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Game settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keybindings
    pub keys: KeyBindings,
    /// Gameplay settings
    pub gameplay: GameplaySettings,
    /// Visual settings
    pub visual: VisualSettings,
}

/// Key bindings (stored as strings for easy editing)
/// Each action can have one or more keys bound to it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    #[serde(deserialize_with = "deserialize_keys")]
    pub move_left: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys")]
    pub move_right: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys")]
    pub soft_drop: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys")]
    pub rotate_cw: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys")]
    pub rotate_ccw: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys")]
    pub hold: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys")]
    pub quit: Vec<String>,
}

/// Deserialize keys as either a single string or array of strings
fn deserialize_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct KeysVisitor;

    impl<'de> Visitor<'de> for KeysVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or array of strings")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut keys = Vec::new();
            while let Some(key) = seq.next_element::<String>()? {
                keys.push(key);
            }
            Ok(keys)
        }
    }

    deserializer.deserialize_any(KeysVisitor)
}

/// Gameplay settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameplaySettings {
    /// Gravity interval in milliseconds
    pub gravity_ms: u64,
    /// Fixed seed for the piece sequence, random when absent
    pub seed: Option<u64>,
}

/// Visual settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisualSettings {
    /// Block style: "square", "solid", "ascii"
    pub block_style: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["Left".to_string()],
            move_right: vec!["Right".to_string()],
            soft_drop: vec!["Down".to_string()],
            rotate_cw: vec!["Up".to_string()],
            rotate_ccw: vec!["a".to_string()],
            hold: vec!["Space".to_string()],
            quit: vec!["q".to_string()],
        }
    }
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            gravity_ms: DEFAULT_GRAVITY.as_millis() as u64,
            seed: None,
        }
    }
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            block_style: "square".to_string(),
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "termtris", "termtris").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(settings) => {
                    debug!(path = %path.display(), "loaded settings");
                    settings
                }
                Err(e) => {
                    warn!(path = %path.display(), "invalid settings, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

impl GameplaySettings {
    pub fn gravity(&self) -> Duration {
        Duration::from_millis(self.gravity_ms.max(1))
    }
}

impl VisualSettings {
    /// Get the block characters based on style
    pub fn glyphs(&self) -> Glyphs {
        match self.block_style.as_str() {
            "solid" => Glyphs {
                filled: '█',
                empty: '·',
            },
            "ascii" => Glyphs {
                filled: '#',
                empty: '.',
            },
            _ => Glyphs::default(), // "square" or unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.keys.hold, vec!["Space"]);
        assert_eq!(settings.keys.rotate_ccw, vec!["a"]);
        assert_eq!(settings.gameplay.gravity(), DEFAULT_GRAVITY);
        assert_eq!(settings.gameplay.seed, None);
        assert_eq!(settings.visual.glyphs(), Glyphs::default());
    }

    #[test]
    fn test_keys_accept_string_or_array() {
        let settings = Settings::from_toml(
            r#"
            [keys]
            hold = "c"
            rotate_cw = ["Up", "x"]
            "#,
        )
        .unwrap();
        assert_eq!(settings.keys.hold, vec!["c"]);
        assert_eq!(settings.keys.rotate_cw, vec!["Up", "x"]);
        // Untouched keys keep their defaults
        assert_eq!(settings.keys.quit, vec!["q"]);
    }

    #[test]
    fn test_gameplay_section() {
        let settings = Settings::from_toml(
            r#"
            [gameplay]
            gravity_ms = 250
            seed = 1234
            "#,
        )
        .unwrap();
        assert_eq!(settings.gameplay.gravity(), Duration::from_millis(250));
        assert_eq!(settings.gameplay.seed, Some(1234));
    }

    #[test]
    fn test_zero_gravity_is_clamped() {
        let settings = Settings::from_toml("[gameplay]\ngravity_ms = 0\n").unwrap();
        assert_eq!(settings.gameplay.gravity(), Duration::from_millis(1));
    }

    #[test]
    fn test_block_styles() {
        let ascii = Settings::from_toml("[visual]\nblock_style = \"ascii\"\n").unwrap();
        assert_eq!(ascii.visual.glyphs(), Glyphs { filled: '#', empty: '.' });
        let unknown = Settings::from_toml("[visual]\nblock_style = \"neon\"\n").unwrap();
        assert_eq!(unknown.visual.glyphs(), Glyphs::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Settings::from_toml("[keys\nhold = ").is_err());
        assert!(Settings::from_toml("[gameplay]\ngravity_ms = \"fast\"\n").is_err());
    }
}
