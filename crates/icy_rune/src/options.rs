use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

const OPTIONS_FILE: &str = "options.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Runeset file used when no `--path` is given
    pub default_path: Option<PathBuf>,

    /// Filler drawn between glyph previews in the overview
    pub separator: char,

    /// Editing grid character for a set pixel
    pub pixel_on: char,

    /// Editing grid character for a clear pixel
    pub pixel_off: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_path: None,
            separator: '▞',
            pixel_on: '█',
            pixel_off: ' ',
        }
    }
}

impl Options {
    pub fn load_options() -> Self {
        let Some(config_dir) = Self::get_config_dir() else {
            return Self::default();
        };
        let options_file = config_dir.join(OPTIONS_FILE);
        if !options_file.exists() {
            return Self::default();
        }
        match fs::read_to_string(&options_file) {
            Ok(txt) => Self::from_toml(&txt),
            Err(err) => {
                log::error!("Error reading options file: {}", err);
                Self::default()
            }
        }
    }

    /// Parse options, falling back to defaults on malformed input.
    pub fn from_toml(txt: &str) -> Self {
        match toml::from_str(txt) {
            Ok(options) => options,
            Err(err) => {
                log::error!("Error parsing options file: {}", err);
                Self::default()
            }
        }
    }

    /// Returns the configuration directory path, creating it if needed.
    pub fn get_config_dir() -> Option<PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("com", "GitHub", "icy_rune")?;
        let dir = proj_dirs.config_dir().to_path_buf();
        if !dir.exists() && fs::create_dir_all(&dir).is_err() {
            log::error!("Can't create configuration directory {:?}", dir);
            return None;
        }
        Some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Options::from_toml(""), Options::default());
    }

    #[test]
    fn test_partial_file() {
        let options = Options::from_toml("default_path = \"/tmp/font.bin\"\npixel_on = \"#\"\n");
        assert_eq!(options.default_path, Some(PathBuf::from("/tmp/font.bin")));
        assert_eq!(options.pixel_on, '#');
        assert_eq!(options.separator, '▞');
        assert_eq!(options.pixel_off, ' ');
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        assert_eq!(Options::from_toml("separator = 42"), Options::default());
    }
}
