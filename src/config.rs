use std::fs;
use std::path::Path;

use crate::util::app_dirs::config_file;

const CONFIG_FILE: &str = "config.toml";

/// User preferences; the file is read if present and never written.
#[derive(Deserialize, PartialEq, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub no_color: Option<bool>,
    pub default_output: Option<String>,
}

impl Config {
    pub fn new() -> Result<Config, String> {
        match config_file(CONFIG_FILE) {
            Some(path) if path.exists() => Config::from_file(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Config, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Could not read config file: {}", e))?;

        Config::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Config, String> {
        toml::from_str(contents).map_err(|e| format!("Could not parse config file: {}", e))
    }
}
