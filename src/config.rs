use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::render::CodeStyle;

pub const CONFIG_FILE_NAME: &str = ".dtsi18nrc.json";

/// Narrowest comment width the wrapping strategy accepts.
pub const MIN_COMMENT_WIDTH: usize = 10;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,
    #[serde(default = "default_newline")]
    pub newline: String,
    #[serde(default = "default_comment_max_width")]
    pub comment_max_width: usize,
    /// Languages `@example` keys are generated for.
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,
    /// Language comments are rendered in.
    #[serde(default = "default_language")]
    pub language: String,
    /// Referenced files matching these globs, relative to the entry's
    /// directory, are not loaded.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Key map read by `render` and written by `keys` when no path is given.
    #[serde(default = "default_keys_file")]
    pub keys_file: String,
}

fn default_indent_size() -> usize {
    4
}

fn default_newline() -> String {
    "\n".to_string()
}

fn default_comment_max_width() -> usize {
    80
}

fn default_supported_languages() -> Vec<String> {
    vec!["ts".to_string()]
}

fn default_language() -> String {
    "en_us".to_string()
}

fn default_keys_file() -> String {
    "./i18n/keys.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            newline: default_newline(),
            comment_max_width: default_comment_max_width(),
            supported_languages: default_supported_languages(),
            language: default_language(),
            ignores: Vec::new(),
            keys_file: default_keys_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.indent_size == 0 {
            bail!("'indentSize' must be greater than 0");
        }
        if self.newline != "\n" && self.newline != "\r\n" {
            bail!("'newline' must be \"\\n\" or \"\\r\\n\", got {:?}", self.newline);
        }
        if self.comment_max_width < MIN_COMMENT_WIDTH {
            bail!(
                "'commentMaxWidth' must be at least {}, got {}",
                MIN_COMMENT_WIDTH,
                self.comment_max_width
            );
        }
        if self.supported_languages.is_empty() {
            bail!("'supportedLanguages' must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    pub fn code_style(&self) -> CodeStyle {
        CodeStyle {
            indent_size: self.indent_size,
            newline: self.newline.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
