use crate::clipboard::DEFAULT_HOLD_DURATION;
use crate::commands::DEFAULT_ACK_DURATION;
use crate::error::ConfigError;
use crate::form::FieldSchema;
use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Form schema revision: "v1" or "v2"
    #[serde(default = "default_schema")]
    pub schema: String,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

fn default_schema() -> String {
    "v2".into()
}

// ── Storage ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding saved drafts (default: `storage/` next to config.toml)
    #[serde(default)]
    pub dir: Option<String>,
}

// ── Prompt ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Directory of `<template>.tera` overrides
    #[serde(default)]
    pub templates_dir: Option<String>,
}

// ── Clipboard ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Use the OS clipboard (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// How long the copy control shows its acknowledgement (default: 900)
    #[serde(default = "default_ack_millis")]
    pub ack_millis: u64,
    /// Longest time `generate --copy` keeps serving the X11/Wayland selection
    /// when no clipboard manager takes it over; 0 disables (default: 10000)
    #[serde(default = "default_hold_millis")]
    pub hold_millis: u64,
}

fn default_true() -> bool {
    true
}

fn default_ack_millis() -> u64 {
    u64::try_from(DEFAULT_ACK_DURATION.as_millis()).unwrap_or(900)
}

fn default_hold_millis() -> u64 {
    u64::try_from(DEFAULT_HOLD_DURATION.as_millis()).unwrap_or(10_000)
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ack_millis: default_ack_millis(),
            hold_millis: default_hold_millis(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
        Self {
            config_path: home.join(".lessonprompt").join("config.toml"),
            schema: default_schema(),
            storage: StorageConfig::default(),
            prompt: PromptConfig::default(),
            clipboard: ClipboardConfig::default(),
        }
    }
}

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Self::load_or_init_in(&home.join(".lessonprompt"))
    }

    /// Load `<dir>/config.toml`, writing defaults there on first run.
    pub fn load_or_init_in(dir: &Path) -> Result<Self> {
        let config_path = dir.join("config.toml");

        if !dir.exists() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path.clone_from(&config_path);
            config.validate()?;
            Ok(config)
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.validate()?;
            config.save()?;
            Ok(config)
        }
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    pub(crate) fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        // Schema: LESSONPROMPT_SCHEMA
        if let Some(schema) = non_empty("LESSONPROMPT_SCHEMA") {
            self.schema = schema;
        }

        // Storage directory: LESSONPROMPT_STORAGE_DIR
        if let Some(dir) = non_empty("LESSONPROMPT_STORAGE_DIR") {
            self.storage.dir = Some(dir);
        }

        // Template overrides: LESSONPROMPT_TEMPLATES_DIR
        if let Some(dir) = non_empty("LESSONPROMPT_TEMPLATES_DIR") {
            self.prompt.templates_dir = Some(dir);
        }

        // Clipboard hold: LESSONPROMPT_CLIPBOARD_HOLD_MILLIS (0 disables)
        if let Some(millis) = non_empty("LESSONPROMPT_CLIPBOARD_HOLD_MILLIS") {
            if let Ok(millis) = millis.parse::<u64>() {
                self.clipboard.hold_millis = millis;
            }
        }

        // Acknowledgement duration: LESSONPROMPT_ACK_MILLIS
        if let Some(millis) = non_empty("LESSONPROMPT_ACK_MILLIS") {
            if let Ok(millis) = millis.parse::<u64>() {
                if millis > 0 {
                    self.clipboard.ack_millis = millis;
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if FieldSchema::by_variant(&self.schema).is_none() {
            return Err(ConfigError::Validation(format!(
                "schema must be \"v1\" or \"v2\", got {:?}",
                self.schema
            )));
        }
        if self.clipboard.ack_millis == 0 {
            return Err(ConfigError::Validation(
                "clipboard.ack_millis must be >= 1".into(),
            ));
        }
        Ok(())
    }

    pub fn field_schema(&self) -> Result<FieldSchema, ConfigError> {
        FieldSchema::by_variant(&self.schema)
            .ok_or_else(|| ConfigError::Validation(format!("unknown schema {:?}", self.schema)))
    }

    fn base_dir(&self) -> PathBuf {
        self.config_path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }

    pub fn storage_dir(&self) -> PathBuf {
        match &self.storage.dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).as_ref()),
            None => self.base_dir().join("storage"),
        }
    }

    pub fn templates_dir(&self) -> Option<PathBuf> {
        self.prompt
            .templates_dir
            .as_deref()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).as_ref()))
    }

    pub fn ack_duration(&self) -> Duration {
        Duration::from_millis(self.clipboard.ack_millis)
    }

    pub fn clipboard_hold(&self) -> Duration {
        Duration::from_millis(self.clipboard.hold_millis)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
