use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_SETTINGS_PATH: &str = "./config.json";

pub struct Config {
    pub discord_token: String,

    /// JSON file holding the bot settings edited through `/config`.
    pub settings_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            settings_path: std::env::var("SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH)),
        })
    }
}
