use std::io::ErrorKind;
use std::path::PathBuf;

use crate::{error::AppError, model::settings::Settings};

/// Repository providing persistence for the settings document.
///
/// The whole record lives in a single pretty-printed JSON file that is
/// rewritten on every save. Writes go to a sibling temporary file which is then
/// renamed over the original, so a crash mid-write leaves the previous document
/// intact.
pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository instance.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON settings file
    ///
    /// # Returns
    /// - `SettingsRepository` - New repository instance
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and decodes the settings file.
    ///
    /// # Returns
    /// - `Ok(Settings)` - Decoded settings; keys missing from the file take defaults
    /// - `Err(AppError::IoErr)` - File is missing or unreadable
    /// - `Err(AppError::JsonErr)` - File is not a valid settings document
    pub async fn load(&self) -> Result<Settings, AppError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let settings = serde_json::from_str(&contents)?;

        Ok(settings)
    }

    /// Loads the settings file, degrading to empty settings on any failure.
    ///
    /// A missing file is expected on first start and logged as a warning. An
    /// unreadable or malformed file is logged as an error; the bot still starts
    /// with empty settings and the next save overwrites the bad file.
    ///
    /// # Returns
    /// - `Settings` - Loaded settings, or defaults if loading failed
    pub async fn load_or_default(&self) -> Settings {
        match self.load().await {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", self.path.display());
                settings
            }
            Err(AppError::IoErr(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Settings file {} not found, starting with empty settings",
                    self.path.display()
                );
                Settings::default()
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load settings from {}, starting with empty settings: {}",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Writes the full settings record to disk.
    ///
    /// # Arguments
    /// - `settings` - Complete settings record to persist
    ///
    /// # Returns
    /// - `Ok(())` - File replaced with the new document
    /// - `Err(AppError::IoErr)` - Temporary file could not be written or renamed
    /// - `Err(AppError::JsonErr)` - Settings could not be encoded
    pub async fn save(&self, settings: &Settings) -> Result<(), AppError> {
        let contents = serde_json::to_string_pretty(settings)?;
        let tmp_path = self.tmp_path();

        tokio::fs::write(&tmp_path, contents).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!("Saved settings to {}", self.path.display());

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");

        self.path.with_file_name(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::settings::StickyMessage;
    use test_utils::builder::TestBuilder;

    /// Tests every wizard-assignable field survives a save and reload.
    ///
    /// Expected: reloaded settings equal the saved settings field-for-field
    #[tokio::test]
    async fn save_then_load_round_trips() -> Result<(), AppError> {
        let test = TestBuilder::new().build().unwrap();
        let repo = SettingsRepository::new(&test.settings_path);

        let settings = Settings {
            admin_role_ids: vec!["111".to_string(), "222".to_string()],
            verification_password: Some("open sesame".to_string()),
            unverified_role_id: Some("333".to_string()),
            verified_role_id: Some("444".to_string()),
            embed_title: Some("Welcome".to_string()),
            embed_description: Some("Read the rules ✨".to_string()),
            embed_color: Some("#ff00aa".to_string()),
            button_text: Some("Let me in".to_string()),
            sticky_message: StickyMessage {
                enabled: true,
                channel_id: Some("555".to_string()),
                message_id: Some("666".to_string()),
            },
        };

        repo.save(&settings).await?;
        let loaded = repo.load().await?;

        assert_eq!(loaded, settings);

        Ok(())
    }

    /// Tests the file is pretty-printed JSON with camelCase keys.
    #[tokio::test]
    async fn save_writes_pretty_json() -> Result<(), AppError> {
        let test = TestBuilder::new().build().unwrap();
        let repo = SettingsRepository::new(&test.settings_path);

        repo.save(&Settings::default()).await?;

        let raw = test.read_settings_raw().unwrap();
        assert!(raw.contains("\n  \"adminRoleIds\": []"));
        assert!(!test.settings_path.with_file_name("config.json.tmp").exists());

        Ok(())
    }

    /// Tests a hand-written document is read including legacy keys.
    #[tokio::test]
    async fn loads_existing_document() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_settings(serde_json::json!({
                "adminRoleIds": ["1"],
                "verificationPassword": "secret",
                "unverifiedRoleId": "2"
            }))
            .build()
            .unwrap();
        let repo = SettingsRepository::new(&test.settings_path);

        let settings = repo.load().await?;

        assert_eq!(settings.admin_role_ids, vec!["1".to_string()]);
        assert_eq!(settings.verification_password.as_deref(), Some("secret"));
        assert_eq!(settings.unverified_role_id.as_deref(), Some("2"));

        Ok(())
    }

    /// Tests a missing file degrades to empty settings.
    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let test = TestBuilder::new().build().unwrap();
        let repo = SettingsRepository::new(&test.settings_path);

        assert!(matches!(repo.load().await, Err(AppError::IoErr(_))));
        assert_eq!(repo.load_or_default().await, Settings::default());
    }

    /// Tests a malformed file degrades to empty settings rather than failing startup.
    #[tokio::test]
    async fn malformed_file_loads_defaults() {
        let test = TestBuilder::new()
            .with_raw_settings("{ not json")
            .build()
            .unwrap();
        let repo = SettingsRepository::new(&test.settings_path);

        assert!(matches!(repo.load().await, Err(AppError::JsonErr(_))));
        assert_eq!(repo.load_or_default().await, Settings::default());
    }
}
