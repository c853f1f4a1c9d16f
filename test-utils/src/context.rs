use std::path::PathBuf;
use tempfile::TempDir;

use crate::error::TestError;

/// File name of the settings document inside the test directory.
pub const SETTINGS_FILE_NAME: &str = "config.json";

/// Test context owning an isolated directory for the settings file.
///
/// The directory and everything in it is removed when the context is dropped,
/// so keep the context alive for as long as the test uses `settings_path`.
pub struct TestContext {
    /// Temporary directory holding the settings file.
    pub dir: TempDir,

    /// Path of the settings file inside `dir`. The file may not exist yet.
    pub settings_path: PathBuf,
}

impl TestContext {
    /// Creates a new context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no settings file written
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let settings_path = dir.path().join(SETTINGS_FILE_NAME);

        Ok(Self { dir, settings_path })
    }

    /// Overwrites the settings file with the given contents.
    pub fn write_settings_raw(&self, contents: &str) -> Result<(), TestError> {
        std::fs::write(&self.settings_path, contents)?;
        Ok(())
    }

    /// Reads the settings file as text, exactly as the bot wrote it.
    pub fn read_settings_raw(&self) -> Result<String, TestError> {
        Ok(std::fs::read_to_string(&self.settings_path)?)
    }

    /// Reads and decodes the settings file into a JSON value.
    ///
    /// # Returns
    /// - `Ok(serde_json::Value)` - Decoded settings document
    /// - `Err(TestError)` - File missing or not valid JSON
    pub fn read_settings_json(&self) -> Result<serde_json::Value, TestError> {
        Ok(serde_json::from_str(&self.read_settings_raw()?)?)
    }
}
