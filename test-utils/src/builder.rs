use crate::{context::TestContext, error::TestError};

/// Initial contents of the settings file written by the builder.
enum InitialSettings {
    /// Leave the settings file absent, as on a fresh deployment.
    Missing,
    Json(serde_json::Value),
    /// Written byte-for-byte, used for malformed documents.
    Raw(String),
}

/// Builder for creating test contexts with a customizable settings file.
///
/// Provides a fluent interface for configuring the settings document a test
/// starts from, then call `build()` to create the temporary directory and
/// write the file.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_settings(serde_json::json!({ "adminRoleIds": ["123"] }))
///     .build()?;
/// ```
pub struct TestBuilder {
    settings: InitialSettings,
}

impl TestBuilder {
    /// Creates a new test builder with no settings file.
    ///
    /// # Returns
    /// - New `TestBuilder` instance that leaves the settings file absent
    pub fn new() -> Self {
        Self {
            settings: InitialSettings::Missing,
        }
    }

    /// Writes the given JSON value as the initial settings document.
    ///
    /// # Arguments
    /// - `settings` - Settings document using the same camelCase keys as the bot
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_settings(mut self, settings: serde_json::Value) -> Self {
        self.settings = InitialSettings::Json(settings);
        self
    }

    /// Writes the given text verbatim as the settings file.
    ///
    /// Use this to exercise load failures with documents that are not valid JSON.
    pub fn with_raw_settings(mut self, contents: &str) -> Self {
        self.settings = InitialSettings::Raw(contents.to_string());
        self
    }

    /// Builds the test context and writes the configured settings file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning a fresh temporary directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    /// - `Err(TestError::Json)` - Failed to encode the settings document
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        match self.settings {
            InitialSettings::Missing => {}
            InitialSettings::Json(value) => {
                context.write_settings_raw(&serde_json::to_string_pretty(&value)?)?
            }
            InitialSettings::Raw(contents) => context.write_settings_raw(&contents)?,
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
