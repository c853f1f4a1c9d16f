//! Settings service owning the single in-memory copy of the bot settings.
//!
//! Every handler reads and mutates settings through `SettingsService`. Reads
//! return a cloned snapshot; mutations run against a draft under the write lock,
//! are persisted, and only then replace the in-memory record. Concurrent
//! interactions therefore apply their updates one after another, and a failed
//! write never leaves memory and disk out of sync.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{data::settings::SettingsRepository, error::AppError, model::settings::Settings};

/// Service providing serialized access to the settings record.
///
/// Cheap to clone: clones share the same record, lock and repository.
#[derive(Clone)]
pub struct SettingsService {
    /// Current settings, the single source of truth while the bot runs.
    settings: Arc<RwLock<Settings>>,
    /// Repository persisting the record after every mutation.
    repo: Arc<SettingsRepository>,
}

impl SettingsService {
    /// Creates a new SettingsService around already loaded settings.
    ///
    /// # Arguments
    /// - `repo` - Repository used to persist every mutation
    /// - `settings` - Initial settings record
    ///
    /// # Returns
    /// - `SettingsService` - New service instance
    pub fn new(repo: SettingsRepository, settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            repo: Arc::new(repo),
        }
    }

    /// Loads settings through the repository and wraps them in a service.
    ///
    /// Load failures degrade to empty settings, see
    /// `SettingsRepository::load_or_default`.
    pub async fn load(repo: SettingsRepository) -> Self {
        let settings = repo.load_or_default().await;
        Self::new(repo, settings)
    }

    /// Returns a snapshot of the current settings.
    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Applies a mutation and persists the full record.
    ///
    /// The closure runs against a copy of the current settings while the write
    /// lock is held. If it returns an error, or persisting fails, the in-memory
    /// settings are left untouched.
    ///
    /// # Arguments
    /// - `mutate` - Mutation to apply; may reject the update with an error
    ///
    /// # Returns
    /// - `Ok(T)` - Value returned by the closure; the update is persisted
    /// - `Err(AppError)` - Error from the closure, or `IoErr`/`JsonErr` from persisting
    pub async fn update<T, F>(&self, mutate: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Settings) -> Result<T, AppError>,
    {
        let mut current = self.settings.write().await;
        let mut draft = current.clone();

        let value = mutate(&mut draft)?;

        self.repo.save(&draft).await?;
        *current = draft;

        Ok(value)
    }
}
