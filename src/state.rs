//! Bot state shared across all event handlers.
//!
//! The state is created once during startup and cloned into the Serenity event
//! handler. Each gateway event runs on its own task, so every field is cheap to
//! clone and shares the underlying data:
//! - `SettingsService` wraps the settings record in an `Arc<RwLock>`
//! - the sticky lock is an `Arc<Mutex>` shared by every reconciliation

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::service::settings::SettingsService;

#[derive(Clone)]
pub struct BotState {
    /// Single owner of the persisted bot settings.
    pub settings: SettingsService,

    /// Serializes sticky prompt reconciliation, setup and toggling.
    ///
    /// Two messages arriving together in the sticky channel would otherwise
    /// both see a stale prompt and repost it twice.
    pub sticky_lock: Arc<Mutex<()>>,
}

impl BotState {
    /// Creates a new BotState instance.
    ///
    /// # Arguments
    /// - `settings` - Loaded settings service
    ///
    /// # Returns
    /// - `BotState` - New state with a fresh sticky lock
    pub fn new(settings: SettingsService) -> Self {
        Self {
            settings,
            sticky_lock: Arc::new(Mutex::new(())),
        }
    }
}
