use tracing_subscriber::EnvFilter;

use crate::{config::Config, data::settings::SettingsRepository, service::settings::SettingsService};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, otherwise everything at `info`
/// and above is printed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads the settings file named by the configuration.
///
/// Never fails: a missing or unreadable file yields empty settings so the bot
/// still comes online and administrators can reconfigure it.
///
/// # Arguments
/// - `config` - Application configuration containing the settings path
///
/// # Returns
/// - `SettingsService` - Service owning the loaded settings
pub async fn load_settings(config: &Config) -> SettingsService {
    SettingsService::load(SettingsRepository::new(&config.settings_path)).await
}
