use serenity::all::{ChannelId, GuildId, MessageId, RoleId, UserId};
use test_utils::{builder::TestBuilder, context::TestContext};
use tokio::sync::Mutex;

use crate::{
    data::settings::SettingsRepository,
    error::AppError,
    model::settings::Settings,
    service::{settings::SettingsService, test::mock::MockDiscordApi},
};

mod verification;

use mock::GUILD_ID;

/// Creates a settings service backed by the test context's settings file.
async fn settings_service(test: &TestContext) -> SettingsService {
    SettingsService::load(SettingsRepository::new(&test.settings_path)).await
}

/// Re-reads the settings file from disk.
async fn persisted_settings(test: &TestContext) -> Settings {
    SettingsRepository::new(&test.settings_path)
        .load()
        .await
        .unwrap()
}

fn guild() -> GuildId {
    GuildId::new(GUILD_ID)
}
