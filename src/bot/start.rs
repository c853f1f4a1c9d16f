use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::BotState};

/// Builds the Discord client without connecting it.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed, e.g. malformed token
pub async fn init_bot(config: &Config, state: BotState) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Connects to the gateway and runs until the client shuts down.
///
/// # Arguments
/// - `client` - Client created by `init_bot`
///
/// # Returns
/// - `Ok(())` - Client shut down cleanly
/// - `Err(AppError::DiscordErr)` - Connection failed or the gateway closed with an error
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
