//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The
//! handler logs the connection and registers the global slash commands.

use serenity::all::{Command, Context, CreateCommand, Ready};

use crate::model::interaction::{CONFIG_COMMAND, SETUP_COMMAND};

/// Handles the ready event when the bot connects to Discord.
///
/// Registers `/config` and `/setup` globally. Registration overwrites the
/// previous command set, so running it on every reconnect is harmless. A
/// failure is logged and the bot keeps running with whatever commands Discord
/// already has.
///
/// # Arguments
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands = vec![
        CreateCommand::new(CONFIG_COMMAND).description("Open the bot configuration panel"),
        CreateCommand::new(SETUP_COMMAND)
            .description("Post the verification message in this channel"),
    ];

    match Command::set_global_commands(&ctx.http, commands).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
