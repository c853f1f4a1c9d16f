use serenity::all::{CommandInteraction, Context, CreateInteractionResponse};

use crate::{
    bot::reply::ephemeral,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Caller, Permission},
    service::{
        builder::{panel::build_config_panel, prompt::build_prompt_response},
        discord::{DiscordApi, SerenityDiscordApi},
        sticky::StickyService,
    },
    state::BotState,
};

/// Handles `/config` by showing the configuration panel to an administrator.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for API access
/// - `interaction` - The slash command interaction
///
/// # Returns
/// - `Ok(())` - Panel sent as an ephemeral reply
/// - `Err(AppError::AuthErr)` - Caller is not an administrator
/// - `Err(AppError::DiscordErr)` - Fetching roles or replying failed
pub async fn handle_config(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let settings = state.settings.get().await;
    let caller = interaction.member.as_deref().map(Caller::from_member);
    AuthGuard::new(&settings).require(caller.as_ref(), &[Permission::Admin])?;

    let guild_id = interaction.guild_id.ok_or(AuthError::NotInGuild)?;
    let roles = SerenityDiscordApi::new(ctx.http.clone())
        .guild_roles(guild_id)
        .await?;

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(build_config_panel(&settings, &roles)),
        )
        .await?;

    Ok(())
}

/// Handles `/setup` by posting the verification prompt in the current channel.
///
/// With sticky mode enabled the prompt becomes the tracked sticky message and
/// the administrator gets a private confirmation. Otherwise the prompt is the
/// public reply to the command itself.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for API access
/// - `interaction` - The slash command interaction
///
/// # Returns
/// - `Ok(())` - Prompt posted
/// - `Err(AppError::AuthErr)` - Caller is not an administrator
/// - `Err(AppError)` - Posting the prompt or persisting the sticky state failed
pub async fn handle_setup(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let settings = state.settings.get().await;
    let caller = interaction.member.as_deref().map(Caller::from_member);
    AuthGuard::new(&settings).require(caller.as_ref(), &[Permission::Admin])?;

    if settings.sticky_message.enabled {
        let discord = SerenityDiscordApi::new(ctx.http.clone());
        StickyService::new(&state.settings, &discord, &state.sticky_lock)
            .setup_sticky_message(interaction.channel_id)
            .await?;

        interaction
            .create_response(
                &ctx.http,
                ephemeral("Verification system setup with sticky message enabled!"),
            )
            .await?;
    } else {
        interaction
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(build_prompt_response(&settings)),
            )
            .await?;

        tracing::info!(
            "Verification message posted in channel {}",
            interaction.channel_id
        );
    }

    Ok(())
}
