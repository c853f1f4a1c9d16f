use serenity::all::{Context, Message};

use crate::{
    service::{
        discord::SerenityDiscordApi,
        sticky::{StickyAction, StickyService},
    },
    state::BotState,
};

/// Handle message creation in a channel
///
/// Keeps the sticky verification prompt at the bottom of its channel.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    // Only guild channels can hold the sticky prompt
    if message.guild_id.is_none() {
        return;
    }

    let bot_user_id = ctx.cache.current_user().id;
    let discord = SerenityDiscordApi::new(ctx.http.clone());
    let sticky = StickyService::new(&state.settings, &discord, &state.sticky_lock);

    match sticky
        .handle_message(message.channel_id, message.author.id, bot_user_id)
        .await
    {
        Ok(StickyAction::Reposted(message_id)) => {
            tracing::info!(
                "Sticky message moved to {} in channel {}",
                message_id,
                message.channel_id
            );
        }
        Ok(StickyAction::Ignored | StickyAction::Current) => {}
        Err(e) => {
            tracing::error!(
                "Failed to update sticky message in channel {}: {}",
                message.channel_id,
                e
            );
        }
    }
}
