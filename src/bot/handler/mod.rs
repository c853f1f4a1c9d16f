use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;

use crate::state::BotState;

pub mod command;
pub mod component;
pub mod interaction;
pub mod message;
pub mod modal;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, ctx, message).await;
    }

    /// Called for slash commands, component presses and modal submissions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.state, ctx, interaction).await;
    }
}
