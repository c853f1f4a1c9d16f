//! Discord API operations consumed by the bot's services.
//!
//! Services never call Serenity's HTTP client directly. They go through the
//! `DiscordApi` trait, which covers exactly the platform primitives the bot
//! needs: guild role lookup, member role mutation, and sending, fetching and
//! deleting channel messages. `SerenityDiscordApi` is the production
//! implementation over `Arc<Http>`.

use serenity::all::{ChannelId, CreateMessage, GuildId, MessageId, Role, RoleId, UserId};
use serenity::async_trait;
use serenity::http::Http;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AppError;

/// Reason recorded in the guild audit log for role changes made by verification.
const VERIFICATION_AUDIT_REASON: &str = "Member passed password verification";

#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Fetches every role of a guild keyed by ID.
    async fn guild_roles(&self, guild_id: GuildId) -> Result<HashMap<RoleId, Role>, AppError>;

    /// Fetches a single guild role, `None` if it does not exist.
    async fn guild_role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<Option<Role>, AppError> {
        Ok(self.guild_roles(guild_id).await?.remove(&role_id))
    }

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    /// Returns the ID of the most recent message in a channel, `None` if empty.
    async fn latest_message_id(
        &self,
        channel_id: ChannelId,
    ) -> Result<Option<MessageId>, AppError>;

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError>;

    /// Sends a message and returns the ID Discord assigned to it.
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError>;
}

/// `DiscordApi` backed by Serenity's HTTP client.
pub struct SerenityDiscordApi {
    /// Discord HTTP client shared with the gateway client
    http: Arc<Http>,
}

impl SerenityDiscordApi {
    /// Creates a new SerenityDiscordApi instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    ///
    /// # Returns
    /// - `SerenityDiscordApi` - New API instance
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscordApi {
    async fn guild_roles(&self, guild_id: GuildId) -> Result<HashMap<RoleId, Role>, AppError> {
        let roles = self.http.get_guild_roles(guild_id).await?;

        Ok(roles.into_iter().map(|role| (role.id, role)).collect())
    }

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some(VERIFICATION_AUDIT_REASON))
            .await?;

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(guild_id, user_id, role_id, Some(VERIFICATION_AUDIT_REASON))
            .await?;

        Ok(())
    }

    async fn latest_message_id(
        &self,
        channel_id: ChannelId,
    ) -> Result<Option<MessageId>, AppError> {
        let messages = self.http.get_messages(channel_id, None, Some(1)).await?;

        Ok(messages.first().map(|message| message.id))
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.http.delete_message(channel_id, message_id, None).await?;

        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError> {
        let sent = channel_id.send_message(&self.http, message).await?;

        Ok(sent.id)
    }
}
