//! Sticky verification prompt kept as the last message of one channel.
//!
//! While sticky mode is active, every message posted in the configured channel
//! by someone other than the bot pushes the prompt up. The reconciler notices
//! that the newest message is no longer the tracked prompt, deletes the old
//! prompt and posts a fresh one at the bottom.

use serenity::all::{ChannelId, MessageId, UserId};
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    service::{builder::prompt::build_prompt_message, discord::DiscordApi, settings::SettingsService},
    util::parse::{parse_channel_id, parse_message_id},
};

/// Outcome of reconciling the sticky prompt after a channel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyAction {
    /// Sticky mode is inactive, the message came from the bot, or it was posted elsewhere.
    Ignored,
    /// The tracked prompt is still the newest message.
    Current,
    /// The prompt was reposted with the given message ID.
    Reposted(MessageId),
}

pub struct StickyService<'a> {
    settings: &'a SettingsService,
    discord: &'a dyn DiscordApi,
    /// Serializes reconciliations so concurrent messages produce a single repost.
    lock: &'a Mutex<()>,
}

impl<'a> StickyService<'a> {
    pub fn new(
        settings: &'a SettingsService,
        discord: &'a dyn DiscordApi,
        lock: &'a Mutex<()>,
    ) -> Self {
        Self {
            settings,
            discord,
            lock,
        }
    }

    /// Reconciles the sticky prompt after a message was posted.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the message was posted in
    /// - `author_id` - Author of the message
    /// - `bot_user_id` - The bot's own user ID; its messages never trigger a repost
    ///
    /// # Returns
    /// - `Ok(StickyAction)` - What the reconciler did
    /// - `Err(AppError)` - Fetching, posting or persisting the new prompt failed
    pub async fn handle_message(
        &self,
        channel_id: ChannelId,
        author_id: UserId,
        bot_user_id: UserId,
    ) -> Result<StickyAction, AppError> {
        if author_id == bot_user_id {
            return Ok(StickyAction::Ignored);
        }

        if self.tracked_message(channel_id).await?.is_none() {
            return Ok(StickyAction::Ignored);
        }

        let _guard = self.lock.lock().await;

        // Another reconciliation or a toggle may have run while we waited.
        let Some(stored_id) = self.tracked_message(channel_id).await? else {
            return Ok(StickyAction::Ignored);
        };

        let latest_id = self.discord.latest_message_id(channel_id).await?;
        if latest_id == Some(stored_id) {
            return Ok(StickyAction::Current);
        }

        if let Err(e) = self.discord.delete_message(channel_id, stored_id).await {
            tracing::warn!(
                "Failed to delete old sticky message {} in channel {}: {}",
                stored_id,
                channel_id,
                e
            );
        }

        let settings = self.settings.get().await;
        let new_id = self
            .discord
            .send_message(channel_id, build_prompt_message(&settings))
            .await?;

        self.settings
            .update(|settings| {
                settings.sticky_message.message_id = Some(new_id.to_string());
                Ok(())
            })
            .await?;

        tracing::debug!(
            "Reposted sticky message {} in channel {}",
            new_id,
            channel_id
        );

        Ok(StickyAction::Reposted(new_id))
    }

    /// Posts the prompt in a channel and makes it the tracked sticky message.
    ///
    /// Enables sticky mode as a side effect.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the prompt should stick to
    ///
    /// # Returns
    /// - `Ok(MessageId)` - ID of the posted prompt
    /// - `Err(AppError)` - Posting or persisting failed
    pub async fn setup_sticky_message(&self, channel_id: ChannelId) -> Result<MessageId, AppError> {
        let _guard = self.lock.lock().await;

        let settings = self.settings.get().await;
        let message_id = self
            .discord
            .send_message(channel_id, build_prompt_message(&settings))
            .await?;

        self.settings
            .update(|settings| {
                settings
                    .sticky_message
                    .activate(channel_id.to_string(), message_id.to_string());
                Ok(())
            })
            .await?;

        tracing::info!(
            "Sticky verification message {} set up in channel {}",
            message_id,
            channel_id
        );

        Ok(message_id)
    }

    /// Disables sticky mode and forgets the tracked prompt.
    ///
    /// The last posted prompt is left in place.
    pub async fn disable_sticky_message(&self) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        self.disable_locked().await
    }

    /// Flips sticky mode.
    ///
    /// Enabling only sets the flag; nothing is posted until `/setup` runs in a
    /// channel. Disabling goes through the same path as `disable_sticky_message`.
    ///
    /// # Returns
    /// - `Ok(true)` - Sticky mode is now enabled
    /// - `Ok(false)` - Sticky mode is now disabled
    /// - `Err(AppError)` - Persisting failed; the previous state is kept
    pub async fn toggle(&self) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;

        if self.settings.get().await.sticky_message.enabled {
            self.disable_locked().await?;
            return Ok(false);
        }

        self.settings
            .update(|settings| {
                settings.sticky_message.enabled = true;
                Ok(true)
            })
            .await
    }

    /// Caller must hold the sticky lock.
    async fn disable_locked(&self) -> Result<(), AppError> {
        self.settings
            .update(|settings| {
                settings.sticky_message.disable();
                Ok(())
            })
            .await?;

        tracing::info!("Sticky verification message disabled");
        Ok(())
    }

    /// Tracked sticky message ID if sticky mode is active in `channel_id`.
    async fn tracked_message(&self, channel_id: ChannelId) -> Result<Option<MessageId>, AppError> {
        let sticky = self.settings.get().await.sticky_message;
        if !sticky.is_active() {
            return Ok(None);
        }

        let (Some(stored_channel), Some(stored_message)) = (sticky.channel_id, sticky.message_id)
        else {
            return Ok(None);
        };

        if parse_channel_id(&stored_channel)? != channel_id {
            return Ok(None);
        }

        Ok(Some(parse_message_id(&stored_message)?))
    }
}
