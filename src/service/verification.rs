use serenity::all::{GuildId, UserId};

use crate::{
    error::AppError,
    service::{discord::DiscordApi, settings::SettingsService},
    util::parse::parse_role_id,
};

/// Result of a password submission that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Password matched and the unverified role was removed.
    Verified {
        /// Whether the configured verified role was also granted.
        verified_role_added: bool,
    },
    /// Password did not match; no roles were changed.
    IncorrectPassword,
}

pub struct VerificationService<'a> {
    settings: &'a SettingsService,
    discord: &'a dyn DiscordApi,
}

impl<'a> VerificationService<'a> {
    pub fn new(settings: &'a SettingsService, discord: &'a dyn DiscordApi) -> Self {
        Self { settings, discord }
    }

    /// Checks a submitted password and swaps the member's roles on success.
    ///
    /// The unverified role is always removed on success. The verified role is
    /// added afterwards when one is configured and still exists in the guild;
    /// otherwise verification only removes the unverified role.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the member is verifying in
    /// - `user_id` - Member submitting the password
    /// - `password` - Submitted password, compared verbatim
    ///
    /// # Returns
    /// - `Ok(VerificationOutcome)` - Verified, or the password was wrong
    /// - `Err(AppError::NotConfigured)` - No password or unverified role is configured
    /// - `Err(AppError::NotFound)` - The unverified role no longer exists
    /// - `Err(AppError::DiscordErr)` - Role lookup or mutation failed
    pub async fn verify(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        password: &str,
    ) -> Result<VerificationOutcome, AppError> {
        let settings = self.settings.get().await;

        let Some(expected) = settings.verification_password.as_deref() else {
            return Err(AppError::NotConfigured(
                "Verification is not configured. Please contact an administrator.".to_string(),
            ));
        };

        if password != expected {
            tracing::debug!("User {} submitted an incorrect password", user_id);
            return Ok(VerificationOutcome::IncorrectPassword);
        }

        let Some(unverified_role) = settings.unverified_role_id.as_deref() else {
            return Err(AppError::NotConfigured(
                "Verification role not configured. Please contact an administrator.".to_string(),
            ));
        };

        let roles = self.discord.guild_roles(guild_id).await?;

        let unverified_role_id = parse_role_id(unverified_role)
            .ok()
            .filter(|role_id| roles.contains_key(role_id))
            .ok_or_else(|| {
                AppError::NotFound(
                    "Unverified role not found. Please contact an administrator.".to_string(),
                )
            })?;

        self.discord
            .remove_member_role(guild_id, user_id, unverified_role_id)
            .await?;

        let verified_role_id = match settings.verified_role_id.as_deref() {
            Some(verified_role) => {
                let resolved = parse_role_id(verified_role)
                    .ok()
                    .filter(|role_id| roles.contains_key(role_id));
                if resolved.is_none() {
                    tracing::warn!(
                        "Configured verified role {} not found in guild {}; skipping",
                        verified_role,
                        guild_id
                    );
                }
                resolved
            }
            None => None,
        };

        if let Some(role_id) = verified_role_id {
            self.discord
                .add_member_role(guild_id, user_id, role_id)
                .await?;
        }

        tracing::info!("User {} verified in guild {}", user_id, guild_id);

        Ok(VerificationOutcome::Verified {
            verified_role_added: verified_role_id.is_some(),
        })
    }
}
