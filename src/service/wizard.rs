//! Configuration wizard driving the `/config` select menu and modals.

use serenity::all::{GuildId, Role};
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    model::wizard::{AdminRoleAction, ConfigCategory, ConfigSubmission},
    service::{discord::DiscordApi, settings::SettingsService, sticky::StickyService},
    util::parse::parse_role_id,
};

const ROLE_NOT_FOUND_MESSAGE: &str = "Invalid role ID or role not found.";

/// Next step after a category was picked from the select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    /// Open the modal for this category.
    ShowModal(ConfigCategory),
    /// The selection was applied immediately; reply with this confirmation.
    Applied(String),
}

pub struct ConfigWizardService<'a> {
    settings: &'a SettingsService,
    discord: &'a dyn DiscordApi,
    sticky_lock: &'a Mutex<()>,
}

impl<'a> ConfigWizardService<'a> {
    pub fn new(
        settings: &'a SettingsService,
        discord: &'a dyn DiscordApi,
        sticky_lock: &'a Mutex<()>,
    ) -> Self {
        Self {
            settings,
            discord,
            sticky_lock,
        }
    }

    /// Handles a category picked from the configuration select menu.
    ///
    /// # Arguments
    /// - `category` - Selected category
    ///
    /// # Returns
    /// - `Ok(WizardStep::ShowModal)` - Category is edited through a modal
    /// - `Ok(WizardStep::Applied)` - Sticky mode was toggled, with the confirmation to show
    /// - `Err(AppError)` - Persisting the toggle failed
    pub async fn select(&self, category: ConfigCategory) -> Result<WizardStep, AppError> {
        if category.has_modal() {
            return Ok(WizardStep::ShowModal(category));
        }

        let enabled = StickyService::new(self.settings, self.discord, self.sticky_lock)
            .toggle()
            .await?;

        let message = if enabled {
            "Sticky message enabled. Use /setup to activate it in a channel."
        } else {
            "Sticky message disabled."
        };

        Ok(WizardStep::Applied(message.to_string()))
    }

    /// Applies a validated modal submission to the settings.
    ///
    /// Role references are resolved against the guild before anything is
    /// written. Every submission is a single settings update, so a rejected
    /// submission leaves the settings unchanged.
    ///
    /// # Arguments
    /// - `guild_id` - Guild used to resolve role references
    /// - `submission` - Parsed modal content
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation to show the administrator
    /// - `Err(AppError::BadRequest)` - Role could not be resolved or the admin role edit was rejected
    /// - `Err(AppError)` - Role lookup or persisting failed
    pub async fn apply(
        &self,
        guild_id: GuildId,
        submission: ConfigSubmission,
    ) -> Result<String, AppError> {
        match submission {
            ConfigSubmission::AdminRoles(action) => self.apply_admin_roles(guild_id, action).await,
            ConfigSubmission::Password(password) => {
                self.settings
                    .update(|settings| {
                        settings.verification_password = Some(password);
                        Ok(())
                    })
                    .await?;

                Ok("Verification password updated successfully.".to_string())
            }
            ConfigSubmission::UnverifiedRole(reference) => {
                let role = self.resolve_role(guild_id, &reference).await?;

                self.settings
                    .update(|settings| {
                        settings.unverified_role_id = Some(role.id.to_string());
                        Ok(())
                    })
                    .await?;

                Ok(format!("Unverified role set to {}", role.name))
            }
            ConfigSubmission::VerifiedRole(Some(reference)) => {
                let role = self.resolve_role(guild_id, &reference).await?;

                self.settings
                    .update(|settings| {
                        settings.verified_role_id = Some(role.id.to_string());
                        Ok(())
                    })
                    .await?;

                Ok(format!("Verified role set to {}", role.name))
            }
            ConfigSubmission::VerifiedRole(None) => {
                self.settings
                    .update(|settings| {
                        settings.verified_role_id = None;
                        Ok(())
                    })
                    .await?;

                Ok("Verified role cleared.".to_string())
            }
            ConfigSubmission::Embed {
                title,
                description,
                color,
            } => {
                self.settings
                    .update(|settings| {
                        settings.embed_title = Some(title);
                        settings.embed_description = Some(description);
                        settings.embed_color = Some(color);
                        Ok(())
                    })
                    .await?;

                Ok("Embed configuration updated successfully.".to_string())
            }
            ConfigSubmission::ButtonText(text) => {
                self.settings
                    .update(|settings| {
                        settings.button_text = Some(text);
                        Ok(())
                    })
                    .await?;

                Ok("Button text updated successfully.".to_string())
            }
        }
    }

    async fn apply_admin_roles(
        &self,
        guild_id: GuildId,
        action: AdminRoleAction,
    ) -> Result<String, AppError> {
        match action {
            AdminRoleAction::Add(reference) => {
                let role = self.resolve_role(guild_id, &reference).await?;
                let role_id = role.id.to_string();

                self.settings
                    .update(|settings| {
                        if !settings.add_admin_role(&role_id) {
                            return Err(AppError::BadRequest(
                                "Role is already an admin role.".to_string(),
                            ));
                        }
                        Ok(())
                    })
                    .await?;

                Ok(format!("Added {} as admin role.", role.name))
            }
            AdminRoleAction::Remove(reference) => {
                self.settings
                    .update(|settings| {
                        if !settings.remove_admin_role(&reference) {
                            return Err(AppError::BadRequest(
                                "Role is not an admin role.".to_string(),
                            ));
                        }
                        Ok(())
                    })
                    .await?;

                // The role may already be deleted from the guild; the name is cosmetic.
                let name = match parse_role_id(&reference) {
                    Ok(role_id) => match self.discord.guild_role(guild_id, role_id).await {
                        Ok(role) => role.map(|role| role.name),
                        Err(e) => {
                            tracing::debug!("Failed to look up removed admin role: {}", e);
                            None
                        }
                    },
                    Err(_) => None,
                };

                Ok(format!(
                    "Removed {} from admin roles.",
                    name.as_deref().unwrap_or("role")
                ))
            }
            AdminRoleAction::Clear => {
                self.settings
                    .update(|settings| {
                        settings.clear_admin_roles();
                        Ok(())
                    })
                    .await?;

                Ok("All admin roles cleared.".to_string())
            }
        }
    }

    /// Resolves a stripped role reference to an existing guild role.
    async fn resolve_role(&self, guild_id: GuildId, reference: &str) -> Result<Role, AppError> {
        let role_id = parse_role_id(reference)
            .map_err(|_| AppError::BadRequest(ROLE_NOT_FOUND_MESSAGE.to_string()))?;

        self.discord
            .guild_role(guild_id, role_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(ROLE_NOT_FOUND_MESSAGE.to_string()))
    }
}
