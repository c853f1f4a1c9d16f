use serenity::all::{ActionRow, ActionRowComponent, Context, GuildId, ModalInteraction};
use std::collections::HashMap;

use crate::{
    bot::reply::ephemeral,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Caller, Permission},
    model::{
        interaction::PASSWORD_INPUT_ID,
        wizard::{ConfigCategory, ConfigSubmission},
    },
    service::{
        discord::SerenityDiscordApi,
        verification::{VerificationOutcome, VerificationService},
        wizard::ConfigWizardService,
    },
    state::BotState,
};

/// Returns the configuration category encoded in a modal custom ID.
pub fn config_category(custom_id: &str) -> Option<ConfigCategory> {
    ConfigCategory::from_modal_custom_id(custom_id)
}

/// Collects every text input of a submitted modal keyed by its custom ID.
///
/// Inputs the user left empty are reported with an empty string.
pub fn collect_fields(rows: &[ActionRow]) -> HashMap<String, String> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => Some((
                input.custom_id.clone(),
                input.value.clone().unwrap_or_default(),
            )),
            _ => None,
        })
        .collect()
}

/// Guild a verification form was submitted from.
///
/// # Returns
/// - `Ok(GuildId)` - The form was submitted inside a server
/// - `Err(AppError::BadRequest)` - The form was submitted outside any server
pub fn verification_guild(guild_id: Option<GuildId>) -> Result<GuildId, AppError> {
    guild_id.ok_or_else(|| {
        AppError::BadRequest("Verification can only be completed inside the server.".to_string())
    })
}

/// Handles a submitted configuration modal.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for API access
/// - `interaction` - The modal submission
/// - `category` - Category encoded in the modal's custom ID
///
/// # Returns
/// - `Ok(())` - Settings updated and confirmation sent
/// - `Err(AppError::AuthErr)` - Caller is not an administrator
/// - `Err(AppError::BadRequest)` - Invalid input or unresolvable role; settings unchanged
/// - `Err(AppError)` - Role lookup, persisting or replying failed
pub async fn handle_config_modal(
    state: &BotState,
    ctx: &Context,
    interaction: &ModalInteraction,
    category: ConfigCategory,
) -> Result<(), AppError> {
    let settings = state.settings.get().await;
    let caller = interaction.member.as_ref().map(Caller::from_member);
    AuthGuard::new(&settings).require(caller.as_ref(), &[Permission::Admin])?;

    let guild_id = interaction.guild_id.ok_or(AuthError::NotInGuild)?;
    let fields = collect_fields(&interaction.data.components);
    let submission = ConfigSubmission::parse(category, &fields)?;

    let discord = SerenityDiscordApi::new(ctx.http.clone());
    let reply = ConfigWizardService::new(&state.settings, &discord, &state.sticky_lock)
        .apply(guild_id, submission)
        .await?;

    tracing::info!(
        "{} updated {} setting in guild {}",
        interaction.user.id,
        category.value(),
        guild_id
    );

    interaction
        .create_response(&ctx.http, ephemeral(reply))
        .await?;

    Ok(())
}

/// Handles a submitted password from the verification modal.
///
/// # Returns
/// - `Ok(())` - Success or incorrect-password reply sent
/// - `Err(AppError::BadRequest)` - Submitted outside a server
/// - `Err(AppError::NotConfigured)` - Password or unverified role missing
/// - `Err(AppError::NotFound)` - Unverified role no longer exists
/// - `Err(AppError::DiscordErr)` - Role change or reply failed
pub async fn handle_verification_modal(
    state: &BotState,
    ctx: &Context,
    interaction: &ModalInteraction,
) -> Result<(), AppError> {
    let guild_id = verification_guild(interaction.guild_id)?;
    let fields = collect_fields(&interaction.data.components);
    let password = fields
        .get(PASSWORD_INPUT_ID)
        .map(String::as_str)
        .unwrap_or_default();

    let discord = SerenityDiscordApi::new(ctx.http.clone());
    let outcome = VerificationService::new(&state.settings, &discord)
        .verify(guild_id, interaction.user.id, password)
        .await?;

    let reply = match outcome {
        VerificationOutcome::Verified {
            verified_role_added,
        } => {
            tracing::debug!(
                "Verified role granted to {}: {}",
                interaction.user.id,
                verified_role_added
            );
            "Verification successful! You now have access to the server."
        }
        VerificationOutcome::IncorrectPassword => "Incorrect password. Please try again.",
    };

    interaction
        .create_response(&ctx.http, ephemeral(reply))
        .await?;

    Ok(())
}
