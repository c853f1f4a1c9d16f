use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, Context, CreateInteractionResponse,
};

use crate::{
    bot::reply::ephemeral,
    error::AppError,
    middleware::auth::{AuthGuard, Caller, Permission},
    model::wizard::ConfigCategory,
    service::{
        builder::{panel::build_config_modal, prompt::build_password_modal},
        discord::SerenityDiscordApi,
        wizard::{ConfigWizardService, WizardStep},
    },
    state::BotState,
};

/// Handles a category picked from the configuration panel's select menu.
///
/// Re-checks admin access since the panel message may be reused after the
/// caller's roles changed.
///
/// # Returns
/// - `Ok(())` - Modal opened or sticky toggle confirmed
/// - `Err(AppError::AuthErr)` - Caller is no longer an administrator
/// - `Err(AppError::BadRequest)` - Unknown category value
/// - `Err(AppError)` - Persisting the sticky toggle or replying failed
pub async fn handle_config_select(
    state: &BotState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let settings = state.settings.get().await;
    let caller = interaction.member.as_ref().map(Caller::from_member);
    AuthGuard::new(&settings).require(caller.as_ref(), &[Permission::Admin])?;

    let selected = match &interaction.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.first(),
        _ => None,
    };
    let category = selected
        .and_then(|value| ConfigCategory::from_value(value))
        .ok_or_else(|| AppError::BadRequest("Unknown configuration type.".to_string()))?;

    let discord = SerenityDiscordApi::new(ctx.http.clone());
    let step = ConfigWizardService::new(&state.settings, &discord, &state.sticky_lock)
        .select(category)
        .await?;

    let response = match step {
        WizardStep::ShowModal(category) => {
            CreateInteractionResponse::Modal(build_config_modal(category, &settings))
        }
        WizardStep::Applied(message) => {
            tracing::info!(
                "{} changed {} setting",
                interaction.user.id,
                category.value()
            );
            ephemeral(message)
        }
    };

    interaction.create_response(&ctx.http, response).await?;

    Ok(())
}

/// Opens the password modal for whoever pressed the verify button.
pub async fn handle_verify_button(
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Modal(build_password_modal()),
        )
        .await?;

    Ok(())
}
