//! Interaction dispatch and the error reply boundary.
//!
//! Every slash command, component press and modal submission lands here. The
//! concrete handlers return `Result<(), AppError>`; on error this module
//! renders the private reply through `AppError::into_reply_content`, using a
//! generic apology that fits the surface the user was interacting with.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, Interaction, ModalInteraction,
};

use crate::{
    bot::{
        handler::{command, component, modal},
        reply::ephemeral,
    },
    model::interaction::{
        CONFIG_COMMAND, CONFIG_SELECT_ID, SETUP_COMMAND, VERIFICATION_MODAL_ID, VERIFY_BUTTON_ID,
    },
    state::BotState,
};

const CONFIG_PANEL_FALLBACK: &str = "An error occurred while opening the configuration panel.";
const SETUP_FALLBACK: &str = "An error occurred while setting up verification.";
const CONFIG_UPDATE_FALLBACK: &str = "An error occurred while updating the configuration.";
const VERIFY_BUTTON_FALLBACK: &str = "An error occurred while opening the verification form.";
const VERIFY_FALLBACK: &str = "An error occurred while verifying. Please contact an administrator.";

pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(interaction) => handle_command(state, &ctx, &interaction).await,
        Interaction::Component(interaction) => {
            handle_component(state, &ctx, &interaction).await
        }
        Interaction::Modal(interaction) => handle_modal(state, &ctx, &interaction).await,
        _ => {}
    }
}

async fn handle_command(state: &BotState, ctx: &Context, interaction: &CommandInteraction) {
    let name = interaction.data.name.as_str();
    tracing::debug!("Command /{} invoked by {}", name, interaction.user.id);

    let (result, fallback) = match name {
        CONFIG_COMMAND => (
            command::handle_config(state, ctx, interaction).await,
            CONFIG_PANEL_FALLBACK,
        ),
        SETUP_COMMAND => (
            command::handle_setup(state, ctx, interaction).await,
            SETUP_FALLBACK,
        ),
        _ => {
            tracing::warn!("Received unknown command /{}", name);
            return;
        }
    };

    if let Err(e) = result {
        let content = e.into_reply_content(fallback);
        if let Err(e) = interaction.create_response(&ctx.http, ephemeral(content)).await {
            tracing::error!("Failed to send error reply for /{}: {}", name, e);
        }
    }
}

async fn handle_component(state: &BotState, ctx: &Context, interaction: &ComponentInteraction) {
    let custom_id = interaction.data.custom_id.as_str();

    let (result, fallback) = match custom_id {
        CONFIG_SELECT_ID => (
            component::handle_config_select(state, ctx, interaction).await,
            CONFIG_UPDATE_FALLBACK,
        ),
        VERIFY_BUTTON_ID => (
            component::handle_verify_button(ctx, interaction).await,
            VERIFY_BUTTON_FALLBACK,
        ),
        _ => {
            tracing::debug!("Ignoring component {}", custom_id);
            return;
        }
    };

    if let Err(e) = result {
        let content = e.into_reply_content(fallback);
        if let Err(e) = interaction.create_response(&ctx.http, ephemeral(content)).await {
            tracing::error!("Failed to send error reply for component {}: {}", custom_id, e);
        }
    }
}

async fn handle_modal(state: &BotState, ctx: &Context, interaction: &ModalInteraction) {
    let custom_id = interaction.data.custom_id.as_str();

    let (result, fallback) = if custom_id == VERIFICATION_MODAL_ID {
        (
            modal::handle_verification_modal(state, ctx, interaction).await,
            VERIFY_FALLBACK,
        )
    } else if let Some(category) = modal::config_category(custom_id) {
        (
            modal::handle_config_modal(state, ctx, interaction, category).await,
            CONFIG_UPDATE_FALLBACK,
        )
    } else {
        tracing::debug!("Ignoring modal {}", custom_id);
        return;
    };

    if let Err(e) = result {
        let content = e.into_reply_content(fallback);
        if let Err(e) = interaction.create_response(&ctx.http, ephemeral(content)).await {
            tracing::error!("Failed to send error reply for modal {}: {}", custom_id, e);
        }
    }
}
