//! Builders for the public verification prompt and the password modal.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateInputText,
    CreateInteractionResponseMessage, CreateMessage, CreateModal, InputTextStyle,
};

use crate::model::{
    interaction::{PASSWORD_INPUT_ID, VERIFICATION_MODAL_ID, VERIFY_BUTTON_ID},
    settings::Settings,
};

/// Builds the verification embed from the configured title, description and color.
pub fn build_verification_embed(settings: &Settings) -> CreateEmbed {
    CreateEmbed::new()
        .title(settings.embed_title())
        .description(settings.embed_description())
        .color(settings.embed_color_value())
}

/// Builds the row holding the persistent verify button.
pub fn build_verify_button_row(settings: &Settings) -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(VERIFY_BUTTON_ID)
        .label(settings.button_text())
        .style(ButtonStyle::Primary)])
}

/// Builds the prompt as a plain channel message, used for sticky posts.
pub fn build_prompt_message(settings: &Settings) -> CreateMessage {
    CreateMessage::new()
        .embed(build_verification_embed(settings))
        .components(vec![build_verify_button_row(settings)])
}

/// Builds the prompt as a public reply to `/setup`.
pub fn build_prompt_response(settings: &Settings) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(build_verification_embed(settings))
        .components(vec![build_verify_button_row(settings)])
}

/// Builds the modal opened by the verify button.
pub fn build_password_modal() -> CreateModal {
    let password_input = CreateInputText::new(InputTextStyle::Short, "Password", PASSWORD_INPUT_ID)
        .placeholder("Please read the rules before entering the password")
        .required(true);

    CreateModal::new(VERIFICATION_MODAL_ID, "Server Verification")
        .components(vec![CreateActionRow::InputText(password_input)])
}
