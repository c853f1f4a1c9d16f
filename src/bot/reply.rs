use serenity::all::{CreateInteractionResponse, CreateInteractionResponseMessage};

/// Builds a reply only the invoking user can see.
pub fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}
