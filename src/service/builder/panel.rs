//! Builders for the administrator configuration panel and its modals.
//!
//! The panel is an ephemeral embed summarising the current settings with a
//! select menu of `ConfigCategory` entries underneath. Choosing a category
//! opens the modal built from that category's field schema.

use serenity::all::{
    CreateActionRow, CreateEmbed, CreateInputText, CreateInteractionResponseMessage, CreateModal,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, ReactionType, Role, RoleId,
};
use std::collections::HashMap;

use crate::{
    model::{interaction::CONFIG_SELECT_ID, settings::Settings, wizard::ConfigCategory},
    util::parse::parse_role_id,
};

const NOT_SET: &str = "Not Set";
/// Number of description characters shown in the panel before truncation.
const DESCRIPTION_PREVIEW_CHARS: usize = 50;
/// Title and button text are echoed up to this many characters; field values cap at 1024.
const TEXT_PREVIEW_CHARS: usize = 100;

/// Builds the ephemeral configuration panel reply.
///
/// # Arguments
/// - `settings` - Current settings to summarise
/// - `roles` - Guild roles used to display configured role IDs by name
///
/// # Returns
/// - `CreateInteractionResponseMessage` - Ephemeral panel with embed and category select menu
pub fn build_config_panel(
    settings: &Settings,
    roles: &HashMap<RoleId, Role>,
) -> CreateInteractionResponseMessage {
    let admin_roles: Vec<&str> = settings
        .admin_role_ids
        .iter()
        .filter_map(|id| role_name(roles, id))
        .collect();
    let admin_roles = if admin_roles.is_empty() {
        NOT_SET.to_string()
    } else {
        admin_roles.join(", ")
    };

    let configured_role = |id: &Option<String>| {
        id.as_deref()
            .and_then(|id| role_name(roles, id))
            .unwrap_or(NOT_SET)
            .to_string()
    };

    let password = if settings.verification_password.is_some() {
        "Set"
    } else {
        NOT_SET
    };

    let sticky = if settings.sticky_message.enabled {
        "Enabled"
    } else {
        "Disabled"
    };

    let embed = CreateEmbed::new()
        .title("🔧 Bot Configuration Panel")
        .description("Configure all bot settings from this unified panel")
        .field("👑 Admin Roles", admin_roles, true)
        .field("🔐 Verification Password", password, true)
        .field(
            "🎭 Unverified Role",
            configured_role(&settings.unverified_role_id),
            true,
        )
        .field(
            "✅ Verified Role",
            configured_role(&settings.verified_role_id),
            true,
        )
        .field(
            "📝 Embed Title",
            preview_text(settings.embed_title.as_deref()),
            true,
        )
        .field(
            "📄 Embed Description",
            settings
                .embed_description
                .as_deref()
                .map(preview_description)
                .unwrap_or_else(|| NOT_SET.to_string()),
            true,
        )
        .field("🎨 Embed Color", settings.embed_color(), true)
        .field(
            "🔘 Button Text",
            preview_text(settings.button_text.as_deref()),
            true,
        )
        .field("📌 Sticky Message", sticky, true)
        .color(settings.embed_color_value());

    let options = ConfigCategory::ALL
        .into_iter()
        .map(|category| {
            CreateSelectMenuOption::new(category.label(), category.value())
                .description(category.description())
                .emoji(ReactionType::Unicode(category.emoji().to_string()))
        })
        .collect();

    let select_menu = CreateSelectMenu::new(CONFIG_SELECT_ID, CreateSelectMenuKind::String { options })
        .placeholder("Select a setting to configure");

    CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(vec![CreateActionRow::SelectMenu(select_menu)])
        .ephemeral(true)
}

/// Builds the modal for a configuration category.
///
/// # Arguments
/// - `category` - Category chosen in the select menu; must have a modal
/// - `settings` - Current settings used to pre-fill presentation fields
///
/// # Returns
/// - `CreateModal` - Modal whose custom ID encodes the category
pub fn build_config_modal(category: ConfigCategory, settings: &Settings) -> CreateModal {
    let rows = category
        .fields(settings)
        .into_iter()
        .map(|field| {
            let mut input = CreateInputText::new(field.style, field.label, field.custom_id)
                .placeholder(field.placeholder)
                .required(field.required);
            if let Some(max) = field.max_length {
                input = input.max_length(u16::try_from(max).unwrap_or(u16::MAX));
            }
            // Discord rejects an empty pre-filled value
            if let Some(value) = field.value.filter(|value| !value.is_empty()) {
                input = input.value(value);
            }
            CreateActionRow::InputText(input)
        })
        .collect();

    CreateModal::new(category.modal_custom_id(), "Configuration").components(rows)
}

/// Truncates a description to its first 50 characters for the panel.
pub fn preview_description(description: &str) -> String {
    truncate_chars(description, DESCRIPTION_PREVIEW_CHARS)
}

/// Panel value for a title or button text, "Not Set" when missing.
///
/// Settings files edited by hand may hold values longer than the modals
/// accept, so the echo is truncated to keep the panel embed valid.
fn preview_text(value: Option<&str>) -> String {
    value
        .map(|value| truncate_chars(value, TEXT_PREVIEW_CHARS))
        .unwrap_or_else(|| NOT_SET.to_string())
}

fn truncate_chars(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let preview: String = value.chars().take(max).collect();
        format!("{}...", preview)
    } else {
        value.to_string()
    }
}

fn role_name<'a>(roles: &'a HashMap<RoleId, Role>, id: &str) -> Option<&'a str> {
    let role_id = parse_role_id(id).ok()?;
    roles.get(&role_id).map(|role| role.name.as_str())
}
