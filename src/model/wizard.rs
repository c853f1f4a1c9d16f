//! Domain models for the configuration wizard.
//!
//! The wizard has three steps: the category select menu, a per-category modal,
//! and the applied result. `ConfigCategory` enumerates the menu entries and
//! owns each category's modal schema, while `ConfigSubmission` is the parsed,
//! validated form of a submitted modal ready to be applied to the settings.

use serenity::all::InputTextStyle;
use std::collections::HashMap;

use crate::{
    error::AppError,
    model::{
        interaction::CONFIG_MODAL_PREFIX,
        settings::{Settings, DEFAULT_EMBED_COLOR},
    },
    util::parse::{parse_hex_color, strip_role_mention},
};

pub const ROLE_ACTION_FIELD: &str = "role_action";
pub const ROLE_ID_FIELD: &str = "role_id";
pub const PASSWORD_FIELD: &str = "password";
pub const UNVERIFIED_ROLE_FIELD: &str = "verify_role_id";
pub const VERIFIED_ROLE_FIELD: &str = "verified_role_id";
pub const EMBED_TITLE_FIELD: &str = "embed_title";
pub const EMBED_DESCRIPTION_FIELD: &str = "embed_description";
pub const EMBED_COLOR_FIELD: &str = "embed_color";
pub const BUTTON_TEXT_FIELD: &str = "button_text";

/// Discord's limit on embed titles.
pub const MAX_EMBED_TITLE_CHARS: usize = 256;
/// Discord's limit on the value of a modal text input.
pub const MAX_EMBED_DESCRIPTION_CHARS: usize = 4000;
/// Discord's limit on button labels.
pub const MAX_BUTTON_TEXT_CHARS: usize = 80;
const MAX_EMBED_COLOR_CHARS: usize = 7;

/// Input accepted by the verified role modal to switch back to removal-only verification.
pub const CLEAR_VERIFIED_ROLE_KEYWORD: &str = "none";

/// Setting categories offered by the configuration select menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCategory {
    AdminRoles,
    Password,
    UnverifiedRole,
    VerifiedRole,
    Embed,
    ButtonText,
    /// Flipped directly on selection, never opens a modal.
    Sticky,
}

/// A single text input rendered inside a category modal.
#[derive(Debug, Clone)]
pub struct ModalField {
    pub custom_id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub style: InputTextStyle,
    pub required: bool,
    /// Pre-filled value; always `None` for role and password inputs.
    pub value: Option<String>,
    /// Longest input Discord lets the user type, in characters.
    pub max_length: Option<usize>,
}

impl ConfigCategory {
    /// Menu order of every category.
    pub const ALL: [ConfigCategory; 7] = [
        ConfigCategory::AdminRoles,
        ConfigCategory::Password,
        ConfigCategory::UnverifiedRole,
        ConfigCategory::VerifiedRole,
        ConfigCategory::Embed,
        ConfigCategory::ButtonText,
        ConfigCategory::Sticky,
    ];

    /// Value carried by the select menu option.
    pub fn value(self) -> &'static str {
        match self {
            Self::AdminRoles => "adminrole",
            Self::Password => "password",
            Self::UnverifiedRole => "unverified_role",
            Self::VerifiedRole => "verified_role",
            Self::Embed => "embed",
            Self::ButtonText => "button",
            Self::Sticky => "sticky",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AdminRoles => "Admin Roles",
            Self::Password => "Verification Password",
            Self::UnverifiedRole => "Unverified Role",
            Self::VerifiedRole => "Verified Role",
            Self::Embed => "Embed Settings",
            Self::ButtonText => "Button Text",
            Self::Sticky => "Sticky Message",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::AdminRoles => "Manage admin roles",
            Self::Password => "Set the verification password",
            Self::UnverifiedRole => "Set the role to be removed after verification",
            Self::VerifiedRole => "Set the role to be added after verification",
            Self::Embed => "Configure embed title, description, and color",
            Self::ButtonText => "Set the verification button text",
            Self::Sticky => "Toggle sticky message mode",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::AdminRoles => "👑",
            Self::Password => "🔐",
            Self::UnverifiedRole => "🎭",
            Self::VerifiedRole => "✅",
            Self::Embed => "📝",
            Self::ButtonText => "🔘",
            Self::Sticky => "📌",
        }
    }

    pub fn modal_custom_id(self) -> String {
        format!("{}{}", CONFIG_MODAL_PREFIX, self.value())
    }

    pub fn from_modal_custom_id(custom_id: &str) -> Option<Self> {
        custom_id
            .strip_prefix(CONFIG_MODAL_PREFIX)
            .and_then(Self::from_value)
    }

    /// Whether selecting this category opens a modal.
    pub fn has_modal(self) -> bool {
        !matches!(self, Self::Sticky)
    }

    /// Builds the modal schema for this category.
    ///
    /// Embed and button inputs are pre-filled from the current settings so the
    /// admin edits rather than retypes them. Role and password inputs start
    /// empty.
    ///
    /// # Arguments
    /// - `settings` - Current settings used for pre-filled values
    ///
    /// # Returns
    /// - `Vec<ModalField>` - Inputs in display order; empty for `Sticky`
    pub fn fields(self, settings: &Settings) -> Vec<ModalField> {
        match self {
            Self::AdminRoles => vec![
                ModalField {
                    custom_id: ROLE_ACTION_FIELD,
                    label: "Action (add/remove/clear)",
                    placeholder: "Type 'add', 'remove', or 'clear'",
                    style: InputTextStyle::Short,
                    required: true,
                    value: None,
                    max_length: None,
                },
                ModalField {
                    custom_id: ROLE_ID_FIELD,
                    label: "Role ID (for add/remove)",
                    placeholder: "Enter role ID or mention (leave empty for clear)",
                    style: InputTextStyle::Short,
                    required: false,
                    value: None,
                    max_length: None,
                },
            ],
            Self::Password => vec![ModalField {
                custom_id: PASSWORD_FIELD,
                label: "Verification Password",
                placeholder: "Enter the new verification password",
                style: InputTextStyle::Short,
                required: true,
                value: None,
                max_length: None,
            }],
            Self::UnverifiedRole => vec![ModalField {
                custom_id: UNVERIFIED_ROLE_FIELD,
                label: "Unverified Role ID",
                placeholder: "Enter the role ID or mention the role",
                style: InputTextStyle::Short,
                required: true,
                value: None,
                max_length: None,
            }],
            Self::VerifiedRole => vec![ModalField {
                custom_id: VERIFIED_ROLE_FIELD,
                label: "Verified Role ID",
                placeholder: "Enter the role ID, mention the role, or 'none' to clear",
                style: InputTextStyle::Short,
                required: true,
                value: None,
                max_length: None,
            }],
            Self::Embed => vec![
                ModalField {
                    custom_id: EMBED_TITLE_FIELD,
                    label: "Embed Title",
                    placeholder: "Enter the embed title",
                    style: InputTextStyle::Short,
                    required: true,
                    value: Some(settings.embed_title.clone().unwrap_or_default()),
                    max_length: Some(MAX_EMBED_TITLE_CHARS),
                },
                ModalField {
                    custom_id: EMBED_DESCRIPTION_FIELD,
                    label: "Embed Description",
                    placeholder: "Enter the embed description",
                    style: InputTextStyle::Paragraph,
                    required: true,
                    value: Some(settings.embed_description.clone().unwrap_or_default()),
                    max_length: Some(MAX_EMBED_DESCRIPTION_CHARS),
                },
                ModalField {
                    custom_id: EMBED_COLOR_FIELD,
                    label: "Embed Color (Hex)",
                    placeholder: DEFAULT_EMBED_COLOR,
                    style: InputTextStyle::Short,
                    required: false,
                    value: Some(settings.embed_color().to_string()),
                    max_length: Some(MAX_EMBED_COLOR_CHARS),
                },
            ],
            Self::ButtonText => vec![ModalField {
                custom_id: BUTTON_TEXT_FIELD,
                label: "Button Text",
                placeholder: "Enter the button text",
                style: InputTextStyle::Short,
                required: true,
                value: Some(settings.button_text.clone().unwrap_or_default()),
                max_length: Some(MAX_BUTTON_TEXT_CHARS),
            }],
            Self::Sticky => Vec::new(),
        }
    }
}

/// Admin role edit requested through the admin roles modal.
///
/// Role references are already stripped of mention decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminRoleAction {
    Add(String),
    Remove(String),
    Clear,
}

/// Validated content of a submitted configuration modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSubmission {
    AdminRoles(AdminRoleAction),
    Password(String),
    /// Role reference for the role removed on verification.
    UnverifiedRole(String),
    /// Role reference for the role added on verification, `None` to clear it.
    VerifiedRole(Option<String>),
    Embed {
        title: String,
        description: String,
        /// Normalized `#rrggbb` color.
        color: String,
    },
    ButtonText(String),
}

impl ConfigSubmission {
    /// Parses and validates the raw inputs of a configuration modal.
    ///
    /// Only performs checks that need no guild data; role references are
    /// resolved against the guild when the submission is applied.
    ///
    /// # Arguments
    /// - `category` - Category encoded in the modal's custom ID
    /// - `fields` - Map of input custom ID to submitted value
    ///
    /// # Returns
    /// - `Ok(ConfigSubmission)` - Validated submission
    /// - `Err(AppError::BadRequest)` - Missing or invalid input, with the message to show
    pub fn parse(
        category: ConfigCategory,
        fields: &HashMap<String, String>,
    ) -> Result<Self, AppError> {
        let submission = match category {
            ConfigCategory::AdminRoles => {
                let role = strip_role_mention(field(fields, ROLE_ID_FIELD));
                let action = match field(fields, ROLE_ACTION_FIELD).to_lowercase().as_str() {
                    "clear" => AdminRoleAction::Clear,
                    "add" => {
                        if role.is_empty() {
                            return Err(bad_request("Role ID is required for add action."));
                        }
                        AdminRoleAction::Add(role)
                    }
                    "remove" => {
                        if role.is_empty() {
                            return Err(bad_request("Role ID is required for remove action."));
                        }
                        AdminRoleAction::Remove(role)
                    }
                    _ => {
                        return Err(bad_request(
                            "Invalid action. Use 'add', 'remove', or 'clear'.",
                        ))
                    }
                };
                Self::AdminRoles(action)
            }
            ConfigCategory::Password => {
                // Stored verbatim, surrounding whitespace included.
                let password = fields.get(PASSWORD_FIELD).cloned().unwrap_or_default();
                if password.is_empty() {
                    return Err(bad_request("Verification password cannot be empty."));
                }
                Self::Password(password)
            }
            ConfigCategory::UnverifiedRole => {
                Self::UnverifiedRole(required_role(field(fields, UNVERIFIED_ROLE_FIELD))?)
            }
            ConfigCategory::VerifiedRole => {
                let input = field(fields, VERIFIED_ROLE_FIELD);
                if input.eq_ignore_ascii_case(CLEAR_VERIFIED_ROLE_KEYWORD) {
                    Self::VerifiedRole(None)
                } else {
                    Self::VerifiedRole(Some(required_role(input)?))
                }
            }
            ConfigCategory::Embed => {
                let title = field(fields, EMBED_TITLE_FIELD);
                let description = field(fields, EMBED_DESCRIPTION_FIELD);
                if title.is_empty() {
                    return Err(bad_request("Embed title cannot be empty."));
                }
                if description.is_empty() {
                    return Err(bad_request("Embed description cannot be empty."));
                }
                if title.chars().count() > MAX_EMBED_TITLE_CHARS {
                    return Err(too_long("Embed title", MAX_EMBED_TITLE_CHARS));
                }
                if description.chars().count() > MAX_EMBED_DESCRIPTION_CHARS {
                    return Err(too_long("Embed description", MAX_EMBED_DESCRIPTION_CHARS));
                }

                let color = match field(fields, EMBED_COLOR_FIELD) {
                    "" => DEFAULT_EMBED_COLOR.to_string(),
                    raw => {
                        let value = parse_hex_color(raw).ok_or_else(|| {
                            bad_request("Invalid embed color. Use a hex value like #0099ff.")
                        })?;
                        format!("#{:06x}", value)
                    }
                };

                Self::Embed {
                    title: title.to_string(),
                    description: description.to_string(),
                    color,
                }
            }
            ConfigCategory::ButtonText => {
                let text = field(fields, BUTTON_TEXT_FIELD);
                if text.is_empty() {
                    return Err(bad_request("Button text cannot be empty."));
                }
                if text.chars().count() > MAX_BUTTON_TEXT_CHARS {
                    return Err(too_long("Button text", MAX_BUTTON_TEXT_CHARS));
                }
                Self::ButtonText(text.to_string())
            }
            ConfigCategory::Sticky => return Err(bad_request("Unknown configuration type.")),
        };

        Ok(submission)
    }
}

/// Trimmed value of a submitted input, empty when the input was not sent.
fn field<'a>(fields: &'a HashMap<String, String>, id: &str) -> &'a str {
    fields.get(id).map(|v| v.trim()).unwrap_or_default()
}

fn required_role(input: &str) -> Result<String, AppError> {
    let role = strip_role_mention(input);
    if role.is_empty() {
        return Err(bad_request("Invalid role ID or role not found."));
    }
    Ok(role)
}

fn bad_request(msg: &str) -> AppError {
    AppError::BadRequest(msg.to_string())
}

fn too_long(what: &str, max: usize) -> AppError {
    AppError::BadRequest(format!("{} cannot be longer than {} characters.", what, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn bad_request_message(result: Result<ConfigSubmission, AppError>) -> String {
        match result {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("Expected BadRequest, got: {:?}", other),
        }
    }

    #[test]
    fn category_values_round_trip_through_modal_ids() {
        for category in ConfigCategory::ALL {
            assert_eq!(ConfigCategory::from_value(category.value()), Some(category));
            assert_eq!(
                ConfigCategory::from_modal_custom_id(&category.modal_custom_id()),
                Some(category)
            );
        }
        assert_eq!(ConfigCategory::from_modal_custom_id("config_modal_other"), None);
        assert_eq!(ConfigCategory::from_modal_custom_id("verification_modal"), None);
    }

    /// Only the sticky toggle bypasses the modal step.
    #[test]
    fn sticky_has_no_modal() {
        let settings = Settings::default();
        for category in ConfigCategory::ALL {
            assert_eq!(category.has_modal(), !category.fields(&settings).is_empty());
        }
        assert!(!ConfigCategory::Sticky.has_modal());
    }

    /// Secrets and IDs are never pre-filled while presentation fields are.
    #[test]
    fn only_presentation_fields_are_prefilled() {
        let settings = Settings {
            verification_password: Some("secret".to_string()),
            unverified_role_id: Some("1".to_string()),
            embed_title: Some("Welcome".to_string()),
            button_text: Some("Let me in".to_string()),
            ..Default::default()
        };

        for category in [
            ConfigCategory::AdminRoles,
            ConfigCategory::Password,
            ConfigCategory::UnverifiedRole,
            ConfigCategory::VerifiedRole,
        ] {
            assert!(category.fields(&settings).iter().all(|f| f.value.is_none()));
        }

        let embed = ConfigCategory::Embed.fields(&settings);
        assert_eq!(embed[0].value.as_deref(), Some("Welcome"));
        assert_eq!(embed[1].value.as_deref(), Some(""));
        assert_eq!(embed[2].value.as_deref(), Some(DEFAULT_EMBED_COLOR));

        let button = ConfigCategory::ButtonText.fields(&settings);
        assert_eq!(button[0].value.as_deref(), Some("Let me in"));
    }

    #[test]
    fn admin_role_action_is_case_insensitive() {
        let submission = ConfigSubmission::parse(
            ConfigCategory::AdminRoles,
            &fields(&[(ROLE_ACTION_FIELD, " ADD "), (ROLE_ID_FIELD, "<@&123>")]),
        )
        .unwrap();

        assert_eq!(
            submission,
            ConfigSubmission::AdminRoles(AdminRoleAction::Add("123".to_string()))
        );
    }

    /// Clear ignores any role reference.
    #[test]
    fn admin_role_clear_needs_no_role() {
        let submission = ConfigSubmission::parse(
            ConfigCategory::AdminRoles,
            &fields(&[(ROLE_ACTION_FIELD, "Clear"), (ROLE_ID_FIELD, "")]),
        )
        .unwrap();

        assert_eq!(submission, ConfigSubmission::AdminRoles(AdminRoleAction::Clear));
    }

    #[test]
    fn admin_role_add_and_remove_require_role() {
        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::AdminRoles,
            &fields(&[(ROLE_ACTION_FIELD, "add")]),
        ));
        assert_eq!(msg, "Role ID is required for add action.");

        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::AdminRoles,
            &fields(&[(ROLE_ACTION_FIELD, "remove"), (ROLE_ID_FIELD, "<@&>")]),
        ));
        assert_eq!(msg, "Role ID is required for remove action.");
    }

    #[test]
    fn admin_role_unknown_action_is_usage_error() {
        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::AdminRoles,
            &fields(&[(ROLE_ACTION_FIELD, "promote"), (ROLE_ID_FIELD, "1")]),
        ));

        assert_eq!(msg, "Invalid action. Use 'add', 'remove', or 'clear'.");
    }

    #[test]
    fn password_is_stored_verbatim() {
        let submission = ConfigSubmission::parse(
            ConfigCategory::Password,
            &fields(&[(PASSWORD_FIELD, " Open Sesame ")]),
        )
        .unwrap();

        assert_eq!(submission, ConfigSubmission::Password(" Open Sesame ".to_string()));

        assert!(ConfigSubmission::parse(ConfigCategory::Password, &fields(&[])).is_err());
    }

    #[test]
    fn verified_role_accepts_clear_keyword() {
        let submission = ConfigSubmission::parse(
            ConfigCategory::VerifiedRole,
            &fields(&[(VERIFIED_ROLE_FIELD, "None")]),
        )
        .unwrap();
        assert_eq!(submission, ConfigSubmission::VerifiedRole(None));

        let submission = ConfigSubmission::parse(
            ConfigCategory::VerifiedRole,
            &fields(&[(VERIFIED_ROLE_FIELD, "<@&55>")]),
        )
        .unwrap();
        assert_eq!(submission, ConfigSubmission::VerifiedRole(Some("55".to_string())));
    }

    #[test]
    fn unverified_role_requires_reference() {
        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::UnverifiedRole,
            &fields(&[(UNVERIFIED_ROLE_FIELD, "  ")]),
        ));

        assert_eq!(msg, "Invalid role ID or role not found.");
    }

    #[test]
    fn embed_color_defaults_when_blank() {
        let submission = ConfigSubmission::parse(
            ConfigCategory::Embed,
            &fields(&[
                (EMBED_TITLE_FIELD, "Welcome"),
                (EMBED_DESCRIPTION_FIELD, "Read the rules"),
                (EMBED_COLOR_FIELD, " "),
            ]),
        )
        .unwrap();

        assert_eq!(
            submission,
            ConfigSubmission::Embed {
                title: "Welcome".to_string(),
                description: "Read the rules".to_string(),
                color: DEFAULT_EMBED_COLOR.to_string(),
            }
        );
    }

    #[test]
    fn embed_color_is_normalized() {
        let submission = ConfigSubmission::parse(
            ConfigCategory::Embed,
            &fields(&[
                (EMBED_TITLE_FIELD, "Welcome"),
                (EMBED_DESCRIPTION_FIELD, "Read the rules"),
                (EMBED_COLOR_FIELD, "FF00AA"),
            ]),
        )
        .unwrap();

        match submission {
            ConfigSubmission::Embed { color, .. } => assert_eq!(color, "#ff00aa"),
            other => panic!("Expected Embed, got: {:?}", other),
        }
    }

    #[test]
    fn embed_requires_title_description_and_valid_color() {
        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::Embed,
            &fields(&[(EMBED_DESCRIPTION_FIELD, "Read the rules")]),
        ));
        assert_eq!(msg, "Embed title cannot be empty.");

        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::Embed,
            &fields(&[(EMBED_TITLE_FIELD, "Welcome")]),
        ));
        assert_eq!(msg, "Embed description cannot be empty.");

        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::Embed,
            &fields(&[
                (EMBED_TITLE_FIELD, "Welcome"),
                (EMBED_DESCRIPTION_FIELD, "Read the rules"),
                (EMBED_COLOR_FIELD, "blurple"),
            ]),
        ));
        assert_eq!(msg, "Invalid embed color. Use a hex value like #0099ff.");
    }

    #[test]
    fn button_text_is_required() {
        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::ButtonText,
            &fields(&[(BUTTON_TEXT_FIELD, "")]),
        ));

        assert_eq!(msg, "Button text cannot be empty.");
    }

    /// Limits are counted in characters, not bytes.
    #[test]
    fn overlong_presentation_text_is_rejected() {
        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::ButtonText,
            &fields(&[(BUTTON_TEXT_FIELD, "b".repeat(MAX_BUTTON_TEXT_CHARS + 1).as_str())]),
        ));
        assert_eq!(msg, "Button text cannot be longer than 80 characters.");

        let msg = bad_request_message(ConfigSubmission::parse(
            ConfigCategory::Embed,
            &fields(&[
                (EMBED_TITLE_FIELD, "t".repeat(MAX_EMBED_TITLE_CHARS + 1).as_str()),
                (EMBED_DESCRIPTION_FIELD, "Read the rules"),
            ]),
        ));
        assert_eq!(msg, "Embed title cannot be longer than 256 characters.");

        let submission = ConfigSubmission::parse(
            ConfigCategory::ButtonText,
            &fields(&[(BUTTON_TEXT_FIELD, "é".repeat(MAX_BUTTON_TEXT_CHARS).as_str())]),
        );
        assert!(submission.is_ok());
    }

    #[test]
    fn presentation_inputs_carry_length_limits() {
        let settings = Settings::default();

        let embed = ConfigCategory::Embed.fields(&settings);
        assert_eq!(embed[0].max_length, Some(MAX_EMBED_TITLE_CHARS));
        assert_eq!(embed[1].max_length, Some(MAX_EMBED_DESCRIPTION_CHARS));

        let button = ConfigCategory::ButtonText.fields(&settings);
        assert_eq!(button[0].max_length, Some(MAX_BUTTON_TEXT_CHARS));
    }
}
