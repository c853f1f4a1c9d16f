//! Domain model for the persisted bot settings.
//!
//! The whole configuration is a single flat record stored as one JSON document
//! with camelCase keys. Every key is optional on disk: missing keys take their
//! defaults so a hand-written or partially filled file still loads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::parse::parse_hex_color;

/// Embed color used when none is configured or the stored value is not valid hex.
pub const DEFAULT_EMBED_COLOR: &str = "#0099ff";
pub const DEFAULT_EMBED_TITLE: &str = "Server Verification";
pub const DEFAULT_EMBED_DESCRIPTION: &str = "Click the button below to verify.";
pub const DEFAULT_BUTTON_TEXT: &str = "Verify";

/// Complete bot configuration edited through the `/config` panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Roles granted admin-equivalent access. Never contains duplicates.
    pub admin_role_ids: Vec<String>,
    /// Shared secret compared verbatim against the verification modal input.
    pub verification_password: Option<String>,
    /// Role removed from a member on successful verification.
    #[serde(alias = "verificationRoleId")]
    pub unverified_role_id: Option<String>,
    /// Role added on successful verification. When unset, verification only
    /// removes the unverified role.
    pub verified_role_id: Option<String>,
    pub embed_title: Option<String>,
    pub embed_description: Option<String>,
    pub embed_color: Option<String>,
    pub button_text: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sticky_message: StickyMessage,
}

/// State of the sticky verification prompt.
///
/// `channel_id` and `message_id` are both `None` whenever sticky mode is
/// disabled or no prompt has been posted since it was enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StickyMessage {
    pub enabled: bool,
    pub channel_id: Option<String>,
    pub message_id: Option<String>,
}

impl Settings {
    pub fn has_admin_role(&self, role_id: &str) -> bool {
        self.admin_role_ids.iter().any(|id| id == role_id)
    }

    /// Adds an admin role, returning `false` if it was already present.
    pub fn add_admin_role(&mut self, role_id: &str) -> bool {
        if self.has_admin_role(role_id) {
            return false;
        }

        self.admin_role_ids.push(role_id.to_string());
        true
    }

    /// Removes an admin role, returning `false` if it was not present.
    pub fn remove_admin_role(&mut self, role_id: &str) -> bool {
        let before = self.admin_role_ids.len();
        self.admin_role_ids.retain(|id| id != role_id);
        self.admin_role_ids.len() != before
    }

    pub fn clear_admin_roles(&mut self) {
        self.admin_role_ids.clear();
    }

    pub fn embed_title(&self) -> &str {
        non_blank(&self.embed_title).unwrap_or(DEFAULT_EMBED_TITLE)
    }

    pub fn embed_description(&self) -> &str {
        non_blank(&self.embed_description).unwrap_or(DEFAULT_EMBED_DESCRIPTION)
    }

    /// Configured color string as shown in the panel, or the default.
    pub fn embed_color(&self) -> &str {
        non_blank(&self.embed_color).unwrap_or(DEFAULT_EMBED_COLOR)
    }

    /// Numeric embed color, falling back to the default for unparsable values.
    pub fn embed_color_value(&self) -> u32 {
        parse_hex_color(self.embed_color())
            .or_else(|| parse_hex_color(DEFAULT_EMBED_COLOR))
            .unwrap_or_default()
    }

    pub fn button_text(&self) -> &str {
        non_blank(&self.button_text).unwrap_or(DEFAULT_BUTTON_TEXT)
    }
}

impl StickyMessage {
    /// Whether a posted sticky prompt is currently being maintained.
    pub fn is_active(&self) -> bool {
        self.enabled && self.channel_id.is_some() && self.message_id.is_some()
    }

    /// Marks sticky mode as enabled and records the freshly posted prompt.
    pub fn activate(&mut self, channel_id: String, message_id: String) {
        self.enabled = true;
        self.channel_id = Some(channel_id);
        self.message_id = Some(message_id);
    }

    /// Disables sticky mode and forgets the tracked prompt.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.channel_id = None;
        self.message_id = None;
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicates() {
        let mut settings = Settings::default();

        assert!(settings.add_admin_role("1"));
        assert!(!settings.add_admin_role("1"));
        assert_eq!(settings.admin_role_ids, vec!["1".to_string()]);
    }

    #[test]
    fn remove_rejects_absent_role() {
        let mut settings = Settings {
            admin_role_ids: vec!["1".to_string(), "2".to_string()],
            ..Default::default()
        };

        assert!(!settings.remove_admin_role("3"));
        assert!(settings.remove_admin_role("1"));
        assert_eq!(settings.admin_role_ids, vec!["2".to_string()]);
    }

    #[test]
    fn clear_always_empties() {
        let mut settings = Settings {
            admin_role_ids: vec!["1".to_string(), "2".to_string()],
            ..Default::default()
        };
        settings.clear_admin_roles();
        assert!(settings.admin_role_ids.is_empty());

        settings.clear_admin_roles();
        assert!(settings.admin_role_ids.is_empty());
    }

    /// Files written by older deployments use camelCase keys, the legacy
    /// `verificationRoleId` name, and may store `null` for the sticky block.
    #[test]
    fn reads_legacy_document() {
        let settings: Settings = serde_json::from_value(serde_json::json!({
            "adminRoleIds": ["10"],
            "verificationPassword": "secret",
            "verificationRoleId": "20",
            "embedTitle": "Welcome",
            "stickyMessage": null,
            "somethingElse": true
        }))
        .unwrap();

        assert_eq!(settings.admin_role_ids, vec!["10".to_string()]);
        assert_eq!(settings.verification_password.as_deref(), Some("secret"));
        assert_eq!(settings.unverified_role_id.as_deref(), Some("20"));
        assert_eq!(settings.verified_role_id, None);
        assert_eq!(settings.sticky_message, StickyMessage::default());
    }

    #[test]
    fn writes_camel_case_keys() {
        let settings = Settings {
            unverified_role_id: Some("20".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&settings).unwrap();

        assert_eq!(value["unverifiedRoleId"], "20");
        assert_eq!(value["stickyMessage"]["enabled"], false);
        assert!(value["stickyMessage"]["channelId"].is_null());
    }

    #[test]
    fn rendering_falls_back_to_defaults() {
        let settings = Settings {
            embed_title: Some("   ".to_string()),
            embed_color: Some("not a color".to_string()),
            ..Default::default()
        };

        assert_eq!(settings.embed_title(), DEFAULT_EMBED_TITLE);
        assert_eq!(settings.button_text(), DEFAULT_BUTTON_TEXT);
        assert_eq!(settings.embed_color_value(), 0x0099ff);
    }

    #[test]
    fn sticky_activation_and_disable() {
        let mut sticky = StickyMessage {
            enabled: true,
            ..Default::default()
        };
        assert!(!sticky.is_active());

        sticky.activate("1".to_string(), "2".to_string());
        assert!(sticky.is_active());

        sticky.disable();
        assert_eq!(sticky, StickyMessage::default());
    }
}
