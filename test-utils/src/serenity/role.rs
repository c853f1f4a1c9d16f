//! Test factory for creating Serenity Role objects.
//!
//! Roles are what the bot resolves admin, unverified and verified role
//! references against. The factory builds them by deserializing JSON,
//! simulating what Discord's API would return.

use serenity::all::Role;

/// Creates a test Serenity Role belonging to a guild.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (no color, not hoisted, not
/// managed, not mentionable, with zero permissions).
///
/// # Arguments
/// - `guild_id` - Discord guild ID the role belongs to
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(1, 123456789, "Unverified");
/// assert_eq!(role.name, "Unverified");
/// ```
pub fn create_test_role(guild_id: u64, role_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
        "flags": 0,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_role_with_given_identity() {
        let role = create_test_role(1, 123456789, "Unverified");

        assert_eq!(role.id.get(), 123456789);
        assert_eq!(role.guild_id.get(), 1);
        assert_eq!(role.name, "Unverified");
    }
}
