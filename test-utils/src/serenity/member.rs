//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test guild Member as delivered with an interaction.
///
/// Interaction payloads carry the member's resolved permissions, so the
/// factory sets `permissions` alongside the role list.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID of the member
/// - `role_ids` - IDs of the roles the member holds
/// - `permissions` - Raw permission bits (`8` is administrator)
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    role_ids: &[u64],
    permissions: u64,
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": "test-user",
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": permissions.to_string(),
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
