use std::num::NonZeroU64;

use serenity::all::{ChannelId, MessageId, RoleId};

use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake from a String
///
/// Zero is rejected along with non-numeric input since Serenity IDs must be
/// non-zero.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to a non-zero `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a non-zero u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result.get())
}

pub fn parse_role_id(value: &str) -> Result<RoleId, AppError> {
    Ok(RoleId::new(parse_u64_from_string(value)?))
}

pub fn parse_channel_id(value: &str) -> Result<ChannelId, AppError> {
    Ok(ChannelId::new(parse_u64_from_string(value)?))
}

pub fn parse_message_id(value: &str) -> Result<MessageId, AppError> {
    Ok(MessageId::new(parse_u64_from_string(value)?))
}

/// Reduces a role reference typed into a modal to a bare role ID.
///
/// Accepts either a raw ID or a mention token such as `<@&1234>`; every `<`,
/// `@`, `&` and `>` character is removed, wherever it appears.
pub fn strip_role_mention(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '@' | '&' | '>'))
        .collect()
}

/// Parses a `#RRGGBB` or `RRGGBB` hex color into its numeric value.
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(hex, 16).ok()
}
