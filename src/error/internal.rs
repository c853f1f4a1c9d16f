use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected data or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord snowflake from a stored String
    ///
    /// Occurs when the settings file holds a channel, message or role ID that is
    /// not a non-zero integer, usually because the file was edited by hand.
    /// Results in a generic reply to the user.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
