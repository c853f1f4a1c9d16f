//! Error types and interaction reply handling.
//!
//! This module provides the bot's error hierarchy and the conversion logic for
//! turning errors into the private reply shown to the invoking user. The
//! `AppError` enum is the top-level error type that wraps domain-specific
//! errors; every interaction handler returns it and a single boundary in the
//! bot layer renders it through `AppError::into_reply_content`.

pub mod auth;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, internal::InternalError};

/// Reply shown to callers who fail the admin permission check.
pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to use this command.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants
/// use `#[from]` for automatic error conversion. User-facing variants carry the
/// exact message to show, while infrastructure variants are logged and replaced
/// by a generic apology at the reply boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Caller lacks admin capability or invoked an admin surface outside a guild.
    ///
    /// Always replied with the fixed permission-denied message.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Internal issue indicating unexpected data, such as a corrupt stored ID.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Covers role mutations the bot lacks rights for,
    /// missing messages, and network failures.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Settings file could not be read or written.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Settings file could not be encoded or decoded.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Validation failure on user input.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    BadRequest(String),

    /// A referenced resource no longer exists.
    ///
    /// # Fields
    /// - Message describing what was not found
    #[error("{0}")]
    NotFound(String),

    /// An operation was attempted before an administrator configured it.
    ///
    /// # Fields
    /// - Message instructing the user to contact an administrator
    #[error("{0}")]
    NotConfigured(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the content of a private interaction reply.
    ///
    /// User-facing variants return their own message. Infrastructure failures
    /// are logged with full details and replaced by `fallback`, so Discord or
    /// filesystem internals never leak into a reply.
    ///
    /// # Arguments
    /// - `fallback` - Generic apology used for external-call and persistence failures
    ///
    /// # Returns
    /// - `String` - Message to send as an ephemeral reply
    pub fn into_reply_content(self, fallback: &str) -> String {
        match self {
            Self::AuthErr(err) => {
                tracing::debug!("{}", err);
                PERMISSION_DENIED_MESSAGE.to_string()
            }
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::NotConfigured(msg) => msg,
            err => {
                tracing::error!("{}", err);
                fallback.to_string()
            }
        }
    }
}
