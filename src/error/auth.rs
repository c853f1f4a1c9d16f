use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Caller has neither the administrator permission nor a configured admin role.
    ///
    /// Replied with the generic permission-denied message; the user ID is only
    /// logged.
    #[error("User {0} attempted an admin action without administrator permission or an admin role")]
    AccessDenied(u64),

    /// Interaction was received outside of a guild.
    ///
    /// Admin surfaces and verification both need guild membership, so direct
    /// messages are treated the same as a denied permission check.
    #[error("Interaction was not invoked from within a guild")]
    NotInGuild,
}
