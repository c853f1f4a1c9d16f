use serenity::all::{Member, RoleId, UserId};

use crate::{
    error::{auth::AuthError, AppError},
    model::settings::Settings,
};

pub enum Permission {
    Admin,
}

/// The member invoking an interaction, reduced to what permission checks need.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: UserId,
    /// Whether the member holds Discord's built-in administrator permission.
    pub administrator: bool,
    pub role_ids: Vec<RoleId>,
}

impl Caller {
    /// Builds a caller from an interaction member.
    ///
    /// Interaction members carry their resolved channel permissions; a member
    /// without them is treated as lacking administrator.
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id,
            administrator: member
                .permissions
                .is_some_and(|permissions| permissions.administrator()),
            role_ids: member.roles.clone(),
        }
    }
}

/// Returns whether the caller has admin-equivalent access.
///
/// True when the caller holds the administrator permission, otherwise true iff
/// one of the caller's roles is listed in `settings.admin_role_ids`.
pub fn is_admin(caller: &Caller, settings: &Settings) -> bool {
    if caller.administrator {
        return true;
    }

    caller
        .role_ids
        .iter()
        .any(|role_id| settings.has_admin_role(&role_id.to_string()))
}

pub struct AuthGuard<'a> {
    settings: &'a Settings,
}

impl<'a> AuthGuard<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Checks the caller against every requested permission.
    ///
    /// # Arguments
    /// - `caller` - Invoking member, `None` when the interaction came from outside a guild
    /// - `permissions` - Permissions the caller must hold
    ///
    /// # Returns
    /// - `Ok(&Caller)` - Caller holds every permission
    /// - `Err(AuthError::NotInGuild)` - No member was attached to the interaction
    /// - `Err(AuthError::AccessDenied)` - Caller lacks a required permission
    pub fn require<'c>(
        &self,
        caller: Option<&'c Caller>,
        permissions: &[Permission],
    ) -> Result<&'c Caller, AppError> {
        let Some(caller) = caller else {
            return Err(AuthError::NotInGuild.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !is_admin(caller, self.settings) {
                        return Err(AuthError::AccessDenied(caller.user_id.get()).into());
                    }
                }
            }
        }

        Ok(caller)
    }
}
