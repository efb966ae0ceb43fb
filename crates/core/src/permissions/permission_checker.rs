use log::warn;
use std::collections::HashMap;

use super::permissions_model::{Permission, Role};
use crate::errors::{Error, Result};

/// Answers whether a user may perform an action. Request handlers receive
/// one of these; the calculators and services never consult it.
pub trait PermissionCheckerTrait: Send + Sync {
    fn has_permission(&self, user_id: &str, permission: Permission) -> bool;
}

/// Checker backed by a fixed user -> role assignment.
#[derive(Debug, Clone, Default)]
pub struct RolePermissionChecker {
    roles: HashMap<String, Role>,
}

impl RolePermissionChecker {
    pub fn new(roles: HashMap<String, Role>) -> Self {
        Self { roles }
    }

    pub fn assign(&mut self, user_id: impl Into<String>, role: Role) {
        self.roles.insert(user_id.into(), role);
    }

    pub fn role_of(&self, user_id: &str) -> Option<Role> {
        self.roles.get(user_id).copied()
    }
}

impl PermissionCheckerTrait for RolePermissionChecker {
    fn has_permission(&self, user_id: &str, permission: Permission) -> bool {
        self.role_of(user_id)
            .is_some_and(|role| role.grants(permission))
    }
}

/// `Err(Error::PermissionDenied)` unless `checker` grants `permission`.
pub fn ensure_permission(
    checker: &dyn PermissionCheckerTrait,
    user_id: &str,
    permission: Permission,
) -> Result<()> {
    if checker.has_permission(user_id, permission) {
        return Ok(());
    }
    warn!("Denied {} to user {}", permission, user_id);
    Err(Error::PermissionDenied {
        user_id: user_id.to_string(),
        permission,
    })
}
