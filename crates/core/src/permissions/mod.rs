//! Permissions module - roles and the capability check used at the request boundary.

mod permission_checker;
mod permissions_model;

pub use permission_checker::{ensure_permission, PermissionCheckerTrait, RolePermissionChecker};
pub use permissions_model::{Permission, Role};
