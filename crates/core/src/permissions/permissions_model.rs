use serde::{Deserialize, Serialize};
use std::fmt;

/// Actions a request handler may need to authorize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    LogRecords,
    ManageGoals,
    ManageAchievementCatalog,
    ManageUsers,
}

impl Permission {
    pub const ALL: [Permission; 5] = [
        Permission::ViewDashboard,
        Permission::LogRecords,
        Permission::ManageGoals,
        Permission::ManageAchievementCatalog,
        Permission::ManageUsers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "view_dashboard",
            Permission::LogRecords => "log_records",
            Permission::ManageGoals => "manage_goals",
            Permission::ManageAchievementCatalog => "manage_achievement_catalog",
            Permission::ManageUsers => "manage_users",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Member => &[
                Permission::ViewDashboard,
                Permission::LogRecords,
                Permission::ManageGoals,
            ],
            Role::Admin => &Permission::ALL,
        }
    }

    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}
