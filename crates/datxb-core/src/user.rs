//! User record and role types.

use std::fmt;

/// Role selected at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    Admin,
    Manager,
    Analyst,
    Viewer,
}

impl UserType {
    /// Returns all roles in selection order.
    pub const fn all() -> &'static [UserType] {
        &[
            UserType::Admin,
            UserType::Manager,
            UserType::Analyst,
            UserType::Viewer,
        ]
    }

    /// Stable lowercase code (`admin`, `manager`, ...).
    pub const fn code(self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Manager => "manager",
            UserType::Analyst => "analyst",
            UserType::Viewer => "viewer",
        }
    }

    /// Label shown in the role selector.
    pub const fn display_name(self) -> &'static str {
        match self {
            UserType::Admin => "Administrator",
            UserType::Manager => "Manager",
            UserType::Analyst => "Data Analyst",
            UserType::Viewer => "Viewer",
        }
    }

    /// Short label used in "Available for" lines.
    pub const fn short_name(self) -> &'static str {
        match self {
            UserType::Admin => "Admin",
            UserType::Manager => "Manager",
            UserType::Analyst => "Analyst",
            UserType::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The authenticated identity. Only exists while the session is on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    pub user_type: UserType,
}

impl User {
    /// Placeholder identity assigned on every successful login.
    pub fn demo() -> Self {
        Self {
            username: "demo_user".to_string(),
            email: "demo@example.com".to_string(),
            user_type: UserType::Analyst,
        }
    }
}
