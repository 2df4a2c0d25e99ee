//! Dashboard feature catalogue.
//!
//! The role annotations are informational only. Selecting a card never
//! navigates or checks permissions; it just produces a notification.

use crate::notify::Notification;
use crate::user::{User, UserType};

/// Which roles a card is advertised to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    All,
    Only(&'static [UserType]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub audience: Audience,
}

impl FeatureCard {
    pub fn available_to(&self, user_type: UserType) -> bool {
        match self.audience {
            Audience::All => true,
            Audience::Only(roles) => roles.contains(&user_type),
        }
    }

    /// "Available for: ..." line shown under the card.
    pub fn audience_label(&self) -> String {
        match self.audience {
            Audience::All => "Available for: All user types".to_string(),
            Audience::Only([only]) => format!("Available for: {} only", only.short_name()),
            Audience::Only(roles) => {
                let names: Vec<&str> = roles.iter().map(|r| r.short_name()).collect();
                format!("Available for: {}", names.join(", "))
            }
        }
    }

    /// Notification shown when the card is activated.
    pub fn selected_notification(&self, user: &User) -> Notification {
        Notification::success(
            format!("{} Selected", self.title),
            format!(
                "{} functionality will be implemented based on your user type: {}",
                self.title, user.user_type
            ),
        )
    }
}

pub static FEATURE_CARDS: [FeatureCard; 4] = [
    FeatureCard {
        title: "User Management",
        description: "Manage user accounts, permissions, and access levels",
        audience: Audience::Only(&[UserType::Admin, UserType::Manager]),
    },
    FeatureCard {
        title: "Data Analytics",
        description: "View reports, charts, and analytical insights",
        audience: Audience::All,
    },
    FeatureCard {
        title: "Database Management",
        description: "Manage data sources, tables, and relationships",
        audience: Audience::Only(&[UserType::Admin, UserType::Analyst]),
    },
    FeatureCard {
        title: "System Settings",
        description: "Configure platform settings and preferences",
        audience: Audience::Only(&[UserType::Admin]),
    },
];

pub fn logout_notification() -> Notification {
    Notification::success(
        "Logged out successfully",
        "You have been signed out of datXB.",
    )
}
