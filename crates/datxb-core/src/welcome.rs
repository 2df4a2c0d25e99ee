//! Welcome screen content.

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HEADLINE: &str = "Welcome to datXB";

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Secure Authentication",
        description: "Multi-step verification with admin approval workflow",
    },
    Highlight {
        title: "Role-Based Access",
        description: "Different access levels for Admin, Manager, Analyst, and Viewer roles",
    },
    Highlight {
        title: "Data Management",
        description: "Comprehensive tools for professional data handling and analytics",
    },
];

pub const CALL_TO_ACTION: &str = "Get Started";
pub const CALL_TO_ACTION_HINT: &str = "Sign up for an account or sign in if you already have one";
