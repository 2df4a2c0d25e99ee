//! Account status screens shown after signup.

use crate::brand::{ADMIN_EMAIL, SITE_URL};
use crate::session::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Verification,
    Pending,
    Approved,
}

impl StatusKind {
    /// Maps a status screen to its kind; `None` for every other screen.
    pub fn from_screen(screen: Screen) -> Option<Self> {
        match screen {
            Screen::Verification => Some(StatusKind::Verification),
            Screen::Pending => Some(StatusKind::Pending),
            Screen::Approved => Some(StatusKind::Approved),
            _ => None,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            StatusKind::Verification => "Check Your Email",
            StatusKind::Pending => "Account Pending Approval",
            StatusKind::Approved => "Account Approved!",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            StatusKind::Verification => {
                "We've sent a verification link to your email address. Please check your inbox and click the link to verify your account."
            }
            StatusKind::Pending => {
                "Your account is waiting for administrator approval. You'll receive an email notification once approved."
            }
            StatusKind::Approved => {
                "Your account has been approved by the administrator. You can now sign in to access datXB."
            }
        }
    }

    pub fn details(self) -> String {
        match self {
            StatusKind::Verification => format!(
                "An approval request with your details and site link ({SITE_URL}) has been sent to {ADMIN_EMAIL} for administrative review."
            ),
            StatusKind::Pending => {
                "This process typically takes 24-48 hours during business days.".to_string()
            }
            StatusKind::Approved => {
                "Welcome to the datXB platform. You can now access all features based on your user type."
                    .to_string()
            }
        }
    }

    pub const fn button_label(self) -> &'static str {
        match self {
            StatusKind::Approved => "Sign In Now",
            StatusKind::Verification | StatusKind::Pending => "Back to Sign In",
        }
    }

    /// Whether the "check your spam folder" hint is shown.
    pub const fn shows_spam_hint(self) -> bool {
        matches!(self, StatusKind::Verification | StatusKind::Pending)
    }
}

pub const SPAM_HINT: &str = "Didn't receive an email? Check your spam folder or contact support.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_status_screens_map_to_a_kind() {
        assert_eq!(
            StatusKind::from_screen(Screen::Verification),
            Some(StatusKind::Verification)
        );
        assert_eq!(StatusKind::from_screen(Screen::Dashboard), None);
        assert_eq!(StatusKind::from_screen(Screen::Login), None);
    }

    #[test]
    fn verification_details_name_site_and_admin() {
        let details = StatusKind::Verification.details();
        assert!(details.contains(SITE_URL));
        assert!(details.contains(ADMIN_EMAIL));
    }

    #[test]
    fn approved_screen_invites_sign_in() {
        assert_eq!(StatusKind::Approved.button_label(), "Sign In Now");
        assert!(!StatusKind::Approved.shows_spam_hint());
        assert!(StatusKind::Pending.shows_spam_hint());
    }
}
