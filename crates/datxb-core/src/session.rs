//! Session state machine.
//!
//! The session is the single source of truth for which screen is active and
//! who (if anyone) is signed in. It only changes through [`Session::apply`]
//! or the named helpers that wrap it.
//!
//! ```text
//! welcome ──GetStarted──▶ login ──LoginSucceeded──▶ dashboard
//!                          │  ▲                        │
//!           SwitchToSignup │  │ SwitchToLogin          │ Logout
//!                          ▼  │                        ▼
//!                         signup ──SignupSucceeded──▶ verification   welcome
//!
//! verification | pending | approved ──BackToLogin──▶ login
//! ```
//!
//! The user record lives inside [`SessionState::Dashboard`], so a user is
//! present exactly when the dashboard is active.

use std::fmt;

use crate::error::TransitionError;
use crate::user::User;

/// The active screen together with any data that only exists on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Welcome,
    Login,
    Signup,
    Verification,
    Pending,
    Approved,
    Dashboard {
        user: User,
    },
}

impl SessionState {
    pub fn screen(&self) -> Screen {
        match self {
            SessionState::Welcome => Screen::Welcome,
            SessionState::Login => Screen::Login,
            SessionState::Signup => Screen::Signup,
            SessionState::Verification => Screen::Verification,
            SessionState::Pending => Screen::Pending,
            SessionState::Approved => Screen::Approved,
            SessionState::Dashboard { .. } => Screen::Dashboard,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Dashboard { user } => Some(user),
            _ => None,
        }
    }
}

/// Field-less discriminant of [`SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    Login,
    Signup,
    Verification,
    Pending,
    Approved,
    Dashboard,
}

impl Screen {
    pub const fn name(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::Verification => "verification",
            Screen::Pending => "pending",
            Screen::Approved => "approved",
            Screen::Dashboard => "dashboard",
        }
    }

    /// Returns true for the three account status screens.
    pub const fn is_status(self) -> bool {
        matches!(
            self,
            Screen::Verification | Screen::Pending | Screen::Approved
        )
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User actions and simulated completions that move the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    GetStarted,
    LoginSucceeded,
    SwitchToSignup,
    SignupSucceeded,
    SwitchToLogin,
    BackToLogin,
    Logout,
}

/// Owner of the current [`SessionState`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Creates a session on the welcome screen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Applies `event` to the current state.
    ///
    /// # Errors
    /// Returns [`TransitionError`] if `event` has no edge from the current
    /// screen. The state is left unchanged in that case.
    pub fn apply(&mut self, event: SessionEvent) -> Result<&SessionState, TransitionError> {
        let from = self.screen();
        let next = match (from, event) {
            (Screen::Welcome, SessionEvent::GetStarted) => SessionState::Login,
            (Screen::Login, SessionEvent::LoginSucceeded) => SessionState::Dashboard {
                user: User::demo(),
            },
            (Screen::Login, SessionEvent::SwitchToSignup) => SessionState::Signup,
            (Screen::Signup, SessionEvent::SignupSucceeded) => SessionState::Verification,
            (Screen::Signup, SessionEvent::SwitchToLogin) => SessionState::Login,
            (from, SessionEvent::BackToLogin) if from.is_status() => SessionState::Login,
            (Screen::Dashboard, SessionEvent::Logout) => SessionState::Welcome,
            (from, event) => {
                tracing::warn!(%from, ?event, "rejected session transition");
                return Err(TransitionError { from, event });
            }
        };

        tracing::debug!(%from, to = %next.screen(), ?event, "session transition");
        self.state = next;
        Ok(&self.state)
    }

    /// `welcome → login`.
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn get_started(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(SessionEvent::GetStarted)
    }

    /// `login → dashboard`, signing in the placeholder identity.
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn login_succeeded(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(SessionEvent::LoginSucceeded)
    }

    /// `login → signup`.
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn switch_to_signup(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(SessionEvent::SwitchToSignup)
    }

    /// `signup → verification`.
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn signup_succeeded(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(SessionEvent::SignupSucceeded)
    }

    /// `signup → login`.
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn switch_to_login(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(SessionEvent::SwitchToLogin)
    }

    /// `verification | pending | approved → login`.
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn back_to_login(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(SessionEvent::BackToLogin)
    }

    /// `dashboard → welcome`, clearing the user.
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn logout(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(SessionEvent::Logout)
    }

    #[cfg(test)]
    pub(crate) fn with_state(state: SessionState) -> Self {
        Self { state }
    }
}
