//! Domain error types.
//!
//! These never leave the form that produced them: the front end turns them
//! into an error notification and keeps the entered values for correction.

use crate::session::{Screen, SessionEvent};

/// Submission failures for the login and signup forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A required field was left empty.
    #[error("Please fill in all fields")]
    Validation,

    /// The password does not satisfy every composition rule.
    #[error("Password must meet all requirements")]
    PasswordPolicy,

    /// The email matches the simulated "already registered" sentinel.
    #[error("Email already in use")]
    DuplicateEmail,
}

/// Returned when an event has no edge from the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no transition for {event:?} from the {from} screen")]
pub struct TransitionError {
    pub from: Screen,
    pub event: SessionEvent,
}
