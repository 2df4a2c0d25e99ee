//! Core library for datXB.
//!
//! Everything here is UI-agnostic: the session state machine, form
//! validation, the password policy and the simulated auth backend. The
//! terminal front end lives in `datxb-tui`.

pub mod auth;
pub mod brand;
pub mod config;
pub mod dashboard;
pub mod delay;
pub mod error;
pub mod forms;
pub mod interrupt;
pub mod logging;
pub mod notify;
pub mod policy;
pub mod session;
pub mod status;
pub mod user;
pub mod welcome;

pub use error::{AuthError, TransitionError};
pub use notify::{Notification, NotificationKind};
pub use session::{Screen, Session, SessionEvent, SessionState};
pub use user::{User, UserType};
