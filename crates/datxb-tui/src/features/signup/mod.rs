//! Sign-up screen.
//!
//! Collects username, email, password and role. The password checklist is
//! re-evaluated on every render, and the submit button stays disabled
//! until the policy is satisfied.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{SignupFocus, SignupState};
pub use update::{can_submit, handle_key, handle_paste, handle_submitted};
