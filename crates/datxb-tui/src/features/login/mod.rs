//! Sign-in screen.
//!
//! Email and password fields plus a submit button and a link to sign up.
//! The submission itself runs in the runtime; this slice only tracks the
//! form and turns results into notifications and session transitions.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{LoginFocus, LoginState};
pub use update::{handle_key, handle_paste, handle_submitted};
