//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never spawns tasks or sleeps itself.

use datxb_core::forms::{LoginRequest, SignupRequest};

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Open a URL in the system browser.
    OpenBrowser { url: String },

    /// Run the simulated login submission.
    SubmitLogin {
        task: Option<TaskId>,
        request: LoginRequest,
    },

    /// Run the simulated signup submission.
    SubmitSignup {
        task: Option<TaskId>,
        request: SignupRequest,
    },
}
