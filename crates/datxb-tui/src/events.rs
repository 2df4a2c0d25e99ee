//! UI event types.
//!
//! Everything the reducer reacts to arrives as a [`UiEvent`]: terminal
//! input, timer ticks and results of async tasks delivered via the inbox.

use crossterm::event::Event;
use datxb_core::auth::{LoginResult, SignupResult};

use crate::common::{TaskCompleted, TaskKind};

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer; expires toasts.
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// Simulated login submission finished.
    LoginSubmitted(LoginResult),
    /// Simulated signup submission finished.
    SignupSubmitted(SignupResult),
    /// Wrapper for task results so stale completions can be dropped.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
