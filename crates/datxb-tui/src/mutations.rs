//! Cross-slice state mutations.
//!
//! Feature reducers only own their own slice. Anything that touches shared
//! state (the session or the toast stack) is returned as a
//! [`StateMutation`] and applied by the top-level reducer.

use datxb_core::notify::Notification;
use datxb_core::session::SessionEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    /// Drive the session state machine.
    Session(SessionEvent),
    /// Show a toast.
    Notify(Notification),
}
