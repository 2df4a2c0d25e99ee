//! Process-wide Ctrl+C handling.
//!
//! In raw mode the terminal delivers Ctrl+C as a key event, but a signal can
//! still arrive (e.g. `kill -INT`). The handler only sets a flag; the TUI
//! event loop polls it and quits cleanly.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static RESTORE_HOOK: OnceLock<Box<dyn Fn() + Send + Sync>> = OnceLock::new();

/// Installs the Ctrl+C handler.
///
/// # Errors
/// Returns an error if a handler is already registered for this process.
pub fn init() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(trigger_ctrl_c)
}

/// Triggers an interrupt, force-exiting on a second one.
pub fn trigger_ctrl_c() {
    if INTERRUPTED.swap(true, Ordering::SeqCst) {
        // process::exit() bypasses Drop, so restore the terminal first.
        if let Some(hook) = RESTORE_HOOK.get() {
            hook();
        }
        std::process::exit(130);
    }
}

/// Checks if an interrupt has been requested.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Resets the interrupt flag.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Registers a restore hook called on the second Ctrl+C before exit.
///
/// Typically used by the TUI to restore terminal state.
pub fn set_restore_hook<F>(hook: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let _ = RESTORE_HOOK.set(Box::new(hook));
}
