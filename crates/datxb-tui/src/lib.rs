//! Full-screen TUI for datXB.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use datxb_core::config::Config;
pub use features::{dashboard, login, signup, status, toast, welcome};
pub use runtime::TuiRuntime;

/// Runs the interactive sign-in flow until the user quits.
///
/// # Errors
/// Returns an error if stderr is not a terminal or the terminal cannot be
/// set up.
pub async fn run_interactive(config: Config) -> Result<()> {
    // The TUI renders to the alternate screen and needs a real terminal.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "datXB requires a terminal.\n\
             Use `datxb password <PASSWORD>` for non-interactive checks."
        );
    }

    tracing::info!("starting interactive session");
    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()?;
    tracing::info!("interactive session ended");

    Ok(())
}
