//! Interactive TUI command handler.

use anyhow::{Context, Result};
use datxb_core::config::Config;
use datxb_core::logging;

pub async fn run() -> Result<()> {
    let config = Config::load().context("load config")?;

    // Held until the TUI exits so buffered log lines are flushed.
    let _log_guard = logging::init(&config).context("init logging")?;
    tracing::debug!(?config, "config loaded");

    datxb_tui::run_interactive(config).await
}
