//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use datxb_core::interrupt;

mod commands;

#[derive(Parser)]
#[command(name = "datxb")]
#[command(version)]
#[command(about = "datXB: professional data management sign-in, in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Check a candidate password against the signup policy
    Password {
        /// The password to check
        #[arg(value_name = "PASSWORD")]
        password: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Prints the config file path
    Path,
    /// Writes the default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init().context("install Ctrl+C handler")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // default to the interactive flow
    let Some(command) = cli.command else {
        return commands::interactive::run().await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Commands::Password { password } => commands::password::check(&password),
    }
}
