use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "markcopy")]
#[command(about = "Configure how notes are copied as plain Markdown or HTML")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.markcopy/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the settings GUI
    Gui,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the config path and current contents
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init_command(cli.config.as_deref(), force)?;
        }
        Some(Commands::Show) => {
            cli::show_command(cli.config.as_deref())?;
        }
        Some(Commands::Gui) | None => {
            markcopy::gui::run_gui(cli.config)?;
        }
    }

    Ok(())
}
