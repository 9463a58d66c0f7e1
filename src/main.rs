//! Tickbox - Main entry point
//!
//! Launches the interactive checklist, or runs one headless command against
//! the same saved state.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io::stdout;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use tickbox::app::App;
use tickbox::cli::{self, Cli, Commands};
use tickbox::config::AppConfig;
use tickbox::TickboxError;

/// Log to stderr; headless output stays readable unless RUST_LOG asks for more
fn init_stderr_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Log to `<state dir>/tickbox.log` so nothing draws over the TUI
fn init_file_logger(config: &AppConfig) -> Result<()> {
    if config.ephemeral {
        // Nothing touches disk in ephemeral mode, logs included
        return Ok(());
    }

    fs::create_dir_all(&config.state_dir)
        .with_context(|| format!("Failed to create state directory {:?}", config.state_dir))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .with_context(|| format!("Failed to open log file {:?}", config.log_file()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse_args()) {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(mut args: Cli) -> Result<()> {
    let command = args.command.take().unwrap_or(Commands::Tui);

    // Catalog validation needs no state directory
    if let Commands::ValidateCatalog { file } = &command {
        init_stderr_logger();
        return cli::validate_catalog(file, &mut stdout().lock());
    }

    let config = AppConfig::from_cli(&args)?;
    match command {
        Commands::Tui => {
            init_file_logger(&config)?;
            info!("Tickbox starting up");
            run_tui(&config)
        }
        command => {
            init_stderr_logger();
            debug!("Running headless command {:?}", command);
            let mut store = config.open_store()?;
            cli::run_command(&mut store, command, &mut stdout().lock())
        }
    }
}

/// Run the interactive checklist
fn run_tui(config: &AppConfig) -> Result<()> {
    let store = config.open_store()?;
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| TickboxError::terminal(format!("failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| TickboxError::terminal(format!("failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .map_err(|e| TickboxError::terminal(format!("failed to create terminal: {}", e)))
        .and_then(|mut terminal| App::new(store).run(&mut terminal))
        .context("Checklist loop failed");

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
