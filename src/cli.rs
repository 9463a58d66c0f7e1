//! Command line interface
//!
//! Argument parsing plus the headless commands, which run against a loaded
//! [`SelectionStore`] and write their report to any `Write`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::catalog::Catalog;
use crate::selection::SelectionStore;
use crate::storage::KeyValueStore;
use crate::summary;

/// Tickbox - a persistent price checklist for the terminal
#[derive(Parser, Debug)]
#[command(name = "tickbox")]
#[command(about = "A price checklist whose selections survive restarts")]
#[command(version)]
pub struct Cli {
    /// Directory holding the saved selections and mute flag.
    ///
    /// Defaults to `<data dir>/tickbox` (e.g. ~/.local/share/tickbox).
    #[arg(long, global = true, env = "TICKBOX_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// JSON catalog to use instead of the built-in sections
    #[arg(long, global = true, env = "TICKBOX_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Keep state in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive checklist (default)
    Tui,
    /// Print the checklist with current selections
    Show {
        /// Print the stored selections as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Toggle one option
    Toggle {
        /// Section name (e.g. AGC)
        section: String,
        /// Option value within the section (e.g. 50)
        value: String,
    },
    /// Clear selections
    Reset {
        /// Which selections to clear
        #[arg(value_enum, default_value_t = ResetScope::All)]
        scope: ResetScope,
    },
    /// Set the mute flag
    Mute {
        #[arg(value_enum)]
        state: MuteArg,
    },
    /// List the catalog sections and options
    Sections,
    /// Check a catalog file without touching any state
    ValidateCatalog {
        /// Path to the catalog JSON file
        file: PathBuf,
    },
}

/// Scope of a bulk reset
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ResetScope {
    /// Every selection
    All,
    /// Standard (non-highlighted) options
    Green,
    /// Highlighted options
    Blue,
}

/// Mute flag argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MuteArg {
    On,
    Off,
    Toggle,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

/// Run one headless command against `store`, reporting to `out`
///
/// `Tui` needs a terminal and is rejected here.
pub fn run_command<S, W>(store: &mut SelectionStore<S>, command: Commands, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    match command {
        Commands::Tui => anyhow::bail!("the checklist needs an interactive terminal"),
        Commands::ValidateCatalog { file } => validate_catalog(&file, out)?,
        Commands::Sections => write!(out, "{}", summary::catalog_text(store.catalog()))?,
        Commands::Show { json } => {
            if json {
                let text = serde_json::to_string_pretty(store.state())
                    .context("Failed to encode selections")?;
                writeln!(out, "{}", text)?;
            } else {
                write!(
                    out,
                    "{}",
                    summary::checklist_text(store.catalog(), store.state(), store.is_muted())
                )?;
            }
        }
        Commands::Toggle { section, value } => {
            if !store.catalog().contains(&section, &value) {
                warn!("{}/{} is not in the catalog", section, value);
                writeln!(out, "! '{}' is not an option of '{}' in the catalog", value, section)?;
            }
            let selected = store.toggle(&section, &value);
            writeln!(
                out,
                "✓ {} {} {}",
                section,
                value,
                if selected { "checked" } else { "unchecked" }
            )?;
        }
        Commands::Reset { scope } => {
            match scope {
                ResetScope::All => store.reset_all(),
                ResetScope::Green => store.reset_green(),
                ResetScope::Blue => store.reset_blue(),
            }
            writeln!(out, "✓ Reset {} ({} still selected)", scope, store.selected_count())?;
        }
        Commands::Mute { state } => {
            match state {
                MuteArg::On => store.set_muted(true),
                MuteArg::Off => store.set_muted(false),
                MuteArg::Toggle => {
                    store.toggle_muted();
                }
            }
            writeln!(out, "✓ {}", if store.is_muted() { "Muted" } else { "Sound on" })?;
        }
    }

    Ok(())
}

/// Load and check a catalog file without touching any state
pub fn validate_catalog<W: Write>(file: &Path, out: &mut W) -> Result<()> {
    let catalog = Catalog::load_from_file(file)?;
    let options: usize = catalog.sections().iter().map(|s| s.options.len()).sum();
    writeln!(
        out,
        "✓ Catalog is valid: {} sections, {} options",
        catalog.len(),
        options
    )?;
    Ok(())
}
