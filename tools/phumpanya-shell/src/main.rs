//! Terminal front end for the ตลาดภูมิปัญญา storefront.
//!
//! Drives the same session as the web UI, either from a JSON script of
//! actions (`--script`) or from commands typed on stdin.

mod command;
mod render;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use phumpanya_common::catalog::Catalog;
use phumpanya_common::config::StoreConfig;
use phumpanya_common::session::{Action, Session};

use command::{Command, HELP};
use render::{PageView, ToastList};

#[derive(Parser)]
#[command(name = "phumpanya-shell", about = "Browse the ตลาดภูมิปัญญา storefront from a terminal")]
struct Cli {
    /// JSON store configuration (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of actions to replay instead of reading stdin.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Seed for the home page featured shuffle.
    #[arg(long)]
    seed: Option<u64>,

    /// Tracing filter, e.g. "debug" or "phumpanya_common=trace".
    /// Falls back to RUST_LOG, then "info".
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<StoreConfig> {
    let mut config = match &cli.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StoreConfig::default(),
    };
    if cli.seed.is_some() {
        config.featured_seed = cli.seed;
    }
    Ok(config)
}

fn read_script(path: &Path) -> Result<Vec<Action>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing script {}", path.display()))
}

/// Apply every scripted action in order. Rejected actions are reported and
/// skipped; the session keeps its previous state for them.
fn replay(session: &mut Session, actions: Vec<Action>, out: &mut impl Write) -> Result<()> {
    tracing::info!(actions = actions.len(), "Replaying script");
    for (step, action) in actions.into_iter().enumerate() {
        if let Err(e) = session.dispatch(action) {
            writeln!(out, "step {}: {e}", step + 1)?;
        }
    }
    write!(out, "{}", PageView(session))?;
    Ok(())
}

fn interactive(session: &mut Session, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", PageView(session))?;
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        match command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(Command::ListToasts)) => {
                session.dispatch(Action::ExpireToasts)?;
                write!(out, "{}", ToastList(session.toasts()))?;
            }
            Ok(Some(Command::Dispatch(action))) => match session.dispatch(action) {
                Ok(()) => write!(out, "{}", PageView(session))?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Err(e) => writeln!(out, "error: {e:#}")?,
        }
        out.flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = load_config(&cli)?;
    let catalog = Catalog::builtin().context("loading built-in catalog")?;
    tracing::info!(products = catalog.len(), "Catalog ready");
    let mut session = Session::new(Arc::new(catalog), config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.script {
        Some(path) => replay(&mut session, read_script(path)?, &mut out),
        None => interactive(&mut session, io::stdin().lock(), &mut out),
    }
}
