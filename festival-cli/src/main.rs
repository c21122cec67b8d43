mod commands;
mod menu;
mod prompt;
mod render;
mod shell;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use festival_core::{AppConfig, FestivalStore};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use prompt::{LinePrompt, TerminalPrompt};

fn main() -> Result<()> {
    // A broken config file is not fatal; warn once logging is up.
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_logging(&config.log_level)?;
    if let Some(e) = config_error {
        warn!("{e}; using default configuration");
    }

    let data_path = config.data_path();
    let mut store = FestivalStore::open(&data_path)
        .with_context(|| format!("Failed to load festivals from {}", data_path.display()))?;

    if store.was_seeded() {
        println!("📁 Created '{}' with sample festivals!\n", data_path.display());
    }

    let mut out = std::io::stdout();
    let today = || chrono::Local::now().date_naive();

    if std::io::stdin().is_terminal() {
        shell::run(&mut store, &mut TerminalPrompt, &mut out, today)
    } else {
        let mut prompt = LinePrompt::new(std::io::stdin().lock());
        shell::run(&mut store, &mut prompt, &mut out, today)
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
