use anyhow::{Context, Result};
use bookshelf::{
    catalog::Catalog,
    cli::{commands::handler_for, Cli, Commands, LogLevel, Menu},
    config::SettingsLoader,
};
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing from the --log-level flag.
///
/// Logs go to stderr so stdout only carries tables, charts and JSON.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let settings = SettingsLoader::new()
        .discover(cli.config.as_deref())
        .context("Failed to load settings")?;
    let data_file = cli.file.clone().unwrap_or_else(|| settings.data_file.clone());

    // Any load failure aborts the session: no partial catalog is shown
    let mut catalog = Catalog::load_file(&data_file)
        .with_context(|| format!("Failed to load catalog from {}", data_file.display()))?;
    info!(books = catalog.len(), "Catalog ready from {:?}", data_file);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // No subcommand means the interactive shell
    let command = cli.command.unwrap_or(Commands::Shell);
    debug!(command = command.name(), "Dispatching command");

    if command.is_interactive() {
        let stdin = io::stdin();
        Menu::new(&mut catalog, &settings, stdin.lock(), &mut out).run()?;
    } else if let Some(handler) = handler_for(command) {
        handler.execute(&catalog, &settings, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
