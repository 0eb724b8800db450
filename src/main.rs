pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod fetch;
pub mod state;
pub mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, CliCommand};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Initialize tracing (logs to stderr if RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli::resolve_config(&cli);

    match cli.command {
        // No subcommand or explicit `tui` → launch the interactive viewer.
        None | Some(CliCommand::Tui) => run_tui(config).await,
        Some(cmd) => cli::run_command(cmd, &config).await,
    }
}

/// Launch the interactive viewer.
async fn run_tui(config: config::AppConfig) -> color_eyre::Result<()> {
    // Build the client before touching the terminal so config errors print cleanly.
    let client = cli::build_api_client(&config)?;
    tracing::info!(username = %config.username, "starting viewer");

    let terminal = ratatui::init();
    let result = App::new(config, client).run(terminal).await;
    ratatui::restore();
    result
}
