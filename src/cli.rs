use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, eyre};

use crate::api::GitHubClient;
use crate::config::{AppConfig, load_config, load_token};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "ghinfo", about = "Terminal viewer for GitHub user profiles")]
pub struct Cli {
    /// Username to show (overrides the config file)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand)]
pub enum CliCommand {
    /// Launch the interactive viewer (default)
    Tui,
    /// Fetch a user profile once and print it (JSONL)
    User {
        /// Username (without @)
        username: String,
    },
}

impl Cli {
    /// Merge command-line overrides into the loaded config.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(ref username) = self.username {
            config.username = strip_at(username).to_string();
        }
        if let Some(ref url) = self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.request_timeout_secs = Some(secs);
        }
        config
    }
}

/// Strip a leading `@` from a username.
pub fn strip_at(username: &str) -> &str {
    username.strip_prefix('@').unwrap_or(username)
}

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

/// Load config from disk and apply command-line overrides.
pub fn resolve_config(cli: &Cli) -> AppConfig {
    cli.apply(load_config())
}

pub fn build_api_client(config: &AppConfig) -> eyre::Result<GitHubClient> {
    let token = load_token();
    tracing::info!(authenticated = token.is_some(), base_url = %config.api_base_url, "api client");
    GitHubClient::new(config.client_options(token)).map_err(|e| eyre!("{e}"))
}

// ---------------------------------------------------------------------------
// Non-interactive commands
// ---------------------------------------------------------------------------

pub async fn run_command(cmd: CliCommand, config: &AppConfig) -> eyre::Result<()> {
    match cmd {
        CliCommand::Tui => unreachable!("tui is handled in main"),

        CliCommand::User { username } => {
            let client = build_api_client(config)?;
            let username = strip_at(&username);
            let record = client.get_user(username).await.map_err(|e| eyre!("{e}"))?;
            let line = serde_json::to_string(&serde_json::json!({ "user": record }))?;
            println!("{line}");
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
