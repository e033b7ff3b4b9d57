//! CLI binary for punchlist.

use anyhow::Context;
use clap::{Parser, Subcommand};
use punchlist::{ApiClient, App, ClientConfig, SessionStore, app_dirs, tui};
use tracing_subscriber::EnvFilter;

/// Terminal client for an authenticated task-list REST API.
#[derive(Parser)]
#[command(name = "punchlist", version, about)]
struct Cli {
    /// Backend base URL (overrides the config file and PUNCHLIST_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Open the task list UI (default).
    Ui,

    /// Probe the backend health endpoint.
    Health,

    /// Clear the stored session token without starting the UI.
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::load().context("failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            // The UI owns the terminal, so log lines go to a file.
            let _guard = init_file_logging()?;
            run_ui(config).await
        }
        Command::Health => {
            init_stderr_logging();
            run_health(config).await
        }
        Command::Logout => {
            init_stderr_logging();
            run_logout()
        }
    }
}

/// Route log output to a daily-rolled file under the data directory.
///
/// The returned guard flushes the writer on drop; hold it for the
/// program's lifetime.
fn init_file_logging() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = app_dirs::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("failed to create log directory {}", logs_dir.display()))?;
    let appender = tracing_appender::rolling::daily(logs_dir, "punchlist.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("punchlist=info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("punchlist=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run_ui(config: ClientConfig) -> anyhow::Result<()> {
    let api = ApiClient::new(&config, SessionStore::open_default());
    let app = App::new(api);
    tui::run(app).await
}

async fn run_health(config: ClientConfig) -> anyhow::Result<()> {
    let api = ApiClient::new(&config, SessionStore::open_default());
    let health = api.health().await?;
    if health.service.is_empty() {
        println!("{} is {}", config.api_url, health.status);
    } else {
        println!("{} is {} ({})", config.api_url, health.status, health.service);
    }
    Ok(())
}

fn run_logout() -> anyhow::Result<()> {
    let store = SessionStore::open_default();
    if store.is_present() {
        store.clear();
        println!("Logged out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}
