//! Pomodoro Timer CLI
//!
//! Runs the Pomodoro technique in a terminal:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - a long break whenever you choose one

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tokio::io::BufReader;
use tracing::warn;

use pomotimer::cli::{run_session, settings_text, Cli, Commands};
use pomotimer::{AppConfig, FileStore, SettingsStore, SystemAlerts, TerminalDisplay, TimerEngine};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    let code = match execute(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {:#}", e);
            1
        }
    };

    // Exit explicitly: the stdin reader may still be parked on a blocking read.
    std::process::exit(code);
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let config = AppConfig::from_cli(&cli)?;
    tracing::debug!("Using configuration {:?}", config);

    match cli.command {
        Some(Commands::Status) => show_status(&config),
        Some(Commands::Run) | None => run_interactive(&config).await?,
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}

/// Hosts the engine in an interactive terminal session.
async fn run_interactive(config: &AppConfig) -> Result<()> {
    let store = FileStore::new(&config.data_dir);
    let alerts = SystemAlerts::new(config.sound, config.notifications);
    let mut engine = TimerEngine::new(store, TerminalDisplay::stdout(), alerts);

    let input = BufReader::new(tokio::io::stdin());
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl-C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    run_session(&mut engine, input, shutdown).await?;

    let summary = format!("Completed pomodoros: {}", engine.sessions());
    engine.display_mut().message(&summary);
    Ok(())
}

/// Prints the stored settings and session count.
fn show_status(config: &AppConfig) {
    let store = FileStore::new(&config.data_dir);
    let settings = store.load().unwrap_or_default();

    println!("Data directory: {}", config.data_dir.display());
    println!("{}", settings_text(&settings));
    println!("Completed pomodoros: {}", store.load_session_count());
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
