//! Command definitions for the Pomodoro Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Terminal Pomodoro timer
#[derive(Parser, Debug)]
#[command(
    name = "pomotimer",
    version,
    about = "Terminal Pomodoro timer with persisted settings",
    long_about = "Alternates focus intervals and breaks, counts completed pomodoros,\n\
                  and keeps durations and the session count between runs.\n\
                  Without a subcommand an interactive session is started.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the stored settings and session count
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Do not play a tone when an interval finishes
    #[arg(long, global = true)]
    pub no_sound: bool,

    /// Do not send desktop notifications
    #[arg(long, global = true)]
    pub no_notify: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive timer session (default)
    Run,

    /// Show stored settings and the completed pomodoro count
    Status,

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["pomotimer"]);
        assert!(cli.command.is_none());
        assert!(cli.data_dir.is_none());
        assert!(!cli.no_sound);
        assert!(!cli.no_notify);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_run_and_status() {
        let cli = Cli::parse_from(["pomotimer", "run"]);
        assert_eq!(cli.command, Some(Commands::Run));

        let cli = Cli::parse_from(["pomotimer", "status"]);
        assert_eq!(cli.command, Some(Commands::Status));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "pomotimer",
            "status",
            "--data-dir",
            "/tmp/pomo",
            "--no-sound",
            "--no-notify",
            "-v",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/pomo")));
        assert!(cli.no_sound);
        assert!(cli.no_notify);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["pomotimer", "completions", "zsh"]);
        assert_eq!(
            cli.command,
            Some(Commands::Completions {
                shell: clap_complete::Shell::Zsh
            })
        );
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["pomotimer", "daemon"]).is_err());
    }
}
