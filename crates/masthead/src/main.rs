//! masthead - Responsive site header state model

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use masthead_core::{NavConfig, NavigationController};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "masthead",
    version,
    about = "Responsive site header state model",
    long_about = "Interactive navigation state for a responsive site header:\n\
                  dropdowns, a mobile drawer with sub-panels, and scroll-driven theming.\n\
                  \n\
                  Examples:\n\
                    masthead                              # Terminal preview (default)\n\
                    masthead replay steps.txt             # Replay an interaction script\n\
                    masthead replay - --json < steps.txt  # Script from stdin, JSON lines out\n\
                    masthead replay -s 'menu' -s 'panel Domains'\n\
                    masthead config init                  # Write the default config\n\
                    masthead config check                 # Validate the config\n\
                  \n\
                  Script lines: scroll <offset>, toggle <label>, close, outside,\n\
                  menu, panel <label>, back. Blank lines and # comments are skipped.\n\
                  \n\
                  Environment Variables:\n\
                    MASTHEAD_CONFIG                       # Override config file path\n\
                    RUST_LOG                              # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to the header config (default: <config_dir>/masthead/masthead.toml)
    #[arg(long, global = true, env = "MASTHEAD_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file (default: stderr; <cache_dir>/masthead/masthead.log for the TUI)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Mode {
    /// Interactive terminal preview (default)
    Tui,
    /// Apply an interaction script and print the state after each step
    Replay {
        /// Script file, or '-' for stdin
        script: Option<PathBuf>,
        /// Extra interaction appended after the script (repeatable)
        #[arg(long = "step", short = 's')]
        steps: Vec<String>,
        /// Output JSON lines instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as TOML
    Show,
    /// Validate the config and summarize it
    Check,
    /// Write the default config
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode.unwrap_or(Mode::Tui);
    let interactive = matches!(mode, Mode::Tui);
    init_logging(log_target(cli.log_file, interactive, default_log_path()))?;

    let config_path = cli
        .config
        .or_else(NavConfig::default_path)
        .context("Could not determine config directory (use --config)")?;

    match mode {
        Mode::Tui => {
            let config = load_config(&config_path)?;
            let controller = NavigationController::from_config(&config)?;
            masthead_tui::run(controller, config).await
        }
        Mode::Replay {
            script,
            steps,
            json,
        } => {
            let config = load_config(&config_path)?;
            let controller = NavigationController::from_config(&config)?;

            let script = script.map(|path| cli::read_script(&path)).transpose()?;
            let text = cli::compose_script(script, &steps);

            let steps = cli::replay(&controller, &text)?;
            if json {
                print!("{}", cli::steps_to_json_lines(&steps)?);
            } else {
                println!("{}", cli::steps_to_table(&steps));
            }
            Ok(())
        }
        Mode::Config { action } => match action {
            ConfigAction::Show => {
                let config = load_config(&config_path)?;
                print!("{}", config.to_toml()?);
                Ok(())
            }
            ConfigAction::Check => {
                let config = load_config(&config_path)?;
                println!("{}", cli::describe_config(&config));
                Ok(())
            }
            ConfigAction::Init { force } => {
                cli::init_config(&config_path, force)?;
                println!("Wrote {}", config_path.display());
                Ok(())
            }
        },
    }
}

fn load_config(path: &Path) -> Result<NavConfig> {
    NavConfig::load(path).map_err(|err| cli::with_suggestion(err, "Failed to load config"))
}

/// Where log lines go for this run
#[derive(Debug, PartialEq)]
enum LogTarget {
    File(PathBuf),
    Stderr,
    /// The TUI owns the terminal and no file is available
    Off,
}

fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("masthead").join("masthead.log"))
}

/// The TUI never logs to stderr: it draws on the alternate screen and any
/// stray line would corrupt the frame.
fn log_target(
    log_file: Option<PathBuf>,
    interactive: bool,
    fallback: Option<PathBuf>,
) -> LogTarget {
    match (log_file, interactive) {
        (Some(path), _) => LogTarget::File(path),
        (None, false) => LogTarget::Stderr,
        (None, true) => fallback.map_or(LogTarget::Off, LogTarget::File),
    }
}

fn init_logging(target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory {}", parent.display())
                })?;
            }
            let file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::Off => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_never_logs_to_stderr() {
        let fallback = PathBuf::from("/tmp/masthead/masthead.log");
        assert_eq!(
            log_target(None, true, Some(fallback.clone())),
            LogTarget::File(fallback)
        );
        assert_eq!(log_target(None, true, None), LogTarget::Off);
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let path = PathBuf::from("run.log");
        assert_eq!(
            log_target(Some(path.clone()), true, None),
            LogTarget::File(path.clone())
        );
        assert_eq!(
            log_target(Some(path.clone()), false, None),
            LogTarget::File(path)
        );
    }

    #[test]
    fn test_batch_commands_log_to_stderr() {
        assert_eq!(
            log_target(None, false, Some(PathBuf::from("ignored.log"))),
            LogTarget::Stderr
        );
    }

    #[test]
    fn test_tui_is_the_default_mode() {
        let cli = Cli::try_parse_from(["masthead"]).unwrap();
        assert!(cli.mode.is_none());
        let cli = Cli::try_parse_from(["masthead", "replay", "-s", "menu"]).unwrap();
        assert!(matches!(cli.mode, Some(Mode::Replay { .. })));
    }
}
