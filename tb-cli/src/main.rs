//! Tinybeans CLI - Command-line interface for the Tinybeans client.
//!
//! Lets a Tinybeans account holder list followed journals and children,
//! walk a child's entry feed, and request journal exports from the
//! terminal.

mod commands;

use clap::{Parser, Subcommand};
use tracing::info;

use tb_core::config::{AppConfig, ConfigHandle};
use tb_core::error::TbResult;
use tb_core::logging;
use tb_core::platform::Platform;

/// Tinybeans - family-journal client.
#[derive(Parser)]
#[command(
    name = "tinybeans",
    version,
    about = "Tinybeans family-journal CLI",
    long_about = "A command-line client for the Tinybeans family-journal service.\n\
                   Log in, list followed journals and children, walk entry feeds,\n\
                   and request journal exports."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify credentials against the service.
    Login {
        /// Account username (email). Falls back to env/config, then a prompt.
        #[arg(short, long)]
        username: Option<String>,
        /// Save working credentials to the config file.
        #[arg(long)]
        save: bool,
    },
    /// List followed accounts with relationship and journal.
    Followings,
    /// List children across all followed journals.
    Children,
    /// Walk a child's entry feed, newest first.
    Entries {
        /// Child id (see `tinybeans children`).
        #[arg(long)]
        child: i64,
        /// Stop after this many entries.
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Stop at entries on or before this date (YYYY-MM-DD).
        #[arg(long, conflicts_with = "limit")]
        since: Option<String>,
        /// Starting cursor in epoch milliseconds (defaults to now).
        #[arg(long)]
        last: Option<i64>,
    },
    /// Request an export of a journal between two dates.
    Export {
        /// Journal id (see `tinybeans followings`).
        #[arg(long)]
        journal: i64,
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD).
        #[arg(long)]
        end: String,
    },
}

#[tokio::main]
async fn main() -> TbResult<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let log_dir = Platform::data_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("logs");
    let _guard = logging::init_logging(log_level, &log_dir, false)?;

    let config = if let Some(path) = cli.config.as_deref() {
        AppConfig::load_from_file(std::path::Path::new(path))?
    } else {
        AppConfig::load_default()?
    };
    let config_handle = ConfigHandle::new(config);

    info!("Tinybeans CLI v{}", tb_core::constants::APP_VERSION);

    match cli.command {
        Commands::Login { username, save } => {
            commands::login::run(config_handle, username, save).await
        }
        Commands::Followings => commands::followings::run(config_handle, cli.format).await,
        Commands::Children => commands::children::run(config_handle, cli.format).await,
        Commands::Entries { child, limit, since, last } => {
            commands::entries::run(config_handle, child, limit, since, last, cli.format).await
        }
        Commands::Export { journal, start, end } => {
            commands::export::run(config_handle, journal, start, end).await
        }
    }
}
