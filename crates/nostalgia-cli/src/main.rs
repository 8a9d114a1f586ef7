use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use nostalgia_core::install_mode::DisplayMode;
use nostalgia_infrastructure::config_service::{apply_env_overrides, report_fallback};
use nostalgia_infrastructure::{ConfigService, NostalgiaPaths};
use std::path::PathBuf;

mod commands;
mod logging;
mod prompt;
mod terminal;

use commands::AppContext;

#[derive(Parser)]
#[command(name = "nostalgiatok")]
#[command(about = "nostalgiaTok - rebuild the media you grew up with, one shape at a time", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for config, saved sessions and logs
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Display mode: browser, standalone, fullscreen or minimal-ui
    #[arg(long, global = true)]
    display_mode: Option<DisplayMode>,

    /// Language tag, e.g. fr-CA
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through onboarding and play back the result
    Onboard,
    /// Browse saved sessions
    Replay,
    /// Inspect or prune saved sessions
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
    /// Print the shape for one token as JSON
    Shape {
        token: String,
        index: usize,
        /// y, p or t (year, preferences, topics)
        category: String,
    },
}

#[derive(Subcommand)]
enum SavedAction {
    /// List saved sessions
    List,
    /// Delete the session at an index (wraps around)
    Delete { index: usize },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = NostalgiaPaths::new(cli.data_dir.clone());
    let config_service = match &cli.config {
        Some(path) => ConfigService::new(path.clone()),
        None => ConfigService::from_paths(&paths)
            .map_err(|e| anyhow!("Failed to resolve config path: {}", e))?,
    };

    let (mut config, config_error) = config_service.load_or_default();
    apply_env_overrides(&mut config);
    if let Some(mode) = cli.display_mode {
        config.display_mode = mode;
    }
    if let Some(locale) = cli.locale {
        config.locale = Some(locale);
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }

    let _log_guard = logging::init(&config, &paths)?;
    report_fallback(config_service.path(), config_error.as_ref());
    let ctx = AppContext::new(config, paths)?;

    match cli.command {
        Commands::Onboard => commands::onboard::run(&ctx).await?,
        Commands::Replay => commands::replay::run(&ctx).await?,
        Commands::Saved { action } => match action {
            SavedAction::List => commands::saved::list(&ctx).await?,
            SavedAction::Delete { index } => commands::saved::delete(&ctx, index).await?,
        },
        Commands::Shape {
            token,
            index,
            category,
        } => commands::shape::print(&ctx, &token, index, &category)?,
    }

    Ok(())
}
