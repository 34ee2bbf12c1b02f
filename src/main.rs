//! Character list browser - Entry Point

use charlist::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Character list browser - page through characters, filter and favorite them
#[derive(Parser, Debug)]
#[command(name = "charlist")]
#[command(version)]
#[command(about = "TUI for browsing a paginated character catalogue")]
pub struct Args {
    /// Base URL of the character API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Start with a name filter applied
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Start in favorites-only mode
    #[arg(long)]
    pub favorites: bool,

    /// Request timeout in seconds (no timeout if unset)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Overrides for the top layer of the config precedence chain.
    ///
    /// Flags only override when set.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_base_url: self.api_url.clone(),
            request_timeout_secs: self.timeout,
            favorites_only: self.favorites.then_some(true),
            search_term: self.search.clone(),
            no_color: self.no_color.then_some(true),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);
        apply_cli_overrides(with_env, args.overrides())
    };
    config.validate()?;

    charlist::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    charlist::view::run_with_config(config)?;

    Ok(())
}
