//! BookLib - Entry Point

use booklib::client::HttpCatalogClient;
use booklib::model::AppError;
use booklib::state::LibraryOptions;
use booklib::view::{ColorConfig, RunOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// BookLib - terminal client for a personal library backend
#[derive(Parser, Debug)]
#[command(name = "booklib")]
#[command(version)]
#[command(about = "Terminal client for browsing and managing a personal book library")]
pub struct Args {
    /// Base URL of the library backend
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Terminal width (columns) at or below which panels open as shelves
    #[arg(long, value_name = "COLS", value_parser = clap::value_parser!(u16).range(1..))]
    pub breakpoint: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = booklib::config::load_config_with_precedence(args.config.clone())?;
        let merged = booklib::config::merge_config(config_file);
        let with_env = booklib::config::apply_env_overrides(merged);
        booklib::config::apply_cli_overrides(with_env, args.server.clone(), args.breakpoint)
    };

    booklib::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let client = HttpCatalogClient::new(&config.server_url)?;

    let options = RunOptions {
        library: LibraryOptions {
            shelf_breakpoint: config.shelf_breakpoint,
            confirm_delete: config.confirm_delete,
        },
        colors: ColorConfig::from_env_and_args(args.no_color),
    };

    booklib::view::run_with_client(client, options)?;

    Ok(())
}
