pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    /// Render the dashboard; `json` prints the raw aggregate instead.
    Dashboard { json: bool },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Asset dashboard starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let source = providers::AssetsApiProvider::new(config.assets_base_url());

    match command {
        AppCommand::Dashboard { json } => {
            cli::dashboard::run(&source, &config.currency, json).await
        }
    }
}
