use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use devlauncher::config::Config;
use devlauncher::constants::INFO_OPENING;
use devlauncher::discovery::LocalPackagers;
use devlauncher::logger;
use devlauncher::style::{ConditionNotifier, TerminalConditionSource};
use devlauncher::ui::{self, core::RecordingLoader};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(index) = args.iter().position(|arg| arg == "--generate-config") {
        let path = match args.get(index + 1) {
            Some(path) => PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;
    logger::init(&config.logging)?;
    log::info!("Starting devlauncher with {} candidate ports", config.discovery.ports.len());

    let notifier = ConditionNotifier::default();
    let conditions = Arc::new(TerminalConditionSource::new(config.ui.color_scheme, config.accessibility));
    notifier.bootstrap(conditions);

    let source = Arc::new(LocalPackagers::from_config(&config.discovery)?);
    let loader = Arc::new(RecordingLoader::new());

    if let Some(url) = ui::run_app(&config, notifier, source, loader).await? {
        println!("{INFO_OPENING} {url}");
    }

    Ok(())
}
