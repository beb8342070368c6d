mod config;
mod fetcher;
mod loader;
mod model;
mod normalizer;
mod parser;
mod search;
mod ui;
mod utils;

use config::{load_config, AppConfig};
use fetcher::SourceFetcher;
use loader::CsvLoader;
use model::ConfigError;
use std::io::Write;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info, warn};
use ui::{ConsolePage, UiBinder};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("config.json not found, using defaults");
            AppConfig::default()
        }
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let fetcher = match SourceFetcher::new(&config.user_agent, config.fetch_timeout_seconds) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to initialize fetcher: {}", e);
            return;
        }
    };

    // Handlers are bound only after the catalog has finished loading.
    let catalog = Arc::new(CsvLoader::new(fetcher).load(&config.csv_path).await);
    info!(
        "Catalog from {} ready at {} ({} products)",
        catalog.source,
        catalog.loaded_at.format("%Y-%m-%d %H:%M:%S"),
        catalog.len()
    );
    if catalog.is_empty() {
        warn!("Catalog is empty, every search will report not found");
    }

    let mut binder = UiBinder::new(catalog, &config.currency_symbol);
    let mut page = ConsolePage::new(std::io::stdout());
    if let Err(e) = ui::console::run(&mut binder, &mut page, BufReader::new(tokio::io::stdin())).await {
        error!("Console input error: {}", e);
    }
    if let Err(e) = page.into_inner().flush() {
        warn!("Failed to flush stdout: {}", e);
    }
    info!("Bye.");
}
