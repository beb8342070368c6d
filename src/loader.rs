use crate::fetcher::Fetcher;
use crate::model::Catalog;
use crate::parser::{Parser, PriceSheetParser};
use tracing::{error, info, warn};

/// Builds the catalog from a CSV resource. Never fails: problems are logged
/// and degrade to an empty (or partial) catalog.
pub struct CsvLoader<F: Fetcher> {
    fetcher: F,
    parser: PriceSheetParser,
}

impl<F: Fetcher> CsvLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            parser: PriceSheetParser::new(),
        }
    }

    pub async fn load(&self, path: &str) -> Catalog {
        info!("📥 Loading price data from {}...", path);
        let text = match self.fetcher.fetch(path).await {
            Ok(text) => text,
            Err(e) => {
                error!("❌ Failed to fetch data from {}: {}", path, e);
                return Catalog::empty(path);
            }
        };

        let parsed = self.parser.parse(&text);
        for rejected in &parsed.rejected {
            warn!("⚠️ Skipping row: {}", rejected);
        }

        let catalog = Catalog::new(path, parsed.records, parsed.rejected.len());
        info!(
            "✅ Loaded {} products from {} ({} rows rejected)",
            catalog.len(),
            path,
            catalog.rejected_rows
        );
        catalog
    }
}
