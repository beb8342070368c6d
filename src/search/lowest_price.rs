use crate::model::{Catalog, PlatformPrice, ProductRecord, SearchResult};
use crate::normalizer::normalize;
use tracing::debug;

/// Cheapest platform for a record. Strict less-than keeps the earliest
/// platform on ties.
pub fn lowest_price(record: &ProductRecord) -> PlatformPrice {
    let (first, rest) = (record.prices[0], &record.prices[1..]);
    rest.iter()
        .fold(first, |min, cur| if cur.cost < min.cost { *cur } else { min })
}

/// Exact lookup on the normalized query, then the lowest price of the match.
pub fn search(query: &str, catalog: &Catalog) -> SearchResult {
    let query = normalize(query);
    debug!("User search input: {:?}", query);

    match catalog.records().iter().find(|r| r.name == query) {
        Some(record) => {
            let min = lowest_price(record);
            SearchResult::Found {
                product_name: record.name.clone(),
                platform: min.platform,
                cost: min.cost,
            }
        }
        None => SearchResult::NotFound { query },
    }
}
