// Core structs: Platform, ProductRecord, Catalog, SearchResult
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// One of the four retail sources a price can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Amazon,
    Flipkart,
    Ajio,
    Snapdeal,
}

impl Platform {
    /// Fixed column order of the CSV file. Ties in the lowest-price fold go to the earlier entry.
    pub const ALL: [Platform; 4] = [
        Platform::Amazon,
        Platform::Flipkart,
        Platform::Ajio,
        Platform::Snapdeal,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Flipkart => "flipkart",
            Platform::Ajio => "ajio",
            Platform::Snapdeal => "snapdeal",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformPrice {
    pub platform: Platform,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    pub prices: [PlatformPrice; 4],
}

impl ProductRecord {
    /// `name` must already be normalized; `costs` follow `Platform::ALL`.
    pub fn new(name: String, costs: [f64; 4]) -> Self {
        let prices = std::array::from_fn(|i| PlatformPrice {
            platform: Platform::ALL[i],
            cost: costs[i],
        });
        Self { name, prices }
    }
}

/// Everything loaded from one CSV resource. Immutable once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    names: Vec<String>,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub rejected_rows: usize,
}

impl Catalog {
    pub fn new(source: &str, records: Vec<ProductRecord>, rejected_rows: usize) -> Self {
        let names = records.iter().map(|r| r.name.clone()).collect();
        Self {
            records,
            names,
            source: source.to_string(),
            loaded_at: Utc::now(),
            rejected_rows,
        }
    }

    pub fn empty(source: &str) -> Self {
        Self::new(source, Vec::new(), 0)
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Normalized names, parallel to `records()`.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Found {
        product_name: String,
        platform: Platform,
        cost: f64,
    },
    NotFound {
        query: String,
    },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("bad status {status}: {reason}")]
    Status { status: u16, reason: String },
    #[error("I/O error: {0}")]
    Io(String),
    #[error("client setup failed: {0}")]
    Client(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("line {line}: expected 5 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: invalid {platform} price {raw:?}")]
    InvalidPrice {
        line: usize,
        platform: Platform,
        raw: String,
    },
    #[error("line {line}: duplicate product {name:?}")]
    DuplicateName { line: usize, name: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
