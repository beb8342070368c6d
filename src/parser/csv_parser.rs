// Price sheet parsing: `name,amazon,flipkart,ajio,snapdeal`
use crate::model::{Platform, ProductRecord, RowError};
use crate::normalizer::normalize;
use std::collections::HashSet;

const FIELD_COUNT: usize = 5;

pub trait Parser {
    fn parse(&self, text: &str) -> ParsedRows;
}

/// Rows that made it into the catalog, and the ones that didn't.
#[derive(Debug, Default)]
pub struct ParsedRows {
    pub records: Vec<ProductRecord>,
    pub rejected: Vec<RowError>,
}

pub struct PriceSheetParser;

impl PriceSheetParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for PriceSheetParser {
    fn parse(&self, text: &str) -> ParsedRows {
        let mut parsed = ParsedRows::default();
        let mut seen: HashSet<String> = HashSet::new();

        // First non-blank line is the header. Line numbers are 1-based for log messages.
        let mut lines = text
            .split('\n')
            .enumerate()
            .skip_while(|(_, line)| line.trim().is_empty());
        lines.next();

        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            match parse_row(line, index + 1) {
                Ok(record) => {
                    if seen.insert(record.name.clone()) {
                        parsed.records.push(record);
                    } else {
                        parsed.rejected.push(RowError::DuplicateName {
                            line: index + 1,
                            name: record.name,
                        });
                    }
                }
                Err(e) => parsed.rejected.push(e),
            }
        }

        parsed
    }
}

fn parse_row(line: &str, line_no: usize) -> Result<ProductRecord, RowError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(RowError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let mut costs = [0.0; 4];
    for (i, platform) in Platform::ALL.iter().enumerate() {
        costs[i] = parse_price(fields[i + 1], *platform, line_no)?;
    }

    Ok(ProductRecord::new(normalize(fields[0]), costs))
}

fn parse_price(raw: &str, platform: Platform, line_no: usize) -> Result<f64, RowError> {
    let invalid = || RowError::InvalidPrice {
        line: line_no,
        platform,
        raw: raw.to_string(),
    };

    let cost = raw.parse::<f64>().map_err(|_| invalid())?;
    // `f64::from_str` accepts "NaN" and "inf"; neither is a price.
    if !cost.is_finite() || cost < 0.0 {
        return Err(invalid());
    }
    Ok(cost)
}
