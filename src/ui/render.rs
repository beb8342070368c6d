use crate::model::SearchResult;
use crate::utils::escape_html;

/// HTML for the result container. Names and queries are escaped.
pub fn render_result(result: &SearchResult, currency_symbol: &str) -> String {
    match result {
        SearchResult::Found {
            product_name,
            platform,
            cost,
        } => format!(
            "The platform with the <strong>lowest price</strong> for \"{}\" is: <strong>{}</strong> at a price of {}<strong>{:.2}</strong>",
            escape_html(product_name),
            platform,
            escape_html(currency_symbol),
            cost
        ),
        SearchResult::NotFound { query } => {
            format!("Product \"{}\" not found in the database.", escape_html(query))
        }
    }
}
