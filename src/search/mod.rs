// Search module: exact lookup with lowest-price selection, and prefix suggestions.

pub mod lowest_price;
pub mod suggest;

pub use lowest_price::search;
pub use suggest::suggest;
