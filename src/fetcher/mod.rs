pub mod traits;
pub mod source;

pub use traits::Fetcher;
pub use source::SourceFetcher;
