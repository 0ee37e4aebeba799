pub mod consts;
pub mod error;
pub mod types;

pub use error::{FlagpostError, FlagpostResult};
pub use types::{ArticleExtractor, ExtractedArticle, MemoryStorage, PlacementReport, Storage};
