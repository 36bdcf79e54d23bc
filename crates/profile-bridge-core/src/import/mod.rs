mod bundle;
mod reader;
mod types;

pub use bundle::{BookmarkBatch, HistoryBatch, ImportBundle};
pub use reader::BundleReader;
pub use types::*;
