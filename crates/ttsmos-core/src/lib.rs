// Domain modules
pub mod collector;
pub mod error;
pub mod i18n;
pub mod store;
pub mod table;

pub use collector::{Criterion, RatingCollector, Sample, MAX_RATING};
pub use error::{MosError, Result};
pub use i18n::{Language, RatingText, TableText};
pub use store::{load_language, save_language, KeyValueStore, MemoryStore, StoreError, LANGUAGE_KEY};
pub use table::{
    build_table_view, compute_best_scores, format_category, format_cell, group_categories,
    is_best, BestScores, Cell, FootnoteConfig, TableResponse, TableRow, TableState, TableView,
};
