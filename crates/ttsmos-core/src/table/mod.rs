mod derive;
mod state;
mod types;
mod view;

pub use derive::{
    compute_best_scores, format_category, format_cell, group_categories, is_best, BestScores,
    GroupedCategories, BEST_SCORE_EPSILON,
};
pub use state::TableState;
pub use types::{Category, Cell, Gender, TableResponse, TableRow, NOT_USED_LABEL, REFERENCE_MODEL_ID};
pub use view::{
    build_table_view, CellView, Footnote, FootnoteConfig, GroupHeader, NoteView, RowView,
    TableView,
};
