use serde::{Deserialize, Serialize};

use super::derive::{format_category, format_cell, group_categories, is_best, BestScores};
use super::TableResponse;
use crate::i18n::TableText;

/// Superscript marker attached to a model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footnote {
    pub model_id: String,
    pub marker: u8,
}

/// Which models carry a training-data footnote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootnoteConfig {
    pub footnotes: Vec<Footnote>,
}

impl Default for FootnoteConfig {
    fn default() -> Self {
        let footnotes = [("5", 1), ("2", 2), ("1", 3)]
            .into_iter()
            .map(|(model_id, marker)| Footnote {
                model_id: model_id.to_string(),
                marker,
            })
            .collect();
        Self { footnotes }
    }
}

impl FootnoteConfig {
    pub fn marker_for(&self, model_id: &str) -> Option<u8> {
        self.footnotes
            .iter()
            .find(|f| f.model_id == model_id)
            .map(|f| f.marker)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHeader {
    pub label: &'static str,
    pub span: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub emphasized: bool,
}

/// One line of the notes list under the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub marker: u8,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub model_name: String,
    pub marker: Option<u8>,
    pub cells: Vec<CellView>,
}

/// Everything the results table renders, already translated and formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub model_header: &'static str,
    /// Gender groups with at least one visible column, male first.
    pub groups: Vec<GroupHeader>,
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
    pub total_ratings: u64,
    /// Configured markers that have note text, ascending.
    pub notes: Vec<NoteView>,
}

pub fn build_table_view(
    response: &TableResponse,
    best: &BestScores,
    text: &TableText,
    footnotes: &FootnoteConfig,
) -> TableView {
    let grouped = group_categories(&response.categories);

    let groups = [(text.male, grouped.male.len()), (text.female, grouped.female.len())]
        .into_iter()
        .filter(|(_, span)| *span > 0)
        .map(|(label, span)| GroupHeader { label, span })
        .collect();

    let columns = grouped
        .columns()
        .map(|key| format_category(key, text))
        .collect();

    let rows = response
        .table_data
        .iter()
        .map(|row| RowView {
            model_name: row.model_name.clone(),
            marker: footnotes
                .marker_for(&row.model_id)
                .filter(|m| text.note(*m).is_some()),
            cells: grouped
                .columns()
                .map(|key| CellView {
                    text: format_cell(&row.cell(key)),
                    emphasized: is_best(row, key, best),
                })
                .collect(),
        })
        .collect();

    TableView {
        model_header: text.model,
        groups,
        columns,
        rows,
        total_ratings: response.total_ratings,
        notes: build_notes(footnotes, text),
    }
}

fn build_notes(footnotes: &FootnoteConfig, text: &TableText) -> Vec<NoteView> {
    let mut markers: Vec<u8> = footnotes.footnotes.iter().map(|f| f.marker).collect();
    markers.sort_unstable();
    markers.dedup();

    markers
        .into_iter()
        .filter_map(|marker| match text.note(marker) {
            Some(line) => Some(NoteView { marker, text: line }),
            None => {
                tracing::warn!("No note text for footnote marker {}", marker);
                None
            }
        })
        .collect()
}
