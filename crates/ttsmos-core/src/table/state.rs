use super::TableResponse;

/// Lifecycle of one results-page fetch. Both outcomes are terminal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TableState {
    #[default]
    Loading,
    Loaded(TableResponse),
    Failed(String),
}

impl TableState {
    pub fn is_loading(&self) -> bool {
        matches!(self, TableState::Loading)
    }

    pub fn data(&self) -> Option<&TableResponse> {
        match self {
            TableState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Apply the fetch outcome. A state that already left `Loading` is kept as is.
    pub fn resolve(&mut self, outcome: Result<TableResponse, String>) {
        if !self.is_loading() {
            tracing::debug!("Ignoring late ratings table result");
            return;
        }
        *self = match outcome {
            Ok(data) => TableState::Loaded(data),
            Err(e) => TableState::Failed(e),
        };
    }
}
