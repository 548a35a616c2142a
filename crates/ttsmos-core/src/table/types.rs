use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Result;

/// Model id of the ground-truth recording row.
pub const REFERENCE_MODEL_ID: &str = "0";

/// Label segment marking a category that must never be rendered.
pub const NOT_USED_LABEL: &str = "Not Used";

/// One averaged score in the ratings table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Cell {
    #[default]
    Absent,
    Present { avg: f64, count: u32 },
}

impl Cell {
    pub fn avg(&self) -> Option<f64> {
        match self {
            Cell::Present { avg, .. } => Some(*avg),
            Cell::Absent => None,
        }
    }

    /// Anything other than `{ "avg": number, "count": non-negative integer }` is absent.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Cell::Absent;
        };
        let avg = obj.get("avg").and_then(|v| v.as_f64());
        let count = obj
            .get("count")
            .and_then(|v| v.as_u64())
            .and_then(|c| u32::try_from(c).ok());

        match (avg, count) {
            (Some(avg), Some(count)) => Cell::Present { avg, count },
            _ => Cell::Absent,
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Cell::from_value(&value))
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire {
            avg: f64,
            count: u32,
        }

        match self {
            Cell::Present { avg, count } => Wire {
                avg: *avg,
                count: *count,
            }
            .serialize(serializer),
            Cell::Absent => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub model_id: String,
    pub model_name: String,
    /// Keyed by category, e.g. `"Male-Seen Thai"`.
    #[serde(flatten)]
    pub cells: HashMap<String, Cell>,
}

impl TableRow {
    pub fn is_reference(&self) -> bool {
        self.model_id == REFERENCE_MODEL_ID
    }

    pub fn cell(&self, category: &str) -> Cell {
        self.cells.get(category).copied().unwrap_or_default()
    }
}

/// Body of `GET /api/ratings-table`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub table_data: Vec<TableRow>,
    pub categories: Vec<String>,
    pub total_ratings: u64,
}

impl TableResponse {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl Gender {
    pub fn parse(s: &str) -> Self {
        match s {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            other => Gender::Other(other.to_string()),
        }
    }
}

/// A `"<Gender>-<Label>"` column key split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub gender: Gender,
    pub label: String,
}

impl Category {
    pub fn parse(key: &str) -> Self {
        let mut parts = key.split('-');
        let gender = Gender::parse(parts.next().unwrap_or_default());
        let label = parts.next().unwrap_or_default().to_string();

        Self {
            key: key.to_string(),
            gender,
            label,
        }
    }

    pub fn is_not_used(&self) -> bool {
        self.label == NOT_USED_LABEL
    }
}
