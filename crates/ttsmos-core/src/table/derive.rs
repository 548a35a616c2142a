use std::collections::HashMap;

use super::{Category, Cell, Gender, TableResponse, TableRow};
use crate::i18n::TableText;

/// Two scores closer than this are treated as equal when marking the best cell.
pub const BEST_SCORE_EPSILON: f64 = 0.001;

/// Visible category keys split by gender, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedCategories {
    pub male: Vec<String>,
    pub female: Vec<String>,
}

impl GroupedCategories {
    /// Male columns first, then female.
    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.male.iter().chain(self.female.iter())
    }
}

pub fn group_categories(categories: &[String]) -> GroupedCategories {
    let mut grouped = GroupedCategories::default();

    for key in categories {
        let category = Category::parse(key);
        if category.is_not_used() {
            continue;
        }
        match category.gender {
            Gender::Male => grouped.male.push(category.key),
            Gender::Female => grouped.female.push(category.key),
            Gender::Other(g) => tracing::warn!("Skipping category with unknown gender {:?}: {}", g, key),
        }
    }

    grouped
}

/// Display label for a category key in the active language.
pub fn format_category(key: &str, text: &TableText) -> String {
    let category = Category::parse(key);
    if category.is_not_used() {
        return String::new();
    }

    let translated = match (&category.gender, category.label.as_str()) {
        (Gender::Male | Gender::Female, "Seen Thai") => Some(text.seen_thai),
        (Gender::Male | Gender::Female, "Unseen Thai") => Some(text.unseen_thai),
        (Gender::Male, "Unseen English") => Some(text.unseen_english),
        (Gender::Female, "Unseen Thai w/ Trans.") => Some(text.unseen_thai_with_trans),
        _ => None,
    };

    translated
        .map(str::to_string)
        .unwrap_or(category.label)
}

/// Highest non-reference average per category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestScores(HashMap<String, f64>);

impl BestScores {
    /// Negative infinity when no non-reference row has data for the category.
    pub fn get(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(f64::NEG_INFINITY)
    }
}

pub fn compute_best_scores(response: &TableResponse) -> BestScores {
    let mut best: HashMap<String, f64> = response
        .categories
        .iter()
        .map(|c| (c.clone(), f64::NEG_INFINITY))
        .collect();

    for row in response.table_data.iter().filter(|r| !r.is_reference()) {
        for category in &response.categories {
            let Some(avg) = row.cell(category).avg() else {
                continue;
            };
            let entry = best.entry(category.clone()).or_insert(f64::NEG_INFINITY);
            if avg > *entry {
                *entry = avg;
            }
        }
    }

    BestScores(best)
}

pub fn is_best(row: &TableRow, category: &str, best: &BestScores) -> bool {
    if row.is_reference() {
        return false;
    }
    match row.cell(category) {
        Cell::Present { avg, .. } => (avg - best.get(category)).abs() < BEST_SCORE_EPSILON,
        Cell::Absent => false,
    }
}

pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Present { avg, count } => format!("{}/{}", two_decimals(*avg), count),
        Cell::Absent => "-".to_string(),
    }
}

/// Two decimal places, with exact halves rounded away from zero.
///
/// `{:.2}` rounds exact ties to even. A double sits exactly halfway between
/// two hundredths only when it is an odd multiple of 1/8, so those are the
/// only values that need the other direction.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() != 0.0 || eighths.rem_euclid(2.0) != 1.0 {
        return format!("{:.2}", value);
    }

    let hundredths = (value.abs() * 100.0).ceil() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn row(model_id: &str, cells: &[(&str, f64, u32)]) -> TableRow {
        TableRow {
            model_id: model_id.to_string(),
            model_name: format!("Model {}", model_id),
            cells: cells
                .iter()
                .map(|(k, avg, count)| (k.to_string(), Cell::Present { avg: *avg, count: *count }))
                .collect(),
        }
    }

    fn keys(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_group_drops_not_used_and_keeps_order() {
        let grouped = group_categories(&keys(&[
            "Female-Seen Thai",
            "Male-Unseen English",
            "Male-Not Used",
            "Male-Seen Thai",
            "Female-Not Used",
            "Robot-Seen Thai",
        ]));

        assert_eq!(grouped.male, keys(&["Male-Unseen English", "Male-Seen Thai"]));
        assert_eq!(grouped.female, keys(&["Female-Seen Thai"]));
        assert_eq!(grouped.columns().count(), 3);
    }

    #[test]
    fn test_format_category_labels() {
        let en = TableText::for_language(Language::En);
        let th = TableText::for_language(Language::Th);

        assert_eq!(format_category("Male-Seen Thai", en), "Seen Thai");
        assert_eq!(format_category("Male-Seen Thai", th), "ไทย (เคยเห็น)");
        assert_eq!(format_category("Female-Unseen Thai w/ Trans.", th), "ไทย พร้อมแปล (ไม่เคยเห็น)");
        // Only mapped for the gender that has the condition
        assert_eq!(format_category("Female-Unseen English", th), "Unseen English");
        assert_eq!(format_category("Male-Studio Read", th), "Studio Read");
        assert_eq!(format_category("Female-Not Used", en), "");
    }

    #[test]
    fn test_best_score_excludes_reference() {
        let response = TableResponse {
            table_data: vec![
                row("0", &[("Male-Seen Thai", 4.9, 20)]),
                row("1", &[("Male-Seen Thai", 3.5, 10)]),
                row("2", &[("Male-Seen Thai", 4.1, 12), ("Female-Seen Thai", 2.0, 3)]),
            ],
            categories: keys(&["Male-Seen Thai", "Female-Seen Thai", "Female-Unseen Thai"]),
            total_ratings: 45,
        };

        let best = compute_best_scores(&response);
        assert_eq!(best.get("Male-Seen Thai"), 4.1);
        assert_eq!(best.get("Female-Seen Thai"), 2.0);
        assert_eq!(best.get("Female-Unseen Thai"), f64::NEG_INFINITY);
        assert_eq!(best.get("Not-A-Category"), f64::NEG_INFINITY);

        assert!(!is_best(&response.table_data[0], "Male-Seen Thai", &best));
        assert!(!is_best(&response.table_data[1], "Male-Seen Thai", &best));
        assert!(is_best(&response.table_data[2], "Male-Seen Thai", &best));
        assert!(!is_best(&response.table_data[1], "Female-Unseen Thai", &best));
    }

    #[test]
    fn test_reference_only_category_is_never_marked() {
        let response = TableResponse {
            table_data: vec![row("0", &[("Male-Seen Thai", 4.9, 20)]), row("1", &[])],
            categories: keys(&["Male-Seen Thai"]),
            total_ratings: 20,
        };

        let best = compute_best_scores(&response);
        assert_eq!(best.get("Male-Seen Thai"), f64::NEG_INFINITY);
        assert!(response
            .table_data
            .iter()
            .all(|r| !is_best(r, "Male-Seen Thai", &best)));
    }

    #[test]
    fn test_best_tolerance() {
        let best = BestScores(HashMap::from([("Male-Seen Thai".to_string(), 4.0)]));
        let at = |avg| row("3", &[("Male-Seen Thai", avg, 1)]);

        assert!(is_best(&at(4.0009), "Male-Seen Thai", &best));
        assert!(is_best(&at(3.9991), "Male-Seen Thai", &best));
        assert!(!is_best(&at(4.0011), "Male-Seen Thai", &best));
        assert!(!is_best(&at(3.9989), "Male-Seen Thai", &best));
    }

    #[test]
    fn test_ties_are_all_marked() {
        let response = TableResponse {
            table_data: vec![
                row("1", &[("Female-Seen Thai", 3.75, 8)]),
                row("2", &[("Female-Seen Thai", 3.75, 4)]),
            ],
            categories: keys(&["Female-Seen Thai"]),
            total_ratings: 12,
        };
        let best = compute_best_scores(&response);
        assert!(response
            .table_data
            .iter()
            .all(|r| is_best(r, "Female-Seen Thai", &best)));
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&Cell::Present { avg: 3.1, count: 9 }), "3.10/9");
        assert_eq!(format_cell(&Cell::Present { avg: 4.234, count: 17 }), "4.23/17");
        assert_eq!(format_cell(&Cell::Absent), "-");
    }

    #[test]
    fn test_format_cell_rounds_halves_up() {
        let at = |avg| format_cell(&Cell::Present { avg, count: 8 });

        assert_eq!(at(3.125), "3.13/8");
        assert_eq!(at(4.625), "4.63/8");
        assert_eq!(at(2.375), "2.38/8");
        assert_eq!(at(0.125), "0.13/8");
        assert_eq!(at(5.0), "5.00/8");
        // Stored just below the half, so it stays down
        assert_eq!(at(1.005), "1.00/8");
        assert_eq!(at(2.675), "2.67/8");
    }
}
