use serde::{Deserialize, Serialize};

use crate::completion::categories::CategoryTable;
use crate::completion::scoring::score_category;
use crate::models::profile::Profile;

/// Flat summary of how complete a profile is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    /// 0 – 100
    pub percentage: u32,
    pub completed_fields: Vec<String>,
    pub missing_fields: Vec<String>,
    pub total_fields: usize,
    pub completed_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStatus {
    pub label: String,
    pub completed: bool,
}

/// One category's share of the overall score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdownEntry {
    pub key: String,
    pub name: String,
    pub weight: u32,
    pub completed: usize,
    pub total: usize,
    /// Percentage points this category contributes to the overall score.
    pub percentage: u32,
    pub fields: Vec<FieldStatus>,
}

impl CategoryBreakdownEntry {
    /// Points still available from this category.
    pub fn remaining(&self) -> u32 {
        self.weight.saturating_sub(self.percentage)
    }
}

/// Scores every category in table order and sums the per-category points.
///
/// Each category's points are rounded before summing, which keeps the total
/// equal to the sum of [`completion_breakdown`] contributions.
pub fn calculate_completion(table: &CategoryTable, profile: &Profile) -> CompletionResult {
    let mut percentage = 0;
    let mut completed_fields = Vec::new();
    let mut missing_fields = Vec::new();

    for category in table.categories() {
        percentage += score_category(profile, category).points;

        for spec in category.fields() {
            if spec.is_complete(profile) {
                completed_fields.push(spec.label.clone());
            } else {
                missing_fields.push(spec.label.clone());
            }
        }
    }

    CompletionResult {
        percentage,
        completed_count: completed_fields.len(),
        total_fields: completed_fields.len() + missing_fields.len(),
        completed_fields,
        missing_fields,
    }
}

/// Per-category report, in table order, with field-level status.
pub fn completion_breakdown(table: &CategoryTable, profile: &Profile) -> Vec<CategoryBreakdownEntry> {
    table
        .categories()
        .iter()
        .map(|category| {
            let score = score_category(profile, category);
            CategoryBreakdownEntry {
                key: category.key().to_string(),
                name: category.name().to_string(),
                weight: category.weight(),
                completed: score.completed,
                total: score.total,
                percentage: score.points,
                fields: category
                    .fields()
                    .iter()
                    .map(|spec| FieldStatus {
                        label: spec.label.clone(),
                        completed: spec.is_complete(profile),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// The category with the most points left to earn. Earlier categories win
/// ties. `None` once every category is full.
pub fn next_focus(breakdown: &[CategoryBreakdownEntry]) -> Option<&CategoryBreakdownEntry> {
    breakdown
        .iter()
        .filter(|entry| entry.remaining() > 0)
        .fold(None, |best: Option<&CategoryBreakdownEntry>, entry| match best {
            Some(b) if b.remaining() >= entry.remaining() => Some(b),
            _ => Some(entry),
        })
}
