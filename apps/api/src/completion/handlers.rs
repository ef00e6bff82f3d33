use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::completion::report::{
    calculate_completion, completion_breakdown, next_focus, CategoryBreakdownEntry,
    CompletionResult,
};
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    pub percentage: u32,
    pub categories: Vec<CategoryBreakdownEntry>,
    /// Key of the category with the most points left to earn.
    pub next_focus: Option<String>,
}

/// POST /api/v1/profile/completion
pub async fn handle_completion(
    State(state): State<AppState>,
    payload: Result<Json<Profile>, JsonRejection>,
) -> Result<Json<CompletionResult>, AppError> {
    let Json(profile) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let result = calculate_completion(&state.table, &profile);
    debug!(
        percentage = result.percentage,
        missing = result.missing_fields.len(),
        "Profile completion computed"
    );
    Ok(Json(result))
}

/// POST /api/v1/profile/completion/breakdown
pub async fn handle_breakdown(
    State(state): State<AppState>,
    payload: Result<Json<Profile>, JsonRejection>,
) -> Result<Json<BreakdownResponse>, AppError> {
    let Json(profile) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let categories = completion_breakdown(&state.table, &profile);
    let percentage: u32 = categories.iter().map(|c| c.percentage).sum();
    let next_focus = next_focus(&categories).map(|c| c.key.clone());
    debug!(percentage, ?next_focus, "Profile breakdown computed");
    Ok(Json(BreakdownResponse {
        percentage,
        categories,
        next_focus,
    }))
}
