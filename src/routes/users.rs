use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{error::AppResult, models::UserWeightProfile, state::AppState};

#[derive(Debug, Serialize)]
pub struct UserWeightsResponse {
    pub user_id: String,
    /// `null` when the user has no recorded actions
    pub weights: Option<UserWeightProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Handler for inspecting a user's accumulated weights
pub async fn get_weights(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserWeightsResponse>> {
    let weights = state.tracker.get_weights(&user_id).await?;
    let message = weights.is_none().then(|| "No data yet".to_string());

    Ok(Json(UserWeightsResponse {
        user_id,
        weights,
        message,
    }))
}
