use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{ActionKind, Category, UserWeightProfile},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecordActionRequest {
    pub user_id: String,
    /// Logged only; weights are tracked per category
    pub product_id: String,
    /// `view`, `add_to_cart` or `purchase`; anything else counts as a view
    pub action: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct RecordActionResponse {
    pub status: &'static str,
    pub message: String,
    pub updated_weights: UserWeightProfile,
}

/// Handler for recording a user action
pub async fn record_action(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecordActionRequest>,
) -> AppResult<Json<RecordActionResponse>> {
    let category: Category = request.category.parse()?;
    let action = ActionKind::from(request.action.as_str());

    tracing::info!(
        request_id = %request_id,
        user_id = %request.user_id,
        product_id = %request.product_id,
        action = %action,
        category = %category,
        "Processing user action"
    );

    let updated_weights = state
        .tracker
        .record_action(&request.user_id, category, &action)
        .await?;

    Ok(Json(RecordActionResponse {
        status: "success",
        message: format!("Action '{}' recorded for user {}", action, request.user_id),
        updated_weights,
    }))
}
