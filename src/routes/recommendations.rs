use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::Product,
    services::allocator::CategoryRatios,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub user_id: String,
    /// Share of the user's interest per category (uniform on cold start)
    pub category_weights: CategoryRatios,
    pub recommendations: Vec<Product>,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<String>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::debug!(request_id = %request_id, user_id = %user_id, "Processing recommendation request");

    let allocation = state.recommender.get_recommendations(&user_id).await?;

    Ok(Json(RecommendationResponse {
        user_id,
        category_weights: allocation.category_ratios,
        recommendations: allocation.products,
    }))
}
