use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Category, Product},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct CategoryProducts {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Handler listing the catalog, grouped by category in catalog order
pub async fn list_products(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryProducts>> {
    let groups = state
        .catalog
        .groups()
        .map(|(category, products)| CategoryProducts {
            category,
            products: products.to_vec(),
        })
        .collect();
    Json(groups)
}

/// Handler for a single product lookup
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> AppResult<Json<Product>> {
    state
        .catalog
        .find(&product_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Product {}", product_id)))
}
