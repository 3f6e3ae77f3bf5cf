//! Product CRUD handlers.
//!
//! PUT and DELETE look the product up first and answer 404 themselves when it
//! is absent, before touching the store any further.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use products_core::product::Product;
use products_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// List all products (GET /api/products).
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products.get_products().await?;
    Ok(Json(products))
}

/// Create a new product (POST /api/products).
pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    tracing::debug!(product = ?product, "Received create product request");

    state.products.create_product(&product).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a single product by ID (GET /api/products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    match state.products.get_product(&id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(RepositoryError::product_not_found(id).into()),
    }
}

/// Replace a product by ID (PUT /api/products/{id}).
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(product): Json<Product>,
) -> Result<StatusCode, AppError> {
    require_existing(&state, &id).await?;

    state.products.update_product(&id, &product).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product by ID (DELETE /api/products/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    require_existing(&state, &id).await?;

    state.products.delete_product(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn require_existing(state: &AppState, id: &str) -> Result<(), AppError> {
    match state.products.get_product(id).await? {
        Some(_) => Ok(()),
        None => Err(RepositoryError::product_not_found(id).into()),
    }
}
