//! Market-wide routes: directory, summary, indices, open flag, index graph

use crate::error::AppError;
use crate::router;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde_json::json;
use std::collections::BTreeMap;
use types::index::{GraphPoint, IndexEntry};
use types::market::MarketStatus;

/// Directory of every available route.
pub async fn root() -> Json<serde_json::Value> {
    let available: BTreeMap<&str, &str> = router::ROUTES.iter().copied().collect();

    Json(json!({
        "message": "Welcome to the Nepal Stock Exchange API",
        "description": "This API provides access to NEPSE market data.",
        "available_routes": available,
    }))
}

/// Today's market summary, reshaped to a label-to-value map.
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, f64>>, AppError> {
    let entries = state.client.market_summary().await?;
    Ok(Json(entries.into_iter().map(|e| (e.detail, e.value)).collect()))
}

/// Main index entries keyed by index name.
pub async fn nepse_index(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, IndexEntry>>, AppError> {
    let entries = state.client.nepse_index().await?;
    Ok(Json(entries.into_iter().map(|e| (e.index.clone(), e)).collect()))
}

/// Sector sub-indices keyed by index name.
pub async fn nepse_sub_indices(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, IndexEntry>>, AppError> {
    let entries = state.client.nepse_sub_indices().await?;
    Ok(Json(entries.into_iter().map(|e| (e.index.clone(), e)).collect()))
}

pub async fn is_nepse_open(State(state): State<AppState>) -> Result<Json<MarketStatus>, AppError> {
    Ok(Json(state.client.market_open().await?))
}

pub async fn daily_index_graph(
    State(state): State<AppState>,
) -> Result<Json<Vec<GraphPoint>>, AppError> {
    Ok(Json(state.client.daily_index_graph().await?))
}
