//! Price and volume routes

use crate::error::AppError;
use crate::router;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use types::index::GraphPoint;
use types::market::PriceVolumeEntry;

pub async fn price_volume(
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceVolumeEntry>>, AppError> {
    Ok(Json(state.client.price_volume().await?))
}

/// HTML directory of every scrip with a daily price graph.
pub async fn list_scrip_graphs(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let securities = state.client.security_list().await?;
    let links: Vec<String> = securities
        .iter()
        .map(|s| {
            format!(
                "<a href={}/{}> {} </a>",
                router::DAILY_SCRIP_PRICE_GRAPH,
                s.symbol,
                s.symbol
            )
        })
        .collect();

    Ok(Html(format!(
        "<h1>Available Scrips</h1>{}",
        links.join("<BR>")
    )))
}

/// Daily price series for one scrip; any upstream failure surfaces as a
/// 404 naming the symbol.
pub async fn daily_scrip_price_graph(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Vec<GraphPoint>>, AppError> {
    state
        .client
        .daily_scrip_price_graph(&symbol)
        .await
        .map(Json)
        .map_err(|err| AppError::NotFound(format!("Data for symbol {symbol} not found: {err}")))
}
