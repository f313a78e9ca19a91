//! Market statistics routes: leader lists, movers, depth, aggregation

use crate::aggregate::{self, MarketStats};
use crate::error::AppError;
use crate::router;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use nepse::ClientError;
use types::depth::MarketDepth;
use types::leaders::{PriceMover, TradeLeader, TransactionLeader, TurnoverLeader};
use types::market::{LiveMarketEntry, SupplyDemand};

pub async fn top_ten_trade_scrips(
    State(state): State<AppState>,
) -> Result<Json<Vec<TradeLeader>>, AppError> {
    Ok(Json(state.client.top_ten_trade_scrips().await?))
}

pub async fn top_ten_turnover_scrips(
    State(state): State<AppState>,
) -> Result<Json<Vec<TurnoverLeader>>, AppError> {
    Ok(Json(state.client.top_ten_turnover_scrips().await?))
}

pub async fn top_ten_transaction_scrips(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionLeader>>, AppError> {
    Ok(Json(state.client.top_ten_transaction_scrips().await?))
}

pub async fn supply_demand(State(state): State<AppState>) -> Result<Json<SupplyDemand>, AppError> {
    Ok(Json(state.client.supply_demand().await?))
}

pub async fn top_gainers(
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceMover>>, AppError> {
    Ok(Json(state.client.top_gainers().await?))
}

pub async fn top_losers(State(state): State<AppState>) -> Result<Json<Vec<PriceMover>>, AppError> {
    Ok(Json(state.client.top_losers().await?))
}

pub async fn live_market(
    State(state): State<AppState>,
) -> Result<Json<Vec<LiveMarketEntry>>, AppError> {
    Ok(Json(state.client.live_market().await?))
}

/// HTML directory of every symbol with an order book.
pub async fn list_market_depth(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let securities = state.client.security_list().await?;
    let links: Vec<String> = securities
        .iter()
        .map(|s| {
            format!(
                "<a href={}/{}> {} </a>",
                router::MARKET_DEPTH,
                s.symbol,
                s.symbol
            )
        })
        .collect();

    Ok(Html(format!(
        "<h1>Market Depth - Available Symbols</h1>{}",
        links.join("<BR>")
    )))
}

/// Order book for one symbol. Missing books and undecodable payloads both
/// surface as 404; transport failures stay server errors.
pub async fn market_depth(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<MarketDepth>, AppError> {
    match state.client.market_depth(&symbol).await {
        Ok(Some(depth)) => Ok(Json(depth)),
        Ok(None) => Err(AppError::NotFound(format!(
            "Market depth for {symbol} not available"
        ))),
        Err(ClientError::Decode { .. }) => Err(AppError::NotFound(format!(
            "Invalid data received for {symbol}"
        ))),
        Err(err) => Err(AppError::Upstream(err)),
    }
}

/// Per-scrip and per-sector statistics joined from seven upstream feeds.
///
/// The fetches run concurrently; the first failure cancels the rest and
/// fails the whole request.
pub async fn trade_turnover_transaction_subindices(
    State(state): State<AppState>,
) -> Result<Json<MarketStats>, AppError> {
    let client = &state.client;
    let (companies, turnover, transactions, trades, gainers, losers, sub_indices) = tokio::try_join!(
        client.company_list(),
        client.top_ten_turnover_scrips(),
        client.top_ten_transaction_scrips(),
        client.top_ten_trade_scrips(),
        client.top_gainers(),
        client.top_losers(),
        client.nepse_sub_indices(),
    )?;

    let stats = aggregate::aggregate(
        &companies,
        &turnover,
        &transactions,
        &trades,
        &gainers,
        &losers,
        &sub_indices,
    )?;

    Ok(Json(stats))
}
