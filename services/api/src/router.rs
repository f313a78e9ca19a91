//! Route table and router assembly
//!
//! Paths are part of the public contract (including the `/daily-Nep-graph`
//! quirk) and must not change under existing consumers.

use crate::handlers::{company, market, price, stats};
use crate::rate_limit;
use crate::state::AppState;
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const SUMMARY: &str = "/summary";
pub const NEPSE_INDEX: &str = "/nepse-index";
pub const NEPSE_SUB_INDICES: &str = "/nepse-sub-indices";
pub const TOP_TEN_TRADE_SCRIPS: &str = "/top-ten-trade-scrips";
pub const TOP_TEN_TURNOVER_SCRIPS: &str = "/top-ten-turnover-scrips";
pub const TOP_TEN_TRANSACTION_SCRIPS: &str = "/top-ten-transaction-scrips";
pub const SUPPLY_DEMAND: &str = "/supply-demand";
pub const TOP_GAINERS: &str = "/top-gainers";
pub const TOP_LOSERS: &str = "/top-losers";
pub const IS_NEPSE_OPEN: &str = "/is-nepse-open";
pub const DAILY_NEPSE_INDEX_GRAPH: &str = "/daily-Nep-graph";
pub const DAILY_SCRIP_PRICE_GRAPH: &str = "/daily-scrip-price-graph";
pub const COMPANY_LIST: &str = "/company-list";
pub const SECURITY_LIST: &str = "/security-list";
pub const PRICE_VOLUME: &str = "/price-volume";
pub const LIVE_MARKET: &str = "/live-market";
pub const MARKET_DEPTH: &str = "/market-depth";
pub const TRADE_TURNOVER_TRANSACTION_SUBINDICES: &str = "/trade-turnover-transaction-subindices";

/// Route directory served at `/`.
pub const ROUTES: &[(&str, &str)] = &[
    ("PriceVolume", PRICE_VOLUME),
    ("Summary", SUMMARY),
    ("SupplyDemand", SUPPLY_DEMAND),
    ("TopGainers", TOP_GAINERS),
    ("TopLosers", TOP_LOSERS),
    ("TopTenTradeScrips", TOP_TEN_TRADE_SCRIPS),
    ("TopTenTurnoverScrips", TOP_TEN_TURNOVER_SCRIPS),
    ("TopTenTransactionScrips", TOP_TEN_TRANSACTION_SCRIPS),
    ("IsNepseOpen", IS_NEPSE_OPEN),
    ("NepseIndex", NEPSE_INDEX),
    ("NepseSubIndices", NEPSE_SUB_INDICES),
    ("DailyNepseIndexGraph", DAILY_NEPSE_INDEX_GRAPH),
    ("DailyScripPriceGraph", DAILY_SCRIP_PRICE_GRAPH),
    ("CompanyList", COMPANY_LIST),
    ("SecurityList", SECURITY_LIST),
    (
        "TradeTurnoverTransactionSubindices",
        TRADE_TURNOVER_TRANSACTION_SUBINDICES,
    ),
    ("LiveMarket", LIVE_MARKET),
    ("MarketDepth", MARKET_DEPTH),
];

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(market::root))
        .route(SUMMARY, get(market::summary))
        .route(NEPSE_INDEX, get(market::nepse_index))
        .route(NEPSE_SUB_INDICES, get(market::nepse_sub_indices))
        .route(IS_NEPSE_OPEN, get(market::is_nepse_open))
        .route(DAILY_NEPSE_INDEX_GRAPH, get(market::daily_index_graph))
        .route(COMPANY_LIST, get(company::company_list))
        .route(SECURITY_LIST, get(company::security_list))
        .route(PRICE_VOLUME, get(price::price_volume))
        .route(DAILY_SCRIP_PRICE_GRAPH, get(price::list_scrip_graphs))
        .route(
            &format!("{DAILY_SCRIP_PRICE_GRAPH}/{{symbol}}"),
            get(price::daily_scrip_price_graph),
        )
        .route(TOP_TEN_TRADE_SCRIPS, get(stats::top_ten_trade_scrips))
        .route(TOP_TEN_TURNOVER_SCRIPS, get(stats::top_ten_turnover_scrips))
        .route(
            TOP_TEN_TRANSACTION_SCRIPS,
            get(stats::top_ten_transaction_scrips),
        )
        .route(SUPPLY_DEMAND, get(stats::supply_demand))
        .route(TOP_GAINERS, get(stats::top_gainers))
        .route(TOP_LOSERS, get(stats::top_losers))
        .route(LIVE_MARKET, get(stats::live_market))
        .route(MARKET_DEPTH, get(stats::list_market_depth))
        .route(&format!("{MARKET_DEPTH}/{{symbol}}"), get(stats::market_depth))
        .route(
            TRADE_TURNOVER_TRANSACTION_SUBINDICES,
            get(stats::trade_turnover_transaction_subindices),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
