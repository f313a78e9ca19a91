//! Per-symbol order book depth

use serde::{Deserialize, Serialize};

/// The current order book for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDepth {
    pub symbol: String,
    pub market_depth: DepthSides,
    pub total_buy_qty: u64,
    pub total_sell_qty: u64,
}

/// Buy and sell sides of the book, best price first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthSides {
    pub buy_market_depth_list: Vec<DepthLevel>,
    pub sell_market_depth_list: Vec<DepthLevel>,
}

/// One aggregated price level of the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthLevel {
    pub order_count: u32,
    pub quantity: u64,
    pub price: f64,
}
