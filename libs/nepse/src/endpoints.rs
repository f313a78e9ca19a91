//! REST endpoint paths on the exchange host
//!
//! Exposed publicly so callers (and test fixtures) can reference the exact
//! paths the client requests.

pub const MARKET_SUMMARY: &str = "/api/nots/market-summary";
pub const NEPSE_INDEX: &str = "/api/nots/nepse-index";
pub const NEPSE_SUBINDICES: &str = "/api/nots/index";
pub const TOP_TEN_TRADE: &str = "/api/nots/top-ten/trade";
pub const TOP_TEN_TURNOVER: &str = "/api/nots/top-ten/turnover";
pub const TOP_TEN_TRANSACTION: &str = "/api/nots/top-ten/transaction";
pub const TOP_GAINERS: &str = "/api/nots/top-ten/top-gainer";
pub const TOP_LOSERS: &str = "/api/nots/top-ten/top-loser";
pub const SUPPLY_DEMAND: &str = "/api/nots/market/supplydemand";
pub const MARKET_OPEN: &str = "/api/nots/nepse-data/market-open";
pub const COMPANY_LIST: &str = "/api/nots/company/list";
pub const SECURITY_LIST: &str = "/api/nots/security";
pub const PRICE_VOLUME: &str = "/api/nots/securityDailyTradeStat/58";
pub const LIVE_MARKET: &str = "/api/nots/nepse-data/live-market";
pub const INDEX_GRAPH: &str = "/api/nots/graph/index/58";
/// Per-scrip daily graph; the symbol is appended as a path segment.
pub const SCRIP_GRAPH: &str = "/api/nots/market/graphdata/daily";
/// Per-symbol order book; the symbol is appended as a path segment.
pub const MARKET_DEPTH: &str = "/api/nots/nepse-data/marketdepth";
