//! HTTP API over Nepal Stock Exchange market data
//!
//! Every inbound request passes a process-wide token-bucket rate limit,
//! then dispatches to a handler that queries the upstream exchange client
//! and reshapes the result into JSON. One route joins the leaders feeds by
//! symbol into per-scrip and per-sector statistics.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod router;
pub mod state;
