//! Types library for the NEPSE market-data API
//!
//! All wire structs mirror the exchange's JSON payloads and use camelCase
//! field names on the wire. Prices, turnover and index values stay `f64`
//! (the upstream emits JSON floats); share and trade counts are `u64`.
//!
//! # Modules
//! - `company`: listed company and security records
//! - `index`: index/sub-index entries and graph points
//! - `leaders`: ranked leader lists and price movers
//! - `market`: market summary, status, supply/demand, price-volume, live feed
//! - `depth`: per-symbol order book depth
//! - `sector`: enumerated sector taxonomy and sub-index label mapping

pub mod company;
pub mod depth;
pub mod index;
pub mod leaders;
pub mod market;
pub mod sector;
