//! Cross-feed market statistics
//!
//! Joins the company list, the three top-ten leader feeds, the gainers and
//! losers feeds and the sub-indices snapshot by symbol, then rolls the
//! per-scrip figures up by sector. Pure request-local computation; any
//! missing piece fails the whole request.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use types::company::CompanyInfo;
use types::index::IndexEntry;
use types::leaders::{PriceMover, TradeLeader, TransactionLeader, TurnoverLeader};
use types::sector::Sector;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("company {symbol} lists under unmapped sector {sector:?}")]
    UnknownSector { symbol: String, sector: String },

    #[error("sub-index {label:?} missing from upstream snapshot")]
    MissingSubIndex { label: &'static str },
}

/// Joined daily statistics for one scrip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScripStats {
    pub symbol: String,
    pub sector_name: Sector,
    pub total_turnover: f64,
    pub total_trades: u64,
    pub total_trade_quantity: u64,
    pub point_change: f64,
    pub percentage_change: f64,
    pub ltp: f64,
}

/// Rolled-up statistics for one sector, with its sub-index entry attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorStats {
    pub sector_name: Sector,
    pub total_trades: u64,
    pub total_trade_quantity: u64,
    pub total_turnover: f64,
    pub index: IndexEntry,
}

/// Output of the aggregation route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStats {
    pub scrips_details: BTreeMap<String, ScripStats>,
    pub sectors_details: BTreeMap<String, SectorStats>,
}

/// Join the upstream snapshots into per-scrip and per-sector statistics.
///
/// Symbols absent from a leaders feed contribute zero for that metric.
/// A symbol present in both movers feeds takes the gainers values. A
/// company sector outside the known taxonomy, or a mapped sub-index label
/// missing from the snapshot, fails the whole aggregation.
pub fn aggregate(
    companies: &[CompanyInfo],
    turnover: &[TurnoverLeader],
    transactions: &[TransactionLeader],
    trades: &[TradeLeader],
    gainers: &[PriceMover],
    losers: &[PriceMover],
    sub_indices: &[IndexEntry],
) -> Result<MarketStats, AggregateError> {
    // Index every feed by symbol; duplicates keep the last entry.
    let turnover: BTreeMap<&str, &TurnoverLeader> =
        turnover.iter().map(|t| (t.symbol.as_str(), t)).collect();
    let transactions: BTreeMap<&str, &TransactionLeader> =
        transactions.iter().map(|t| (t.symbol.as_str(), t)).collect();
    let trades: BTreeMap<&str, &TradeLeader> =
        trades.iter().map(|t| (t.symbol.as_str(), t)).collect();
    let gainers: BTreeMap<&str, &PriceMover> =
        gainers.iter().map(|m| (m.symbol.as_str(), m)).collect();
    let losers: BTreeMap<&str, &PriceMover> =
        losers.iter().map(|m| (m.symbol.as_str(), m)).collect();
    let sub_indices: BTreeMap<&str, &IndexEntry> =
        sub_indices.iter().map(|e| (e.index.as_str(), e)).collect();

    let mut scrips_details = BTreeMap::new();
    for company in companies {
        let symbol = company.symbol.as_str();
        let sector: Sector =
            company
                .sector_name
                .parse()
                .map_err(|_| AggregateError::UnknownSector {
                    symbol: company.symbol.clone(),
                    sector: company.sector_name.clone(),
                })?;

        let (point_change, percentage_change, ltp) = gainers
            .get(symbol)
            .or_else(|| losers.get(symbol))
            .map(|m| (m.point_change, m.percentage_change, m.ltp))
            .unwrap_or((0.0, 0.0, 0.0));

        scrips_details.insert(
            company.symbol.clone(),
            ScripStats {
                symbol: company.symbol.clone(),
                sector_name: sector,
                total_turnover: turnover.get(symbol).map_or(0.0, |t| t.turnover),
                total_trades: transactions.get(symbol).map_or(0, |t| t.total_trades),
                total_trade_quantity: trades.get(symbol).map_or(0, |t| t.share_traded),
                point_change,
                percentage_change,
                ltp,
            },
        );
    }

    let sectors: BTreeSet<Sector> = scrips_details.values().map(|s| s.sector_name).collect();

    let mut sectors_details = BTreeMap::new();
    for sector in sectors {
        let mut total_trades = 0u64;
        let mut total_trade_quantity = 0u64;
        let mut total_turnover = 0.0f64;

        for scrip in scrips_details.values().filter(|s| s.sector_name == sector) {
            total_trades += scrip.total_trades;
            total_trade_quantity += scrip.total_trade_quantity;
            total_turnover += scrip.total_turnover;
        }

        let label = sector.sub_index_label();
        let index = sub_indices
            .get(label)
            .map(|entry| (*entry).clone())
            .ok_or(AggregateError::MissingSubIndex { label })?;

        sectors_details.insert(
            sector.name().to_string(),
            SectorStats {
                sector_name: sector,
                total_trades,
                total_trade_quantity,
                total_turnover,
                index,
            },
        );
    }

    Ok(MarketStats {
        scrips_details,
        sectors_details,
    })
}
