//! Ranked leader lists and daily price movers
//!
//! Each feed ranks scrips by one metric; the aggregation route joins them
//! back together by symbol.

use serde::{Deserialize, Serialize};

/// Top-ten entry ranked by turnover value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoverLeader {
    pub symbol: String,
    pub security_name: String,
    pub turnover: f64,
    pub closing_price: f64,
}

/// Top-ten entry ranked by shares traded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeLeader {
    pub symbol: String,
    pub security_name: String,
    pub share_traded: u64,
    pub closing_price: f64,
}

/// Top-ten entry ranked by transaction count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLeader {
    pub symbol: String,
    pub security_name: String,
    pub total_trades: u64,
    pub last_traded_price: f64,
}

/// A gainer or loser entry; both feeds share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceMover {
    pub symbol: String,
    pub security_name: String,
    pub ltp: f64,
    pub point_change: f64,
    pub percentage_change: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mover_wire_field_names() {
        let json = r#"{
            "symbol": "SHIVM",
            "securityName": "Shivam Cements Ltd",
            "ltp": 623.0,
            "pointChange": 42.0,
            "percentageChange": 7.23
        }"#;

        let mover: PriceMover = serde_json::from_str(json).unwrap();
        assert_eq!(mover.symbol, "SHIVM");
        assert_eq!(mover.point_change, 42.0);
    }

    #[test]
    fn test_trade_leader_counts_are_integers() {
        let json = r#"{
            "symbol": "NIFRA",
            "securityName": "Nepal Infrastructure Bank",
            "shareTraded": 1405672,
            "closingPrice": 290.1
        }"#;

        let leader: TradeLeader = serde_json::from_str(json).unwrap();
        assert_eq!(leader.share_traded, 1405672);
    }
}
