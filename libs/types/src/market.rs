//! Market-wide feeds: summary, status, supply/demand, price-volume, live data

use serde::{Deserialize, Serialize};

/// One labelled value of the market summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    pub detail: String,
    pub value: f64,
}

/// Whether the exchange is currently trading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatus {
    pub is_open: String,
    pub as_of: String,
    pub id: i64,
}

impl MarketStatus {
    pub fn is_trading(&self) -> bool {
        self.is_open == "OPEN"
    }
}

/// Aggregated buy/sell order interest across the market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyDemand {
    pub supply_list: Vec<SupplyDemandEntry>,
    pub demand_list: Vec<SupplyDemandEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyDemandEntry {
    pub symbol: String,
    pub security_name: String,
    pub total_order: u64,
    pub total_quantity: u64,
}

/// Daily trade statistics for one security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceVolumeEntry {
    pub symbol: String,
    pub security_name: String,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub previous_close: f64,
    pub percentage_change: f64,
    pub total_trade_quantity: u64,
    pub total_trades: u64,
}

/// One row of the live-market feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMarketEntry {
    pub symbol: String,
    pub security_name: String,
    pub last_traded_price: f64,
    pub percentage_change: f64,
    pub total_trade_quantity: u64,
    pub total_turnover: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_status_open_flag() {
        let json = r#"{"isOpen": "OPEN", "asOf": "2024-02-18T11:00:00", "id": 64}"#;
        let status: MarketStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_trading());

        let json = r#"{"isOpen": "CLOSE", "asOf": "2024-02-18T15:00:05", "id": 64}"#;
        let status: MarketStatus = serde_json::from_str(json).unwrap();
        assert!(!status.is_trading());
    }

    #[test]
    fn test_supply_demand_wire_shape() {
        let json = r#"{
            "supplyList": [
                {"symbol": "UPPER", "securityName": "Upper Tamakoshi", "totalOrder": 31, "totalQuantity": 9000}
            ],
            "demandList": []
        }"#;

        let sd: SupplyDemand = serde_json::from_str(json).unwrap();
        assert_eq!(sd.supply_list.len(), 1);
        assert_eq!(sd.supply_list[0].total_quantity, 9000);
        assert!(sd.demand_list.is_empty());
    }
}
