//! Listed company and security records

use serde::{Deserialize, Serialize};

/// A company listed on the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub symbol: String,
    pub security_name: String,
    pub security_id: i64,
    /// Sector display name, e.g. "Commercial Banks". Kept as a string on
    /// the wire; the aggregator parses it into [`crate::sector::Sector`].
    pub sector_name: String,
    pub instrument_type: String,
    #[serde(default)]
    pub total_quantity: Option<u64>,
}

/// A tradable security, as the security list reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityInfo {
    pub id: i64,
    pub symbol: String,
    pub security_name: String,
    pub active_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_wire_field_names() {
        let json = r#"{
            "symbol": "ADBL",
            "securityName": "Agricultural Development Bank Limited",
            "securityId": 131,
            "sectorName": "Commercial Banks",
            "instrumentType": "Equity",
            "totalQuantity": 4458040
        }"#;

        let company: CompanyInfo = serde_json::from_str(json).unwrap();
        assert_eq!(company.symbol, "ADBL");
        assert_eq!(company.sector_name, "Commercial Banks");
        assert_eq!(company.total_quantity, Some(4458040));
    }

    #[test]
    fn test_company_total_quantity_is_optional() {
        let json = r#"{
            "symbol": "NIFRA",
            "securityName": "Nepal Infrastructure Bank",
            "securityId": 2792,
            "sectorName": "Development Banks",
            "instrumentType": "Equity"
        }"#;

        let company: CompanyInfo = serde_json::from_str(json).unwrap();
        assert_eq!(company.total_quantity, None);
    }
}
