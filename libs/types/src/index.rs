//! Index and sub-index entries, plus graph series points

use serde::{Deserialize, Serialize};

/// One entry of the index feed.
///
/// The same shape serves the main market index and every sector sub-index;
/// `index` is the display name the feed keys entries by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub index: String,
    pub current_value: f64,
    pub previous_value: f64,
    pub point_change: f64,
    pub percentage_change: f64,
}

/// A single timestamp/value pair of a graph series.
///
/// Serialized as a two-element JSON array, matching the upstream graph
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint(pub i64, pub f64);

impl GraphPoint {
    /// Unix timestamp of the sample.
    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Index or price value at the sample.
    pub fn value(&self) -> f64 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_entry_wire_field_names() {
        let json = r#"{
            "index": "Banking SubIndex",
            "currentValue": 1208.61,
            "previousValue": 1201.97,
            "pointChange": 6.64,
            "percentageChange": 0.55
        }"#;

        let entry: IndexEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.index, "Banking SubIndex");
        assert_eq!(entry.current_value, 1208.61);
    }

    #[test]
    fn test_graph_point_is_a_pair() {
        let point: GraphPoint = serde_json::from_str("[1708123456, 2014.37]").unwrap();
        assert_eq!(point.timestamp(), 1708123456);
        assert_eq!(point.value(), 2014.37);

        assert_eq!(serde_json::to_string(&point).unwrap(), "[1708123456,2014.37]");
    }
}
