use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Point-in-time quote for a single ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    /// Ticker symbol.
    pub symbol: String,
    /// Last traded price.
    pub price: f64,
    /// Absolute change since the previous close.
    pub change: f64,
    /// Change since the previous close, in percent.
    pub change_percent: f64,
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn quote() -> StockData {
        StockData {
            symbol: "AAPL".to_string(),
            price: 189.25,
            change: -1.5,
            change_percent: -0.79,
            last_updated: Utc.with_ymd_and_hms(2024, 3, 15, 20, 0, 0).unwrap(),
            volume: Some(52_000_000),
            high: Some(191.0),
            low: Some(188.1),
            open: Some(190.4),
            previous_close: Some(190.75),
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let value = serde_json::to_value(quote()).unwrap();
        assert_eq!(value["changePercent"], json!(-0.79));
        assert_eq!(value["previousClose"], json!(190.75));
        assert_eq!(value["lastUpdated"], json!("2024-03-15T20:00:00Z"));
    }

    #[test]
    fn survives_json_round_trip() {
        let original = quote();
        let json = serde_json::to_string(&original).unwrap();
        let decoded: StockData = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let decoded: StockData = serde_json::from_value(json!({
            "symbol": "MSFT",
            "price": 410.0,
            "change": 0.0,
            "changePercent": 0.0,
            "lastUpdated": "2024-03-15T20:00:00Z"
        }))
        .unwrap();

        assert!(decoded.volume.is_none());
        assert!(decoded.previous_close.is_none());

        let value = serde_json::to_value(&decoded).unwrap();
        assert!(value.get("volume").is_none());
        assert!(value.get("high").is_none());
    }
}
