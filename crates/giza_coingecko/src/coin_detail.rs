use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;

/// `GET /coins/{id}` with the market data block and everything else turned off.
pub struct CoinDetail {
    pub coin_id: String,
}

impl CoinDetail {
    pub fn new(coin_id: impl Into<String>) -> Self {
        Self {
            coin_id: coin_id.into(),
        }
    }
}

impl Endpoint for CoinDetail {
    type Response = CoinDetailResponse;

    fn path(&self) -> String {
        format!("coins/{}", self.coin_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("localization", "false".to_string()),
            ("tickers", "false".to_string()),
            ("market_data", "true".to_string()),
            ("community_data", "false".to_string()),
            ("developer_data", "false".to_string()),
            ("sparkline", "false".to_string()),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CoinDetailResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub market_data: Option<MarketData>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Per-currency maps keyed by lowercase currency code ("usd", "btc", ...).
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
    #[serde(default)]
    pub fully_diluted_valuation: HashMap<String, f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub ath: HashMap<String, f64>,
    #[serde(default)]
    pub ath_date: HashMap<String, DateTime<Utc>>,
    #[serde(default)]
    pub atl: HashMap<String, f64>,
    #[serde(default)]
    pub atl_date: HashMap<String, DateTime<Utc>>,
}

impl MarketData {
    /// USD sub-key of a per-currency map.
    pub fn in_usd(map: &HashMap<String, f64>) -> Option<f64> {
        map.get("usd").copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "id": "giza",
        "symbol": "giza",
        "name": "Giza",
        "market_cap_rank": 1319,
        "last_updated": "2025-07-17T12:00:00.000Z",
        "market_data": {
            "current_price": { "usd": 0.1762, "btc": 0.0000015 },
            "price_change_percentage_24h": -7.4,
            "price_change_percentage_7d": -5.1,
            "market_cap": { "usd": 18720000.0 },
            "total_volume": { "usd": 3540038.0 },
            "fully_diluted_valuation": { "usd": 176200000.0 },
            "circulating_supply": 88691142.0,
            "total_supply": 1000000000.0,
            "max_supply": 1000000000.0,
            "ath": { "usd": 0.49 },
            "ath_date": { "usd": "2025-03-15T00:00:00.000Z" },
            "atl": { "usd": 0.073 },
            "atl_date": { "usd": "2025-01-01T00:00:00.000Z" }
        }
    }"#;

    #[test]
    fn parse_coin_detail() {
        let response: CoinDetailResponse =
            serde_json::from_str(FIXTURE).expect("Failed to parse coin detail fixture");

        assert_eq!(response.id, "giza");
        assert_eq!(response.market_cap_rank, Some(1319));

        let market_data = response.market_data.expect("market_data missing");
        assert_eq!(MarketData::in_usd(&market_data.current_price), Some(0.1762));
        assert_eq!(market_data.price_change_percentage_24h, Some(-7.4));
        assert_eq!(MarketData::in_usd(&market_data.market_cap), Some(18720000.0));
        assert_eq!(market_data.total_supply, Some(1000000000.0));
        assert!(market_data.ath_date.contains_key("usd"));
    }

    #[test]
    fn parse_tolerates_missing_optional_blocks() {
        let response: CoinDetailResponse =
            serde_json::from_str(r#"{ "id": "giza", "symbol": "giza", "name": "Giza" }"#)
                .expect("Failed to parse minimal payload");

        assert!(response.market_data.is_none());
        assert!(response.market_cap_rank.is_none());
        assert!(response.last_updated.is_none());
    }

    #[test]
    fn coin_detail_path_and_query() {
        let endpoint = CoinDetail::new("giza");

        assert_eq!(endpoint.path(), "coins/giza");
        assert!(
            endpoint
                .query()
                .contains(&("market_data", "true".to_string()))
        );
    }
}
