use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;

/// `GET /coins/{id}/market_chart`: price, market cap and volume time series.
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct MarketChart {
    pub coin_id: String,

    #[builder(default = "usd".to_string())]
    pub vs_currency: String,

    #[builder(default = 30)]
    pub days: u32,
}

impl Endpoint for MarketChart {
    type Response = MarketChartResponse;

    fn path(&self) -> String {
        format!("coins/{}/market_chart", self.coin_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.clone()),
            ("days", self.days.to_string()),
        ]
    }
}

/// Each series entry is a `[timestamp_ms, value]` pair. Timestamps arrive as
/// JSON numbers, not strings.
#[derive(Serialize, Deserialize, Debug)]
pub struct MarketChartResponse {
    pub prices: Vec<(f64, f64)>,
    #[serde(default)]
    pub market_caps: Vec<(f64, f64)>,
    #[serde(default)]
    pub total_volumes: Vec<(f64, f64)>,
}
