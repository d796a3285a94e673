use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One immutable market snapshot for the token, produced per fetch.
///
/// All monetary fields are USD. `max_supply` is `None` when the upstream
/// reports it as unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetrics {
    pub price: f64,
    pub price_change_24h: f64,
    pub price_change_7d: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub circulating_supply: f64,
    pub total_supply: f64,
    pub max_supply: Option<f64>,
    pub fdv: f64,
    pub ath: f64,
    pub ath_date: Option<DateTime<Utc>>,
    pub atl: f64,
    pub atl_date: Option<DateTime<Utc>>,
    pub market_cap_rank: u32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Anomaly {
    #[error("negative value in field `{0}`")]
    NegativeField(&'static str),
    #[error("circulating supply {circulating} exceeds total supply {total}")]
    SupplyInverted { circulating: f64, total: f64 },
}

impl TokenMetrics {
    /// Invariant violations in the snapshot. Percent-change fields may be
    /// negative; everything else may not, and total supply must cover the
    /// circulating supply. Violations are reported, never fatal.
    pub fn anomalies(&self) -> Vec<Anomaly> {
        let mut found = Vec::new();

        let non_negative = [
            ("price", self.price),
            ("market_cap", self.market_cap),
            ("volume_24h", self.volume_24h),
            ("circulating_supply", self.circulating_supply),
            ("total_supply", self.total_supply),
            ("fdv", self.fdv),
            ("ath", self.ath),
            ("atl", self.atl),
        ];

        for (field, value) in non_negative {
            if value < 0.0 {
                found.push(Anomaly::NegativeField(field));
            }
        }

        if let Some(max_supply) = self.max_supply {
            if max_supply < 0.0 {
                found.push(Anomaly::NegativeField("max_supply"));
            }
        }

        // An unknown total supply is reported as 0 and not treated as inverted.
        if self.total_supply > 0.0 && self.circulating_supply > self.total_supply {
            found.push(Anomaly::SupplyInverted {
                circulating: self.circulating_supply,
                total: self.total_supply,
            });
        }

        found
    }
}
