use giza_shared_models::{ProtocolMetrics, TokenMetrics};
use serde::{Deserialize, Serialize};

/// Quotient with the zero-denominator guard all ratios share: a ratio over an
/// empty denominator is 0, never an error.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// 24h traded volume relative to market cap.
pub fn volume_to_market_cap(volume_24h: f64, market_cap: f64) -> f64 {
    ratio(volume_24h, market_cap)
}

/// Share of the total supply already in circulation.
pub fn circulating_ratio(circulating_supply: f64, total_supply: f64) -> f64 {
    ratio(circulating_supply, total_supply)
}

/// Signed distance of the current price from the all-time high.
/// -0.25 means the price sits 25% below the ATH.
pub fn price_vs_ath(price: f64, ath: f64) -> f64 {
    if ath == 0.0 {
        0.0
    } else {
        price / ath - 1.0
    }
}

/// Signed distance of the current price from the all-time low.
pub fn price_vs_atl(price: f64, atl: f64) -> f64 {
    if atl == 0.0 {
        0.0
    } else {
        price / atl - 1.0
    }
}

/// Market cap relative to the fully diluted valuation.
pub fn market_cap_to_fdv(market_cap: f64, fdv: f64) -> f64 {
    ratio(market_cap, fdv)
}

/// Assets under agents relative to market cap.
pub fn aua_to_market_cap(protocol: &ProtocolMetrics, metrics: &TokenMetrics) -> f64 {
    ratio(protocol.assets_under_agents, metrics.market_cap)
}

/// The display ratios derived from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyRatios {
    pub volume_to_market_cap: f64,
    pub circulating_ratio: f64,
    pub price_vs_ath: f64,
    pub price_vs_atl: f64,
    pub market_cap_to_fdv: f64,
}

impl KeyRatios {
    pub fn compute(metrics: &TokenMetrics) -> Self {
        Self {
            volume_to_market_cap: volume_to_market_cap(metrics.volume_24h, metrics.market_cap),
            circulating_ratio: circulating_ratio(
                metrics.circulating_supply,
                metrics.total_supply,
            ),
            price_vs_ath: price_vs_ath(metrics.price, metrics.ath),
            price_vs_atl: price_vs_atl(metrics.price, metrics.atl),
            market_cap_to_fdv: market_cap_to_fdv(metrics.market_cap, metrics.fdv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giza_shared_models::demo;

    #[test]
    fn market_cap_to_fdv_reference_scenario() {
        let r = market_cap_to_fdv(18_720_000.0, 176_200_000.0);

        // 10.6% of the fully diluted valuation.
        assert!((r - 0.1062).abs() < 1e-3);
    }

    #[test]
    fn price_vs_ath_reference_scenario() {
        let r = price_vs_ath(0.1762, 0.49);

        // 64.04% below the all-time high.
        assert!((r + 0.6404).abs() < 1e-4);
    }

    #[test]
    fn zero_denominators_yield_zero() {
        assert_eq!(volume_to_market_cap(3_540_038.0, 0.0), 0.0);
        assert_eq!(circulating_ratio(88_691_142.0, 0.0), 0.0);
        assert_eq!(price_vs_ath(0.1762, 0.0), 0.0);
        assert_eq!(price_vs_atl(0.1762, 0.0), 0.0);
        assert_eq!(market_cap_to_fdv(18_720_000.0, 0.0), 0.0);
    }

    #[test]
    fn key_ratios_from_demo_snapshot() {
        let ratios = KeyRatios::compute(&demo::token_metrics());

        assert!((ratios.circulating_ratio - 0.0887).abs() < 1e-4);
        assert!((ratios.volume_to_market_cap - 0.1891).abs() < 1e-4);
        assert!(ratios.price_vs_ath < 0.0);
        assert!(ratios.price_vs_atl > 0.0);
    }

    #[test]
    fn aua_ratio_from_demo_data() {
        let r = aua_to_market_cap(&demo::protocol_metrics(), &demo::token_metrics());

        // 11.5M of assets under agents against an 18.72M cap.
        assert!((r - 0.6143).abs() < 1e-3);
    }
}
