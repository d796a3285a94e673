use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;
use thiserror::Error;

use giza_coingecko::CoingeckoClient;
use giza_coingecko::coin_detail::{CoinDetail, CoinDetailResponse, MarketData};
use giza_coingecko::market_chart::{MarketChart, MarketChartResponse};
use giza_shared_models::{PriceHistory, PricePoint, TokenMetrics, demo};

use crate::cache::TtlCache;
use crate::config::Config;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("upstream returned status {0}")]
    Protocol(u16),
    #[error("malformed payload: {0}")]
    Schema(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Protocol(status.as_u16())
        } else if err.is_decode() {
            FetchError::Schema(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl FetchError {
    fn kind(&self) -> WarningKind {
        match self {
            FetchError::Network(_) => WarningKind::Network,
            FetchError::Protocol(_) => WarningKind::Protocol,
            FetchError::Schema(_) => WarningKind::Schema,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    Network,
    Protocol,
    Schema,
}

/// Non-fatal signal recorded every time a fetch falls back to demo data.
#[derive(Debug, Clone, Serialize)]
pub struct FetchWarning {
    pub kind: WarningKind,
    pub message: String,
}

/// Fetches token metrics and price history, caching successes and substituting
/// the demo dataset on any failure. Both public operations are total: they
/// never error and never panic, whatever the upstream does.
pub struct MetricsProvider {
    client: CoingeckoClient,
    token_id: String,
    metrics_cache: TtlCache<TokenMetrics>,
    history_cache: TtlCache<PriceHistory>,
    warnings: Vec<FetchWarning>,
}

impl MetricsProvider {
    pub fn new(config: &Config) -> Self {
        let client = CoingeckoClient::with_base_url(
            &config.base_url,
            config.api_key.as_deref(),
            config.http_timeout,
        );

        Self {
            client,
            token_id: config.token_id.clone(),
            metrics_cache: TtlCache::new(config.cache_ttl),
            history_cache: TtlCache::new(config.cache_ttl),
            warnings: Vec::new(),
        }
    }

    /// Current market snapshot for the configured token.
    pub async fn token_metrics(&mut self) -> TokenMetrics {
        if let Some(cached) = self.metrics_cache.get(&self.token_id) {
            return cached;
        }

        match self.fetch_metrics().await {
            Ok(metrics) => {
                for anomaly in metrics.anomalies() {
                    warn!("metrics anomaly for {}: {anomaly}", self.token_id);
                }
                self.metrics_cache
                    .insert(self.token_id.clone(), metrics.clone());
                metrics
            }
            Err(err) => {
                self.record(err);
                demo::token_metrics()
            }
        }
    }

    /// Price and volume series over the trailing `days` window.
    pub async fn price_history(&mut self, days: u32) -> PriceHistory {
        let key = format!("{}:{days}", self.token_id);
        if let Some(cached) = self.history_cache.get(&key) {
            return cached;
        }

        match self.fetch_history(days).await {
            Ok(history) => {
                self.history_cache.insert(key, history.clone());
                history
            }
            Err(err) => {
                self.record(err);
                demo::price_history()
            }
        }
    }

    pub fn warnings(&self) -> &[FetchWarning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<FetchWarning> {
        std::mem::take(&mut self.warnings)
    }

    fn record(&mut self, err: FetchError) {
        warn!("falling back to demo data: {err}");
        self.warnings.push(FetchWarning {
            kind: err.kind(),
            message: err.to_string(),
        });
    }

    async fn fetch_metrics(&self) -> Result<TokenMetrics, FetchError> {
        let response = self
            .client
            .call(&CoinDetail::new(self.token_id.clone()))
            .await?;

        normalize_metrics(response)
    }

    async fn fetch_history(&self, days: u32) -> Result<PriceHistory, FetchError> {
        let endpoint = MarketChart::builder()
            .coin_id(self.token_id.clone())
            .days(days)
            .build();
        let response = self.client.call(&endpoint).await?;

        normalize_history(response)
    }
}

/// Normalizes a coin-detail payload into a snapshot. Price, market cap and 24h
/// volume are required; everything else gets a documented default (percent
/// changes, supplies, FDV, ATH/ATL and rank fall back to 0, max supply stays
/// unknown).
fn normalize_metrics(response: CoinDetailResponse) -> Result<TokenMetrics, FetchError> {
    let market_data = response
        .market_data
        .ok_or_else(|| FetchError::Schema("missing market_data".to_string()))?;

    let price = MarketData::in_usd(&market_data.current_price)
        .ok_or_else(|| FetchError::Schema("missing current_price.usd".to_string()))?;
    let market_cap = MarketData::in_usd(&market_data.market_cap)
        .ok_or_else(|| FetchError::Schema("missing market_cap.usd".to_string()))?;
    let volume_24h = MarketData::in_usd(&market_data.total_volume)
        .ok_or_else(|| FetchError::Schema("missing total_volume.usd".to_string()))?;

    Ok(TokenMetrics {
        price,
        price_change_24h: market_data.price_change_percentage_24h.unwrap_or(0.0),
        price_change_7d: market_data.price_change_percentage_7d.unwrap_or(0.0),
        market_cap,
        volume_24h,
        circulating_supply: market_data.circulating_supply.unwrap_or(0.0),
        total_supply: market_data.total_supply.unwrap_or(0.0),
        max_supply: market_data.max_supply,
        fdv: MarketData::in_usd(&market_data.fully_diluted_valuation).unwrap_or(0.0),
        ath: MarketData::in_usd(&market_data.ath).unwrap_or(0.0),
        ath_date: market_data.ath_date.get("usd").copied(),
        atl: MarketData::in_usd(&market_data.atl).unwrap_or(0.0),
        atl_date: market_data.atl_date.get("usd").copied(),
        market_cap_rank: response.market_cap_rank.unwrap_or(0),
        last_updated: response.last_updated.unwrap_or_else(Utc::now),
    })
}

/// Zips the price series with the parallel volume series by index. A shorter
/// or absent volume series pads with 0 so the price series keeps its upstream
/// length; a non-ascending timestamp rejects the whole payload.
fn normalize_history(response: MarketChartResponse) -> Result<PriceHistory, FetchError> {
    if response.prices.is_empty() {
        return Err(FetchError::Schema("empty price series".to_string()));
    }

    let mut points = Vec::with_capacity(response.prices.len());
    for (i, &(timestamp_ms, price)) in response.prices.iter().enumerate() {
        let at = DateTime::from_timestamp_millis(timestamp_ms as i64)
            .ok_or_else(|| FetchError::Schema(format!("unrepresentable timestamp {timestamp_ms}")))?;
        let volume = response
            .total_volumes
            .get(i)
            .map(|&(_, volume)| volume)
            .unwrap_or(0.0);

        points.push(PricePoint { at, price, volume });
    }

    PriceHistory::new(points).map_err(|err| FetchError::Schema(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Nothing listens here; connections are refused immediately.
    fn unreachable_config() -> Config {
        Config {
            base_url: "http://127.0.0.1:9".to_string(),
            http_timeout: Duration::from_secs(1),
            ..Config::default()
        }
    }

    fn coin_detail_fixture() -> CoinDetailResponse {
        serde_json::from_str(
            r#"{
                "id": "giza",
                "symbol": "giza",
                "name": "Giza",
                "market_cap_rank": 1319,
                "last_updated": "2025-07-17T12:00:00Z",
                "market_data": {
                    "current_price": { "usd": 0.1762 },
                    "price_change_percentage_24h": -7.4,
                    "price_change_percentage_7d": -5.1,
                    "market_cap": { "usd": 18720000.0 },
                    "total_volume": { "usd": 3540038.0 },
                    "fully_diluted_valuation": { "usd": 176200000.0 },
                    "circulating_supply": 88691142.0,
                    "total_supply": 1000000000.0,
                    "max_supply": 1000000000.0,
                    "ath": { "usd": 0.49 },
                    "ath_date": { "usd": "2025-03-15T00:00:00Z" },
                    "atl": { "usd": 0.073 },
                    "atl_date": { "usd": "2025-01-01T00:00:00Z" }
                }
            }"#,
        )
        .expect("Failed to parse fixture")
    }

    #[test]
    fn normalize_preserves_source_values_exactly() {
        let metrics = normalize_metrics(coin_detail_fixture()).expect("valid payload rejected");

        assert_eq!(metrics.price, 0.1762);
        assert_eq!(metrics.price_change_24h, -7.4);
        assert_eq!(metrics.price_change_7d, -5.1);
        assert_eq!(metrics.market_cap, 18_720_000.0);
        assert_eq!(metrics.volume_24h, 3_540_038.0);
        assert_eq!(metrics.circulating_supply, 88_691_142.0);
        assert_eq!(metrics.total_supply, 1_000_000_000.0);
        assert_eq!(metrics.max_supply, Some(1_000_000_000.0));
        assert_eq!(metrics.fdv, 176_200_000.0);
        assert_eq!(metrics.ath, 0.49);
        assert_eq!(metrics.atl, 0.073);
        assert_eq!(metrics.market_cap_rank, 1319);
    }

    #[test]
    fn normalize_defaults_optional_fields() {
        let response: CoinDetailResponse = serde_json::from_str(
            r#"{
                "id": "giza",
                "symbol": "giza",
                "name": "Giza",
                "market_data": {
                    "current_price": { "usd": 0.1762 },
                    "market_cap": { "usd": 18720000.0 },
                    "total_volume": { "usd": 3540038.0 }
                }
            }"#,
        )
        .expect("Failed to parse minimal payload");

        let metrics = normalize_metrics(response).expect("minimal payload rejected");

        assert_eq!(metrics.price_change_24h, 0.0);
        assert_eq!(metrics.total_supply, 0.0);
        assert_eq!(metrics.max_supply, None);
        assert_eq!(metrics.fdv, 0.0);
        assert_eq!(metrics.ath_date, None);
        assert_eq!(metrics.market_cap_rank, 0);
    }

    #[test]
    fn normalize_rejects_missing_required_fields() {
        let response: CoinDetailResponse =
            serde_json::from_str(r#"{ "id": "giza", "symbol": "giza", "name": "Giza" }"#)
                .expect("Failed to parse payload");

        assert!(matches!(
            normalize_metrics(response),
            Err(FetchError::Schema(_))
        ));
    }

    #[test]
    fn normalize_history_keeps_price_series_length() {
        let response: MarketChartResponse = serde_json::from_str(
            r#"{
                "prices": [[1735689600000, 0.073], [1736899200000, 0.089], [1738368000000, 0.156]],
                "total_volumes": [[1735689600000, 1200000.0]]
            }"#,
        )
        .expect("Failed to parse chart payload");

        let history = normalize_history(response).expect("valid series rejected");

        assert_eq!(history.len(), 3);
        assert_eq!(history.points()[0].volume, 1_200_000.0);
        assert_eq!(history.points()[2].volume, 0.0);
        assert!(history.points()[0].at < history.points()[1].at);
    }

    #[test]
    fn normalize_history_rejects_disordered_series() {
        let response: MarketChartResponse = serde_json::from_str(
            r#"{ "prices": [[1736899200000, 0.089], [1735689600000, 0.073]] }"#,
        )
        .expect("Failed to parse chart payload");

        assert!(matches!(
            normalize_history(response),
            Err(FetchError::Schema(_))
        ));
    }

    #[tokio::test]
    async fn network_failure_falls_back_to_demo_metrics() {
        let mut provider = MetricsProvider::new(&unreachable_config());

        let metrics = provider.token_metrics().await;

        assert_eq!(metrics, demo::token_metrics());
        assert_eq!(provider.warnings().len(), 1);
        assert_eq!(provider.warnings()[0].kind, WarningKind::Network);
    }

    #[tokio::test]
    async fn network_failure_falls_back_to_demo_history() {
        let mut provider = MetricsProvider::new(&unreachable_config());

        let history = provider.price_history(30).await;

        assert_eq!(history, demo::price_history());
        assert_eq!(provider.warnings()[0].kind, WarningKind::Network);
    }

    #[tokio::test]
    async fn cached_snapshot_skips_the_fetch() {
        let mut provider = MetricsProvider::new(&unreachable_config());
        let seeded = demo::token_metrics();
        provider
            .metrics_cache
            .insert(provider.token_id.clone(), seeded.clone());

        let metrics = provider.token_metrics().await;

        // Cache hit: no fetch attempted, so no warning recorded.
        assert_eq!(metrics, seeded);
        assert!(provider.warnings().is_empty());
    }

    #[tokio::test]
    async fn expired_snapshot_triggers_a_refetch() {
        let config = Config {
            cache_ttl: Duration::from_millis(5),
            ..unreachable_config()
        };
        let mut provider = MetricsProvider::new(&config);
        provider
            .metrics_cache
            .insert(provider.token_id.clone(), demo::token_metrics());

        tokio::time::sleep(Duration::from_millis(20)).await;
        provider.token_metrics().await;

        // The refetch against the unreachable endpoint leaves its mark.
        assert_eq!(provider.warnings().len(), 1);
    }

    #[tokio::test]
    async fn fallback_results_are_not_cached() {
        let mut provider = MetricsProvider::new(&unreachable_config());

        provider.token_metrics().await;
        provider.token_metrics().await;

        assert_eq!(provider.warnings().len(), 2);
    }
}
