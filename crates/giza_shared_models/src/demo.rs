//! Deterministic demo dataset, substituted whenever the live data source is
//! unavailable. Values mirror the GIZA market snapshot of 2025-07-17.

use chrono::{DateTime, TimeZone, Utc};

use crate::price_history::{PricePoint, PriceHistory};
use crate::protocol::{DistributionSlice, GrowthPoint, ProtocolMetrics};
use crate::token_metrics::TokenMetrics;

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn token_metrics() -> TokenMetrics {
    TokenMetrics {
        price: 0.1762,
        price_change_24h: -7.40,
        price_change_7d: -5.10,
        market_cap: 18_720_000.0,
        volume_24h: 3_540_038.0,
        circulating_supply: 88_691_142.0,
        total_supply: 1_000_000_000.0,
        max_supply: Some(1_000_000_000.0),
        fdv: 176_200_000.0,
        ath: 0.49,
        ath_date: Some(date(2025, 3, 15)),
        atl: 0.073,
        atl_date: Some(date(2025, 1, 1)),
        market_cap_rank: 1319,
        last_updated: date(2025, 7, 17),
    }
}

pub fn price_history() -> PriceHistory {
    let raw = [
        (2025, 1, 1, 0.073, 1_200_000.0),
        (2025, 1, 15, 0.089, 1_500_000.0),
        (2025, 2, 1, 0.156, 2_100_000.0),
        (2025, 2, 15, 0.234, 3_200_000.0),
        (2025, 3, 1, 0.387, 4_800_000.0),
        (2025, 3, 15, 0.49, 6_100_000.0),
        (2025, 4, 1, 0.421, 4_900_000.0),
        (2025, 4, 15, 0.356, 4_200_000.0),
        (2025, 5, 1, 0.298, 3_800_000.0),
        (2025, 5, 15, 0.267, 3_100_000.0),
        (2025, 6, 1, 0.223, 2_900_000.0),
        (2025, 6, 15, 0.198, 2_600_000.0),
        (2025, 7, 1, 0.189, 2_400_000.0),
        (2025, 7, 17, 0.1762, 3_540_038.0),
    ];

    let points = raw
        .iter()
        .map(|&(year, month, day, price, volume)| PricePoint {
            at: date(year, month, day),
            price,
            volume,
        })
        .collect();

    PriceHistory::new(points).expect("demo history is ordered")
}

pub fn protocol_metrics() -> ProtocolMetrics {
    ProtocolMetrics {
        total_volume_processed: 474_000_000.0,
        assets_under_agents: 11_500_000.0,
        active_agents: 7_000,
        total_transactions: 213_000,
        average_apr: 9.32,
        yield_vs_passive: 83.0,
        capital_productivity_index: 5.843,
    }
}

pub fn protocol_growth() -> Vec<GrowthPoint> {
    let raw = [
        ("Jan", 1_000, 50_000_000.0, 2_000_000.0),
        ("Feb", 2_100, 89_000_000.0, 3_500_000.0),
        ("Mar", 3_800, 156_000_000.0, 5_200_000.0),
        ("Apr", 5_200, 234_000_000.0, 7_800_000.0),
        ("May", 6_500, 358_000_000.0, 9_200_000.0),
        ("Jun", 6_800, 421_000_000.0, 10_500_000.0),
        ("Jul", 7_000, 474_000_000.0, 11_500_000.0),
    ];

    raw.iter()
        .map(
            |&(month, active_agents, volume_processed, assets_under_agents)| GrowthPoint {
                month: month.to_string(),
                active_agents,
                volume_processed,
                assets_under_agents,
            },
        )
        .collect()
}

pub fn token_distribution() -> Vec<DistributionSlice> {
    let raw = [
        ("Circulating Supply", 88.7),
        ("Team & Advisors", 200.0),
        ("Ecosystem Fund", 300.0),
        ("Treasury", 150.0),
        ("Future Emissions", 261.3),
    ];

    raw.iter()
        .map(|&(name, millions)| DistributionSlice {
            name: name.to_string(),
            millions,
        })
        .collect()
}
