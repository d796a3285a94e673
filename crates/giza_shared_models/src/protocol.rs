use serde::{Deserialize, Serialize};

/// Protocol-level usage figures published by the Giza team. These are static
/// informational data, not served by the price-index API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolMetrics {
    pub total_volume_processed: f64,
    pub assets_under_agents: f64,
    pub active_agents: u64,
    pub total_transactions: u64,
    pub average_apr: f64,
    pub yield_vs_passive: f64,
    pub capital_productivity_index: f64,
}

/// One month of protocol growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub month: String,
    pub active_agents: u64,
    pub volume_processed: f64,
    pub assets_under_agents: f64,
}

/// Token allocation bucket, in millions of tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: String,
    pub millions: f64,
}
