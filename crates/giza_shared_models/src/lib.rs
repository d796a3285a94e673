pub mod demo;
pub mod price_history;
pub mod protocol;
pub mod token_metrics;

pub use price_history::{HistoryError, PriceHistory, PricePoint};
pub use protocol::{DistributionSlice, GrowthPoint, ProtocolMetrics};
pub use token_metrics::{Anomaly, TokenMetrics};
