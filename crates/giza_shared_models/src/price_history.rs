use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub at: DateTime<Utc>,
    pub price: f64,
    pub volume: f64,
}

/// Price series ordered by strictly ascending timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("timestamps not in strictly ascending order at index {0}")]
    OutOfOrder(usize),
}

impl PriceHistory {
    /// Wraps the points, rejecting duplicate or descending timestamps.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, HistoryError> {
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].at <= pair[0].at {
                return Err(HistoryError::OutOfOrder(i + 1));
            }
        }

        Ok(Self { points })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// (min, max) price over the series.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |range, point| match range {
            None => Some((point.price, point.price)),
            Some((min, max)) => Some((min.min(point.price), max.max(point.price))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(secs: i64, price: f64) -> PricePoint {
        PricePoint {
            at: Utc.timestamp_opt(secs, 0).unwrap(),
            price,
            volume: 1_000.0,
        }
    }

    #[test]
    fn accepts_ascending_timestamps() {
        let history = PriceHistory::new(vec![point(1, 0.1), point(2, 0.2), point(3, 0.3)])
            .expect("ascending series rejected");

        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().price, 0.3);
        assert_eq!(history.price_range(), Some((0.1, 0.3)));
    }

    #[test]
    fn rejects_duplicate_timestamps() {
        let result = PriceHistory::new(vec![point(1, 0.1), point(1, 0.2)]);

        assert!(matches!(result, Err(HistoryError::OutOfOrder(1))));
    }

    #[test]
    fn rejects_descending_timestamps() {
        let result = PriceHistory::new(vec![point(5, 0.1), point(3, 0.2)]);

        assert!(matches!(result, Err(HistoryError::OutOfOrder(1))));
    }

    #[test]
    fn empty_history_is_valid() {
        let history = PriceHistory::empty();

        assert!(history.is_empty());
        assert_eq!(history.price_range(), None);
    }
}
