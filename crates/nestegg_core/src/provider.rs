//! The external price-history boundary.

use rustc_hash::FxHashMap;

use crate::error::FetchError;
use crate::model::{DateRange, PricePoint, PriceSeries};

/// Capability to fetch historical closing prices for one instrument.
///
/// Implementations sit at the edge of the system: a network client, local
/// files, or in-memory fixtures. Implementations that block on I/O should
/// bound how long a single fetch may take — the orchestrator treats any
/// error, timeout included, as "no data for this instrument" and carries
/// on, so failing fast beats hanging the whole projection.
pub trait PriceHistorySource {
    /// Fetch the series for `symbol` restricted to `range` (inclusive).
    ///
    /// An instrument that exists but has no observations inside the range
    /// yields an empty series, not an error.
    fn fetch(&self, symbol: &str, range: DateRange) -> Result<PriceSeries, FetchError>;
}

/// In-memory source backed by a symbol → observations map.
///
/// Used by tests and offline demos; unknown symbols report
/// [`FetchError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct StaticPriceSource {
    series: FxHashMap<String, Vec<PricePoint>>,
}

impl StaticPriceSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, points: Vec<PricePoint>) {
        self.series.insert(symbol.into(), points);
    }
}

impl PriceHistorySource for StaticPriceSource {
    fn fetch(&self, symbol: &str, range: DateRange) -> Result<PriceSeries, FetchError> {
        let points = self
            .series
            .get(symbol)
            .ok_or_else(|| FetchError::NotFound(symbol.to_string()))?;
        let in_range = points
            .iter()
            .copied()
            .filter(|p| range.contains(p.date))
            .collect();
        Ok(PriceSeries::new(symbol, in_range))
    }
}
