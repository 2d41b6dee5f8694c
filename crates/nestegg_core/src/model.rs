//! Value objects shared across the projection pipeline.
//!
//! Everything here is an owned, immutable value: produced once by the
//! component that computes it and handed to its consumer by value. There is
//! no shared mutable state between concurrent projection runs.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A single closing-price observation for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: Date,
    pub close: f64,
}

/// Price history for one instrument, ascending by date.
///
/// May be empty (instrument unavailable) or sparse (gaps between
/// observations); the estimator tolerates both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, sorting the observations into date order.
    #[must_use]
    pub fn new(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Inclusive civil date range for a history fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Account value sampled at the start of a simulation year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualSnapshot {
    pub year: u32,
    pub value: f64,
}

/// Annual value series produced by one projection run.
///
/// Holds exactly `years + 1` snapshots for year indices `0..=years`, with
/// `value == 0.0` at year 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub snapshots: Vec<AnnualSnapshot>,
}

impl ProjectionSeries {
    /// Value of the last snapshot.
    #[must_use]
    pub fn final_value(&self) -> f64 {
        self.snapshots.last().map_or(0.0, |s| s.value)
    }

    /// Horizon covered by the series, in years.
    #[must_use]
    pub fn years(&self) -> u32 {
        self.snapshots.last().map_or(0, |s| s.year)
    }

    /// Value at a given year index, if the series covers it.
    #[must_use]
    pub fn value_at(&self, year: u32) -> Option<f64> {
        self.snapshots
            .iter()
            .find(|s| s.year == year)
            .map(|s| s.value)
    }
}
