//! End-to-end projection run: allocation → history → estimate → blend →
//! compounding, for both the user's basket and the market benchmark.

use jiff::ToSpan;
use jiff::civil::{Date, date};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::allocation::{self, AllocationWeights, RiskPreference};
use crate::blend::blend;
use crate::estimator::estimate_monthly_return;
use crate::model::{DateRange, ProjectionSeries};
use crate::projector::project;
use crate::provider::PriceHistorySource;

/// Benchmark index compared against every projection.
pub const BENCHMARK_SYMBOL: &str = "^TWII";

/// The benchmark always looks back and projects forward 20 years (240
/// months), independent of the user's horizon. Unifying the two windows
/// would silently change the comparison semantics inherited from the
/// source system, so the asymmetry is kept.
pub const BENCHMARK_HORIZON_YEARS: u32 = 20;

/// Default user projection horizon.
pub const DEFAULT_HORIZON_YEARS: u32 = 20;

/// Inputs collected by the presentation layer for one projection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub risk: RiskPreference,
    pub monthly_contribution: f64,
    /// User projection horizon in years.
    pub years: u32,
    /// Accepted from the input form and echoed back, but not used in any
    /// computation.
    pub age: Option<u8>,
}

impl ProjectionRequest {
    #[must_use]
    pub fn new(risk: RiskPreference, monthly_contribution: f64) -> Self {
        Self {
            risk,
            monthly_contribution,
            years: DEFAULT_HORIZON_YEARS,
            age: None,
        }
    }
}

/// Everything a caller gets back from one projection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub weights: AllocationWeights,
    /// Blended expected monthly return used for the user series.
    pub blended_monthly_rate: f64,
    /// Benchmark monthly return estimate, when its history was usable.
    pub benchmark_monthly_rate: Option<f64>,
    pub user_series: ProjectionSeries,
    /// `None` when the benchmark history was unavailable or too short —
    /// explicitly absent, never an empty or zero-filled series.
    pub benchmark_series: Option<ProjectionSeries>,
}

/// Run the full projection pipeline.
///
/// Fetches run sequentially, one instrument at a time. A fetch that fails
/// (missing symbol, I/O error, timeout) or comes back too short only
/// removes that instrument from the blend: the run always produces a user
/// series, degrading through the blend fallback when nothing is usable.
///
/// `as_of` anchors both history windows; callers pass today's civil date.
pub fn run(
    source: &dyn PriceHistorySource,
    request: &ProjectionRequest,
    as_of: Date,
) -> ProjectionReport {
    let weights = allocation::allocate(request.risk);

    // The user window opens on Jan 1 of the first year of the horizon.
    let user_range = DateRange {
        start: date(as_of.year() - request.years as i16, 1, 1),
        end: as_of,
    };

    let mut estimates: FxHashMap<String, Option<f64>> = FxHashMap::default();
    for (symbol, _) in weights.iter_sorted() {
        estimates.insert(symbol.to_string(), fetch_estimate(source, symbol, user_range));
    }

    let blended_monthly_rate = blend(&weights, &estimates);
    debug!("blended monthly rate for {} basket: {blended_monthly_rate:.6}", request.risk);
    let user_series = project(
        blended_monthly_rate,
        request.monthly_contribution,
        request.years,
    );

    // The benchmark window trails from `as_of` rather than a Jan 1 boundary.
    let benchmark_range = DateRange {
        start: as_of.saturating_sub((BENCHMARK_HORIZON_YEARS as i64).years()),
        end: as_of,
    };
    let benchmark_monthly_rate = fetch_estimate(source, BENCHMARK_SYMBOL, benchmark_range);
    let benchmark_series = match benchmark_monthly_rate {
        Some(rate) => Some(project(
            rate,
            request.monthly_contribution,
            BENCHMARK_HORIZON_YEARS,
        )),
        None => {
            warn!("benchmark {BENCHMARK_SYMBOL} has no usable history, omitting its series");
            None
        }
    };

    ProjectionReport {
        weights,
        blended_monthly_rate,
        benchmark_monthly_rate,
        user_series,
        benchmark_series,
    }
}

/// Fetch and estimate one instrument, folding every failure into `None`.
fn fetch_estimate(
    source: &dyn PriceHistorySource,
    symbol: &str,
    range: DateRange,
) -> Option<f64> {
    match source.fetch(symbol, range) {
        Ok(series) => {
            let estimate = estimate_monthly_return(&series);
            if estimate.is_none() {
                debug!("history for {symbol} is too short to estimate a monthly return");
            }
            estimate
        }
        Err(err) => {
            warn!("fetch failed for {symbol}: {err}");
            None
        }
    }
}
