//! Weighted blending of per-instrument return estimates.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::allocation::AllocationWeights;

/// Rate used when no instrument in the basket yields a usable estimate:
/// 0.5% per month.
pub const FALLBACK_MONTHLY_RATE: f64 = 0.005;

/// Blend per-instrument monthly return estimates into a single rate.
///
/// Accumulates `weight * estimate` over the instruments whose estimate is
/// defined. Instruments without an estimate contribute nothing and their
/// weight is not redistributed to the rest of the basket. When every
/// estimate is absent the fixed [`FALLBACK_MONTHLY_RATE`] is returned so
/// the projection can still run; that degraded mode is logged but never an
/// error.
///
/// Deterministic given its inputs: instruments are visited in symbol order.
#[must_use]
pub fn blend(weights: &AllocationWeights, estimates: &FxHashMap<String, Option<f64>>) -> f64 {
    let mut total = 0.0;
    let mut contributors = 0usize;

    for (symbol, weight) in weights.iter_sorted() {
        match estimates.get(symbol).copied().flatten() {
            Some(estimate) => {
                total += weight * estimate;
                contributors += 1;
            }
            None => debug!("no usable estimate for {symbol}, skipping"),
        }
    }

    if contributors == 0 {
        warn!(
            "no instrument produced a return estimate, falling back to \
             {FALLBACK_MONTHLY_RATE}/month"
        );
        return FALLBACK_MONTHLY_RATE;
    }

    total
}
