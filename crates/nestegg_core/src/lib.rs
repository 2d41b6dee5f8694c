//! Long-run projection of a periodic-contribution portfolio against a
//! market benchmark.
//!
//! The pipeline is a chain of pure functions:
//! 1. [`allocation::allocate`] maps a risk preference onto a weighted
//!    four-instrument basket.
//! 2. [`estimator::estimate_monthly_return`] turns raw price history into
//!    a mean month-over-month return.
//! 3. [`blend::blend`] combines the per-instrument estimates into one
//!    monthly rate, with a fixed fallback when no history is usable.
//! 4. [`projector::project`] compounds a fixed monthly contribution at
//!    that rate and samples the account value once per year.
//! 5. [`orchestrator::run`] wires the above together for the user's basket
//!    and the benchmark index.
//!
//! The only external dependency is the [`provider::PriceHistorySource`]
//! trait at the history-fetch boundary; everything downstream of it is
//! deterministic over already-fetched data, so concurrent runs never share
//! state.
//!
//! # Example
//!
//! ```
//! use jiff::civil::date;
//! use nestegg_core::RiskPreference;
//! use nestegg_core::orchestrator::{self, ProjectionRequest};
//! use nestegg_core::provider::StaticPriceSource;
//!
//! // No history at all: the blend falls back to 0.5%/month and the
//! // benchmark series is omitted.
//! let source = StaticPriceSource::new();
//! let request = ProjectionRequest::new(RiskPreference::Conservative, 5_000.0);
//! let report = orchestrator::run(&source, &request, date(2026, 8, 7));
//! assert_eq!(report.user_series.snapshots.len(), 21);
//! assert!(report.benchmark_series.is_none());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod allocation;
pub mod blend;
pub mod error;
pub mod estimator;
pub mod model;
pub mod orchestrator;
pub mod projector;
pub mod provider;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use allocation::{AllocationWeights, RiskPreference, allocate};
pub use blend::{FALLBACK_MONTHLY_RATE, blend};
pub use error::FetchError;
pub use estimator::estimate_monthly_return;
pub use model::{AnnualSnapshot, DateRange, PricePoint, PriceSeries, ProjectionSeries};
pub use orchestrator::{ProjectionReport, ProjectionRequest};
pub use projector::project;
pub use provider::{PriceHistorySource, StaticPriceSource};
