//! Risk-tier allocation policy.
//!
//! Maps a risk preference onto the fixed four-instrument basket. The
//! shifted weights are intentionally not renormalized: the aggressive tier
//! funds its equity shift from a single source, so the weight sum drifts
//! away from 1.0. Downstream consumers must tolerate sums that are only
//! approximately 1.0.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Broad domestic equity index.
pub const DOMESTIC_EQUITY: &str = "0050.TW";
/// High-dividend equity index.
pub const HIGH_DIVIDEND: &str = "0056.TW";
/// Global equity fund.
pub const GLOBAL_EQUITY: &str = "VT";
/// Government bond fund.
pub const GOVERNMENT_BONDS: &str = "BND";

const BASE_WEIGHTS: [(&str, f64); 4] = [
    (DOMESTIC_EQUITY, 0.4),
    (HIGH_DIVIDEND, 0.3),
    (GLOBAL_EQUITY, 0.2),
    (GOVERNMENT_BONDS, 0.1),
];

/// Human-readable label for a basket instrument, for display layers.
#[must_use]
pub fn instrument_label(symbol: &str) -> Option<&'static str> {
    match symbol {
        DOMESTIC_EQUITY => Some("Domestic Top 50"),
        HIGH_DIVIDEND => Some("High Dividend"),
        GLOBAL_EQUITY => Some("Global Equity"),
        GOVERNMENT_BONDS => Some("Government Bonds"),
        _ => None,
    }
}

/// User risk preference collected by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RiskPreference {
    Conservative,
    #[default]
    Neutral,
    Aggressive,
}

impl RiskPreference {
    /// Case-insensitive parse; `None` for unrecognized input.
    ///
    /// Callers that accept free-form input should map `None` to
    /// [`RiskPreference::Neutral`], which leaves the base basket unchanged.
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "conservative" => Some(RiskPreference::Conservative),
            "neutral" => Some(RiskPreference::Neutral),
            "aggressive" => Some(RiskPreference::Aggressive),
            _ => None,
        }
    }
}

impl fmt::Display for RiskPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskPreference::Conservative => write!(f, "conservative"),
            RiskPreference::Neutral => write!(f, "neutral"),
            RiskPreference::Aggressive => write!(f, "aggressive"),
        }
    }
}

/// Instrument symbol → portfolio weight.
///
/// Weights are each within [0, 1] and sum to approximately (not exactly)
/// 1.0; see the module docs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationWeights {
    weights: FxHashMap<String, f64>,
}

impl AllocationWeights {
    #[must_use]
    pub fn weight(&self, symbol: &str) -> Option<f64> {
        self.weights.get(symbol).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate entries in symbol order.
    ///
    /// HashMap iteration order is non-deterministic across process
    /// invocations, which would let the blended float accumulation (and any
    /// rendered table) wander between runs with identical inputs.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut entries: Vec<_> = self
            .weights
            .iter()
            .map(|(symbol, weight)| (symbol.as_str(), *weight))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Sum of all weights. Approximately 1.0, not exactly.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter_sorted().map(|(_, w)| w).sum()
    }
}

/// Build the allocation for a risk preference.
///
/// Conservative shifts 0.2 into bonds, funded 0.1 each out of global and
/// domestic equity. Aggressive shifts 0.2 into global equity funded by only
/// 0.1 out of bonds, leaving the sum above 1.0. Neutral keeps the base
/// basket as-is.
#[must_use]
pub fn allocate(risk: RiskPreference) -> AllocationWeights {
    let mut weights: FxHashMap<String, f64> = BASE_WEIGHTS
        .iter()
        .map(|(symbol, weight)| ((*symbol).to_string(), *weight))
        .collect();

    match risk {
        RiskPreference::Conservative => {
            *weights.get_mut(GOVERNMENT_BONDS).unwrap() += 0.2;
            *weights.get_mut(GLOBAL_EQUITY).unwrap() -= 0.1;
            *weights.get_mut(DOMESTIC_EQUITY).unwrap() -= 0.1;
        }
        RiskPreference::Aggressive => {
            *weights.get_mut(GLOBAL_EQUITY).unwrap() += 0.2;
            *weights.get_mut(GOVERNMENT_BONDS).unwrap() -= 0.1;
        }
        RiskPreference::Neutral => {}
    }

    AllocationWeights { weights }
}
