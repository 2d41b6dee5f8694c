//! Tests for the risk-tier allocation policy
//!
//! These tests verify that:
//! - Every preference yields exactly four weights, each within [0, 1]
//! - Conservative and Aggressive apply the documented shifts
//! - The Aggressive sum drifts above 1.0 and is NOT renormalized

use crate::allocation::{
    DOMESTIC_EQUITY, GLOBAL_EQUITY, GOVERNMENT_BONDS, HIGH_DIVIDEND, RiskPreference, allocate,
    instrument_label,
};

#[test]
fn test_every_preference_yields_four_bounded_weights() {
    for risk in [
        RiskPreference::Conservative,
        RiskPreference::Neutral,
        RiskPreference::Aggressive,
    ] {
        let weights = allocate(risk);
        assert_eq!(weights.len(), 4, "{risk} should allocate four instruments");
        for (symbol, weight) in weights.iter_sorted() {
            assert!(
                (0.0..=1.0).contains(&weight),
                "{risk} weight for {symbol} out of range: {weight}"
            );
        }
    }
}

#[test]
fn test_neutral_keeps_the_base_basket() {
    let weights = allocate(RiskPreference::Neutral);
    assert_eq!(weights.weight(DOMESTIC_EQUITY), Some(0.4));
    assert_eq!(weights.weight(HIGH_DIVIDEND), Some(0.3));
    assert_eq!(weights.weight(GLOBAL_EQUITY), Some(0.2));
    assert_eq!(weights.weight(GOVERNMENT_BONDS), Some(0.1));
    assert!((weights.total() - 1.0).abs() < 1e-12);
}

#[test]
fn test_conservative_shifts_toward_bonds() {
    let weights = allocate(RiskPreference::Conservative);
    assert!((weights.weight(GOVERNMENT_BONDS).unwrap() - 0.3).abs() < 1e-12);
    assert!((weights.weight(GLOBAL_EQUITY).unwrap() - 0.1).abs() < 1e-12);
    assert!((weights.weight(DOMESTIC_EQUITY).unwrap() - 0.3).abs() < 1e-12);
    assert!((weights.weight(HIGH_DIVIDEND).unwrap() - 0.3).abs() < 1e-12);
}

#[test]
fn test_aggressive_sum_drifts_and_stays_unnormalized() {
    let weights = allocate(RiskPreference::Aggressive);
    assert!((weights.weight(GLOBAL_EQUITY).unwrap() - 0.4).abs() < 1e-12);
    assert!(weights.weight(GOVERNMENT_BONDS).unwrap().abs() < 1e-12);

    // Only one source funds the equity shift, so the sum lands at 1.1.
    assert!(
        (weights.total() - 1.1).abs() < 1e-12,
        "aggressive weights must not be renormalized, got sum {}",
        weights.total()
    );
}

#[test]
fn test_risk_preference_parsing() {
    assert_eq!(
        RiskPreference::from_str_opt("conservative"),
        Some(RiskPreference::Conservative)
    );
    assert_eq!(
        RiskPreference::from_str_opt("AGGRESSIVE"),
        Some(RiskPreference::Aggressive)
    );
    assert_eq!(RiskPreference::from_str_opt("invalid"), None);
}

#[test]
fn test_basket_instruments_have_labels() {
    let weights = allocate(RiskPreference::Neutral);
    for (symbol, _) in weights.iter_sorted() {
        assert!(instrument_label(symbol).is_some(), "no label for {symbol}");
    }
    assert_eq!(instrument_label("UNKNOWN"), None);
}
