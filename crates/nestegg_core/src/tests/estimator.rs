//! Tests for monthly return estimation
//!
//! These tests verify that:
//! - Empty or single-month series yield no estimate
//! - Linear monthly growth yields a positive mean return
//! - The estimate is the arithmetic mean of monthly percentage changes

use jiff::civil::date;

use crate::estimator::estimate_monthly_return;
use crate::model::{PricePoint, PriceSeries};

fn monthly_series(start_year: i16, closes: &[f64]) -> PriceSeries {
    let mut points = Vec::with_capacity(closes.len());
    let mut year = start_year;
    let mut month = 1i8;
    for &close in closes {
        points.push(PricePoint {
            date: date(year, month, 28),
            close,
        });
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    PriceSeries::new("TEST", points)
}

#[test]
fn test_empty_series_has_no_estimate() {
    let series = PriceSeries::new("TEST", vec![]);
    assert_eq!(estimate_monthly_return(&series), None);
}

#[test]
fn test_single_month_has_no_estimate() {
    // Two observations inside one calendar month collapse to one bucket.
    let series = PriceSeries::new(
        "TEST",
        vec![
            PricePoint {
                date: date(2025, 6, 2),
                close: 100.0,
            },
            PricePoint {
                date: date(2025, 6, 27),
                close: 105.0,
            },
        ],
    );
    assert_eq!(estimate_monthly_return(&series), None);
}

#[test]
fn test_linear_growth_yields_positive_estimate() {
    let closes: Vec<f64> = (0..24).map(|i| 100.0 + 2.0 * i as f64).collect();
    let estimate = estimate_monthly_return(&monthly_series(2023, &closes)).unwrap();
    assert!(
        estimate > 0.0,
        "linear price growth should estimate positive, got {estimate}"
    );
}

#[test]
fn test_estimate_is_mean_of_monthly_changes() {
    // 100 → 110 → 99: changes are +10% and -10%, mean 0%.
    let estimate = estimate_monthly_return(&monthly_series(2025, &[100.0, 110.0, 99.0])).unwrap();
    assert!(estimate.abs() < 1e-12, "expected ~0, got {estimate}");
}

#[test]
fn test_constant_prices_estimate_zero() {
    let estimate = estimate_monthly_return(&monthly_series(2025, &[50.0; 12])).unwrap();
    assert_eq!(estimate, 0.0);
}

#[test]
fn test_unsorted_input_is_reordered_before_bucketing() {
    // PriceSeries::new sorts, so feeding months out of order still pairs
    // Jan→Feb correctly.
    let series = PriceSeries::new(
        "TEST",
        vec![
            PricePoint {
                date: date(2025, 2, 28),
                close: 110.0,
            },
            PricePoint {
                date: date(2025, 1, 31),
                close: 100.0,
            },
        ],
    );
    let estimate = estimate_monthly_return(&series).unwrap();
    assert!((estimate - 0.1).abs() < 1e-12);
}
