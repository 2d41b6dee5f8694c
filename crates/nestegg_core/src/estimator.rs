//! Monthly return estimation from raw price history.

use crate::model::PriceSeries;

/// Estimate the mean month-over-month return of a price series.
///
/// The series is resampled to one observation per calendar month (the last
/// available price in each month), percentage changes are taken between
/// adjacent calendar months, and the arithmetic mean of the surviving
/// changes is returned. A change is dropped when the months are not
/// adjacent (a gap in the history) or the earlier close is missing or
/// non-positive, so sparse data thins the sample instead of poisoning it.
///
/// Returns `None` when the series is empty, spans fewer than two calendar
/// months, or no change survives. Pure function over its input: upstream
/// fetch failures are the caller's problem and must already have been
/// mapped to "no series" before this point.
#[must_use]
pub fn estimate_monthly_return(series: &PriceSeries) -> Option<f64> {
    let monthly = monthly_closes(series);
    if monthly.len() < 2 {
        return None;
    }

    let mut sum = 0.0;
    let mut count = 0usize;
    for pair in monthly.windows(2) {
        let ((prev_month, prev), (month, close)) = (pair[0], pair[1]);
        if !is_next_month(prev_month, month) {
            continue;
        }
        if prev > 0.0 && prev.is_finite() && close.is_finite() {
            sum += (close - prev) / prev;
            count += 1;
        }
    }

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Last close per calendar month, in chronological order.
///
/// Relies on the series being date-ascending: within a month the final
/// observation wins.
fn monthly_closes(series: &PriceSeries) -> Vec<((i16, i8), f64)> {
    let mut closes: Vec<((i16, i8), f64)> = Vec::new();
    for point in &series.points {
        let bucket = (point.date.year(), point.date.month());
        match closes.last_mut() {
            Some((last_bucket, close)) if *last_bucket == bucket => *close = point.close,
            _ => closes.push((bucket, point.close)),
        }
    }
    closes
}

fn is_next_month(a: (i16, i8), b: (i16, i8)) -> bool {
    if a.1 == 12 {
        b == (a.0 + 1, 1)
    } else {
        b == (a.0, a.1 + 1)
    }
}
