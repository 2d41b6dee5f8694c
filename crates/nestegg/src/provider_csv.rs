//! CSV-file price history provider.
//!
//! Each instrument lives in `<root>/<symbol>.csv` with a header row of
//! `date,close` and an optional `adj_close` column. The adjusted close is
//! preferred when present and finite, matching the upstream feeds that
//! publish both series. Rows outside the requested range are dropped and
//! the result is sorted ascending by date.

use std::path::PathBuf;

use jiff::civil::Date;
use nestegg_core::provider::PriceHistorySource;
use nestegg_core::{DateRange, FetchError, PricePoint, PriceSeries};
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    date: Date,
    close: f64,
    #[serde(default)]
    adj_close: Option<f64>,
}

impl PriceRow {
    fn effective_close(&self) -> f64 {
        match self.adj_close {
            Some(adj) if adj.is_finite() => adj,
            _ => self.close,
        }
    }
}

impl CsvPriceSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PriceHistorySource for CsvPriceSource {
    fn fetch(&self, symbol: &str, range: DateRange) -> Result<PriceSeries, FetchError> {
        let path = self.root.join(format!("{symbol}.csv"));
        if !path.exists() {
            return Err(FetchError::NotFound(symbol.to_string()));
        }

        let mut reader =
            csv::Reader::from_path(&path).map_err(|err| FetchError::Io(err.to_string()))?;

        let mut points = Vec::new();
        for row in reader.deserialize::<PriceRow>() {
            let row = row.map_err(|err| FetchError::Malformed {
                symbol: symbol.to_string(),
                detail: err.to_string(),
            })?;
            if range.contains(row.date) {
                points.push(PricePoint {
                    date: row.date,
                    close: row.effective_close(),
                });
            }
        }

        Ok(PriceSeries::new(symbol, points))
    }
}
