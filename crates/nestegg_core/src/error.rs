use std::fmt;

/// Errors surfaced by a price history provider.
///
/// None of these are fatal to a projection run: the orchestrator recovers
/// every variant as "no data for this instrument" before estimation, so a
/// `FetchError` never escapes past the fetch boundary.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The provider has no series for this symbol.
    NotFound(String),
    /// The provider's backing store could not be read.
    Io(String),
    /// The provider returned data that could not be parsed.
    Malformed { symbol: String, detail: String },
    /// The fetch exceeded the provider's time budget.
    Timeout(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound(symbol) => write!(f, "no price history for {symbol}"),
            FetchError::Io(detail) => write!(f, "price history read failed: {detail}"),
            FetchError::Malformed { symbol, detail } => {
                write!(f, "malformed price history for {symbol}: {detail}")
            }
            FetchError::Timeout(symbol) => {
                write!(f, "price history fetch for {symbol} timed out")
            }
        }
    }
}

impl std::error::Error for FetchError {}
