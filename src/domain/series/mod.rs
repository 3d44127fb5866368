//! Intraday series domain — one symbol's validated observation window.

pub mod client;
mod convert;
pub mod wire;

use serde::Serialize;

/// One validated OHLCV observation. All values are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// A validated, non-empty intraday window for one symbol.
///
/// Entries keep the backend's delivery order (newest first). The only way
/// to construct one is [`TryFrom<wire::IntradayResponse>`], which rejects a
/// missing series key, an empty window, and non-numeric or non-finite
/// fields — so downstream reshaping never has to re-check any of that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntradaySeries {
    entries: Vec<(String, Observation)>,
}

impl IntradaySeries {
    /// Entries in delivery order (newest first).
    pub fn entries(&self) -> &[(String, Observation)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The oldest row in the window (last in delivery order).
    ///
    /// Cannot fail: the window is validated non-empty at construction.
    pub fn oldest(&self) -> (&str, &Observation) {
        let (timestamp, observation) = &self.entries[self.entries.len() - 1];
        (timestamp.as_str(), observation)
    }
}
