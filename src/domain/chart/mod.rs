//! Chart domain — chart-ready series and the OHLC snapshot breakdown.
//!
//! The core generates these; a frontend just renders them.

mod convert;
pub mod state;

use serde::{Deserialize, Serialize};

pub use state::ViewState;

/// Label/value pairs for a line or bar widget.
///
/// `labels` and `data` always have equal length; labels run oldest → newest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// The four canonical OHLC categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OhlcCategory {
    Open,
    High,
    Low,
    Close,
}

impl OhlcCategory {
    /// Fixed display order for the snapshot breakdown.
    pub const ALL: [OhlcCategory; 4] = [
        OhlcCategory::Open,
        OhlcCategory::High,
        OhlcCategory::Low,
        OhlcCategory::Close,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OhlcCategory::Open => "Open",
            OhlcCategory::High => "High",
            OhlcCategory::Low => "Low",
            OhlcCategory::Close => "Close",
        }
    }
}

impl std::fmt::Display for OhlcCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Four-category breakdown of one observation, for the pie widget.
///
/// OHLC prices are not additive quantities, but the pie shows them as
/// proportional shares anyway; that is what the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotBreakdown {
    /// Values aligned with [`OhlcCategory::ALL`].
    pub values: [f64; 4],
}

impl SnapshotBreakdown {
    pub fn get(&self, category: OhlcCategory) -> f64 {
        match category {
            OhlcCategory::Open => self.values[0],
            OhlcCategory::High => self.values[1],
            OhlcCategory::Low => self.values[2],
            OhlcCategory::Close => self.values[3],
        }
    }

    /// `(category, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (OhlcCategory, f64)> + '_ {
        OhlcCategory::ALL.into_iter().zip(self.values)
    }
}

/// Everything the dashboard needs to render its three widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Line widget: open price over time.
    pub price: ChartSeries,
    /// Bar widget: traded volume over time.
    pub volume: ChartSeries,
    /// Pie widget: OHLC breakdown of one observation.
    pub snapshot: SnapshotBreakdown,
}
