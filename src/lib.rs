//! # Intraday SDK
//!
//! A Rust client for an intraday stock quote backend: one typed fetch, a
//! validated domain model, and the reshaping that feeds three chart
//! widgets (price line, volume bars, OHLC snapshot pie).
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, errors, network constants
//! 2. **HTTP API** — `IntradayHttp`, one method per endpoint, wire types out
//! 3. **High-Level Client** — `IntradayClient` with nested sub-clients and
//!    the one-shot fetch task
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intraday_sdk::prelude::*;
//!
//! let client = IntradayClient::builder()
//!     .base_url("http://localhost:5000")
//!     .build()?;
//!
//! let charts = client.chart_data(&Symbol::from("IBM")).await?;
//! println!("{} price points", charts.price.data.len());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `IntradayClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::Symbol;

    // Domain types — series
    pub use crate::domain::series::{IntradaySeries, Observation};

    // Domain types — chart
    pub use crate::domain::chart::{
        ChartData, ChartSeries, OhlcCategory, SnapshotBreakdown, ViewState,
    };

    // Errors
    pub use crate::error::{HttpError, MalformedDataError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_SYMBOL};

    // HTTP client + sub-clients
    pub use crate::client::{IntradayClient, IntradayClientBuilder, SeriesClient};
}
