//! High-level client — `IntradayClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessor methods, and the one-shot
//! fetch task the dashboard runs on startup.

use crate::domain::chart::ChartData;
use crate::domain::series::client::Series;
use crate::error::SdkError;
use crate::http::IntradayHttp;
use crate::shared::Symbol;

use tokio::sync::oneshot;

// Re-export sub-client types for convenience.
pub use crate::domain::series::client::Series as SeriesClient;

/// The primary entry point for the intraday SDK.
///
/// Provides a nested sub-client accessor for the series domain plus a
/// convenience method that fetches and reshapes in one call.
#[derive(Clone)]
pub struct IntradayClient {
    pub(crate) http: IntradayHttp,
}

impl IntradayClient {
    pub fn builder() -> IntradayClientBuilder {
        IntradayClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn series(&self) -> Series<'_> {
        Series { client: self }
    }

    /// Fetch one symbol's window and reshape it for the three widgets.
    pub async fn chart_data(&self, symbol: &Symbol) -> Result<ChartData, SdkError> {
        let series = self.series().get(symbol).await?;
        Ok(ChartData::from(&series))
    }

    /// Start the dashboard's one-shot fetch.
    ///
    /// Spawns fetch + reshape as a task and hands back a receiver that
    /// resolves exactly once with the outcome. There is no cancellation
    /// token — there is nothing to cancel into; dropping the receiver just
    /// discards the result.
    pub fn spawn_chart_fetch(
        &self,
        symbol: Symbol,
    ) -> oneshot::Receiver<Result<ChartData, SdkError>> {
        let client = self.clone();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = client.chart_data(&symbol).await;
            // Receiver dropped means nobody is rendering; nothing to do.
            let _ = tx.send(outcome);
        });
        rx
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct IntradayClientBuilder {
    base_url: String,
}

impl Default for IntradayClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl IntradayClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<IntradayClient, SdkError> {
        Ok(IntradayClient {
            http: IntradayHttp::new(&self.base_url),
        })
    }
}
