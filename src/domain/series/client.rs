//! Intraday series sub-client — fetch + validate.

use crate::client::IntradayClient;
use crate::domain::series::IntradaySeries;
use crate::error::SdkError;
use crate::shared::Symbol;

/// Sub-client for intraday series queries.
pub struct Series<'a> {
    pub(crate) client: &'a IntradayClient,
}

impl<'a> Series<'a> {
    /// Fetch one symbol's intraday window and validate it.
    ///
    /// Transport and status faults surface as [`SdkError::Http`]; a response
    /// with a missing series key, an empty window, or non-numeric fields
    /// surfaces as [`SdkError::Malformed`].
    pub async fn get(&self, symbol: &Symbol) -> Result<IntradaySeries, SdkError> {
        let raw = self.client.http.get_intraday(symbol).await?;
        let series = IntradaySeries::try_from(raw)?;
        tracing::debug!(%symbol, rows = series.len(), "intraday window validated");
        Ok(series)
    }
}
