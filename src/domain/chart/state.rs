//! Dashboard render state — app-owned, monotonic.

use super::ChartData;
use crate::error::SdkError;

/// Render state for the dashboard.
///
/// One enum instead of separate `loading` / `error` / `data` flags, so
/// impossible combinations (loaded *and* errored, say) cannot be
/// represented. The app owns an instance and resolves it exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Failed(String),
    Ready(ChartData),
}

impl ViewState {
    pub fn new() -> Self {
        Self::Loading
    }

    /// Apply the outcome of the one-shot fetch.
    ///
    /// Only the first resolution counts: `Failed` and `Ready` are terminal,
    /// keeping the `Loading → Ready | Failed` transition monotonic.
    pub fn resolve(&mut self, outcome: Result<ChartData, SdkError>) {
        if !matches!(self, ViewState::Loading) {
            return;
        }
        *self = match outcome {
            Ok(data) => ViewState::Ready(data),
            Err(err) => ViewState::Failed(err.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
