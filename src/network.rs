//! Network constants for the intraday backend.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Symbol the bundled dashboard fetches on startup.
pub const DEFAULT_SYMBOL: &str = "IBM";
