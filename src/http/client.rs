//! Low-level HTTP client — `IntradayHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary).

use crate::domain::series::wire::IntradayResponse;
use crate::error::HttpError;
use crate::shared::Symbol;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Low-level HTTP client for the intraday REST API.
///
/// Issues plain GETs with no retries and no timeout beyond the transport
/// default.
#[derive(Clone)]
pub struct IntradayHttp {
    base_url: String,
    client: Client,
}

impl IntradayHttp {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    // ── Stock quotes ─────────────────────────────────────────────────────

    pub async fn get_intraday(&self, symbol: &Symbol) -> Result<IntradayResponse, HttpError> {
        let url = format!(
            "{}/api/stock/{}",
            self.base_url,
            urlencoding::encode(symbol.as_str())
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(%url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
