use tracing::debug;

use crate::error::{Error, Result};
use crate::request::ApiRequest;

/// Executes rendered requests against the remote service.
///
/// One GET per call, no retries, no interpretation of the body.
#[derive(Debug, Clone)]
pub struct ApiInvoker {
    http: reqwest::Client,
    base_url: String,
}

impl ApiInvoker {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Send the request and return the raw response body.
    ///
    /// Network failures, non-2xx statuses and body read failures all map to
    /// [`Error::Transport`].
    pub async fn invoke(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        let url = request.render(&self.base_url)?;
        debug!(
            "Invoking {} (version={:?}, text_len={}, lang={:?})",
            request.route,
            request.api_version,
            request.text.as_deref().map_or(0, str::len),
            request.lang
        );

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| {
                Error::Transport(format!("failed to send {} request: {}", request.route, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(Error::Transport(format!(
                "Yandex API error on {} ({}): {}",
                request.route, status, body
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            Error::Transport(format!("failed to read {} response: {}", request.route, e))
        })?;
        debug!("{} response received, {} bytes", request.route, body.len());

        Ok(body.to_vec())
    }
}
