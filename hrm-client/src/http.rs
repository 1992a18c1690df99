//! HTTP resource client

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Thin wrapper over one reqwest client bound to a fixed base URL.
///
/// Every call is a single attempt: no retry, no circuit breaking, no
/// per-call timeout beyond [`ClientConfig::timeout`]. Failures are
/// logged here before being returned, so screens only have to render
/// them.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request, decoding the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .inspect_err(|e| tracing::warn!(path, error = %e, "GET failed"))?;
        Self::handle_response(path, response).await
    }

    /// Make a POST request with a JSON body, decoding the response
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(path, error = %e, "POST failed"))?;
        Self::handle_response(path, response).await
    }

    /// Make a POST request with a JSON body, discarding the response
    /// body
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(path, error = %e, "POST failed"))?;
        Self::check_status(path, response).await
    }

    /// Make a POST request with parameters in the query string and an
    /// empty body, decoding the response. Team creation uses this
    /// shape.
    pub async fn post_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(self.url(path))
            .query(query)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(path, error = %e, "POST failed"))?;
        Self::handle_response(path, response).await
    }

    /// Query-string POST with the response body discarded. Contract
    /// creation and password changes use this shape.
    pub async fn post_query_unit<Q>(&self, path: &str, query: &Q) -> ClientResult<()>
    where
        Q: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(self.url(path))
            .query(query)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(path, error = %e, "POST failed"))?;
        Self::check_status(path, response).await
    }

    /// Make a POST request without body, discarding the response body
    pub async fn post_empty_unit(&self, path: &str) -> ClientResult<()> {
        let response = self
            .client
            .post(self.url(path))
            .send()
            .await
            .inspect_err(|e| tracing::warn!(path, error = %e, "POST failed"))?;
        Self::check_status(path, response).await
    }

    /// Make a DELETE request, ignoring any response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .inspect_err(|e| tracing::warn!(path, error = %e, "DELETE failed"))?;
        Self::check_status(path, response).await
    }

    /// Handle the HTTP response, decoding a JSON body
    async fn handle_response<T: DeserializeOwned>(
        path: &str,
        response: Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let error = Self::status_error(status, response).await;
            tracing::warn!(path, %status, error = %error, "request rejected");
            return Err(error);
        }

        response.json().await.map_err(|e| {
            tracing::warn!(path, error = %e, "undecodable response body");
            ClientError::InvalidResponse(e.to_string())
        })
    }

    /// Handle a response where only the status matters
    async fn check_status(path: &str, response: Response) -> ClientResult<()> {
        let status = response.status();
        if !status.is_success() {
            let error = Self::status_error(status, response).await;
            tracing::warn!(path, %status, error = %error, "request rejected");
            return Err(error);
        }
        Ok(())
    }

    /// Pull the backend's message out of an error body when present,
    /// falling back to the raw body, then to a generic tag.
    async fn status_error(status: StatusCode, response: Response) -> ClientError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    "request failed".to_string()
                } else {
                    body
                }
            });

        ClientError::Status { status, message }
    }
}
