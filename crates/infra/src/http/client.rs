use std::time::Duration;

use mldiag_domain::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use mldiag_domain::RecordingError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client with a request timeout and error mapping.
///
/// Requests are sent exactly once. Log writes are not idempotent, so retry
/// policy stays with the caller.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    ///
    /// Any response, including error statuses, is returned as `Ok`; only
    /// transport failures become errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, RecordingError> {
        let request = builder.build().map_err(|err| RecordingError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(RecordingError::from(InfraError::from(err)))
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, RecordingError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            RecordingError::Config(format!("Failed to build HTTP client: {err}"))
        })?;

        Ok(HttpClient { client })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_send_returns_error_statuses_as_responses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/write"))
            .and(header("user-agent", "mldiag-test"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::builder().user_agent("mldiag-test").build().unwrap();
        let response = client
            .send(client.request(Method::POST, format!("{}/write", server.uri())))
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 503);
    }

    #[tokio::test]
    async fn test_connection_failure_maps_to_sink_error() {
        let client = HttpClient::builder().timeout(Duration::from_secs(2)).build().unwrap();
        let err = client
            .send(client.request(Method::POST, "http://127.0.0.1:9/unreachable"))
            .await
            .unwrap_err();

        assert!(matches!(err, RecordingError::Sink(_)));
    }
}
