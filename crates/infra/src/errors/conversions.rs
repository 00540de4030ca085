//! Conversions from external infrastructure errors into domain errors.

use mldiag_domain::RecordingError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RecordingError);

impl From<InfraError> for RecordingError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRecordingError {
    fn into_recording(self) -> RecordingError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RecordingError */
/* -------------------------------------------------------------------------- */

impl IntoRecordingError for HttpError {
    fn into_recording(self) -> RecordingError {
        if self.is_timeout() {
            return RecordingError::Sink("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return RecordingError::Sink("HTTP connection failure".into());
        }

        if self.is_builder() {
            return RecordingError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => RecordingError::Auth(message),
                _ => RecordingError::Sink(message),
            };
        }

        RecordingError::Sink(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_recording())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → RecordingError */
/* -------------------------------------------------------------------------- */

impl IntoRecordingError for JsonError {
    fn into_recording(self) -> RecordingError {
        if self.is_io() {
            RecordingError::Internal(format!("JSON I/O failure: {self}"))
        } else {
            RecordingError::InvalidInput(format!("invalid JSON: {self}"))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_recording())
    }
}

impl IntoRecordingError for TomlError {
    fn into_recording(self) -> RecordingError {
        RecordingError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_recording())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn http_status_403_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(StatusCode::FORBIDDEN))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error =
            client.post(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: RecordingError = InfraError::from(error).into();
        match mapped {
            RecordingError::Auth(msg) => assert!(msg.contains("403")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_status_500_maps_to_sink_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(StatusCode::INTERNAL_SERVER_ERROR))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error =
            client.post(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: RecordingError = InfraError::from(error).into();
        assert!(matches!(mapped, RecordingError::Sink(msg) if msg.contains("500")));
    }

    #[test]
    fn json_syntax_error_maps_to_invalid_input() {
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let mapped: RecordingError = InfraError::from(err).into();
        assert!(matches!(mapped, RecordingError::InvalidInput(_)));
    }

    #[test]
    fn toml_error_maps_to_config() {
        let err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let mapped: RecordingError = InfraError::from(err).into();
        assert!(matches!(mapped, RecordingError::Config(msg) if msg.starts_with("Invalid TOML")));
    }
}
