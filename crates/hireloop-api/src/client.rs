// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared HTTP client for the backend REST API.
//!
//! Handles the `{base_url}/api/{version}` prefix, the request timeout, the
//! bearer token, and the mapping of failures into [`HireloopError`]. Every
//! resource service goes through [`ApiClient::execute`] or
//! [`ApiClient::execute_empty`].

use std::sync::Arc;
use std::time::Duration;

use hireloop_config::HireloopConfig;
use hireloop_core::{FieldError, HireloopError};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::token::TokenStore;

/// HTTP client for backend communication.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<TokenStore>,
    auth_enabled: bool,
    login_route: String,
}

impl ApiClient {
    pub fn new(config: &HireloopConfig, tokens: Arc<TokenStore>) -> Result<Self, HireloopError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.api.timeout_ms))
            .build()
            .map_err(|e| HireloopError::Network {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            http,
            base_url: config.api.endpoint(),
            tokens,
            auth_enabled: config.auth.enabled,
            login_route: config.auth.login_route.clone(),
        })
    }

    /// Overrides the API prefix (used by tests against a mock server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    /// Builds a request for the path made of `segments` under the API prefix.
    ///
    /// Segments are percent-encoded individually, so ids and department
    /// names may contain `/` or spaces.
    pub fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, HireloopError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            HireloopError::Config(format!("invalid API base URL `{}`: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                HireloopError::Config(format!(
                    "API base URL `{}` cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(self.http.request(method, url))
    }

    /// Sends the request and decodes a JSON body.
    ///
    /// An empty body (e.g. `204 No Content`) decodes as JSON `null`, which
    /// suits `Option<T>`, `()`, and `serde_json::Value`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<T, HireloopError> {
        let response = self.send(builder, fallback).await?;
        let bytes = response.bytes().await.map_err(|e| HireloopError::Network {
            message: fallback.to_string(),
            source: Some(Box::new(e)),
        })?;
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };
        serde_json::from_slice(body).map_err(|e| {
            warn!(error = %e, "response body did not match the expected shape");
            HireloopError::Decode {
                message: format!("{fallback}: unexpected response from server"),
                source: Some(Box::new(e)),
            }
        })
    }

    /// Sends the request and ignores whatever body comes back.
    pub async fn execute_empty(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<(), HireloopError> {
        self.send(builder, fallback).await.map(|_| ())
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<Response, HireloopError> {
        let builder = match self.bearer().await {
            Some(bearer) => builder.header(reqwest::header::AUTHORIZATION, bearer),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "request failed before a response arrived");
            HireloopError::Network {
                message: fallback.to_string(),
                source: Some(Box::new(e)),
            }
        })?;

        let status = response.status();
        debug!(status = %status, url = %response.url(), "response received");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        Err(self.failure(status, &body, fallback).await)
    }

    async fn bearer(&self) -> Option<String> {
        if self.auth_enabled {
            self.tokens.bearer().await
        } else {
            None
        }
    }

    async fn failure(&self, status: StatusCode, body: &Value, fallback: &str) -> HireloopError {
        match status {
            StatusCode::UNAUTHORIZED => {
                if let Err(e) = self.tokens.clear().await {
                    warn!(error = %e, "could not clear stored token after 401");
                }
                let reason = error_message(body).unwrap_or_else(|| "Not authenticated".to_string());
                HireloopError::Unauthorized {
                    message: format!("{reason}. Sign in again at {}", self.login_route),
                }
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                let fields = validation_fields(body);
                if fields.is_empty() {
                    HireloopError::Validation {
                        message: error_message(body).unwrap_or_else(|| fallback.to_string()),
                        fields,
                    }
                } else {
                    HireloopError::validation(fields)
                }
            }
            _ => {
                let message = error_message(body).unwrap_or_else(|| fallback.to_string());
                warn!(status = status.as_u16(), %message, "server returned an error");
                HireloopError::Server {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}

/// The human-readable part of an error body.
///
/// Looks at a string `detail`, then a string `message`, then a 422-style
/// `detail` list.
pub fn error_message(body: &Value) -> Option<String> {
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return Some(detail.to_string());
    }
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    let fields = validation_fields(body);
    if fields.is_empty() {
        None
    } else {
        Some(
            fields
                .iter()
                .map(FieldError::display_line)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

#[derive(Deserialize)]
struct ValidationItem {
    #[serde(default)]
    loc: Vec<Value>,
    msg: String,
}

/// Parses `{"detail": [{"loc": [...], "msg": "..."}]}`.
pub fn validation_fields(body: &Value) -> Vec<FieldError> {
    let Some(items) = body.get("detail").filter(|d| d.is_array()) else {
        return Vec::new();
    };
    let Ok(items) = Vec::<ValidationItem>::deserialize(items) else {
        return Vec::new();
    };
    items
        .into_iter()
        .map(|item| FieldError {
            path: item
                .loc
                .iter()
                .map(|part| match part {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("."),
            message: item.msg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        let tokens = Arc::new(TokenStore::in_memory());
        ApiClient::new(&HireloopConfig::default(), tokens)
            .unwrap()
            .with_base_url(format!("{}/api/v1", server.uri()))
    }

    #[test]
    fn detail_wins_over_message() {
        let body = json!({"detail": "Job not found", "message": "ignored"});
        assert_eq!(error_message(&body).as_deref(), Some("Job not found"));
        let body = json!({"message": "Email already registered"});
        assert_eq!(error_message(&body).as_deref(), Some("Email already registered"));
        assert_eq!(error_message(&Value::Null), None);
    }

    #[test]
    fn validation_list_joins_paths() {
        let body = json!({"detail": [
            {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
            {"loc": ["body", "skills", 0], "msg": "str type expected"}
        ]});
        let fields = validation_fields(&body);
        assert_eq!(fields[0].path, "body.email");
        assert_eq!(fields[1].path, "body.skills.0");
        assert_eq!(
            error_message(&body).as_deref(),
            Some("body.email - value is not a valid email address\nbody.skills.0 - str type expected")
        );
    }

    #[tokio::test]
    async fn bearer_token_is_attached_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/jobs"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .tokens()
            .save(SecretString::from("tok-1".to_string()))
            .await
            .unwrap();
        let jobs: Vec<Value> = client
            .execute(client.request(Method::GET, &["jobs"]).unwrap(), "Failed to fetch jobs")
            .await
            .unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn unauthorized_clears_the_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/jobs"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .tokens()
            .save(SecretString::from("stale".to_string()))
            .await
            .unwrap();
        let err = client
            .execute::<Value>(
                client.request(Method::GET, &["jobs"]).unwrap(),
                "Failed to fetch jobs",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HireloopError::Unauthorized { .. }));
        assert!(err.to_string().contains("/login"));
        assert!(!client.tokens().is_present().await);
    }

    #[tokio::test]
    async fn server_error_without_body_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .execute::<Value>(
                client.request(Method::GET, &["candidates"]).unwrap(),
                "Failed to fetch candidates",
            )
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "Failed to fetch candidates");
    }

    #[tokio::test]
    async fn no_content_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/jobs/4"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let body: Option<Value> = client
            .execute(
                client.request(Method::DELETE, &["jobs", "4"]).unwrap(),
                "Failed to delete job",
            )
            .await
            .unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let tokens = Arc::new(TokenStore::in_memory());
        let client = ApiClient::new(&HireloopConfig::default(), tokens)
            .unwrap()
            .with_base_url("http://127.0.0.1:9/api/v1");
        let err = client
            .execute::<Value>(
                client.request(Method::GET, &["jobs"]).unwrap(),
                "Failed to fetch jobs",
            )
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.to_string(), "Failed to fetch jobs");
    }

    #[test]
    fn path_segments_are_encoded() {
        let client = ApiClient::new(&HireloopConfig::default(), Arc::new(TokenStore::in_memory()))
            .unwrap();
        let req = client
            .request(Method::GET, &["jobs", "department", "R&D / Labs"])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://localhost:8000/api/v1/jobs/department/R&D%20%2F%20Labs"
        );
    }
}
