//! The seam between resources and HTTP.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::config::ClientConfig;
use crate::core::ScradaError;

const JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path, e.g. `/v1/company/{id}/salesInvoice`.
    pub path: String,
    pub body: Option<Value>,
    /// `Accept` header; JSON unless set otherwise.
    pub accept: &'static str,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            accept: JSON,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            accept: JSON,
        }
    }

    pub fn put(path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body,
            accept: JSON,
        }
    }

    pub fn accept(mut self, mime: &'static str) -> Self {
        self.accept = mime;
        self
    }
}

/// Raw response: status and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Client or server error, `>= 400`.
    pub fn is_failure(&self) -> bool {
        self.status >= 400
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body as JSON, `None` when empty or not JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Executes API requests. Implemented over HTTP by [`HttpTransport`];
/// tests substitute an in-memory implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request. Non-success statuses are returned as responses,
    /// not errors; only failures below HTTP are `Err`.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ScradaError>;
}

/// [`Transport`] over `reqwest`, authenticating with the API key headers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, ScradaError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ScradaError::Network(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ScradaError> {
        let url = format!("{}{}", self.config.base_url(), request.path);
        debug!(method = request.method.as_str(), url = %url, "sending request");

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };
        let mut builder = builder
            .header("X-API-KEY", self.config.api_key())
            .header("X-PASSWORD", self.config.api_secret())
            .header("Content-Type", JSON)
            .header("Accept", request.accept);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| ScradaError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ScradaError::Network(e.to_string()))?;

        debug!(status, bytes = body.len(), "received response");
        Ok(ApiResponse::new(status, body.to_vec()))
    }
}
