use crate::core::endpoints::EndpointDef;
use crate::domain::model::ApiResponse;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ApiError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// Shared HTTP access for every domain service.
///
/// Cloning is cheap: the underlying connection pool is reference counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(json_headers(&HashMap::new())?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .default_headers(json_headers(config.default_headers())?)
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves `endpoint` against the base origin.
    pub fn url_for(&self, endpoint: &EndpointDef, params: &[(&str, &str)]) -> Result<String> {
        endpoint
            .template
            .resolve(&self.base_url, params)
            .map(String::from)
    }

    /// One round trip for `endpoint`. `body` is sent as JSON when present.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        endpoint: &EndpointDef,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        let url = self.url_for(endpoint, params)?;
        self.send(endpoint.method.clone(), &url, body).await
    }

    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            // .json() sets Content-Type: application/json
            request = request.json(body);
        }

        let response = request.send().await?;
        tracing::debug!("{} {} -> {}", method, url, response.status());

        handle_response(response).await
    }
}

fn json_headers(extra: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ApiError::InvalidConfigValueError {
                field: "api.headers".to_string(),
                value: name.clone(),
                reason: e.to_string(),
            }
        })?;
        // bodies are always JSON
        if name == CONTENT_TYPE {
            continue;
        }
        let value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidConfigValueError {
            field: format!("api.headers.{}", name),
            value: value.clone(),
            reason: e.to_string(),
        })?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// The single place where HTTP status becomes a result.
///
/// 204 (or an empty 2xx body) is `NoContent`, other 2xx bodies are parsed
/// as JSON, and anything else is a `Status` error carrying the body text.
pub async fn handle_response(response: Response) -> Result<ApiResponse> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.ok().filter(|b| !b.is_empty());
        tracing::debug!("request failed with {}: {:?}", status, body);
        return Err(ApiError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        });
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(ApiResponse::NoContent);
    }

    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ApiResponse::NoContent);
    }

    Ok(ApiResponse::Json(serde_json::from_slice(&bytes)?))
}
