use std::time::Duration;

use futures_util::StreamExt;
use linkshort_logging::{client_debug, client_trace};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ApiError, ErrorBody, ErrorResponse, ShortenResponse, StatsResponse};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request deadline. `None` leaves failures to the transport.
    pub request_timeout: Option<Duration>,
    pub max_body_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_body_bytes: 64 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait ShortenerApi: Send + Sync {
    /// `POST /api/create` with `{"url": url}`.
    async fn create(&self, url: &str) -> Result<ShortenResponse, ApiError>;

    /// `GET /api/stats/{short_code}`.
    async fn stats(&self, short_code: &str) -> Result<StatsResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::ClientBuild(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Appends `segments` to the base url, escaping each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let base = &self.settings.base_url;
        let mut url =
            Url::parse(base).map_err(|err| ApiError::InvalidBaseUrl(format!("{base}: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(format!("{base}: cannot be a base")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let status = response.status();
        let max_bytes = self.settings.max_body_bytes;
        // An oversized error page still reports its status.
        let too_large = || {
            if status.is_success() {
                ApiError::TooLarge {
                    status: status.as_u16(),
                    max_bytes,
                }
            } else {
                ApiError::HttpStatus {
                    status: status.as_u16(),
                    reason: reason(status),
                    body: ErrorBody::Unparsable,
                }
            }
        };

        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large());
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            if bytes.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(too_large());
            }
            bytes.extend_from_slice(&chunk);
        }
        client_trace!("http {} body_len={}", status.as_u16(), bytes.len());
        Ok((status, bytes))
    }
}

#[async_trait::async_trait]
impl ShortenerApi for ReqwestApi {
    async fn create(&self, url: &str) -> Result<ShortenResponse, ApiError> {
        let endpoint = self.endpoint(&["api", "create"])?;
        let body = serde_json::json!({ "url": url }).to_string();
        client_debug!("POST {}", endpoint);

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let (status, bytes) = self.read_body(response).await?;
        if !status.is_success() {
            return Err(status_error(status, &bytes));
        }
        decode_json(status, &bytes)
    }

    async fn stats(&self, short_code: &str) -> Result<StatsResponse, ApiError> {
        let endpoint = self.endpoint(&["api", "stats", short_code])?;
        client_debug!("GET {}", endpoint);

        let response = self
            .client
            .get(endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let (status, bytes) = self.read_body(response).await?;
        if !status.is_success() {
            return Err(status_error(status, &bytes));
        }
        let record: Option<StatsResponse> = decode_json(status, &bytes)?;
        record.ok_or(ApiError::EmptyBody {
            status: status.as_u16(),
        })
    }
}

fn reason(status: StatusCode) -> Option<String> {
    status.canonical_reason().map(str::to_string)
}

fn decode_json<T: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|err| ApiError::MalformedBody {
        status: status.as_u16(),
        reason: reason(status),
        message: err.to_string(),
    })
}

fn status_error(status: StatusCode, bytes: &[u8]) -> ApiError {
    let body = match serde_json::from_slice::<ErrorResponse>(bytes) {
        Ok(ErrorResponse {
            error: Some(message),
        }) if !message.trim().is_empty() => ErrorBody::Message(message),
        Ok(_) => ErrorBody::NoMessage,
        Err(_) => ErrorBody::Unparsable,
    };
    ApiError::HttpStatus {
        status: status.as_u16(),
        reason: reason(status),
        body,
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout(err.to_string());
    }
    ApiError::Network(err.to_string())
}
