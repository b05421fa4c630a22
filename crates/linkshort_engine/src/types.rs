use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Generation number the caller attaches to each request.
pub type RequestId = u64;

/// `2xx` body of `POST /api/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
}

/// `2xx` body of `GET /api/stats/{code}`. The backend may omit any field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    pub short_code: Option<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub click_count: Option<u64>,
    pub created_at: Option<String>,
    pub long_url: Option<String>,
}

/// Reads a counter without failing the whole record: negative values clamp
/// to 0, fractions truncate, numeric strings parse, anything else is absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_i64().map(|value| value.max(0) as u64))
            .or_else(|| number.as_f64().map(|value| value.max(0.0) as u64)),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| value.max(0.0) as u64),
        _ => None,
    };
    Ok(count)
}

/// Best-effort body of a non-`2xx` response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

/// What a non-`2xx` response body carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    Message(String),
    NoMessage,
    Unparsable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid backend url: {0}")]
    InvalidBaseUrl(String),
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("http status {status}")]
    HttpStatus {
        status: u16,
        reason: Option<String>,
        body: ErrorBody,
    },
    #[error("malformed response body (http {status}): {message}")]
    MalformedBody {
        status: u16,
        reason: Option<String>,
        message: String,
    },
    #[error("empty response body (http {status})")]
    EmptyBody { status: u16 },
    #[error("response body exceeds {max_bytes} bytes (http {status})")]
    TooLarge { status: u16, max_bytes: u64 },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to start runtime: {0}")]
    Runtime(std::io::Error),
    #[error("failed to spawn dispatcher thread: {0}")]
    Thread(std::io::Error),
    #[error("engine dispatcher is gone")]
    Disconnected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Created {
        request: RequestId,
        result: Result<ShortenResponse, ApiError>,
    },
    StatsFetched {
        request: RequestId,
        result: Result<StatsResponse, ApiError>,
    },
}

impl EngineEvent {
    pub fn request(&self) -> RequestId {
        match self {
            EngineEvent::Created { request, .. } | EngineEvent::StatsFetched { request, .. } => {
                *request
            }
        }
    }
}
