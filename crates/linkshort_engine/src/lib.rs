//! Linkshort engine: backend API client and request execution.
mod api;
mod engine;
mod types;

pub use api::{ApiSettings, ReqwestApi, ShortenerApi};
pub use engine::{EngineCommand, EngineHandle};
pub use types::{
    ApiError, EngineError, EngineEvent, ErrorBody, ErrorResponse, RequestId, ShortenResponse,
    StatsResponse,
};
