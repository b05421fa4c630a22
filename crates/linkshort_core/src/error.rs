use std::fmt;

use crate::RequestKind;

/// What an error response body carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// JSON body with a non-empty `error` field.
    Message(String),
    /// JSON body without a usable `error` field.
    NoMessage,
    /// Body was not JSON at all.
    Unparsable,
}

/// Transport-neutral description of a failed backend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    Network,
    Http {
        status: u16,
        reason: Option<String>,
        body: ErrorBody,
    },
    MalformedBody {
        status: u16,
        reason: Option<String>,
    },
    EmptyBody,
}

/// Every error the page controller can surface. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Submitted input was empty after trimming.
    Validation,
    /// Stats were requested before any link was created.
    Precondition,
    Network {
        kind: RequestKind,
        backend: String,
    },
    Http {
        kind: RequestKind,
        status: u16,
        reason: Option<String>,
        body: ErrorBody,
    },
    /// A success response whose body was not the expected JSON.
    Parse {
        status: u16,
        reason: Option<String>,
    },
    /// A success response with a `null` body.
    EmptyResponse,
    Clipboard(String),
}

impl ControllerError {
    pub fn from_failure(kind: RequestKind, failure: RequestFailure, backend: &str) -> Self {
        match failure {
            RequestFailure::Network => ControllerError::Network {
                kind,
                backend: backend.to_string(),
            },
            RequestFailure::Http {
                status,
                reason,
                body,
            } => ControllerError::Http {
                kind,
                status,
                reason,
                body,
            },
            RequestFailure::MalformedBody { status, reason } => {
                ControllerError::Parse { status, reason }
            }
            RequestFailure::EmptyBody => ControllerError::EmptyResponse,
        }
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Validation => write!(f, "Please enter a URL"),
            ControllerError::Precondition => {
                write!(f, "No URL selected. Please shorten a URL first.")
            }
            ControllerError::Network {
                kind: RequestKind::Create,
                backend,
            } => write!(
                f,
                "Cannot connect to server. Please make sure the server is running on {backend}"
            ),
            ControllerError::Network {
                kind: RequestKind::Stats,
                ..
            } => write!(
                f,
                "Cannot connect to server. Please make sure the server is running."
            ),
            ControllerError::Http {
                kind: RequestKind::Create,
                status,
                reason,
                body,
            } => match body {
                ErrorBody::Message(message) if !message.trim().is_empty() => {
                    write!(f, "{message}")
                }
                ErrorBody::Message(_) | ErrorBody::NoMessage => {
                    write!(f, "Failed to shorten URL")
                }
                ErrorBody::Unparsable => {
                    write!(f, "Server error: {}", status_line(*status, reason))
                }
            },
            ControllerError::Http {
                kind: RequestKind::Stats,
                status: 404,
                ..
            } => write!(f, "URL not found"),
            ControllerError::Http {
                kind: RequestKind::Stats,
                status,
                reason,
                body,
            } => match body {
                ErrorBody::Message(message) if !message.trim().is_empty() => write!(
                    f,
                    "Server error: {} ({message})",
                    status_line(*status, reason)
                ),
                _ => write!(f, "Server error: {}", status_line(*status, reason)),
            },
            ControllerError::Parse { status, reason } => write!(
                f,
                "Invalid response from server: {}",
                status_line(*status, reason)
            ),
            ControllerError::EmptyResponse => write!(f, "No data received from server"),
            ControllerError::Clipboard(reason) => write!(f, "Copy failed: {reason}"),
        }
    }
}

impl std::error::Error for ControllerError {}

fn status_line(status: u16, reason: &Option<String>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => format!("{status} {reason}"),
        _ => status.to_string(),
    }
}
