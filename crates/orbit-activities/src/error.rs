//! Error types for Orbit client operations

use bytes::Bytes;

/// Errors from resolving workspace credentials at construction.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// No workspace id was passed and the environment fallback is unset.
    #[error("no workspace id provided and ORBIT_WORKSPACE_ID is not set")]
    MissingWorkspaceId,

    /// No API key was passed and the environment fallback is unset.
    #[error("no API key provided and ORBIT_API_KEY is not set")]
    MissingApiKey,
}

/// Client error type wrapping all possible error conditions
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ClientError {
    /// A required call parameter was empty; nothing was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(
        #[from]
        #[diagnostic_source]
        InvalidArgumentError,
    ),

    /// Request failed in transit or the server returned a non-success status
    #[error("{0}")]
    Request(
        #[from]
        #[diagnostic_source]
        RequestError,
    ),

    /// Request serialization failed
    #[error("{0}")]
    Encode(
        #[from]
        #[diagnostic_source]
        EncodeError,
    ),

    /// Response deserialization failed
    #[error("{0}")]
    Decode(
        #[from]
        #[diagnostic_source]
        DecodeError,
    ),
}

/// Missing required call parameters, rejected before any network call.
///
/// Required ids are plain strings on the wire, so "missing" here means empty
/// or whitespace-only. Each variant names the offending parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum InvalidArgumentError {
    /// Empty member id
    #[error("you must provide a memberId")]
    MissingMemberId,
    /// Empty activity id
    #[error("you must provide an activityId")]
    MissingActivityId,
    /// Empty note id
    #[error("you must provide a noteId")]
    MissingNoteId,
    /// Empty note body
    #[error("you must provide a note body")]
    MissingBody,
    /// Empty request endpoint passed to the low-level API primitive
    #[error("you must provide a request endpoint")]
    MissingEndpoint,
}

/// HTTP request failure: transport-level, or a non-success response status.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RequestError {
    /// HTTP transport error
    #[error("HTTP transport error: {0}")]
    Transport(
        #[from]
        #[diagnostic_source]
        TransportError,
    ),

    /// HTTP error response
    #[error("HTTP {0}")]
    Status(
        #[from]
        #[diagnostic_source]
        HttpError,
    ),
}

/// Transport-level errors that occur during HTTP communication
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransportError {
    /// Failed to establish connection to server
    #[error("Connection error: {0}")]
    Connect(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// Request construction failed (malformed URI, headers, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other transport error
    #[error("Transport error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for encoding request bodies and query strings
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EncodeError {
    /// Failed to serialize query parameters
    #[error("Failed to serialize query: {0}")]
    Query(
        #[from]
        #[source]
        serde_html_form::ser::Error,
    ),
    /// Failed to serialize JSON body
    #[error("Failed to serialize JSON: {0}")]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}

/// Response deserialization errors
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    /// JSON deserialization failed
    #[error("Failed to deserialize JSON: {0}")]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}

/// HTTP error response (non-success status codes)
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub struct HttpError {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body if available
    pub body: Option<Bytes>,
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(body) = &self.body {
            if let Ok(s) = std::str::from_utf8(body) {
                write!(f, ":\n{}", s)?;
            }
        }
        Ok(())
    }
}

/// Result type for client operations
pub type OrbitResult<T> = std::result::Result<T, ClientError>;

#[cfg(feature = "reqwest-client")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_builder() || e.is_request() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Other(Box::new(e))
        }
    }
}
