//! Stateless request construction and response normalization.
//!
//! Mapping overview:
//! - Requests: `https://app.orbit.love/api/v1/<workspace_id><endpoint>` with
//!   the query string appended, bearer auth and user agent attached.
//! - Success (2xx): parse the JSON body; empty bodies normalize to `Null`.
//! - Anything else: surface the status and raw body as a [`RequestError`].
//! - List responses carry a JSON:API-style `links.next` URL; the next page
//!   number is the integer `page` parameter of that URL.

use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderValue, Method, Request};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::credentials::Credentials;
use crate::error::{
    ClientError, DecodeError, HttpError, InvalidArgumentError, OrbitResult, RequestError,
    TransportError,
};
use crate::query::Query;

/// Base URL every request is built against, up to the workspace segment.
pub const BASE_URL: &str = "https://app.orbit.love/api/v1";

fn application_json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

/// Build an HTTP request for an Orbit API call.
///
/// `endpoint` is the path below the workspace segment (`/activities`,
/// `/members/{id}/notes`, ...); a missing leading slash is tolerated. The
/// body, when present, must already be JSON-encoded.
pub fn build_http_request(
    credentials: &Credentials,
    method: Method,
    endpoint: &str,
    query: &Query,
    body: Option<Vec<u8>>,
) -> OrbitResult<Request<Vec<u8>>> {
    if endpoint.trim().is_empty() {
        return Err(InvalidArgumentError::MissingEndpoint.into());
    }

    let mut url = base_url();
    let mut path = url.path().trim_end_matches('/').to_owned();
    path.push('/');
    path.push_str(&credentials.workspace_id);
    path.push('/');
    path.push_str(endpoint.trim_start_matches('/'));
    url.set_path(&path);

    let qs = query.encode()?;
    if !qs.is_empty() {
        url.set_query(Some(&qs));
    }

    let mut builder = Request::builder()
        .method(method)
        .uri(url.as_str())
        .header(ACCEPT, application_json());

    let bearer = HeaderValue::from_str(&format!("Bearer {}", credentials.api_key))
        .map_err(|e| transport(TransportError::InvalidRequest(format!("invalid API key: {e}"))))?;
    builder = builder.header(AUTHORIZATION, bearer);

    let agent = HeaderValue::from_str(&credentials.user_agent).map_err(|e| {
        transport(TransportError::InvalidRequest(format!(
            "invalid user agent: {e}"
        )))
    })?;
    builder = builder.header(USER_AGENT, agent);

    if body.is_some() {
        builder = builder.header(CONTENT_TYPE, application_json());
    }

    builder
        .body(body.unwrap_or_default())
        .map_err(|e| transport(TransportError::InvalidRequest(e.to_string())))
}

/// Unwrap an HTTP response into the parsed JSON body.
///
/// Non-success statuses fail with the status and the raw body retained so
/// callers can surface the server's error detail verbatim.
pub fn process_response(response: http::Response<Vec<u8>>) -> OrbitResult<Value> {
    let status = response.status();
    let buffer = Bytes::from(response.into_body());

    if !status.is_success() {
        return Err(RequestError::Status(HttpError {
            status,
            body: Some(buffer),
        })
        .into());
    }

    if buffer.is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&buffer).map_err(|e| DecodeError::Json(e).into())
}

fn base_url() -> Url {
    Url::parse(BASE_URL).expect("base url should be valid")
}

fn transport(e: TransportError) -> ClientError {
    ClientError::Request(RequestError::Transport(e))
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Resource objects, in the order the server returned them.
    pub data: Vec<Value>,
    /// Related resource objects referenced by `data`.
    pub included: Vec<Value>,
    /// Count of `data`.
    pub items: usize,
    /// Page number of the next page, when the server advertised one.
    pub next_page: Option<u64>,
}

/// Raw JSON:API-ish list envelope returned by the server.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    #[serde(default)]
    data: Vec<Value>,
    #[serde(default)]
    included: Vec<Value>,
    #[serde(default)]
    links: Links,
}

#[derive(Debug, Default, Deserialize)]
struct Links {
    next: Option<String>,
}

impl ListEnvelope {
    pub(crate) fn into_page(self) -> Page {
        let next_page = next_page(self.links.next.as_deref());
        Page {
            items: self.data.len(),
            data: self.data,
            included: self.included,
            next_page,
        }
    }
}

/// Extract the integer `page` parameter from a `links.next` URL.
pub fn next_page(url: Option<&str>) -> Option<u64> {
    let url = Url::parse(url?).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
