//! Orbit workspace client: credential lifecycle plus one method per API
//! operation.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use crate::api::{self, Page};
use crate::credentials::Credentials;
use crate::error::{
    ClientError, ConfigError, EncodeError, InvalidArgumentError, OrbitResult, TransportError,
};
use crate::http_client::HttpClient;
use crate::query::Query;

/// Client for one Orbit workspace.
///
/// Holds the resolved credential set and an HTTP transport; carries no other
/// state, so a single instance is safe to share across tasks. Generic over
/// the transport, with [`reqwest::Client`] as the bundled default.
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> miette::Result<()> {
/// use orbit_activities::{OrbitClient, Query};
///
/// let orbit = OrbitClient::builder()
///     .workspace_id("my-workspace")
///     .api_key("ob_...")
///     .build()?;
/// let page = orbit
///     .list_workspace_activities(Query::new().with("items", 25u32))
///     .await?;
/// println!("{} activities, next page {:?}", page.items, page.next_page);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OrbitClient<T> {
    credentials: Credentials,
    client: T,
}

/// Builder for [`OrbitClient`].
///
/// Credentials left unset fall back to the `ORBIT_WORKSPACE_ID` and
/// `ORBIT_API_KEY` environment variables at `build` time.
#[derive(Debug, Default, Clone)]
pub struct OrbitClientBuilder {
    workspace_id: Option<String>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl OrbitClientBuilder {
    /// Set the workspace id explicitly (wins over the environment).
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Set the API key explicitly (wins over the environment).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the default `orbit-activities/<version>` user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Resolve credentials and build a client over the given transport.
    pub fn build_with<T: HttpClient>(self, client: T) -> Result<OrbitClient<T>, ConfigError> {
        let credentials = Credentials::resolve(self.workspace_id, self.api_key, self.user_agent)?;
        Ok(OrbitClient {
            credentials,
            client,
        })
    }

    /// Resolve credentials and build a client over a fresh [`reqwest::Client`].
    #[cfg(feature = "reqwest-client")]
    pub fn build(self) -> Result<OrbitClient<reqwest::Client>, ConfigError> {
        self.build_with(reqwest::Client::new())
    }
}

impl OrbitClient<()> {
    /// Start building a client.
    pub fn builder() -> OrbitClientBuilder {
        OrbitClientBuilder::default()
    }
}

#[cfg(feature = "reqwest-client")]
impl OrbitClient<reqwest::Client> {
    /// Build a client from the environment alone.
    pub fn from_env() -> Result<Self, ConfigError> {
        OrbitClient::builder().build()
    }
}

impl<T> OrbitClient<T> {
    /// The resolved credential set (API key redacted in `Debug` output).
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl<T: HttpClient> OrbitClient<T> {
    /// List activities across the whole workspace.
    pub async fn list_workspace_activities(&self, query: Query) -> OrbitResult<Page> {
        self.list("/activities", query).await
    }

    /// List activities for one member.
    pub async fn list_member_activities(&self, member_id: &str, query: Query) -> OrbitResult<Page> {
        require(member_id, InvalidArgumentError::MissingMemberId)?;
        self.list(&format!("/members/{member_id}/activities"), query)
            .await
    }

    /// Fetch a single activity by id.
    pub async fn get_activity(&self, activity_id: &str) -> OrbitResult<Value> {
        require(activity_id, InvalidArgumentError::MissingActivityId)?;
        self.api(Method::GET, &format!("/activities/{activity_id}"), Query::new(), None)
            .await
    }

    /// Create an activity that is not yet tied to a known member.
    ///
    /// The payload is passed through unmodified; see
    /// [`create_member_activity`](Self::create_member_activity) for the
    /// member-scoped variant.
    pub async fn create_activity(&self, activity: &impl Serialize) -> OrbitResult<Value> {
        self.api(
            Method::POST,
            "/activities",
            Query::new(),
            Some(encode_body(activity)?),
        )
        .await
    }

    /// Create an activity for a known member.
    pub async fn create_member_activity(
        &self,
        member_id: &str,
        activity: &impl Serialize,
    ) -> OrbitResult<Value> {
        require(member_id, InvalidArgumentError::MissingMemberId)?;
        self.api(
            Method::POST,
            &format!("/members/{member_id}/activities"),
            Query::new(),
            Some(encode_body(activity)?),
        )
        .await
    }

    /// Update a member's activity. Returns a confirmation message naming both
    /// ids.
    pub async fn update_activity(
        &self,
        member_id: &str,
        activity_id: &str,
        activity: &impl Serialize,
    ) -> OrbitResult<String> {
        require(member_id, InvalidArgumentError::MissingMemberId)?;
        require(activity_id, InvalidArgumentError::MissingActivityId)?;
        self.api(
            Method::PUT,
            &format!("/members/{member_id}/activities/{activity_id}"),
            Query::new(),
            Some(encode_body(activity)?),
        )
        .await?;
        Ok(format!(
            "activity {activity_id} on member {member_id} updated"
        ))
    }

    /// Delete a member's activity. Returns a confirmation message naming both
    /// ids.
    pub async fn delete_activity(
        &self,
        member_id: &str,
        activity_id: &str,
    ) -> OrbitResult<String> {
        require(member_id, InvalidArgumentError::MissingMemberId)?;
        require(activity_id, InvalidArgumentError::MissingActivityId)?;
        self.api(
            Method::DELETE,
            &format!("/members/{member_id}/activities/{activity_id}"),
            Query::new(),
            None,
        )
        .await?;
        Ok(format!(
            "activity {activity_id} on member {member_id} deleted"
        ))
    }

    /// List notes attached to one member.
    pub async fn list_member_notes(&self, member_id: &str, query: Query) -> OrbitResult<Page> {
        require(member_id, InvalidArgumentError::MissingMemberId)?;
        self.list(&format!("/members/{member_id}/notes"), query).await
    }

    /// Attach a free-text note to a member.
    pub async fn create_note(&self, member_id: &str, body: &str) -> OrbitResult<Value> {
        require(member_id, InvalidArgumentError::MissingMemberId)?;
        require(body, InvalidArgumentError::MissingBody)?;
        self.api(
            Method::POST,
            &format!("/members/{member_id}/notes"),
            Query::new(),
            Some(encode_body(&NoteBody { body })?),
        )
        .await
    }

    /// Replace the text of a member's note. Returns a confirmation message
    /// naming both ids.
    pub async fn update_note(
        &self,
        member_id: &str,
        note_id: &str,
        body: &str,
    ) -> OrbitResult<String> {
        require(member_id, InvalidArgumentError::MissingMemberId)?;
        require(note_id, InvalidArgumentError::MissingNoteId)?;
        require(body, InvalidArgumentError::MissingBody)?;
        self.api(
            Method::PUT,
            &format!("/members/{member_id}/notes/{note_id}"),
            Query::new(),
            Some(encode_body(&NoteBody { body })?),
        )
        .await?;
        Ok(format!("note {note_id} on member {member_id} updated"))
    }

    /// Shared low-level primitive: build the request, send it over the
    /// transport, unwrap the response envelope.
    async fn api(
        &self,
        method: Method,
        endpoint: &str,
        query: Query,
        body: Option<Vec<u8>>,
    ) -> OrbitResult<Value> {
        let request = api::build_http_request(&self.credentials, method, endpoint, &query, body)?;
        tracing::debug!(
            method = %request.method(),
            uri = %request.uri(),
            "sending orbit api request"
        );

        let response = self
            .client
            .send_http(request)
            .await
            .map_err(|e| TransportError::Other(Box::new(e)))
            .map_err(|e| ClientError::Request(e.into()))?;
        tracing::debug!(status = %response.status(), "orbit api response");

        api::process_response(response)
    }

    async fn list(&self, endpoint: &str, query: Query) -> OrbitResult<Page> {
        let body = self.api(Method::GET, endpoint, query, None).await?;
        let envelope: api::ListEnvelope =
            serde_json::from_value(body).map_err(crate::error::DecodeError::Json)?;
        Ok(envelope.into_page())
    }
}

#[derive(Serialize)]
struct NoteBody<'a> {
    body: &'a str,
}

fn require(value: &str, missing: InvalidArgumentError) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        Err(missing.into())
    } else {
        Ok(())
    }
}

fn encode_body(payload: &impl Serialize) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(payload).map_err(|e| ClientError::Encode(EncodeError::Json(e)))
}
