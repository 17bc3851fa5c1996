//! # orbit-activities
//!
//! Client library for the [Orbit](https://orbit.love) workspace activities
//! and notes API.
//!
//! A thin wrapper over one REST API: it resolves a bearer-token credential
//! set at construction (explicit values or `ORBIT_WORKSPACE_ID` /
//! `ORBIT_API_KEY`), builds requests against
//! `https://app.orbit.love/api/v1/{workspace}`, and reshapes the JSON:API
//! style list envelopes into a simple [`Page`] with a derived `next_page`
//! cursor. Resource objects themselves are passed through as opaque JSON.
//!
//! No retries, no rate limiting, no caching: every operation is a single
//! stateless request, and transport concerns (timeouts, proxies, TLS) belong
//! to the pluggable [`HttpClient`](http_client::HttpClient) — a
//! [`reqwest::Client`] implementation ships behind the default
//! `reqwest-client` feature.
//!
//! ## Example
//!
//! ```no_run
//! use orbit_activities::{OrbitClient, Query};
//!
//! #[tokio::main]
//! async fn main() -> miette::Result<()> {
//!     // Credentials from ORBIT_WORKSPACE_ID / ORBIT_API_KEY
//!     let orbit = OrbitClient::from_env()?;
//!
//!     let page = orbit
//!         .list_workspace_activities(Query::new().with("items", 10u32))
//!         .await?;
//!     for activity in &page.data {
//!         println!("{activity}");
//!     }
//!
//!     orbit.create_note("member-id", "met at the conference").await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod client;
/// Workspace credential record and resolution rules.
pub mod credentials;
pub mod error;
/// HTTP client abstraction used to plug in a transport.
pub mod http_client;
pub mod query;

pub use api::Page;
pub use client::{OrbitClient, OrbitClientBuilder};
pub use credentials::Credentials;
pub use error::{ClientError, ConfigError, InvalidArgumentError, OrbitResult, RequestError};
pub use query::{Query, QueryValue};
pub use url;
