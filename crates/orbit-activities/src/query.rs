//! Free-form query parameters, passed through to the request URL unmodified.
//!
//! Orbit's list endpoints take filtering/sorting/pagination parameters
//! (`page`, `items`, `activity_type`, `direction`, ...). The client does not
//! interpret any of them; it only encodes what it is given.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::EncodeError;

/// A single query parameter value: a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// String-valued parameter (`activity_type=issues`)
    Str(String),
    /// Integer-valued parameter (`page=2`)
    Int(i64),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

/// Query parameters for a single request.
///
/// Keys are kept in a sorted map so encoding is deterministic.
///
/// ```
/// use orbit_activities::Query;
///
/// let query = Query::new().with("items", 25u32).with("direction", "DESC");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Query(BTreeMap<String, QueryValue>);

impl Query {
    /// Empty query; encodes to no parameters at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// True when no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode to an urlencoded query string (no leading `?`).
    pub(crate) fn encode(&self) -> Result<String, EncodeError> {
        Ok(serde_html_form::to_string(&self.0)?)
    }
}
