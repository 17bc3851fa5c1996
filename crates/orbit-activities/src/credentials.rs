//! Workspace credential resolution.
//!
//! Credentials are resolved exactly once, at client construction. Explicit
//! values win over the environment; the environment is never consulted again
//! after that.

use crate::error::ConfigError;

/// Environment fallback for the workspace id.
pub const WORKSPACE_ID_VAR: &str = "ORBIT_WORKSPACE_ID";
/// Environment fallback for the API key.
pub const API_KEY_VAR: &str = "ORBIT_API_KEY";

const DEFAULT_USER_AGENT: &str = concat!("orbit-activities/", env!("CARGO_PKG_VERSION"));

/// Immutable credential set scoping every API call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Tenant identifier, spliced into every request path.
    pub workspace_id: String,
    /// Bearer token sent in the `Authorization` header.
    pub api_key: String,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Credentials {
    /// Resolve credentials from explicit values, falling back to
    /// [`WORKSPACE_ID_VAR`] and [`API_KEY_VAR`]. Empty strings count as
    /// unset in both positions.
    pub fn resolve(
        workspace_id: Option<String>,
        api_key: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Self, ConfigError> {
        let workspace_id = workspace_id
            .filter(|v| !v.is_empty())
            .or_else(|| env_var(WORKSPACE_ID_VAR))
            .ok_or(ConfigError::MissingWorkspaceId)?;
        let api_key = api_key
            .filter(|v| !v.is_empty())
            .or_else(|| env_var(API_KEY_VAR))
            .ok_or(ConfigError::MissingApiKey)?;
        let user_agent = user_agent
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

        Ok(Self {
            workspace_id,
            api_key,
            user_agent,
        })
    }
}

// The API key is a live bearer token; keep it out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("workspace_id", &self.workspace_id)
            .field("api_key", &"[redacted]")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // set_var/remove_var mutate process state; serialize the tests that touch
    // the environment so they can't race each other.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env(workspace: Option<&str>, key: Option<&str>) -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            match workspace {
                Some(v) => std::env::set_var(WORKSPACE_ID_VAR, v),
                None => std::env::remove_var(WORKSPACE_ID_VAR),
            }
            match key {
                Some(v) => std::env::set_var(API_KEY_VAR, v),
                None => std::env::remove_var(API_KEY_VAR),
            }
        }
        guard
    }

    #[test]
    fn explicit_credentials_resolve() {
        let _guard = with_env(None, None);
        let creds = Credentials::resolve(Some("1".into()), Some("2".into()), None).unwrap();
        assert_eq!(creds.workspace_id, "1");
        assert_eq!(creds.api_key, "2");
        assert!(creds.user_agent.starts_with("orbit-activities/"));
    }

    #[test]
    fn explicit_user_agent_wins_over_default() {
        let _guard = with_env(None, None);
        let creds =
            Credentials::resolve(Some("1".into()), Some("2".into()), Some("3".into())).unwrap();
        assert_eq!(creds.user_agent, "3");
    }

    #[test]
    fn environment_fallback() {
        let _guard = with_env(Some("env-ws"), Some("env-key"));
        let creds = Credentials::resolve(None, None, None).unwrap();
        assert_eq!(creds.workspace_id, "env-ws");
        assert_eq!(creds.api_key, "env-key");
    }

    #[test]
    fn explicit_values_win_over_environment() {
        let _guard = with_env(Some("env-ws"), Some("env-key"));
        let creds = Credentials::resolve(Some("ws".into()), Some("key".into()), None).unwrap();
        assert_eq!(creds.workspace_id, "ws");
        assert_eq!(creds.api_key, "key");
    }

    #[test]
    fn incomplete_credentials_rejected() {
        let _guard = with_env(Some("env-ws"), None);
        assert!(matches!(
            Credentials::resolve(None, None, None),
            Err(ConfigError::MissingApiKey)
        ));
        drop(_guard);

        let _guard = with_env(None, Some("env-key"));
        assert!(matches!(
            Credentials::resolve(None, None, None),
            Err(ConfigError::MissingWorkspaceId)
        ));
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let _guard = with_env(None, None);
        assert!(matches!(
            Credentials::resolve(Some(String::new()), Some("2".into()), None),
            Err(ConfigError::MissingWorkspaceId)
        ));
    }

    #[test]
    fn debug_redacts_api_key() {
        let _guard = with_env(None, None);
        let creds = Credentials::resolve(Some("1".into()), Some("secret".into()), None).unwrap();
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
