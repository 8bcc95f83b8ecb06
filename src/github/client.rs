//! GitHub API client wrapper
//!
//! Entry point for Dependabot alert operations. The client wraps a
//! [`Transport`] behind an `Arc`, so cloning is cheap and every handle shares
//! one connection pool.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gh_dependabot::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let alert = gh.get_dependabot_alert("owner", "repo", 1).await??;
//!     println!("{alert}");
//!
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::list_dependabot_alerts::ListDependabotAlertsRequest;
use crate::github::models::DependabotAlert;
use crate::github::pagination::PaginatedList;
use crate::github::transport::{HttpTransport, Transport};
use crate::github::update_dependabot_alert::UpdateDependabotAlertRequest;

const DEFAULT_BASE_URI: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = concat!("gh-dependabot/", env!("CARGO_PKG_VERSION"));

/// Shared client state handed to the operation modules.
pub(crate) struct ClientInner {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) base_uri: String,
}

impl ClientInner {
    /// Absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_uri.trim_end_matches('/'))
    }
}

/// GitHub API client scoped to the Dependabot alerts surface.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone)]
pub struct GitHubClient {
    inner: Arc<ClientInner>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Convenience: create client from the `GITHUB_TOKEN` environment
    /// variable, unauthenticated when unset.
    pub fn from_env() -> GitHubResult<Self> {
        let mut builder = Self::builder();
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            builder = builder.personal_token(token);
        }
        builder.build()
    }

    /// Get a single Dependabot alert by number
    pub fn get_dependabot_alert(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        alert_number: u64,
    ) -> crate::runtime::AsyncTask<Result<DependabotAlert, GitHubError>> {
        crate::github::get_dependabot_alert::get_dependabot_alert(
            self.inner.clone(),
            owner,
            repo,
            alert_number,
        )
    }

    /// Lazy collection over a repository's Dependabot alerts.
    ///
    /// Construction performs no I/O; pages are fetched as the collection is
    /// indexed or streamed.
    pub fn list_dependabot_alerts(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        request: ListDependabotAlertsRequest,
    ) -> PaginatedList<DependabotAlert> {
        crate::github::list_dependabot_alerts::list_dependabot_alerts(
            self.inner.clone(),
            owner,
            repo,
            request,
        )
    }

    /// Update an alert's state (dismiss or reopen)
    pub fn update_dependabot_alert(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        alert_number: u64,
        request: UpdateDependabotAlertRequest,
    ) -> crate::runtime::AsyncTask<Result<DependabotAlert, GitHubError>> {
        crate::github::update_dependabot_alert::update_dependabot_alert(
            self.inner.clone(),
            owner,
            repo,
            alert_number,
            request,
        )
    }
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_uri", &self.inner.base_uri)
            .finish_non_exhaustive()
    }
}

/// Builder for creating `GitHubClient` with various configurations
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Set the User-Agent header sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the HTTP transport entirely. Token and user-agent settings
    /// only apply to the default transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let base_uri = self
            .base_uri
            .unwrap_or_else(|| DEFAULT_BASE_URI.to_string());
        reqwest::Url::parse(&base_uri)
            .map_err(|e| GitHubError::ClientSetup(format!("invalid base URI {base_uri}: {e}")))?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
                Arc::new(HttpTransport::new(self.token, user_agent)?)
            }
        };

        Ok(GitHubClient {
            inner: Arc::new(ClientInner { transport, base_uri }),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
