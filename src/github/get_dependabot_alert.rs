//! Dependabot alert lookup operation.

use crate::github::client::ClientInner;
use crate::github::models::DependabotAlert;
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use std::sync::Arc;

/// Get a single Dependabot alert by its repository-scoped number.
pub(crate) fn get_dependabot_alert(
    inner: Arc<ClientInner>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    alert_number: u64,
) -> AsyncTask<Result<DependabotAlert, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let url = inner.url(&format!(
            "/repos/{owner}/{repo}/dependabot/alerts/{alert_number}"
        ));
        let page = inner.transport.fetch(&url).await?;
        serde_json::from_value(page.body)
            .map_err(|e| GitHubError::deserialize("dependabot alert", e))
    })
}
