//! Dependabot alert update operation.

use crate::github::client::ClientInner;
use crate::github::models::{AlertState, DependabotAlert, DismissedReason};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Request parameters for updating a Dependabot alert
#[derive(Debug, Clone)]
pub struct UpdateDependabotAlertRequest {
    /// New alert state; the API accepts `dismissed` or `open`
    pub state: AlertState,
    /// Required by the API when dismissing
    pub dismissed_reason: Option<DismissedReason>,
    /// Optional free-form dismissal comment
    pub dismissed_comment: Option<String>,
}

/// Update an alert's state, returning the updated alert.
pub(crate) fn update_dependabot_alert(
    inner: Arc<ClientInner>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    alert_number: u64,
    request: UpdateDependabotAlertRequest,
) -> AsyncTask<Result<DependabotAlert, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        if request.state == AlertState::Dismissed && request.dismissed_reason.is_none() {
            return Err(GitHubError::InvalidInput(
                "dismissing an alert requires a dismissed_reason".to_string(),
            ));
        }

        let mut body = json!({ "state": request.state.as_str() });
        if let Some(reason) = request.dismissed_reason {
            body["dismissed_reason"] = json!(reason.as_str());
        }
        if let Some(comment) = request.dismissed_comment {
            body["dismissed_comment"] = json!(comment);
        }

        let url = inner.url(&format!(
            "/repos/{owner}/{repo}/dependabot/alerts/{alert_number}"
        ));
        let value = inner.transport.send(Method::PATCH, &url, Some(body)).await?;
        serde_json::from_value(value)
            .map_err(|e| GitHubError::deserialize("dependabot alert", e))
    })
}
