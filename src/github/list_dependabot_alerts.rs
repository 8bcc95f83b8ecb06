//! Dependabot alert listing operation.

use crate::github::client::ClientInner;
use crate::github::models::{AlertState, DependabotAlert, DependencyScope, Severity};
use crate::github::pagination::PaginatedList;
use std::sync::Arc;

/// Request parameters for listing Dependabot alerts
#[derive(Debug, Clone, Default)]
pub struct ListDependabotAlertsRequest {
    /// Filter by alert state
    pub state: Option<AlertState>,
    /// Filter by advisory severity
    pub severity: Option<Severity>,
    /// Filter by package ecosystem (e.g. "pip", "npm")
    pub ecosystem: Option<String>,
    /// Filter by package name
    pub package: Option<String>,
    /// Filter by manifest path
    pub manifest: Option<String>,
    /// Filter by dependency scope
    pub scope: Option<DependencyScope>,
    /// Sort field (created, updated)
    pub sort: Option<String>,
    /// Sort direction (asc, desc)
    pub direction: Option<String>,
    /// Results per page (max 100)
    pub per_page: Option<u8>,
}

/// Build the lazy collection over a repository's Dependabot alerts.
///
/// No request is made here; pages are fetched as the returned collection is
/// accessed.
pub(crate) fn list_dependabot_alerts(
    inner: Arc<ClientInner>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    request: ListDependabotAlertsRequest,
) -> PaginatedList<DependabotAlert> {
    let owner = owner.into();
    let repo = repo.into();

    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(state) = request.state {
        query.push(("state", state.as_str().to_string()));
    }
    if let Some(severity) = request.severity {
        query.push(("severity", severity.as_str().to_string()));
    }
    if let Some(ecosystem) = request.ecosystem {
        query.push(("ecosystem", ecosystem));
    }
    if let Some(package) = request.package {
        query.push(("package", package));
    }
    if let Some(manifest) = request.manifest {
        query.push(("manifest", manifest));
    }
    if let Some(scope) = request.scope {
        query.push(("scope", scope.as_str().to_string()));
    }
    if let Some(sort) = request.sort {
        query.push(("sort", sort));
    }
    if let Some(direction) = request.direction {
        query.push(("direction", direction));
    }
    if let Some(per_page) = request.per_page {
        query.push(("per_page", per_page.to_string()));
    }

    let mut url = inner.url(&format!("/repos/{owner}/{repo}/dependabot/alerts"));
    if !query.is_empty() {
        let encoded: Vec<String> = query
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect();
        url.push('?');
        url.push_str(&encoded.join("&"));
    }

    PaginatedList::new(inner.transport.clone(), url)
}
