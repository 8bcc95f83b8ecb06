//! Tests for the Dependabot alert resource projection and operations,
//! driven by the dismissed jinja2 fixture.

use chrono::{TimeZone, Utc};
use futures::StreamExt;
use gh_dependabot::{
    AlertState, DependencyScope, DismissedReason, GitHubClient, GitHubError,
    ListDependabotAlertsRequest, Severity, UpdateDependabotAlertRequest,
};
use serde_json::json;
use std::sync::Arc;

use super::support::{alert_fixture, alert_url, alerts_url, CannedTransport, BASE_URI};

fn client(transport: Arc<CannedTransport>) -> GitHubClient {
    GitHubClient::builder()
        .base_uri(BASE_URI)
        .transport(transport)
        .build()
        .expect("client setup")
}

fn single_alert_transport() -> Arc<CannedTransport> {
    Arc::new(CannedTransport::new().with_page(alert_url(), alert_fixture(), None))
}

#[tokio::test]
async fn test_attributes() -> anyhow::Result<()> {
    let gh = client(single_alert_transport());
    let alert = gh.get_dependabot_alert("coopernetes", "PyGithub", 1).await??;

    assert_eq!(alert.number, 1);
    assert_eq!(alert.state, AlertState::Dismissed);
    assert_eq!(alert.dependency.package.ecosystem, "pip");
    assert_eq!(alert.dependency.package.name, "jinja2");
    assert_eq!(alert.dependency.manifest_path, "requirements/docs.txt");
    assert_eq!(alert.dependency.scope, Some(DependencyScope::Runtime));

    let advisory = &alert.security_advisory;
    assert_eq!(advisory.ghsa_id, "GHSA-h5c8-rqwp-cp95");
    assert_eq!(advisory.cve_id.as_deref(), Some("CVE-2024-22195"));
    assert_eq!(
        advisory.summary,
        "Jinja vulnerable to HTML attribute injection when passing user input as keys to xmlattr filter"
    );
    assert_eq!(advisory.severity, Severity::Medium);
    assert_eq!(advisory.identifiers[0].kind, "GHSA");
    assert_eq!(advisory.identifiers[0].value, "GHSA-h5c8-rqwp-cp95");
    assert_eq!(advisory.identifiers[1].kind, "CVE");
    assert_eq!(advisory.identifiers[1].value, "CVE-2024-22195");
    assert_eq!(
        advisory.references[0].url,
        "https://github.com/pallets/jinja/security/advisories/GHSA-h5c8-rqwp-cp95"
    );
    assert_eq!(
        advisory.references[1].url,
        "https://nvd.nist.gov/vuln/detail/CVE-2024-22195"
    );
    assert_eq!(
        advisory.references[4].url,
        "https://github.com/advisories/GHSA-h5c8-rqwp-cp95"
    );
    assert_eq!(
        advisory.published_at,
        Utc.with_ymd_and_hms(2024, 1, 11, 15, 20, 48).unwrap()
    );
    assert_eq!(
        advisory.updated_at,
        Utc.with_ymd_and_hms(2024, 1, 11, 15, 20, 50).unwrap()
    );
    assert_eq!(advisory.vulnerabilities[0].package.ecosystem, "pip");
    assert_eq!(advisory.vulnerabilities[0].package.name, "jinja2");
    assert_eq!(advisory.vulnerabilities[0].vulnerable_version_range, "< 3.1.3");
    assert_eq!(advisory.vulnerabilities[0].severity, Severity::Medium);
    assert_eq!(
        advisory.vulnerabilities[0]
            .first_patched_version
            .as_ref()
            .unwrap()
            .identifier,
        "3.1.3"
    );

    assert_eq!(
        alert.url,
        "https://api.github.com/repos/coopernetes/PyGithub/dependabot/alerts/1"
    );
    assert_eq!(
        alert.html_url,
        "https://github.com/coopernetes/PyGithub/security/dependabot/1"
    );
    assert_eq!(
        alert.created_at,
        Utc.with_ymd_and_hms(2024, 1, 20, 17, 12, 38).unwrap()
    );
    assert_eq!(
        alert.updated_at,
        Utc.with_ymd_and_hms(2024, 1, 20, 22, 4, 0).unwrap()
    );
    assert_eq!(
        alert.dismissed_at,
        Some(Utc.with_ymd_and_hms(2024, 1, 20, 22, 4, 0).unwrap())
    );
    assert_eq!(alert.dismissed_by.as_ref().unwrap().login, "coopernetes");
    assert_eq!(alert.dismissed_reason, Some(DismissedReason::TolerableRisk));
    assert_eq!(alert.dismissed_comment.as_deref(), Some("Example comment"));

    Ok(())
}

#[tokio::test]
async fn test_nullable_fields_absent_from_payload() {
    let gh = client(single_alert_transport());
    let alert = gh
        .get_dependabot_alert("coopernetes", "PyGithub", 1)
        .await
        .unwrap()
        .unwrap();

    // Keys omitted from the payload entirely, not just null.
    assert_eq!(alert.fixed_at, None);
    assert_eq!(alert.auto_dismissed_at, None);
    assert_eq!(alert.security_advisory.withdrawn_at, None);
}

#[tokio::test]
async fn test_display_renders_identifying_fields() {
    let gh = client(single_alert_transport());
    let alert = gh
        .get_dependabot_alert("coopernetes", "PyGithub", 1)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        alert.to_string(),
        "DependabotAlert(number=1, ghsa_id=\"GHSA-h5c8-rqwp-cp95\")"
    );
}

#[tokio::test]
async fn test_repeated_reads_are_idempotent() {
    let gh = client(single_alert_transport());
    let alert = gh
        .get_dependabot_alert("coopernetes", "PyGithub", 1)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(alert.state, alert.state);
    assert_eq!(alert.security_advisory, alert.security_advisory);
    assert_eq!(alert.clone(), alert);
}

#[tokio::test]
async fn test_list_first_element_matches_direct_fetch() -> anyhow::Result<()> {
    let transport = Arc::new(
        CannedTransport::new()
            .with_page(alert_url(), alert_fixture(), None)
            .with_page(alerts_url(), json!([alert_fixture()]), None),
    );
    let gh = client(transport);

    let direct = gh.get_dependabot_alert("coopernetes", "PyGithub", 1).await??;

    let mut alerts = gh.list_dependabot_alerts(
        "coopernetes",
        "PyGithub",
        ListDependabotAlertsRequest::default(),
    );

    let collected: Vec<_> = alerts.stream().collect().await;
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0].as_ref().unwrap(), &direct);

    assert_eq!(alerts.total_count().await?, 1);
    assert_eq!(alerts.get(0).await?, &direct);

    Ok(())
}

#[tokio::test]
async fn test_list_builds_filter_query() {
    let transport = Arc::new(CannedTransport::new());
    let gh = client(transport.clone());

    let request = ListDependabotAlertsRequest {
        state: Some(AlertState::Dismissed),
        severity: Some(Severity::Medium),
        per_page: Some(50),
        ..Default::default()
    };
    let mut alerts = gh.list_dependabot_alerts("coopernetes", "PyGithub", request);

    // Nothing registered at that URL, so the fetch fails, but records the
    // exact URL the operation produced.
    let err = alerts.total_count().await.unwrap_err();
    assert!(matches!(err, GitHubError::NotFound(_)));
    assert_eq!(
        transport.requested(),
        vec![format!(
            "{}?state=dismissed&severity=medium&per_page=50",
            alerts_url()
        )]
    );
}

#[tokio::test]
async fn test_update_reopens_alert() {
    let gh = client(single_alert_transport());

    let request = UpdateDependabotAlertRequest {
        state: AlertState::Open,
        dismissed_reason: None,
        dismissed_comment: None,
    };
    let updated = gh
        .update_dependabot_alert("coopernetes", "PyGithub", 1, request)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.number, 1);
    assert_eq!(updated.state, AlertState::Open);
}

#[tokio::test]
async fn test_dismissing_requires_a_reason() {
    let gh = client(single_alert_transport());

    let request = UpdateDependabotAlertRequest {
        state: AlertState::Dismissed,
        dismissed_reason: None,
        dismissed_comment: None,
    };
    let err = gh
        .update_dependabot_alert("coopernetes", "PyGithub", 1, request)
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, GitHubError::InvalidInput(_)));
}

#[tokio::test]
async fn test_missing_alert_is_not_found() {
    let gh = client(single_alert_transport());

    let err = gh
        .get_dependabot_alert("coopernetes", "PyGithub", 42)
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, GitHubError::NotFound(_)));
}
