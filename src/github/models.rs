//! Typed models for Dependabot alert resources.
//!
//! Each type is an immutable view over one JSON object from the REST API,
//! populated by serde. Nested objects are composed value objects with no
//! independent lifecycle. Unknown payload keys are ignored, so additive
//! server-side schema changes are not breaking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a Dependabot alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertState {
    AutoDismissed,
    Dismissed,
    Fixed,
    Open,
}

impl AlertState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AlertState::AutoDismissed => "auto_dismissed",
            AlertState::Dismissed => "dismissed",
            AlertState::Fixed => "fixed",
            AlertState::Open => "open",
        }
    }
}

/// Advisory severity as reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Whether the vulnerable dependency is a development or runtime dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyScope {
    Development,
    Runtime,
}

impl DependencyScope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DependencyScope::Development => "development",
            DependencyScope::Runtime => "runtime",
        }
    }
}

/// Reason recorded when an alert was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissedReason {
    FixStarted,
    Inaccurate,
    NoBandwidth,
    NotUsed,
    TolerableRisk,
}

impl DismissedReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DismissedReason::FixStarted => "fix_started",
            DismissedReason::Inaccurate => "inaccurate",
            DismissedReason::NoBandwidth => "no_bandwidth",
            DismissedReason::NotUsed => "not_used",
            DismissedReason::TolerableRisk => "tolerable_risk",
        }
    }
}

/// Package coordinates within a packaging ecosystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPackage {
    pub ecosystem: String,
    pub name: String,
}

/// The dependency a Dependabot alert was raised against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub package: AlertPackage,
    /// Path of the manifest the dependency was declared in.
    pub manifest_path: String,
    pub scope: Option<DependencyScope>,
}

/// One `{type, value}` identifier attached to an advisory (GHSA, CVE, ...).
///
/// Order within [`SecurityAdvisory::identifiers`] is the server's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// A reference link attached to an advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReference {
    pub url: String,
}

/// CVSS score attached to an advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cvss {
    pub score: f64,
    pub vector_string: Option<String>,
}

/// CWE classification attached to an advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cwe {
    pub cwe_id: String,
    pub name: String,
}

/// First version in which a vulnerability was patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstPatchedVersion {
    pub identifier: String,
}

/// A single vulnerable version range within an advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub package: AlertPackage,
    pub vulnerable_version_range: String,
    pub severity: Severity,
    /// `None` while no patched release exists.
    pub first_patched_version: Option<FirstPatchedVersion>,
}

/// Security advisory describing the vulnerability behind an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityAdvisory {
    pub ghsa_id: String,
    pub cve_id: Option<String>,
    pub summary: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub identifiers: Vec<AdvisoryIdentifier>,
    #[serde(default)]
    pub references: Vec<AdvisoryReference>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
    pub cvss: Option<Cvss>,
    #[serde(default)]
    pub cwes: Vec<Cwe>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub withdrawn_at: Option<DateTime<Utc>>,
}

/// The account that dismissed an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub login: String,
    pub id: u64,
    pub html_url: String,
}

/// A Dependabot alert for one repository.
///
/// Immutable once deserialized; repeated field reads are side-effect-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependabotAlert {
    /// Repository-scoped alert number, the key used for direct lookup.
    pub number: u64,
    pub state: AlertState,
    pub dependency: Dependency,
    pub security_advisory: SecurityAdvisory,
    /// The specific vulnerable range this alert matched.
    pub security_vulnerability: Vulnerability,
    pub url: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub dismissed_at: Option<DateTime<Utc>>,
    pub dismissed_by: Option<Actor>,
    pub dismissed_reason: Option<DismissedReason>,
    pub dismissed_comment: Option<String>,
    pub fixed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auto_dismissed_at: Option<DateTime<Utc>>,
}

impl fmt::Display for DependabotAlert {
    /// Renders the identifying fields in a fixed format, e.g.
    /// `DependabotAlert(number=1, ghsa_id="GHSA-h5c8-rqwp-cp95")`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DependabotAlert(number={}, ghsa_id=\"{}\")",
            self.number, self.security_advisory.ghsa_id
        )
    }
}
