//! GitHub API operations module
//!
//! Typed access to the Dependabot alerts REST surface: immutable resource
//! models, a transport seam, and lazy link-driven pagination.

pub mod client;
pub mod error;
pub mod models;
pub mod pagination;
pub mod transport;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// Re-export pagination and transport seams
pub use pagination::{PageStream, PaginatedList};
pub use transport::{FetchedPage, HttpTransport, Transport};

// Re-export options types
pub use list_dependabot_alerts::ListDependabotAlertsRequest;
pub use update_dependabot_alert::UpdateDependabotAlertRequest;

// GitHub API operations - Security (internal)
pub(crate) mod get_dependabot_alert;
pub(crate) mod list_dependabot_alerts;
pub(crate) mod update_dependabot_alert;

// Re-export resource models for public API
pub use models::{
    Actor, AdvisoryIdentifier, AdvisoryReference, AlertPackage, AlertState, Cvss, Cwe,
    DependabotAlert, Dependency, DependencyScope, DismissedReason, FirstPatchedVersion,
    SecurityAdvisory, Severity, Vulnerability,
};
