//! `gh_dependabot` - typed client for the GitHub Dependabot alerts API
//!
//! This library projects Dependabot alert payloads onto immutable typed
//! models and presents list endpoints as lazily-paginated collections.
//! Single-alert operations return [`AsyncTask`] handles; list results are
//! [`PaginatedList`] values that fetch pages on demand, following the
//! server's `Link` headers.

// Module declarations
pub mod github;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export pagination and transport seams
pub use github::{FetchedPage, HttpTransport, PageStream, PaginatedList, Transport};

// Re-export GitHub operation options
pub use github::{ListDependabotAlertsRequest, UpdateDependabotAlertRequest};

// Re-export resource models for public API
pub use github::{
    Actor, AdvisoryIdentifier, AdvisoryReference, AlertPackage, AlertState, Cvss, Cwe,
    DependabotAlert, Dependency, DependencyScope, DismissedReason, FirstPatchedVersion,
    SecurityAdvisory, Severity, Vulnerability,
};
