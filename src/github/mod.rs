//! GitHub API operations module
//!
//! Provides the GitHub API operations the upsert flow needs, using the
//! octocrab library, plus the [`IssueHost`] seam they sit behind.

pub mod client;
pub mod error;
pub mod host;
pub mod types;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};

pub use host::IssueHost;
pub use types::{Comment, PullRequest, PullRequestRef, User};

// GitHub API operations (internal)
pub(crate) mod add_issue_comment;
pub(crate) mod get_pull_request;
pub(crate) mod list_issue_comments;
pub(crate) mod update_issue_comment;
