//! `pr-commenter` - post or update a single comment on a GitHub pull request
//!
//! The [`Commenter`] fetches a pull request, generates a comment body from
//! it, and either edits the first existing comment its matcher accepts or
//! creates a new one. The GitHub API is reached through the narrow
//! [`IssueHost`] trait, with octocrab behind [`GitHubClient`] as the
//! production implementation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pr_commenter::{Commenter, GitHubClient, parse_pr_url};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pr = parse_pr_url("https://github.com/acme/widgets/pull/42")?;
//! let commenter = Commenter::new(
//!     GitHubClient::from_env()?,
//!     |pull| Ok(format!("Build report for `{}`.", pull.title)),
//! )
//! .match_comment(|c| c.body.starts_with("Build report"));
//! commenter.upsert(&pr).await?;
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod commenter;
pub mod github;
pub mod pr_url;

// Re-export the upserter
pub use commenter::{Commenter, CommenterError};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, IssueHost};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export domain types
pub use github::{Comment, PullRequest, PullRequestRef, User};

// Re-export URL parsing
pub use pr_url::{ParsePrUrlError, parse_pr_url};
