//! Crate-owned views of the GitHub records the upsert flow touches.
//!
//! The [`IssueHost`](crate::github::IssueHost) seam trades in these types
//! rather than octocrab models, so test doubles can build them directly.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies a pull request: `host/owner/repo` plus the PR number.
///
/// The host is carried for callers that parsed it out of a URL; the API
/// client itself already knows which host it talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// A GitHub user, narrowed to the fields comment matchers care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
}

/// A pull request, narrowed to the metadata body generators read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub html_url: String,
    pub user: Option<User>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A comment on a pull request's issue thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    /// Empty string when the remote record carries no body.
    pub body: String,
    pub user: User,
    pub html_url: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<octocrab::models::Author> for User {
    fn from(author: octocrab::models::Author) -> Self {
        User {
            login: author.login,
            id: author.id.0,
        }
    }
}

impl From<octocrab::models::pulls::PullRequest> for PullRequest {
    fn from(pr: octocrab::models::pulls::PullRequest) -> Self {
        PullRequest {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body,
            html_url: pr.html_url.map(|u| u.to_string()).unwrap_or_default(),
            user: pr.user.map(|u| (*u).into()),
            updated_at: pr.updated_at,
        }
    }
}

impl From<octocrab::models::issues::Comment> for Comment {
    fn from(comment: octocrab::models::issues::Comment) -> Self {
        Comment {
            id: comment.id.0,
            body: comment.body.unwrap_or_default(),
            user: comment.user.into(),
            html_url: comment.html_url.to_string(),
            updated_at: comment.updated_at,
        }
    }
}
