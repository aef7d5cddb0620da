//! GitHub API client wrapper
//!
//! Provides a clean API for the operations this crate needs without
//! exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pr_commenter::GitHubClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gh = GitHubClient::with_token("ghp_...")?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jsonwebtoken::EncodingKey;
use octocrab::{Octocrab, models::AppId};

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::host::IssueHost;
use crate::github::types::{Comment, PullRequest, PullRequestRef};
use crate::github::{
    add_issue_comment, get_pull_request, list_issue_comments, update_issue_comment,
};

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Convenience: create client with the token from `GITHUB_TOKEN`
    pub fn from_env() -> GitHubResult<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .map_err(|_| GitHubError::ClientSetup("GITHUB_TOKEN is not set".to_string()))?;
        Self::with_token(token)
    }

    /// Get inner Octocrab client
    #[must_use]
    pub fn inner(&self) -> &Arc<Octocrab> {
        &self.inner
    }
}

impl IssueHost for GitHubClient {
    async fn get_pull_request(&self, pr: &PullRequestRef) -> GitHubResult<PullRequest> {
        get_pull_request::get_pull_request(
            self.inner.clone(),
            pr.owner.as_str(),
            pr.repo.as_str(),
            pr.number,
        )
        .await
    }

    async fn list_issue_comments(&self, pr: &PullRequestRef) -> GitHubResult<Vec<Comment>> {
        list_issue_comments::list_issue_comments(
            self.inner.clone(),
            pr.owner.as_str(),
            pr.repo.as_str(),
            pr.number,
        )
        .await
    }

    async fn create_issue_comment(&self, pr: &PullRequestRef, body: &str) -> GitHubResult<Comment> {
        add_issue_comment::add_issue_comment(
            self.inner.clone(),
            pr.owner.as_str(),
            pr.repo.as_str(),
            pr.number,
            body,
        )
        .await
    }

    async fn update_issue_comment(
        &self,
        pr: &PullRequestRef,
        comment_id: u64,
        body: &str,
    ) -> GitHubResult<Comment> {
        update_issue_comment::update_issue_comment(
            self.inner.clone(),
            pr.owner.as_str(),
            pr.repo.as_str(),
            comment_id,
            body,
        )
        .await
    }
}

/// Builder for creating `GitHubClient` with various authentication methods
pub struct GitHubClientBuilder {
    token: Option<String>,
    app_auth: Option<(AppId, String)>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            app_auth: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set GitHub App authentication (app ID and private key)
    pub fn app(mut self, app_id: AppId, private_key: impl Into<String>) -> Self {
        self.app_auth = Some((app_id, private_key.into()));
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        } else if let Some((app_id, private_key)) = self.app_auth {
            let key = EncodingKey::from_rsa_pem(private_key.as_bytes())
                .map_err(|e| GitHubError::ClientSetup(format!("Invalid RSA key: {e}")))?;
            builder = builder.app(app_id, key);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
