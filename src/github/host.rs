//! Trait abstraction over the issue-tracker operations the upsert flow uses.

use std::future::Future;

use crate::github::error::GitHubResult;
use crate::github::types::{Comment, PullRequest, PullRequestRef};

/// The four remote operations [`Commenter`](crate::Commenter) depends on.
///
/// Deliberately narrower than the full API client so a test double can stand
/// in without network access. [`GitHubClient`](crate::GitHubClient) is the
/// production implementation.
pub trait IssueHost: Send + Sync {
    /// Fetch a pull request by number.
    fn get_pull_request(
        &self,
        pr: &PullRequestRef,
    ) -> impl Future<Output = GitHubResult<PullRequest>> + Send;

    /// List comments on the pull request's issue thread.
    ///
    /// Returns the first page at the service's default page size; callers
    /// that need every comment must not rely on this.
    fn list_issue_comments(
        &self,
        pr: &PullRequestRef,
    ) -> impl Future<Output = GitHubResult<Vec<Comment>>> + Send;

    /// Create a new comment on the pull request's issue thread.
    fn create_issue_comment(
        &self,
        pr: &PullRequestRef,
        body: &str,
    ) -> impl Future<Output = GitHubResult<Comment>> + Send;

    /// Replace the body of an existing comment.
    fn update_issue_comment(
        &self,
        pr: &PullRequestRef,
        comment_id: u64,
        body: &str,
    ) -> impl Future<Output = GitHubResult<Comment>> + Send;
}

impl<H: IssueHost> IssueHost for &H {
    fn get_pull_request(
        &self,
        pr: &PullRequestRef,
    ) -> impl Future<Output = GitHubResult<PullRequest>> + Send {
        (**self).get_pull_request(pr)
    }

    fn list_issue_comments(
        &self,
        pr: &PullRequestRef,
    ) -> impl Future<Output = GitHubResult<Vec<Comment>>> + Send {
        (**self).list_issue_comments(pr)
    }

    fn create_issue_comment(
        &self,
        pr: &PullRequestRef,
        body: &str,
    ) -> impl Future<Output = GitHubResult<Comment>> + Send {
        (**self).create_issue_comment(pr, body)
    }

    fn update_issue_comment(
        &self,
        pr: &PullRequestRef,
        comment_id: u64,
        body: &str,
    ) -> impl Future<Output = GitHubResult<Comment>> + Send {
        (**self).update_issue_comment(pr, comment_id, body)
    }
}
