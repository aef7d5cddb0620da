//! Add-or-update a single comment on a pull request.

use thiserror::Error;

use crate::github::error::GitHubError;
use crate::github::host::IssueHost;
use crate::github::types::{Comment, PullRequest, PullRequestRef};

/// Error from [`Commenter::upsert`], labelled with the stage that failed.
#[derive(Debug, Error)]
pub enum CommenterError {
    #[error("getting pull request")]
    FetchPullRequest(#[source] GitHubError),

    #[error("getting comment body")]
    GenerateBody(#[source] anyhow::Error),

    #[error("listing PR comments")]
    ListComments(#[source] GitHubError),

    #[error("updating PR comment")]
    UpdateComment(#[source] GitHubError),

    #[error("adding PR comment")]
    CreateComment(#[source] GitHubError),
}

/// Posts a comment to a pull request, or updates an existing one instead of
/// duplicating it.
///
/// The body generator is called with the freshly fetched pull request to
/// produce the comment body. When a matcher is configured via
/// [`match_comment`](Commenter::match_comment), the first existing comment it
/// accepts is edited in place; otherwise a new comment is created.
pub struct Commenter<H, B> {
    host: H,
    body: B,
    matcher: Option<Box<dyn Fn(&Comment) -> bool + Send + Sync>>,
}

impl<H, B> Commenter<H, B>
where
    H: IssueHost,
    B: Fn(&PullRequest) -> anyhow::Result<String>,
{
    /// Create a new `Commenter` over the given host.
    ///
    /// Without a matcher, [`upsert`](Commenter::upsert) always creates a new
    /// comment.
    pub fn new(host: H, body: B) -> Self {
        Commenter {
            host,
            body,
            matcher: None,
        }
    }

    /// Set the predicate that picks the existing comment to update.
    pub fn match_comment<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&Comment) -> bool + Send + Sync + 'static,
    {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Ensure the pull request carries exactly one comment with the freshly
    /// generated body: edit the first comment the matcher accepts, or create
    /// a new one when nothing matches.
    ///
    /// Performs at most one write per call (one edit or one create), and no
    /// write at all if any earlier step fails. Errors are propagated with
    /// their stage label, never retried. Only the first page of comments is
    /// scanned.
    ///
    /// Concurrent upserts against the same pull request are not coordinated:
    /// two callers can both decide to create and end up with two comments.
    pub async fn upsert(&self, pr: &PullRequestRef) -> Result<(), CommenterError> {
        let pull = self
            .host
            .get_pull_request(pr)
            .await
            .map_err(CommenterError::FetchPullRequest)?;

        let body = (self.body)(&pull).map_err(CommenterError::GenerateBody)?;

        let comments = self
            .host
            .list_issue_comments(pr)
            .await
            .map_err(CommenterError::ListComments)?;

        if let Some(matcher) = &self.matcher {
            if let Some(existing) = comments.iter().find(|c| matcher(c)) {
                log::debug!("updating comment {} on {pr}", existing.id);
                self.host
                    .update_issue_comment(pr, existing.id, &body)
                    .await
                    .map_err(CommenterError::UpdateComment)?;
                return Ok(());
            }
        }

        log::debug!("adding comment on {pr}");
        self.host
            .create_issue_comment(pr, &body)
            .await
            .map_err(CommenterError::CreateComment)?;
        Ok(())
    }
}
