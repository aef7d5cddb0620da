//! GitHub issue comment update operation.

use std::sync::Arc;

use octocrab::{Octocrab, models::CommentId};

use crate::github::error::GitHubError;
use crate::github::types::Comment;

/// Replace the body of an existing issue comment.
pub(crate) async fn update_issue_comment(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    comment_id: u64,
    body: impl Into<String>,
) -> Result<Comment, GitHubError> {
    let owner = owner.into();
    let repo = repo.into();
    let body = body.into();
    log::trace!("update comment {comment_id} in {owner}/{repo}");
    let comment = inner
        .issues(&owner, &repo)
        .update_comment(CommentId(comment_id), body)
        .await
        .map_err(GitHubError::from)?;
    Ok(comment.into())
}
