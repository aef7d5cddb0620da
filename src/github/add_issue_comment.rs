//! GitHub issue comment creation operation.

use std::sync::Arc;

use octocrab::Octocrab;

use crate::github::error::GitHubError;
use crate::github::types::Comment;

/// Add a comment to an issue or pull request.
pub(crate) async fn add_issue_comment(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    number: u64,
    body: impl Into<String>,
) -> Result<Comment, GitHubError> {
    let owner = owner.into();
    let repo = repo.into();
    let body = body.into();
    log::trace!("add comment on {owner}/{repo}#{number}");
    let comment = inner
        .issues(&owner, &repo)
        .create_comment(number, body)
        .await
        .map_err(GitHubError::from)?;
    Ok(comment.into())
}
