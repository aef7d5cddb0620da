//! GitHub issue comments listing operation.

use std::sync::Arc;

use octocrab::Octocrab;

use crate::github::error::GitHubError;
use crate::github::types::Comment;

/// Fetch the first page of comments for an issue or pull request.
///
/// Page size is the service default. There is no pagination loop: the
/// upsert flow only scans one page for a comment to update.
pub(crate) async fn list_issue_comments(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    number: u64,
) -> Result<Vec<Comment>, GitHubError> {
    let owner = owner.into();
    let repo = repo.into();
    log::trace!("list comments on {owner}/{repo}#{number}");
    let page = inner
        .issues(&owner, &repo)
        .list_comments(number)
        .send()
        .await
        .map_err(GitHubError::from)?;
    Ok(page.items.into_iter().map(Comment::from).collect())
}
