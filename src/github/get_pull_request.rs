//! GitHub pull request retrieval operation.

use std::sync::Arc;

use octocrab::Octocrab;

use crate::github::error::GitHubError;
use crate::github::types::PullRequest;

/// Get a single pull request.
pub(crate) async fn get_pull_request(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    number: u64,
) -> Result<PullRequest, GitHubError> {
    let owner = owner.into();
    let repo = repo.into();
    log::trace!("get pull request {owner}/{repo}#{number}");
    let pr = inner
        .pulls(&owner, &repo)
        .get(number)
        .await
        .map_err(GitHubError::from)?;
    Ok(pr.into())
}
