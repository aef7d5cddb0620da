//! Pull-request URL parsing.

use thiserror::Error;
use url::Url;

use crate::github::types::PullRequestRef;

/// Error from [`parse_pr_url`].
#[derive(Debug, Error)]
pub enum ParsePrUrlError {
    #[error("parsing pull-request URL")]
    Malformed(#[from] url::ParseError),

    #[error("too few path segments in pull-request URL (got {got}, want 4)")]
    TooFewSegments { got: usize },

    #[error("pull-request URL not in expected format")]
    UnexpectedFormat,

    #[error("parsing number from pull-request URL")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

/// Parse a pull-request URL of the form
/// `http(s)://HOST/OWNER/REPO/pull/NUMBER`.
///
/// Trailing path segments after the number (e.g. `/pull/42/files`) are
/// accepted and ignored.
pub fn parse_pr_url(raw: &str) -> Result<PullRequestRef, ParsePrUrlError> {
    let url = Url::parse(raw)?;
    let path = url.path().trim_start_matches('/');
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() < 4 {
        return Err(ParsePrUrlError::TooFewSegments { got: parts.len() });
    }
    if parts[2] != "pull" {
        return Err(ParsePrUrlError::UnexpectedFormat);
    }
    let number = parts[3].parse::<u64>()?;
    Ok(PullRequestRef {
        host: url.host_str().unwrap_or_default().to_string(),
        owner: parts[0].to_string(),
        repo: parts[1].to_string(),
        number,
    })
}
