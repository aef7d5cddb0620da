//! Integration tests for the comment upsert flow, against an in-memory host.

use std::sync::Mutex;

use pr_commenter::{
    Comment, Commenter, CommenterError, GitHubError, GitHubResult, IssueHost, PullRequest,
    PullRequestRef, User,
};

/// A network write issued through the host.
#[derive(Debug, PartialEq, Eq)]
enum Write {
    Create(String),
    Update(u64, String),
}

/// `IssueHost` double that records every write instead of talking to GitHub.
#[derive(Default)]
struct RecordingHost {
    comments: Vec<Comment>,
    fail_fetch: bool,
    fail_list: bool,
    fail_create: bool,
    writes: Mutex<Vec<Write>>,
}

impl RecordingHost {
    fn with_comments(comments: Vec<Comment>) -> Self {
        RecordingHost {
            comments,
            ..Default::default()
        }
    }

    fn writes(&self) -> Vec<Write> {
        std::mem::take(&mut *self.writes.lock().unwrap())
    }
}

impl IssueHost for RecordingHost {
    async fn get_pull_request(&self, pr: &PullRequestRef) -> GitHubResult<PullRequest> {
        if self.fail_fetch {
            return Err(GitHubError::from("no such pull request"));
        }
        Ok(PullRequest {
            number: pr.number,
            title: "Add widgets".to_string(),
            body: None,
            html_url: format!(
                "https://github.com/{}/{}/pull/{}",
                pr.owner, pr.repo, pr.number
            ),
            user: Some(User {
                login: "octocat".into(),
                id: 1,
            }),
            updated_at: None,
        })
    }

    async fn list_issue_comments(&self, _pr: &PullRequestRef) -> GitHubResult<Vec<Comment>> {
        if self.fail_list {
            return Err(GitHubError::from("listing failed"));
        }
        Ok(self.comments.clone())
    }

    async fn create_issue_comment(&self, _pr: &PullRequestRef, body: &str) -> GitHubResult<Comment> {
        if self.fail_create {
            return Err(GitHubError::from("creation failed"));
        }
        self.writes
            .lock()
            .unwrap()
            .push(Write::Create(body.to_string()));
        Ok(comment(99, body))
    }

    async fn update_issue_comment(
        &self,
        _pr: &PullRequestRef,
        comment_id: u64,
        body: &str,
    ) -> GitHubResult<Comment> {
        self.writes
            .lock()
            .unwrap()
            .push(Write::Update(comment_id, body.to_string()));
        Ok(comment(comment_id, body))
    }
}

fn comment(id: u64, body: &str) -> Comment {
    Comment {
        id,
        body: body.to_string(),
        user: User {
            login: "bot".into(),
            id: 2,
        },
        html_url: String::new(),
        updated_at: None,
    }
}

fn pr() -> PullRequestRef {
    PullRequestRef {
        host: "github.com".into(),
        owner: "acme".into(),
        repo: "widgets".into(),
        number: 42,
    }
}

fn report_body(pull: &PullRequest) -> anyhow::Result<String> {
    Ok(format!("Build report for `{}`.", pull.title))
}

const GENERATED: &str = "Build report for `Add widgets`.";

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn creates_when_no_matcher_configured() {
    init_logs();
    let host = RecordingHost::with_comments(vec![comment(1, "unrelated")]);
    let commenter = Commenter::new(&host, report_body);

    commenter.upsert(&pr()).await.unwrap();

    assert_eq!(host.writes(), vec![Write::Create(GENERATED.to_string())]);
}

#[tokio::test]
async fn creates_when_matcher_never_matches() {
    let host = RecordingHost::with_comments(vec![comment(1, "lgtm"), comment(2, "ship it")]);
    let commenter = Commenter::new(&host, report_body).match_comment(|_| false);

    commenter.upsert(&pr()).await.unwrap();

    assert_eq!(host.writes(), vec![Write::Create(GENERATED.to_string())]);
}

#[tokio::test]
async fn updates_first_matching_comment_only() {
    init_logs();
    let host = RecordingHost::with_comments(vec![
        comment(1, "lgtm"),
        comment(2, "Build report for `old title`."),
        comment(3, "Build report for `older title`."),
    ]);
    let commenter = Commenter::new(&host, report_body)
        .match_comment(|c| c.body.starts_with("Build report"));

    commenter.upsert(&pr()).await.unwrap();

    assert_eq!(host.writes(), vec![Write::Update(2, GENERATED.to_string())]);
}

#[tokio::test]
async fn body_generator_failure_writes_nothing() {
    let host = RecordingHost::with_comments(vec![comment(1, "Build report")]);
    let commenter = Commenter::new(&host, |_: &PullRequest| -> anyhow::Result<String> {
        Err(anyhow::anyhow!("template rendering failed"))
    })
    .match_comment(|_| true);

    let err = commenter.upsert(&pr()).await.unwrap_err();

    assert!(matches!(err, CommenterError::GenerateBody(_)));
    assert!(host.writes().is_empty());
}

#[tokio::test]
async fn list_failure_writes_nothing() {
    let host = RecordingHost {
        fail_list: true,
        ..Default::default()
    };
    let commenter = Commenter::new(&host, report_body).match_comment(|_| true);

    let err = commenter.upsert(&pr()).await.unwrap_err();

    assert!(matches!(err, CommenterError::ListComments(_)));
    assert_eq!(err.to_string(), "listing PR comments");
    assert!(host.writes().is_empty());
}

#[tokio::test]
async fn fetch_failure_writes_nothing() {
    let host = RecordingHost {
        fail_fetch: true,
        ..Default::default()
    };
    let commenter = Commenter::new(&host, report_body);

    let err = commenter.upsert(&pr()).await.unwrap_err();

    assert!(matches!(err, CommenterError::FetchPullRequest(_)));
    assert!(host.writes().is_empty());
}

#[tokio::test]
async fn create_failure_reports_stage() {
    let host = RecordingHost {
        fail_create: true,
        ..Default::default()
    };
    let commenter = Commenter::new(&host, report_body);

    let err = commenter.upsert(&pr()).await.unwrap_err();

    assert!(matches!(err, CommenterError::CreateComment(_)));
    assert_eq!(err.to_string(), "adding PR comment");
    assert!(host.writes().is_empty());
}

#[test]
fn comment_deserializes_from_api_json() {
    let comment: Comment = serde_json::from_value(serde_json::json!({
        "id": 7,
        "body": "Build report for `Add widgets`.",
        "user": { "login": "bot", "id": 2 },
        "html_url": "https://github.com/acme/widgets/pull/42#issuecomment-7",
        "updated_at": null,
    }))
    .unwrap();

    assert_eq!(comment.id, 7);
    assert_eq!(comment.user.login, "bot");
    assert!(comment.updated_at.is_none());
}
