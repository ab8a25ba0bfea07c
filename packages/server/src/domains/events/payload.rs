//! Typed shapes for inbound webhook payloads.
//!
//! GitHub delivers one loosely-structured JSON object for every kind of
//! activity. Instead of probing fields all over the classifier, the payload
//! is parsed up front into a tagged sum of the shapes we recognize, so a
//! missing or mistyped field surfaces as `MalformedPayload` in one place.

use serde::Deserialize;
use serde_json::Value;

use super::errors::ClassifyError;

/// A recognized webhook payload shape.
///
/// Shape selection is by top-level key presence, in priority order: a payload
/// carrying both `commits` and `pusher` is a push, even if it also carries a
/// `pull_request` object.
#[derive(Debug)]
pub enum WebhookPayload {
    Push(PushPayload),
    PullRequest(PullRequestEnvelope),
}

/// Push deliveries: `ref` + `pusher` + the commit list.
#[derive(Debug, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub pusher: Pusher,
    pub commits: Vec<Commit>,
}

#[derive(Debug, Deserialize)]
pub struct Pusher {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Commit {
    pub id: String,
}

/// Pull-request deliveries: the PR object plus the webhook's own lifecycle
/// tag (`opened`, `closed`, ...). Early schema versions omit the tag.
#[derive(Debug, Deserialize)]
pub struct PullRequestEnvelope {
    pub action: Option<String>,
    pub pull_request: PullRequest,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub user: User,
    pub head: BranchRef,
    pub base: BranchRef,
    #[serde(default)]
    pub merged: bool,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub branch: String,
}

impl WebhookPayload {
    /// Parse a raw payload tree into a typed shape.
    ///
    /// `UnrecognizedPayload` when no shape matches; `MalformedPayload` when a
    /// shape matches but deserialization fails or the commit list is empty.
    pub fn parse(payload: &Value) -> Result<Self, ClassifyError> {
        let object = payload
            .as_object()
            .ok_or(ClassifyError::UnrecognizedPayload)?;

        if object.contains_key("commits") && object.contains_key("pusher") {
            let push: PushPayload = serde_json::from_value(payload.clone())
                .map_err(|e| ClassifyError::MalformedPayload(e.to_string()))?;
            if push.commits.is_empty() {
                return Err(ClassifyError::MalformedPayload(
                    "push payload has an empty commits list".to_string(),
                ));
            }
            return Ok(WebhookPayload::Push(push));
        }

        if object.contains_key("pull_request") {
            let envelope: PullRequestEnvelope = serde_json::from_value(payload.clone())
                .map_err(|e| ClassifyError::MalformedPayload(e.to_string()))?;
            return Ok(WebhookPayload::PullRequest(envelope));
        }

        Err(ClassifyError::UnrecognizedPayload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn push_wins_over_pull_request_when_both_are_present() {
        let payload = json!({
            "commits": [{"id": "abc"}],
            "pusher": {"name": "alice"},
            "ref": "refs/heads/main",
            "pull_request": {
                "id": 1,
                "user": {"login": "bob"},
                "head": {"ref": "feat"},
                "base": {"ref": "main"}
            }
        });

        assert!(matches!(
            WebhookPayload::parse(&payload).unwrap(),
            WebhookPayload::Push(_)
        ));
    }

    #[test]
    fn empty_commit_list_is_malformed() {
        let payload = json!({
            "commits": [],
            "pusher": {"name": "alice"},
            "ref": "refs/heads/main"
        });

        assert!(matches!(
            WebhookPayload::parse(&payload),
            Err(ClassifyError::MalformedPayload(_))
        ));
    }

    #[test]
    fn missing_pr_fields_are_malformed() {
        // head/base missing
        let payload = json!({
            "pull_request": {"id": 7, "user": {"login": "bob"}},
            "action": "opened"
        });

        assert!(matches!(
            WebhookPayload::parse(&payload),
            Err(ClassifyError::MalformedPayload(_))
        ));
    }

    #[test]
    fn non_object_payload_is_unrecognized() {
        assert!(matches!(
            WebhookPayload::parse(&json!([1, 2, 3])),
            Err(ClassifyError::UnrecognizedPayload)
        ));
        assert!(matches!(
            WebhookPayload::parse(&json!("push")),
            Err(ClassifyError::UnrecognizedPayload)
        ));
    }
}
