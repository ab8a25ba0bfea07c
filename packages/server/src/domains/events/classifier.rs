//! Classification of inbound webhook payloads into normalized events.
//!
//! Pure and synchronous: no I/O, no shared state, safe to call from any
//! number of request handlers at once. The HTTP layer stamps the timestamp
//! and hands the result to the event sink.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

use super::errors::ClassifyError;
use super::models::{ActionKind, Event};
use super::payload::{PullRequestEnvelope, PushPayload, WebhookPayload};

/// How pull-request payloads are sub-classified.
///
/// The webhook schema grew a lifecycle `action` tag over time, and payload
/// shape alone cannot tell an early-schema delivery from a current one that
/// merely dropped the tag. The active rule set is therefore explicit
/// configuration (`WEBHOOK_DISPATCH_MODE`), never inferred from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Dispatch on the `action` tag; a missing or unknown tag is an error.
    #[default]
    ActionTag,
    /// Pre-tag schema: `pull_request.merged` selects `MERGE`, everything
    /// else is a generic `PULL_REQUEST`.
    Legacy,
}

#[derive(Debug, Error)]
#[error("unknown dispatch mode '{0}' (expected 'action-tag' or 'legacy')")]
pub struct ParseDispatchModeError(String);

impl FromStr for DispatchMode {
    type Err = ParseDispatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action-tag" => Ok(Self::ActionTag),
            "legacy" => Ok(Self::Legacy),
            other => Err(ParseDispatchModeError(other.to_string())),
        }
    }
}

/// A classified event minus its timestamp.
///
/// The caller assigns the timestamp at the moment classification succeeds;
/// timestamps embedded in the payload are informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub request_id: String,
    pub author: String,
    pub action: ActionKind,
    pub from_branch: Option<String>,
    pub to_branch: String,
}

impl Classification {
    pub fn into_event(self, timestamp: DateTime<Utc>) -> Event {
        Event {
            request_id: self.request_id,
            author: self.author,
            action: self.action,
            from_branch: self.from_branch,
            to_branch: self.to_branch,
            timestamp,
        }
    }
}

/// Map a raw webhook payload to a normalized classification.
///
/// Shape selection runs first (push wins when a payload somehow carries both
/// `commits`+`pusher` and `pull_request`), then the per-shape rules derive
/// the event fields.
pub fn classify(payload: &Value, mode: DispatchMode) -> Result<Classification, ClassifyError> {
    match WebhookPayload::parse(payload)? {
        WebhookPayload::Push(push) => classify_push(push),
        WebhookPayload::PullRequest(envelope) => classify_pull_request(envelope, mode),
    }
}

fn classify_push(push: PushPayload) -> Result<Classification, ClassifyError> {
    let to_branch = branch_from_ref(&push.git_ref)?;
    // Non-empty guaranteed by the parse step.
    let first_commit = &push.commits[0];

    Ok(Classification {
        request_id: required("commits[0].id", first_commit.id.clone())?,
        author: required("pusher.name", push.pusher.name)?,
        action: ActionKind::Push,
        from_branch: None,
        to_branch,
    })
}

fn classify_pull_request(
    envelope: PullRequestEnvelope,
    mode: DispatchMode,
) -> Result<Classification, ClassifyError> {
    let pr = envelope.pull_request;
    let author = required("pull_request.user.login", pr.user.login)?;
    let from_branch = required("pull_request.head.ref", pr.head.branch)?;
    let to_branch = required("pull_request.base.ref", pr.base.branch)?;

    let action = match mode {
        DispatchMode::ActionTag => match envelope.action.as_deref() {
            Some("opened") => ActionKind::PullRequestOpened,
            Some("review_requested") => ActionKind::PullRequestReviewRequested,
            Some("closed") if pr.merged => ActionKind::Merge,
            Some("closed") => ActionKind::PullRequestClosed,
            Some(other) => return Err(ClassifyError::UnrecognizedAction(other.to_string())),
            None => return Err(ClassifyError::UnrecognizedAction("missing".to_string())),
        },
        DispatchMode::Legacy => {
            if pr.merged {
                ActionKind::Merge
            } else {
                ActionKind::PullRequest
            }
        }
    };

    Ok(Classification {
        request_id: pr.id.to_string(),
        author,
        action,
        from_branch: Some(from_branch),
        to_branch,
    })
}

fn required(field: &str, value: String) -> Result<String, ClassifyError> {
    if value.is_empty() {
        return Err(ClassifyError::MalformedPayload(format!("{} is empty", field)));
    }
    Ok(value)
}

/// Final path segment of a `refs/heads/<branch>` ref.
///
/// Branch names may themselves contain slashes; the feed displays only the
/// last segment (`refs/heads/feature/login` -> `login`).
fn branch_from_ref(git_ref: &str) -> Result<String, ClassifyError> {
    match git_ref.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => Ok(segment.to_string()),
        _ => Err(ClassifyError::MalformedPayload(format!(
            "ref '{}' has no branch segment",
            git_ref
        ))),
    }
}
