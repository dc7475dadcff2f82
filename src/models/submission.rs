use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transient form state a user submits for listing. Validated before any
/// asynchronous work starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    pub invite_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub draft: SubmissionDraft,
    pub state: SubmissionState,
    pub error: Option<String>,
    pub server_id: Option<String>,
    pub created_at: String,
}

impl SubmissionRecord {
    /// A record only exists once validation has passed, so it is born in
    /// the `submitting` state. A draft that fails validation stays `idle`
    /// on the caller's side and never reaches the store.
    pub fn new(draft: SubmissionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            draft,
            state: SubmissionState::Submitting,
            error: None,
            server_id: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
