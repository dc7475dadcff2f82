use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::models::server::{ModerationStatus, Server};
use crate::models::submission::{SubmissionDraft, SubmissionRecord, SubmissionState};
use crate::services::categorizer::suggest_categories;
use crate::services::verifier::{self, VerifierMode};
use crate::store::Directory;
use crate::utils::error::AppResult;
use crate::utils::validation::validate_submission;

/// Validates a draft and, if it passes, stores a record in the
/// `submitting` state. Validation failures return before anything is
/// stored or any asynchronous work starts; the caller's form stays idle
/// and retries by submitting again.
pub async fn begin(directory: &Directory, draft: SubmissionDraft) -> AppResult<SubmissionRecord> {
    validate_submission(&draft)?;

    let record = SubmissionRecord::new(draft);
    directory.insert_submission(record.clone()).await;

    tracing::info!("Submission {} accepted for verification", record.id);
    Ok(record)
}

/// Drives a stored submission through categorization and verification.
/// An NSFW verdict routes the record to `error` and stores nothing;
/// anything else becomes a listed server with zero votes and members and
/// the record reaches `success` carrying the new server id.
pub async fn run(directory: Arc<Directory>, id: Uuid, mode: VerifierMode, delay: Duration) {
    let Some(record) = directory.submission(id).await else {
        tracing::warn!("Submission {} vanished before verification", id);
        return;
    };

    let draft = record.draft;
    let categories =
        suggest_categories(&draft.name, &draft.description, &draft.full_description);
    let text = format!(
        "{} {} {}",
        draft.name, draft.description, draft.full_description
    );

    let verdict = verifier::verify(&text, mode, delay).await;

    if verdict.status == ModerationStatus::Nsfw {
        tracing::info!("Submission {} rejected: {}", id, verdict.reason);
        directory
            .update_submission(id, |record| {
                record.state = SubmissionState::Error;
                record.error = Some(verdict.reason.to_string());
            })
            .await;
        return;
    }

    let server = Server::from_draft(draft, categories, verdict.status);
    let server_id = server.id.clone();
    directory.insert_server(server).await;

    directory
        .update_submission(id, |record| {
            record.state = SubmissionState::Success;
            record.server_id = Some(server_id.clone());
        })
        .await;

    tracing::info!(
        "Submission {} verified {} and listed as server {}",
        id,
        verdict.status,
        server_id
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::votes::VoteLedger;

    fn directory() -> Arc<Directory> {
        Arc::new(Directory::from_fixtures(VoteLedger::in_memory()).expect("fixtures should parse"))
    }

    fn draft(description: &str) -> SubmissionDraft {
        SubmissionDraft {
            name: "Study Corner".to_string(),
            icon: String::new(),
            description: description.to_string(),
            full_description: String::new(),
            invite_link: "https://discord.gg/studycorner".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_draft_rejected_before_any_work() {
        let directory = directory();
        let mut bad = draft("a study group");
        bad.invite_link = "https://example.com/nope".to_string();

        assert!(begin(&directory, bad).await.is_err());
        assert_eq!(directory.submission_count().await, 0);
    }

    #[tokio::test]
    async fn test_clean_submission_reaches_success() {
        let directory = directory();
        let servers_before = directory.server_count().await;

        let record = begin(&directory, draft("a quiet study group for exams"))
            .await
            .expect("valid draft");
        assert_eq!(record.state, SubmissionState::Submitting);

        run(
            directory.clone(),
            record.id,
            VerifierMode::Lexical,
            Duration::ZERO,
        )
        .await;

        let record = directory.submission(record.id).await.unwrap();
        assert_eq!(record.state, SubmissionState::Success);
        let server_id = record.server_id.expect("success carries the server id");

        let server = directory.server_by_id(&server_id).await.unwrap();
        assert_eq!(server.votes, 0);
        assert_eq!(server.members, 0);
        assert!(!server.categories.is_empty());
        assert_eq!(directory.server_count().await, servers_before + 1);
    }

    #[tokio::test]
    async fn test_nsfw_submission_is_never_stored() {
        let directory = directory();
        let servers_before = directory.server_count().await;

        let record = begin(&directory, draft("explicit porn and adult content, 18+ only"))
            .await
            .expect("structurally valid draft");

        run(
            directory.clone(),
            record.id,
            VerifierMode::Lexical,
            Duration::ZERO,
        )
        .await;

        let record = directory.submission(record.id).await.unwrap();
        assert_eq!(record.state, SubmissionState::Error);
        assert!(record.server_id.is_none());
        assert!(record.error.is_some());
        assert_eq!(directory.server_count().await, servers_before);
    }

    #[tokio::test]
    async fn test_fallback_category_applied() {
        let directory = directory();
        let record = begin(&directory, draft("zzzz qqqq"))
            .await
            .expect("valid draft");

        run(
            directory.clone(),
            record.id,
            VerifierMode::Lexical,
            Duration::ZERO,
        )
        .await;

        let record = directory.submission(record.id).await.unwrap();
        let server = directory
            .server_by_id(&record.server_id.unwrap())
            .await
            .unwrap();
        assert_eq!(server.categories, vec!["Community"]);
    }
}
