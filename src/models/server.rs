use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::submission::SubmissionDraft;

/// Outcome assigned to a server by the moderation verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModerationStatus {
    Safe,
    Nsfw,
    Dubious,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Safe => "SAFE",
            ModerationStatus::Nsfw => "NSFW",
            ModerationStatus::Dubious => "DUBIOUS",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SAFE" => Ok(ModerationStatus::Safe),
            "NSFW" => Ok(ModerationStatus::Nsfw),
            "DUBIOUS" => Ok(ModerationStatus::Dubious),
            other => Err(format!("Unknown moderation status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub full_description: String,
    pub invite_link: String,
    pub members: i64,
    pub categories: Vec<String>,
    pub status: ModerationStatus,
    pub votes: i64,
    pub created_at: String,
}

impl Server {
    /// Promotes a validated submission draft to a listed server.
    /// New listings start with zero votes and zero members.
    pub fn from_draft(
        draft: SubmissionDraft,
        categories: Vec<String>,
        status: ModerationStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            icon: draft.icon,
            description: draft.description,
            full_description: draft.full_description,
            invite_link: draft.invite_link,
            members: 0,
            categories,
            status,
            votes: 0,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
