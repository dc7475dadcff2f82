use crate::models::submission::SubmissionDraft;
use crate::utils::error::{AppError, AppResult};

/// Invite links must point at a Discord invite to be accepted.
pub const INVITE_MARKER: &str = "discord.gg";

fn is_printable(s: &str) -> bool {
    s.chars().all(|c| !c.is_control())
}

pub fn validate_submission(draft: &SubmissionDraft) -> AppResult<()> {
    if draft.name.trim().is_empty() {
        return Err(AppError::Validation("Server name is required".to_string()));
    }

    if draft.name.len() > 64 {
        return Err(AppError::Validation(
            "Server name must be at most 64 characters long".to_string(),
        ));
    }

    if !is_printable(&draft.name) {
        return Err(AppError::Validation(
            "Server name must not contain control characters".to_string(),
        ));
    }

    if draft.description.trim().is_empty() {
        return Err(AppError::Validation(
            "Server description is required".to_string(),
        ));
    }

    if draft.description.len() > 280 {
        return Err(AppError::Validation(
            "Server description must be at most 280 characters long".to_string(),
        ));
    }

    if draft.full_description.len() > 4000 {
        return Err(AppError::Validation(
            "Full description must be at most 4000 characters long".to_string(),
        ));
    }

    if draft.invite_link.trim().is_empty() {
        return Err(AppError::Validation("Invite link is required".to_string()));
    }

    if !draft.invite_link.contains(INVITE_MARKER) {
        return Err(AppError::Validation(
            "Invite link must be a discord.gg invite".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SubmissionDraft {
        SubmissionDraft {
            name: "Pixel Painters".to_string(),
            icon: "/images/servers/pixel-painters.jpg".to_string(),
            description: "A cozy place to share digital art".to_string(),
            full_description: "Weekly prompts, critique channels and more".to_string(),
            invite_link: "https://discord.gg/pixelpainters".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_submission(&draft()).is_ok());
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert!(matches!(
            validate_submission(&d),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_description_rejected() {
        let mut d = draft();
        d.description = String::new();
        assert!(validate_submission(&d).is_err());
    }

    #[test]
    fn test_invite_without_marker_rejected() {
        let mut d = draft();
        d.invite_link = "https://example.com/join".to_string();
        assert!(matches!(
            validate_submission(&d),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let mut d = draft();
        d.name = "x".repeat(65);
        assert!(validate_submission(&d).is_err());
    }
}
