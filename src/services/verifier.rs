use once_cell::sync::Lazy;
use rand::Rng;
use rustrict::{Censor, Type};
use serde::Serialize;
use std::time::Duration;

use crate::models::server::ModerationStatus;

pub const SAFE_REASON: &str =
    "Content meets community guidelines and is appropriate for all audiences.";
pub const NSFW_REASON: &str =
    "Content contains adult material that violates our community guidelines.";
pub const DUBIOUS_REASON: &str =
    "Content contains potentially inappropriate material that requires manual review.";

/// Simulated latency of the external moderation call.
static VERIFY_DELAY: Lazy<Duration> = Lazy::new(|| {
    let ms = std::env::var("VERIFY_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(2000);
    Duration::from_millis(ms)
});

pub fn configured_delay() -> Duration {
    *VERIFY_DELAY
}

/// Stand-in for an external moderation service. `Lexical` classifies the
/// submitted text itself; `Random` reproduces the historical 80/10/10
/// split of the mock it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierMode {
    Lexical,
    Random,
}

impl VerifierMode {
    pub fn from_env() -> Self {
        match std::env::var("VERIFIER_MODE").as_deref() {
            Ok("random") => VerifierMode::Random,
            _ => VerifierMode::Lexical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: ModerationStatus,
    pub reason: &'static str,
}

impl Verdict {
    fn for_status(status: ModerationStatus) -> Self {
        let reason = match status {
            ModerationStatus::Safe => SAFE_REASON,
            ModerationStatus::Nsfw => NSFW_REASON,
            ModerationStatus::Dubious => DUBIOUS_REASON,
        };
        Self { status, reason }
    }
}

/// Deterministic content check. Sexual or severe language is NSFW, any
/// other inappropriate language needs manual review, everything else
/// passes.
pub fn classify(text: &str) -> Verdict {
    let analysis = Censor::from_str(text).analyze();

    if analysis.is(Type::SEXUAL) || analysis.is(Type::SEVERE) {
        Verdict::for_status(ModerationStatus::Nsfw)
    } else if analysis.is(Type::INAPPROPRIATE) {
        Verdict::for_status(ModerationStatus::Dubious)
    } else {
        Verdict::for_status(ModerationStatus::Safe)
    }
}

fn roll() -> Verdict {
    let status = match rand::thread_rng().gen_range(0..10) {
        0..=7 => ModerationStatus::Safe,
        8 => ModerationStatus::Nsfw,
        _ => ModerationStatus::Dubious,
    };
    Verdict::for_status(status)
}

pub async fn verify(text: &str, mode: VerifierMode, delay: Duration) -> Verdict {
    tokio::time::sleep(delay).await;

    match mode {
        VerifierMode::Lexical => classify(text),
        VerifierMode::Random => roll(),
    }
}
