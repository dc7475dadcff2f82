use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Per-voter record of which servers have already been voted for, the
/// durable analogue of the web client's local `votes` record. The whole
/// map is written back as one serialized JSON document on every mutation.
type VoteMap = HashMap<String, HashMap<String, bool>>;

pub struct VoteLedger {
    path: Option<PathBuf>,
    voted: RwLock<VoteMap>,
}

impl VoteLedger {
    pub fn load(path: PathBuf) -> Self {
        let voted = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable vote ledger {}: {}", path.display(), e);
                    VoteMap::new()
                }
            },
            Err(_) => VoteMap::new(),
        };

        Self {
            path: Some(path),
            voted: RwLock::new(voted),
        }
    }

    /// Ledger without a backing file, used in tests.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            voted: RwLock::new(VoteMap::new()),
        }
    }

    pub async fn has_voted(&self, voter: &str, server_id: &str) -> bool {
        self.voted
            .read()
            .await
            .get(voter)
            .and_then(|record| record.get(server_id))
            .copied()
            .unwrap_or(false)
    }

    pub async fn mark_voted(&self, voter: &str, server_id: &str) {
        let snapshot = {
            let mut voted = self.voted.write().await;
            voted
                .entry(voter.to_string())
                .or_default()
                .insert(server_id.to_string(), true);
            voted.clone()
        };

        self.persist(&snapshot).await;
    }

    async fn persist(&self, snapshot: &VoteMap) {
        let Some(path) = &self.path else {
            return;
        };

        let serialized = match serde_json::to_string_pretty(snapshot) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Failed to serialize vote ledger: {}", e);
                return;
            }
        };

        if let Err(e) = tokio::fs::write(path, serialized).await {
            tracing::warn!("Failed to persist vote ledger to {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_mark_and_check() {
        let ledger = VoteLedger::in_memory();
        assert!(!ledger.has_voted("alice", "s1").await);

        ledger.mark_voted("alice", "s1").await;
        assert!(ledger.has_voted("alice", "s1").await);
        assert!(!ledger.has_voted("alice", "s2").await);
        assert!(!ledger.has_voted("bob", "s1").await);
    }

    #[tokio::test]
    async fn test_ledger_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("votes-{}.json", Uuid::new_v4()));

        {
            let ledger = VoteLedger::load(path.clone());
            ledger.mark_voted("alice", "s1").await;
            ledger.mark_voted("bob", "s2").await;
        }

        let reloaded = VoteLedger::load(path.clone());
        assert!(reloaded.has_voted("alice", "s1").await);
        assert!(reloaded.has_voted("bob", "s2").await);
        assert!(!reloaded.has_voted("alice", "s2").await);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_corrupt_ledger_starts_empty() {
        let path = std::env::temp_dir().join(format!("votes-{}.json", Uuid::new_v4()));
        std::fs::write(&path, "not json").expect("write test file");

        let ledger = VoteLedger::load(path.clone());
        assert!(!ledger.has_voted("alice", "s1").await);

        let _ = std::fs::remove_file(path);
    }
}
