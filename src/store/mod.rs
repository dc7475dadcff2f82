pub mod votes;

use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::category::Category;
use crate::models::server::Server;
use crate::models::submission::SubmissionRecord;
use crate::store::votes::VoteLedger;
use crate::utils::error::{AppError, AppResult};

const SERVERS_FIXTURE: &str = include_str!("../data/servers.json");
const CATEGORIES_FIXTURE: &str = include_str!("../data/categories.json");

#[derive(Deserialize)]
struct ServersFixture {
    servers: Vec<Server>,
}

#[derive(Deserialize)]
struct CategoriesFixture {
    categories: Vec<Category>,
}

/// In-memory directory state. Fixture servers are loaded once at startup
/// and sorted by votes descending; submitted servers are appended and
/// survive only until restart. The vote ledger is the single durable
/// piece of state.
pub struct Directory {
    servers: RwLock<Vec<Server>>,
    categories: Vec<Category>,
    submissions: RwLock<HashMap<Uuid, SubmissionRecord>>,
    votes: VoteLedger,
}

impl Directory {
    pub fn from_fixtures(votes: VoteLedger) -> AppResult<Self> {
        let ServersFixture { mut servers } = serde_json::from_str(SERVERS_FIXTURE)
            .map_err(|e| AppError::Fixture(format!("Failed to parse servers fixture: {}", e)))?;
        let CategoriesFixture { categories } = serde_json::from_str(CATEGORIES_FIXTURE)
            .map_err(|e| AppError::Fixture(format!("Failed to parse categories fixture: {}", e)))?;

        // Stable sort keeps fixture order for equal vote counts. Ranking
        // is fixed at load time; later votes do not reorder the list.
        servers.sort_by(|a, b| b.votes.cmp(&a.votes));

        Ok(Self {
            servers: RwLock::new(servers),
            categories,
            submissions: RwLock::new(HashMap::new()),
            votes,
        })
    }

    pub async fn servers(&self) -> Vec<Server> {
        self.servers.read().await.clone()
    }

    pub async fn server_count(&self) -> usize {
        self.servers.read().await.len()
    }

    pub async fn server_by_id(&self, id: &str) -> Option<Server> {
        self.servers
            .read()
            .await
            .iter()
            .find(|server| server.id == id)
            .cloned()
    }

    pub async fn insert_server(&self, server: Server) {
        self.servers.write().await.push(server);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Records a vote for `id` by `voter`. Returns the current vote count
    /// and whether the vote was newly counted, or `None` for an unknown
    /// server. A repeat vote by the same voter is a no-op, which keeps the
    /// vote count monotonically non-decreasing and exact.
    pub async fn record_vote(&self, voter: &str, id: &str) -> Option<(i64, bool)> {
        let mut servers = self.servers.write().await;
        let server = servers.iter_mut().find(|server| server.id == id)?;

        if self.votes.has_voted(voter, id).await {
            return Some((server.votes, false));
        }

        server.votes += 1;
        let votes = server.votes;
        drop(servers);

        self.votes.mark_voted(voter, id).await;
        Some((votes, true))
    }

    pub async fn insert_submission(&self, record: SubmissionRecord) {
        self.submissions.write().await.insert(record.id, record);
    }

    pub async fn submission(&self, id: Uuid) -> Option<SubmissionRecord> {
        self.submissions.read().await.get(&id).cloned()
    }

    pub async fn submission_count(&self) -> usize {
        self.submissions.read().await.len()
    }

    pub async fn update_submission<F>(&self, id: Uuid, update: F)
    where
        F: FnOnce(&mut SubmissionRecord),
    {
        if let Some(record) = self.submissions.write().await.get_mut(&id) {
            update(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Directory {
        Directory::from_fixtures(VoteLedger::in_memory()).expect("fixtures should parse")
    }

    #[tokio::test]
    async fn test_fixtures_load_sorted_by_votes() {
        let directory = directory();
        let servers = directory.servers().await;
        assert!(!servers.is_empty());
        assert!(servers.windows(2).all(|w| w[0].votes >= w[1].votes));
    }

    #[tokio::test]
    async fn test_fixture_servers_have_categories() {
        let directory = directory();
        for server in directory.servers().await {
            assert!(!server.categories.is_empty(), "{} has no categories", server.id);
        }
    }

    #[tokio::test]
    async fn test_vote_increments_once_per_voter() {
        let directory = directory();
        let id = directory.servers().await[0].id.clone();
        let before = directory.server_by_id(&id).await.unwrap().votes;

        let (votes, counted) = directory.record_vote("alice", &id).await.unwrap();
        assert!(counted);
        assert_eq!(votes, before + 1);

        let (votes, counted) = directory.record_vote("alice", &id).await.unwrap();
        assert!(!counted);
        assert_eq!(votes, before + 1);

        // A different voter still counts.
        let (votes, counted) = directory.record_vote("bob", &id).await.unwrap();
        assert!(counted);
        assert_eq!(votes, before + 2);
    }

    #[tokio::test]
    async fn test_vote_on_unknown_server() {
        let directory = directory();
        assert!(directory.record_vote("alice", "no-such-server").await.is_none());
    }
}
