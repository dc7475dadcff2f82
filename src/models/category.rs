use serde::{Deserialize, Serialize};

/// Fixture-backed category. Static, never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}
