use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub search API response structures
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub items: Option<Vec<Repository>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub owner: Option<Account>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub avatar_url: Option<String>,
}
