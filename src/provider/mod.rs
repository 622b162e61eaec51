use crate::{
    domain::{Ticket, User},
    error::Result,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;
pub mod static_data;

pub use http::HttpDataProvider;
pub use static_data::StaticDataProvider;

/// Tickets and users as delivered by the board API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl BoardData {
    pub fn new(tickets: Vec<Ticket>, users: Vec<User>) -> Self {
        Self { tickets, users }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Source of board data
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches the current tickets and users
    async fn fetch(&self) -> Result<BoardData>;
}
