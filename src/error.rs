use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid ticket priority {0}: expected a value between 0 and 4")]
    InvalidPriority(i64),

    #[error("Invalid ticket status '{0}'. Valid statuses: Todo, In Progress, Done, Canceled")]
    InvalidStatus(String),

    #[error("Invalid grouping '{0}'. Valid groupings: status, user, priority")]
    InvalidGroupBy(String),

    #[error("Invalid ordering '{0}'. Valid orderings: priority, title")]
    InvalidOrderBy(String),

    #[error("Malformed display settings: {0}")]
    MalformedSettings(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
