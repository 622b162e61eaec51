use crate::{
    error::Result,
    provider::{BoardData, DataProvider},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

enum Source {
    Inline(BoardData),
    File(PathBuf),
}

/// Serves board data from memory or from a JSON file in the API's format
pub struct StaticDataProvider {
    source: Source,
}

impl StaticDataProvider {
    pub fn new(data: BoardData) -> Self {
        Self {
            source: Source::Inline(data),
        }
    }

    /// Reads the file again on every fetch
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
        }
    }
}

#[async_trait]
impl DataProvider for StaticDataProvider {
    async fn fetch(&self) -> Result<BoardData> {
        match &self.source {
            Source::Inline(data) => Ok(data.clone()),
            Source::File(path) => {
                let contents = fs::read_to_string(path).await?;
                BoardData::from_json(&contents)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ticket, TicketId};
    use crate::error::BoardError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_inline_data() {
        let data = BoardData::new(
            vec![Ticket::new(TicketId::new("CAM-1"), "A".to_string())],
            Vec::new(),
        );
        let provider = StaticDataProvider::new(data.clone());

        assert_eq!(provider.fetch().await.unwrap(), data);
    }

    #[tokio::test]
    async fn test_file_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");
        std::fs::write(
            &path,
            r#"{"tickets":[{"id":"CAM-7","title":"x","status":"Done","priority":2}],"users":[]}"#,
        )
        .unwrap();

        let provider = StaticDataProvider::from_file(&path);
        let data = provider.fetch().await.unwrap();

        assert_eq!(data.tickets.len(), 1);
        assert_eq!(data.tickets[0].id.as_str(), "CAM-7");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let provider = StaticDataProvider::from_file(temp_dir.path().join("nope.json"));

        assert!(matches!(
            provider.fetch().await,
            Err(BoardError::IoError(_))
        ));
    }
}
