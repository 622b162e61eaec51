use crate::{domain::DisplaySettings, error::Result, storage::SettingsStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// File-based settings store
pub struct FileSettingsStore {
    root_path: PathBuf,
}

impl FileSettingsStore {
    const BOARD_DIR: &'static str = ".quickboard";
    const SETTINGS_FILE: &'static str = "settings.json";

    /// Creates a store that keeps its files under `<home>/.quickboard`
    pub fn new(home: impl AsRef<Path>) -> Self {
        Self {
            root_path: home.as_ref().join(Self::BOARD_DIR),
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root_path.join(Self::SETTINGS_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load_settings(&self) -> Result<DisplaySettings> {
        let file_path = self.settings_file();

        if !file_path.exists() {
            debug!(path = %file_path.display(), "no saved display settings");
            return Ok(DisplaySettings::default());
        }

        let bytes = fs::read(&file_path).await?;
        let contents = match String::from_utf8(bytes) {
            Ok(contents) => Some(contents),
            Err(e) => {
                warn!(path = %file_path.display(), error = %e, "saved display settings are not UTF-8");
                None
            }
        };
        Ok(DisplaySettings::from_json_or_default(contents.as_deref()))
    }

    async fn save_settings(&self, settings: &DisplaySettings) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        fs::write(self.settings_file(), settings.to_json()?).await?;
        Ok(())
    }
}
