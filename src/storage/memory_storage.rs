use crate::{domain::DisplaySettings, error::Result, storage::SettingsStore};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-process settings store holding the serialized form
#[derive(Default)]
pub struct MemorySettingsStore {
    raw: Mutex<Option<String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already persisted value, which may be malformed
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    pub async fn raw(&self) -> Option<String> {
        self.raw.lock().await.clone()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load_settings(&self) -> Result<DisplaySettings> {
        let raw = self.raw.lock().await;
        Ok(DisplaySettings::from_json_or_default(raw.as_deref()))
    }

    async fn save_settings(&self, settings: &DisplaySettings) -> Result<()> {
        *self.raw.lock().await = Some(settings.to_json()?);
        Ok(())
    }
}
