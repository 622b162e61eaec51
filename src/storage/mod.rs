use crate::{domain::DisplaySettings, error::Result};
use async_trait::async_trait;

pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileSettingsStore;
pub use memory_storage::MemorySettingsStore;

/// Storage trait for persisting display settings across sessions
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Restores the saved settings
    ///
    /// Missing or unreadable content yields the default settings; only
    /// failures of the backend itself are returned as errors.
    async fn load_settings(&self) -> Result<DisplaySettings>;

    /// Saves the settings, replacing whatever was stored before
    async fn save_settings(&self, settings: &DisplaySettings) -> Result<()>;
}
