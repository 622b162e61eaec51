use crate::{
    domain::{compute_grouped_view, BoardView, DisplaySettings, GroupBy, GroupedView, OrderBy},
    error::Result,
    provider::{BoardData, DataProvider},
    storage::SettingsStore,
};
use tokio::sync::watch;
use tracing::{error, info};

/// Holds the latest board data and display settings
///
/// Views are recomputed from these snapshots on demand. Settings changes are
/// persisted first and then announced to subscribers.
pub struct BoardSession<P, S> {
    provider: P,
    store: S,
    data: BoardData,
    settings: watch::Sender<DisplaySettings>,
}

impl<P: DataProvider, S: SettingsStore> BoardSession<P, S> {
    /// Opens a session with the settings restored from the store and no data yet
    pub async fn open(provider: P, store: S) -> Result<Self> {
        let settings = store.load_settings().await?;
        let (settings, _) = watch::channel(settings);
        Ok(Self {
            provider,
            store,
            data: BoardData::default(),
            settings,
        })
    }

    /// Replaces the data snapshot with a fresh fetch
    ///
    /// On failure the previous snapshot is kept and the error is returned.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.provider.fetch().await {
            Ok(data) => {
                self.data = data;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "error fetching board data");
                Err(e)
            }
        }
    }

    pub fn data(&self) -> &BoardData {
        &self.data
    }

    pub fn settings(&self) -> DisplaySettings {
        *self.settings.borrow()
    }

    /// Receives every settings change made through this session
    pub fn subscribe(&self) -> watch::Receiver<DisplaySettings> {
        self.settings.subscribe()
    }

    pub async fn set_group_by(&self, group_by: GroupBy) -> Result<DisplaySettings> {
        self.update_settings(self.settings().with_group_by(group_by))
            .await
    }

    pub async fn set_order_by(&self, order_by: OrderBy) -> Result<DisplaySettings> {
        self.update_settings(self.settings().with_order_by(order_by))
            .await
    }

    /// Persists new settings and notifies subscribers
    pub async fn update_settings(&self, settings: DisplaySettings) -> Result<DisplaySettings> {
        self.store.save_settings(&settings).await?;
        self.settings.send_replace(settings);
        info!(
            group_by = %settings.group_by,
            order_by = %settings.order_by,
            "display settings updated"
        );
        Ok(settings)
    }

    pub fn grouped_view(&self) -> Result<GroupedView> {
        compute_grouped_view(&self.data.tickets, &self.data.users, &self.settings())
    }

    pub fn board_view(&self) -> Result<BoardView> {
        BoardView::build(&self.grouped_view()?, &self.data.users)
    }
}
