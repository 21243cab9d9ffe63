//! Plugins written the way a third-party plugin author would, against the
//! public crate surface only.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use polyphony::model::{
    DownloadInfo, DownloadOperation, DownloadState, Downloadable, DownloadableEvent, ModelResult,
    Playable, PlayableEvent, PlaybackState,
};
use polyphony::notifications::{EventHandler, SubscriptionId};
use polyphony::plugin::{PluginMetadata, PluginRegistry};
use polyphony::CancellationToken;

/// Reports every item as downloaded without touching the provider
pub struct OfflineDownloads {
    inner: Arc<dyn Downloadable>,
}

polyphony::delegate_model!(OfflineDownloads => inner);

#[polyphony::async_trait]
impl Downloadable for OfflineDownloads {
    fn download_info(&self) -> DownloadInfo {
        DownloadInfo::new(DownloadState::Downloaded, 1000)
    }

    async fn start_download_operation(&self, operation: DownloadOperation, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.start_download_operation(operation, cancel).await
    }

    fn subscribe_downloadable(&self, handler: EventHandler<DownloadableEvent>) -> SubscriptionId {
        self.inner.subscribe_downloadable(handler)
    }

    fn unsubscribe_downloadable(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe_downloadable(id)
    }
}

/// Appends a tag to every name and can pin the download state
pub struct TaggedNames {
    inner: Arc<dyn Playable>,
    tag: String,
    pinned: Option<DownloadState>,
}

polyphony::delegate_model!(TaggedNames => inner);
polyphony::delegate_image_collection!(TaggedNames => inner);
polyphony::delegate_url_collection!(TaggedNames => inner);

#[polyphony::async_trait]
impl Downloadable for TaggedNames {
    fn download_info(&self) -> DownloadInfo {
        match self.pinned {
            Some(state) => DownloadInfo::new(state, 0),
            None => self.inner.download_info(),
        }
    }

    async fn start_download_operation(&self, operation: DownloadOperation, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.start_download_operation(operation, cancel).await
    }

    fn subscribe_downloadable(&self, handler: EventHandler<DownloadableEvent>) -> SubscriptionId {
        self.inner.subscribe_downloadable(handler)
    }

    fn unsubscribe_downloadable(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe_downloadable(id)
    }
}

#[polyphony::async_trait]
impl Playable for TaggedNames {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn name(&self) -> String {
        format!("{} ({})", self.inner.name(), self.tag)
    }

    fn description(&self) -> Option<String> {
        self.inner.description()
    }

    fn playback_state(&self) -> PlaybackState {
        self.inner.playback_state()
    }

    fn duration(&self) -> Duration {
        self.inner.duration()
    }

    fn last_played(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.inner.last_played()
    }

    fn added_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.inner.added_at()
    }

    fn is_change_name_available(&self) -> bool {
        self.inner.is_change_name_available()
    }

    fn is_change_description_available(&self) -> bool {
        self.inner.is_change_description_available()
    }

    fn is_change_duration_available(&self) -> bool {
        self.inner.is_change_duration_available()
    }

    async fn change_name(&self, name: String, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.change_name(name, cancel).await
    }

    async fn change_description(&self, description: Option<String>, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.change_description(description, cancel).await
    }

    async fn change_duration(&self, duration: Duration, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.change_duration(duration, cancel).await
    }

    fn subscribe_playable(&self, handler: EventHandler<PlayableEvent>) -> SubscriptionId {
        self.inner.subscribe_playable(handler)
    }

    fn unsubscribe_playable(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe_playable(id)
    }
}

/// Plugin registering [`OfflineDownloads`] on the Downloadable capability
pub fn offline_plugin() -> PluginRegistry {
    let mut registry = PluginRegistry::new(PluginMetadata::current("offline", "Offline cache"));
    registry.add::<dyn Downloadable, _>(|inner| Arc::new(OfflineDownloads { inner }));
    registry
}

/// Plugin registering [`TaggedNames`] on the Playable capability
pub fn tagged_plugin(id: &str, tag: &str, pinned: Option<DownloadState>) -> PluginRegistry {
    let mut registry = PluginRegistry::new(PluginMetadata::current(id, id));
    let tag = tag.to_string();
    registry.add::<dyn Playable, _>(move |inner| {
        Arc::new(TaggedNames {
            inner,
            tag: tag.clone(),
            pinned,
        })
    });
    registry
}
