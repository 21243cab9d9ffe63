//! Mock Plugins for Testing
//!
//! Small decorators that make chain order and capability fan-out observable:
//! each one either records its label when a download starts or overrides a
//! value the test can read back.

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::model::{
    DownloadInfo, DownloadOperation, DownloadState, Downloadable, DownloadableEvent, Genre,
    GenreCollection, GenreCollectionEvent, Image, ImageCollection, ImageCollectionEvent, Link,
    ModelResult, Playable, PlayableEvent, PlaybackState, UrlCollection, UrlCollectionEvent,
};
use crate::notifications::{EventHandler, SubscriptionId};
use crate::plugin::metadata::PluginMetadata;
use crate::plugin::registry::PluginRegistry;

/// Labels recorded by decorators, in call order
pub type Trace = Arc<Mutex<Vec<String>>>;

pub fn new_trace() -> Trace {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn recorded(trace: &Trace) -> Vec<String> {
    trace.lock().clone()
}

/// Registry for a plugin built against the running SDK
pub fn plugin_registry(id: &str) -> PluginRegistry {
    PluginRegistry::new(PluginMetadata::current(id, id))
}

/// Downloadable decorator that records its label and optionally pins the state
pub struct RecordingDownload {
    inner: Arc<dyn Downloadable>,
    label: String,
    pinned: Option<DownloadState>,
    trace: Trace,
}

impl RecordingDownload {
    pub fn new(inner: Arc<dyn Downloadable>, label: &str, pinned: Option<DownloadState>, trace: Trace) -> Self {
        Self {
            inner,
            label: label.to_string(),
            pinned,
            trace,
        }
    }
}

crate::delegate_model!(RecordingDownload => inner);

#[async_trait]
impl Downloadable for RecordingDownload {
    fn download_info(&self) -> DownloadInfo {
        match self.pinned {
            Some(state) => DownloadInfo::new(state, 1000),
            None => self.inner.download_info(),
        }
    }

    async fn start_download_operation(&self, operation: DownloadOperation, cancel: &CancellationToken) -> ModelResult<()> {
        self.trace.lock().push(self.label.clone());
        self.inner.start_download_operation(operation, cancel).await
    }

    fn subscribe_downloadable(&self, handler: EventHandler<DownloadableEvent>) -> SubscriptionId {
        self.inner.subscribe_downloadable(handler)
    }

    fn unsubscribe_downloadable(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe_downloadable(id)
    }
}

/// Factory registering a recording Downloadable decorator
pub fn recording_download(
    label: &str,
    pinned: Option<DownloadState>,
    trace: &Trace,
) -> impl Fn(Arc<dyn Downloadable>) -> Arc<dyn Downloadable> + Send + Sync + 'static {
    let (label, trace) = (label.to_string(), trace.clone());
    move |inner: Arc<dyn Downloadable>| -> Arc<dyn Downloadable> {
        Arc::new(RecordingDownload::new(inner, &label, pinned, trace.clone()))
    }
}

/// Playable decorator that suffixes the name and optionally pins the
/// download state
pub struct PlayableOverride {
    inner: Arc<dyn Playable>,
    suffix: String,
    pinned: Option<DownloadState>,
}

impl PlayableOverride {
    pub fn new(inner: Arc<dyn Playable>, suffix: &str, pinned: Option<DownloadState>) -> Self {
        Self {
            inner,
            suffix: suffix.to_string(),
            pinned,
        }
    }
}

crate::delegate_model!(PlayableOverride => inner);
crate::delegate_image_collection!(PlayableOverride => inner);
crate::delegate_url_collection!(PlayableOverride => inner);

#[async_trait]
impl Downloadable for PlayableOverride {
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

#[async_trait]
impl Playable for PlayableOverride {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn name(&self) -> String {
        format!("{}{}", self.inner.name(), self.suffix)
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

    fn last_played(&self) -> Option<DateTime<Utc>> {
        self.inner.last_played()
    }

    fn added_at(&self) -> Option<DateTime<Utc>> {
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

/// Factory registering a Playable override
pub fn playable_override(
    suffix: &str,
    pinned: Option<DownloadState>,
) -> impl Fn(Arc<dyn Playable>) -> Arc<dyn Playable> + Send + Sync + 'static {
    let suffix = suffix.to_string();
    move |inner: Arc<dyn Playable>| -> Arc<dyn Playable> {
        Arc::new(PlayableOverride::new(inner, &suffix, pinned))
    }
}

/// Decorator for a primitive collection capability that reports a fixed
/// item count and delegates everything else
macro_rules! fixed_count {
    (
        $(#[$doc:meta])* $name:ident, $factory:ident, $contract:ident, $item:ty, $event:ty,
        $count:ident, $is_add:ident, $is_remove:ident, $get:ident, $add:ident, $remove:ident,
        $subscribe:ident, $unsubscribe:ident
    ) => {
        $(#[$doc])*
        pub struct $name {
            inner: Arc<dyn $contract>,
            count: usize,
        }

        crate::delegate_model!($name => inner);

        #[async_trait]
        impl $contract for $name {
            fn $count(&self) -> usize {
                self.count
            }

            async fn $is_add(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
                self.inner.$is_add(index, cancel).await
            }

            async fn $is_remove(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
                self.inner.$is_remove(index, cancel).await
            }

            async fn $get(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<$item>> {
                self.inner.$get(limit, offset, cancel).await
            }

            async fn $add(&self, item: $item, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
                self.inner.$add(item, index, cancel).await
            }

            async fn $remove(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
                self.inner.$remove(index, cancel).await
            }

            fn $subscribe(&self, handler: EventHandler<$event>) -> SubscriptionId {
                self.inner.$subscribe(handler)
            }

            fn $unsubscribe(&self, id: SubscriptionId) -> bool {
                self.inner.$unsubscribe(id)
            }
        }

        pub fn $factory(count: usize) -> impl Fn(Arc<dyn $contract>) -> Arc<dyn $contract> + Send + Sync + 'static {
            move |inner: Arc<dyn $contract>| -> Arc<dyn $contract> { Arc::new($name { inner, count }) }
        }
    };
}

fixed_count!(
    /// Reports a fixed number of images
    FixedImages, fixed_images, ImageCollection, Image, ImageCollectionEvent,
    total_image_count, is_add_image_available, is_remove_image_available, get_images, add_image,
    remove_image, subscribe_image_collection, unsubscribe_image_collection
);

fixed_count!(
    /// Reports a fixed number of links
    FixedUrls, fixed_urls, UrlCollection, Link, UrlCollectionEvent,
    total_url_count, is_add_url_available, is_remove_url_available, get_urls, add_url,
    remove_url, subscribe_url_collection, unsubscribe_url_collection
);

fixed_count!(
    /// Reports a fixed number of genres
    FixedGenres, fixed_genres, GenreCollection, Genre, GenreCollectionEvent,
    total_genre_count, is_add_genre_available, is_remove_genre_available, get_genres, add_genre,
    remove_genre, subscribe_genre_collection, unsubscribe_genre_collection
);
