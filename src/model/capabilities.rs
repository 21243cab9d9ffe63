//! Capability Contracts
//!
//! Narrow behavioral contracts shared by many model types. Composite
//! contracts embed these as supertraits.

use std::time::Duration;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::notifications::{EventHandler, SubscriptionId};
use super::error::ModelResult;
use super::events::{
    DownloadableEvent, GenreCollectionEvent, ImageCollectionEvent, PlayableEvent, UrlCollectionEvent,
};
use super::types::{
    CoreInfo, DownloadInfo, DownloadOperation, Genre, Image, Link, ModelIdentity, PlaybackState,
};

/// Root of every model contract: identity, provenance and disposal
#[async_trait]
pub trait Model: Send + Sync {
    /// Identity of the innermost instance
    fn identity(&self) -> &ModelIdentity;

    /// Identities of the provider items merged into this one
    fn sources(&self) -> &[ModelIdentity];

    /// Providers that contributed to this item
    fn source_cores(&self) -> &[CoreInfo];

    /// Whether `other` represents the same logical item
    fn equals(&self, other: &dyn Model) -> bool {
        self.identity() == other.identity()
    }

    /// Release resources held by this instance
    async fn dispose(&self) -> ModelResult<()>;
}

/// Items that can be downloaded for offline use
#[async_trait]
pub trait Downloadable: Model {
    fn download_info(&self) -> DownloadInfo;

    async fn start_download_operation(
        &self,
        operation: DownloadOperation,
        cancel: &CancellationToken,
    ) -> ModelResult<()>;

    fn subscribe_downloadable(&self, handler: EventHandler<DownloadableEvent>) -> SubscriptionId;

    fn unsubscribe_downloadable(&self, id: SubscriptionId) -> bool;
}

/// Items that carry a collection of images
#[async_trait]
pub trait ImageCollection: Model {
    fn total_image_count(&self) -> usize;

    async fn is_add_image_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn is_remove_image_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn get_images(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<Image>>;

    async fn add_image(&self, image: Image, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    async fn remove_image(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_image_collection(&self, handler: EventHandler<ImageCollectionEvent>) -> SubscriptionId;

    fn unsubscribe_image_collection(&self, id: SubscriptionId) -> bool;
}

/// Items that carry a collection of external links
#[async_trait]
pub trait UrlCollection: Model {
    fn total_url_count(&self) -> usize;

    async fn is_add_url_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn is_remove_url_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn get_urls(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<Link>>;

    async fn add_url(&self, link: Link, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    async fn remove_url(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_url_collection(&self, handler: EventHandler<UrlCollectionEvent>) -> SubscriptionId;

    fn unsubscribe_url_collection(&self, id: SubscriptionId) -> bool;
}

/// Items that carry a collection of genres
#[async_trait]
pub trait GenreCollection: Model {
    fn total_genre_count(&self) -> usize;

    async fn is_add_genre_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn is_remove_genre_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn get_genres(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<Genre>>;

    async fn add_genre(&self, genre: Genre, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    async fn remove_genre(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_genre_collection(&self, handler: EventHandler<GenreCollectionEvent>) -> SubscriptionId;

    fn unsubscribe_genre_collection(&self, id: SubscriptionId) -> bool;
}

/// Everything that can be played: named, timed, illustrated and downloadable
#[async_trait]
pub trait Playable: ImageCollection + UrlCollection + Downloadable {
    fn id(&self) -> &str;

    fn name(&self) -> String;

    fn description(&self) -> Option<String>;

    fn playback_state(&self) -> PlaybackState;

    fn duration(&self) -> Duration;

    fn last_played(&self) -> Option<DateTime<Utc>>;

    fn added_at(&self) -> Option<DateTime<Utc>>;

    fn is_change_name_available(&self) -> bool;

    fn is_change_description_available(&self) -> bool;

    fn is_change_duration_available(&self) -> bool;

    async fn change_name(&self, name: String, cancel: &CancellationToken) -> ModelResult<()>;

    async fn change_description(&self, description: Option<String>, cancel: &CancellationToken) -> ModelResult<()>;

    async fn change_duration(&self, duration: Duration, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_playable(&self, handler: EventHandler<PlayableEvent>) -> SubscriptionId;

    fn unsubscribe_playable(&self, id: SubscriptionId) -> bool;
}
