//! Composite Contracts
//!
//! Model-level contracts (tracks, albums, artists, playlists, groups and the
//! data root). Each composite lists the capability contracts it embeds as
//! supertraits, so an `Arc<dyn Album>` upcasts to any of them.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::notifications::{EventHandler, SubscriptionId};
use super::capabilities::{GenreCollection, Model, Playable};
use super::collections::{AlbumCollection, ArtistCollection, PlaylistCollection, TrackCollection};
use super::error::ModelResult;
use super::events::{AlbumEvent, GroupEvent, TrackEvent};
use super::types::{Lyrics, TrackType, UserProfile};

/// A single playable track
#[async_trait]
pub trait Track: Playable + ArtistCollection + GenreCollection {
    fn track_type(&self) -> TrackType;

    fn album(&self) -> Option<Arc<dyn Album>>;

    fn track_number(&self) -> Option<u32>;

    fn disc_number(&self) -> Option<u32>;

    fn language(&self) -> Option<String>;

    fn lyrics(&self) -> Option<Lyrics>;

    fn is_explicit(&self) -> bool;

    /// Items related to this track, if the provider offers any
    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>>;

    fn is_change_album_available(&self) -> bool;

    fn is_change_track_number_available(&self) -> bool;

    fn is_change_language_available(&self) -> bool;

    fn is_change_lyrics_available(&self) -> bool;

    fn is_change_is_explicit_available(&self) -> bool;

    async fn change_album(&self, album: Option<Arc<dyn Album>>, cancel: &CancellationToken) -> ModelResult<()>;

    async fn change_track_number(&self, track_number: Option<u32>, cancel: &CancellationToken) -> ModelResult<()>;

    async fn change_language(&self, language: Option<String>, cancel: &CancellationToken) -> ModelResult<()>;

    async fn change_lyrics(&self, lyrics: Option<Lyrics>, cancel: &CancellationToken) -> ModelResult<()>;

    async fn change_is_explicit(&self, is_explicit: bool, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_track(&self, handler: EventHandler<TrackEvent>) -> SubscriptionId;

    fn unsubscribe_track(&self, id: SubscriptionId) -> bool;
}

/// An album: its tracks, its artists and its genres
#[async_trait]
pub trait Album: Playable + ArtistCollection + TrackCollection + GenreCollection {
    fn date_published(&self) -> Option<DateTime<Utc>>;

    fn is_change_date_published_available(&self) -> bool;

    async fn change_date_published(&self, date: DateTime<Utc>, cancel: &CancellationToken) -> ModelResult<()>;

    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>>;

    fn subscribe_album(&self, handler: EventHandler<AlbumEvent>) -> SubscriptionId;

    fn unsubscribe_album(&self, id: SubscriptionId) -> bool;
}

/// An artist: their albums, their tracks and their genres
pub trait Artist: Playable + AlbumCollection + TrackCollection + GenreCollection {
    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>>;
}

/// A user or provider curated list of tracks
pub trait Playlist: Playable + TrackCollection {
    fn owner(&self) -> Option<UserProfile>;

    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>>;
}

/// A group holding every kind of playable collection plus child groups
#[async_trait]
pub trait PlayableCollectionGroup:
    Playable + PlaylistCollection + TrackCollection + AlbumCollection + ArtistCollection
{
    fn total_children_count(&self) -> usize;

    async fn is_add_child_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn is_remove_child_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn get_children(
        &self,
        limit: usize,
        offset: usize,
        cancel: &CancellationToken,
    ) -> ModelResult<Vec<Arc<dyn PlayableCollectionGroup>>>;

    async fn add_child(
        &self,
        child: Arc<dyn PlayableCollectionGroup>,
        index: usize,
        cancel: &CancellationToken,
    ) -> ModelResult<()>;

    async fn remove_child(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_group(&self, handler: EventHandler<GroupEvent>) -> SubscriptionId;

    fn unsubscribe_group(&self, id: SubscriptionId) -> bool;
}

/// The user's library
pub trait Library: PlayableCollectionGroup {}

/// Provider suggested content
pub trait Discoverables: PlayableCollectionGroup {}

/// Recently played items
pub trait RecentlyPlayed: PlayableCollectionGroup {}

/// Past searches
pub trait SearchHistory: PlayableCollectionGroup {}

/// Results of a single search query
pub trait SearchResults: PlayableCollectionGroup {}

/// Entry point into the data of one or more music providers
#[async_trait]
pub trait DataRoot: Model {
    async fn init(&self, cancel: &CancellationToken) -> ModelResult<()>;

    fn is_initialized(&self) -> bool;

    fn library(&self) -> Arc<dyn Library>;

    fn discoverables(&self) -> Arc<dyn Discoverables>;

    fn recently_played(&self) -> Arc<dyn RecentlyPlayed>;

    fn pins(&self) -> Arc<dyn PlayableCollectionGroup>;

    fn search_history(&self) -> Arc<dyn SearchHistory>;

    async fn search(&self, query: &str, cancel: &CancellationToken) -> ModelResult<Arc<dyn SearchResults>>;

    async fn search_autocomplete(&self, query: &str, cancel: &CancellationToken) -> ModelResult<Vec<String>>;
}
