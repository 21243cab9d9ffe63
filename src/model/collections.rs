//! Collection Contracts
//!
//! Playable collections of tracks, artists, albums and playlists. Artist,
//! album and playlist collections may nest: their items are closed sum types
//! of the single item or another collection of the same family.

use std::sync::Arc;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::notifications::{EventHandler, SubscriptionId};
use super::capabilities::{Model, Playable};
use super::composites::{Album, Artist, Playlist, Track};
use super::error::ModelResult;
use super::events::{
    AlbumCollectionEvent, ArtistCollectionEvent, PlaylistCollectionEvent, TrackCollectionEvent,
};
use super::types::ModelIdentity;

/// Item of an artist collection
#[derive(Clone)]
pub enum ArtistCollectionItem {
    Artist(Arc<dyn Artist>),
    Collection(Arc<dyn ArtistCollection>),
}

/// Item of an album collection
#[derive(Clone)]
pub enum AlbumCollectionItem {
    Album(Arc<dyn Album>),
    Collection(Arc<dyn AlbumCollection>),
}

/// Item of a playlist collection
#[derive(Clone)]
pub enum PlaylistCollectionItem {
    Playlist(Arc<dyn Playlist>),
    Collection(Arc<dyn PlaylistCollection>),
}

impl ArtistCollectionItem {
    /// The item viewed as a plain model
    pub fn as_model(&self) -> &dyn Model {
        match self {
            Self::Artist(artist) => &**artist,
            Self::Collection(collection) => &**collection,
        }
    }

    pub fn identity(&self) -> &ModelIdentity {
        self.as_model().identity()
    }
}

impl AlbumCollectionItem {
    /// The item viewed as a plain model
    pub fn as_model(&self) -> &dyn Model {
        match self {
            Self::Album(album) => &**album,
            Self::Collection(collection) => &**collection,
        }
    }

    pub fn identity(&self) -> &ModelIdentity {
        self.as_model().identity()
    }
}

impl PlaylistCollectionItem {
    /// The item viewed as a plain model
    pub fn as_model(&self) -> &dyn Model {
        match self {
            Self::Playlist(playlist) => &**playlist,
            Self::Collection(collection) => &**collection,
        }
    }

    pub fn identity(&self) -> &ModelIdentity {
        self.as_model().identity()
    }
}

/// A playable collection of tracks
#[async_trait]
pub trait TrackCollection: Playable {
    fn total_track_count(&self) -> usize;

    async fn play_track_collection(&self, cancel: &CancellationToken) -> ModelResult<()>;

    async fn play_track(&self, track: Arc<dyn Track>, cancel: &CancellationToken) -> ModelResult<()>;

    async fn pause_track_collection(&self, cancel: &CancellationToken) -> ModelResult<()>;

    async fn is_add_track_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn is_remove_track_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn get_tracks(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<Arc<dyn Track>>>;

    async fn add_track(&self, track: Arc<dyn Track>, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    async fn remove_track(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_track_collection(&self, handler: EventHandler<TrackCollectionEvent>) -> SubscriptionId;

    fn unsubscribe_track_collection(&self, id: SubscriptionId) -> bool;
}

/// A playable collection of artists and nested artist collections
#[async_trait]
pub trait ArtistCollection: Playable {
    fn total_artist_count(&self) -> usize;

    async fn play_artist_collection(&self, cancel: &CancellationToken) -> ModelResult<()>;

    async fn play_artist_item(&self, item: ArtistCollectionItem, cancel: &CancellationToken) -> ModelResult<()>;

    async fn pause_artist_collection(&self, cancel: &CancellationToken) -> ModelResult<()>;

    async fn is_add_artist_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn is_remove_artist_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn get_artist_items(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<ArtistCollectionItem>>;

    async fn add_artist_item(&self, item: ArtistCollectionItem, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    async fn remove_artist_item(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_artist_collection(&self, handler: EventHandler<ArtistCollectionEvent>) -> SubscriptionId;

    fn unsubscribe_artist_collection(&self, id: SubscriptionId) -> bool;
}

/// A playable collection of albums and nested album collections
#[async_trait]
pub trait AlbumCollection: Playable {
    fn total_album_count(&self) -> usize;

    async fn play_album_collection(&self, cancel: &CancellationToken) -> ModelResult<()>;

    async fn play_album_item(&self, item: AlbumCollectionItem, cancel: &CancellationToken) -> ModelResult<()>;

    async fn pause_album_collection(&self, cancel: &CancellationToken) -> ModelResult<()>;

    async fn is_add_album_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn is_remove_album_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn get_album_items(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<AlbumCollectionItem>>;

    async fn add_album_item(&self, item: AlbumCollectionItem, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    async fn remove_album_item(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_album_collection(&self, handler: EventHandler<AlbumCollectionEvent>) -> SubscriptionId;

    fn unsubscribe_album_collection(&self, id: SubscriptionId) -> bool;
}

/// A playable collection of playlists and nested playlist collections
#[async_trait]
pub trait PlaylistCollection: Playable {
    fn total_playlist_count(&self) -> usize;

    async fn play_playlist_collection(&self, cancel: &CancellationToken) -> ModelResult<()>;

    async fn play_playlist_item(&self, item: PlaylistCollectionItem, cancel: &CancellationToken) -> ModelResult<()>;

    async fn pause_playlist_collection(&self, cancel: &CancellationToken) -> ModelResult<()>;

    async fn is_add_playlist_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn is_remove_playlist_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool>;

    async fn get_playlist_items(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<PlaylistCollectionItem>>;

    async fn add_playlist_item(&self, item: PlaylistCollectionItem, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    async fn remove_playlist_item(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()>;

    fn subscribe_playlist_collection(&self, handler: EventHandler<PlaylistCollectionEvent>) -> SubscriptionId;

    fn unsubscribe_playlist_collection(&self, id: SubscriptionId) -> bool;
}
