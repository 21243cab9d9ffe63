//! Model Change Events
//!
//! One event type per contract. Collection events carry the items that were
//! added or removed together with their index; events carrying model
//! instances expose a `map_*` transform so wrappers can re-wrap the payload
//! before re-raising it.

use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};

use super::collections::{AlbumCollectionItem, ArtistCollectionItem, PlaylistCollectionItem};
use super::composites::{Album, PlayableCollectionGroup, Track};
use super::types::{CollectionChange, DownloadInfo, Genre, Image, Link, Lyrics, PlaybackState};

fn map_changes<T, U, F>(changes: &[CollectionChange<T>], f: &F) -> Vec<CollectionChange<U>>
where
    F: Fn(&T) -> U,
{
    changes.iter().map(|change| change.map(f)).collect()
}

/// Download status notifications
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadableEvent {
    DownloadInfoChanged(DownloadInfo),
}

/// Image collection notifications
#[derive(Debug, Clone)]
pub enum ImageCollectionEvent {
    ImagesChanged {
        added: Vec<CollectionChange<Image>>,
        removed: Vec<CollectionChange<Image>>,
    },
    ImagesCountChanged(usize),
}

/// Link collection notifications
#[derive(Debug, Clone)]
pub enum UrlCollectionEvent {
    UrlsChanged {
        added: Vec<CollectionChange<Link>>,
        removed: Vec<CollectionChange<Link>>,
    },
    UrlsCountChanged(usize),
}

/// Genre collection notifications
#[derive(Debug, Clone)]
pub enum GenreCollectionEvent {
    GenresChanged {
        added: Vec<CollectionChange<Genre>>,
        removed: Vec<CollectionChange<Genre>>,
    },
    GenresCountChanged(usize),
}

/// Notifications shared by everything playable
#[derive(Debug, Clone, PartialEq)]
pub enum PlayableEvent {
    NameChanged(String),
    DescriptionChanged(Option<String>),
    PlaybackStateChanged(PlaybackState),
    DurationChanged(Duration),
    LastPlayedChanged(Option<DateTime<Utc>>),
    IsChangeNameAvailableChanged(bool),
    IsChangeDescriptionAvailableChanged(bool),
    IsChangeDurationAvailableChanged(bool),
}

/// Track collection notifications
#[derive(Clone)]
pub enum TrackCollectionEvent {
    TracksChanged {
        added: Vec<CollectionChange<Arc<dyn Track>>>,
        removed: Vec<CollectionChange<Arc<dyn Track>>>,
    },
    TracksCountChanged(usize),
}

impl TrackCollectionEvent {
    /// Apply `f` to every track carried by this event
    pub fn map_tracks<F>(&self, f: F) -> Self
    where
        F: Fn(&Arc<dyn Track>) -> Arc<dyn Track>,
    {
        match self {
            Self::TracksChanged { added, removed } => Self::TracksChanged {
                added: map_changes(added, &f),
                removed: map_changes(removed, &f),
            },
            Self::TracksCountChanged(count) => Self::TracksCountChanged(*count),
        }
    }
}

/// Artist collection notifications
#[derive(Clone)]
pub enum ArtistCollectionEvent {
    ArtistItemsChanged {
        added: Vec<CollectionChange<ArtistCollectionItem>>,
        removed: Vec<CollectionChange<ArtistCollectionItem>>,
    },
    ArtistItemsCountChanged(usize),
}

impl ArtistCollectionEvent {
    /// Apply `f` to every artist item carried by this event
    pub fn map_items<F>(&self, f: F) -> Self
    where
        F: Fn(&ArtistCollectionItem) -> ArtistCollectionItem,
    {
        match self {
            Self::ArtistItemsChanged { added, removed } => Self::ArtistItemsChanged {
                added: map_changes(added, &f),
                removed: map_changes(removed, &f),
            },
            Self::ArtistItemsCountChanged(count) => Self::ArtistItemsCountChanged(*count),
        }
    }
}

/// Album collection notifications
#[derive(Clone)]
pub enum AlbumCollectionEvent {
    AlbumItemsChanged {
        added: Vec<CollectionChange<AlbumCollectionItem>>,
        removed: Vec<CollectionChange<AlbumCollectionItem>>,
    },
    AlbumItemsCountChanged(usize),
}

impl AlbumCollectionEvent {
    /// Apply `f` to every album item carried by this event
    pub fn map_items<F>(&self, f: F) -> Self
    where
        F: Fn(&AlbumCollectionItem) -> AlbumCollectionItem,
    {
        match self {
            Self::AlbumItemsChanged { added, removed } => Self::AlbumItemsChanged {
                added: map_changes(added, &f),
                removed: map_changes(removed, &f),
            },
            Self::AlbumItemsCountChanged(count) => Self::AlbumItemsCountChanged(*count),
        }
    }
}

/// Playlist collection notifications
#[derive(Clone)]
pub enum PlaylistCollectionEvent {
    PlaylistItemsChanged {
        added: Vec<CollectionChange<PlaylistCollectionItem>>,
        removed: Vec<CollectionChange<PlaylistCollectionItem>>,
    },
    PlaylistItemsCountChanged(usize),
}

impl PlaylistCollectionEvent {
    /// Apply `f` to every playlist item carried by this event
    pub fn map_items<F>(&self, f: F) -> Self
    where
        F: Fn(&PlaylistCollectionItem) -> PlaylistCollectionItem,
    {
        match self {
            Self::PlaylistItemsChanged { added, removed } => Self::PlaylistItemsChanged {
                added: map_changes(added, &f),
                removed: map_changes(removed, &f),
            },
            Self::PlaylistItemsCountChanged(count) => Self::PlaylistItemsCountChanged(*count),
        }
    }
}

/// Track-specific notifications
#[derive(Clone)]
pub enum TrackEvent {
    AlbumChanged(Option<Arc<dyn Album>>),
    TrackNumberChanged(Option<u32>),
    LanguageChanged(Option<String>),
    LyricsChanged(Option<Lyrics>),
    IsExplicitChanged(bool),
}

impl TrackEvent {
    /// Apply `f` to the album carried by an album change
    pub fn map_album<F>(&self, f: F) -> Self
    where
        F: Fn(&Arc<dyn Album>) -> Arc<dyn Album>,
    {
        match self {
            Self::AlbumChanged(album) => Self::AlbumChanged(album.as_ref().map(f)),
            other => other.clone(),
        }
    }
}

/// Album-specific notifications
#[derive(Debug, Clone, PartialEq)]
pub enum AlbumEvent {
    DatePublishedChanged(Option<DateTime<Utc>>),
    IsChangeDatePublishedAvailableChanged(bool),
}

/// Child group notifications of a playable collection group
#[derive(Clone)]
pub enum GroupEvent {
    ChildItemsChanged {
        added: Vec<CollectionChange<Arc<dyn PlayableCollectionGroup>>>,
        removed: Vec<CollectionChange<Arc<dyn PlayableCollectionGroup>>>,
    },
    ChildrenCountChanged(usize),
}

impl GroupEvent {
    /// Apply `f` to every child group carried by this event
    pub fn map_children<F>(&self, f: F) -> Self
    where
        F: Fn(&Arc<dyn PlayableCollectionGroup>) -> Arc<dyn PlayableCollectionGroup>,
    {
        match self {
            Self::ChildItemsChanged { added, removed } => Self::ChildItemsChanged {
                added: map_changes(added, &f),
                removed: map_changes(removed, &f),
            },
            Self::ChildrenCountChanged(count) => Self::ChildrenCountChanged(*count),
        }
    }
}
