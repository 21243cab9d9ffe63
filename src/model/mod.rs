//! Model Contracts
//!
//! The capability and composite contracts that plugins decorate and
//! wrappers expose, together with their events, errors and value types.

pub mod capabilities;
pub mod collections;
pub mod composites;
pub mod error;
pub mod events;
pub mod types;

pub use capabilities::{Downloadable, GenreCollection, ImageCollection, Model, Playable, UrlCollection};
pub use collections::{
    AlbumCollection, AlbumCollectionItem, ArtistCollection, ArtistCollectionItem, PlaylistCollection,
    PlaylistCollectionItem, TrackCollection,
};
pub use composites::{
    Album, Artist, DataRoot, Discoverables, Library, PlayableCollectionGroup, Playlist, RecentlyPlayed,
    SearchHistory, SearchResults, Track,
};
pub use error::{ModelError, ModelResult};
pub use events::{
    AlbumCollectionEvent, AlbumEvent, ArtistCollectionEvent, DownloadableEvent, GenreCollectionEvent,
    GroupEvent, ImageCollectionEvent, PlayableEvent, PlaylistCollectionEvent, TrackCollectionEvent,
    TrackEvent, UrlCollectionEvent,
};
pub use types::{
    CollectionChange, CoreInfo, DownloadInfo, DownloadOperation, DownloadState, Genre, Image, Link,
    LinkKind, Lyrics, ModelIdentity, ModelKind, PlaybackState, TrackType, UserProfile,
};
