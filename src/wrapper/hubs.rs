//! Wrapper event hubs
//!
//! One hub per notification family. A wrapper's subscribers attach here;
//! the relays in [`relay`](super::relay) feed them from the decorated
//! instance.

use std::sync::Arc;

use crate::model::{
    AlbumCollectionEvent, AlbumEvent, ArtistCollectionEvent, DownloadableEvent, GenreCollectionEvent,
    GroupEvent, ImageCollectionEvent, PlayableEvent, PlaylistCollectionEvent, TrackCollectionEvent,
    TrackEvent, UrlCollectionEvent,
};
use crate::notifications::EventHub;

/// Re-raised notifications of one wrapper
#[derive(Debug, Default)]
pub struct WrapperHubs {
    pub downloadable: Arc<EventHub<DownloadableEvent>>,
    pub images: Arc<EventHub<ImageCollectionEvent>>,
    pub urls: Arc<EventHub<UrlCollectionEvent>>,
    pub genres: Arc<EventHub<GenreCollectionEvent>>,
    pub playable: Arc<EventHub<PlayableEvent>>,
    pub tracks: Arc<EventHub<TrackCollectionEvent>>,
    pub artists: Arc<EventHub<ArtistCollectionEvent>>,
    pub albums: Arc<EventHub<AlbumCollectionEvent>>,
    pub playlists: Arc<EventHub<PlaylistCollectionEvent>>,
    pub track: Arc<EventHub<TrackEvent>>,
    pub album: Arc<EventHub<AlbumEvent>>,
    pub group: Arc<EventHub<GroupEvent>>,
}

impl WrapperHubs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers attached to this wrapper across every hub
    pub fn subscriber_count(&self) -> usize {
        [
            self.downloadable.subscriber_count(),
            self.images.subscriber_count(),
            self.urls.subscriber_count(),
            self.genres.subscriber_count(),
            self.playable.subscriber_count(),
            self.tracks.subscriber_count(),
            self.artists.subscriber_count(),
            self.albums.subscriber_count(),
            self.playlists.subscriber_count(),
            self.track.subscriber_count(),
            self.album.subscriber_count(),
            self.group.subscriber_count(),
        ]
        .iter()
        .sum()
    }
}
