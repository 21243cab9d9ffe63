//! Track, album, artist and playlist bases.

use std::sync::Arc;

use crate::model::{
    Album, AlbumCollection, Artist, ArtistCollection, Downloadable, GenreCollection,
    ImageCollection, Model, Playable, Playlist, Track, TrackCollection, UrlCollection,
};

/// Pass-through decorator for `Track`
pub struct TrackPluginBase {
    pub inner: Arc<dyn Track>,
    pub inner_downloadable: Arc<dyn Downloadable>,
    pub inner_image_collection: Arc<dyn ImageCollection>,
    pub inner_url_collection: Arc<dyn UrlCollection>,
    pub inner_genre_collection: Arc<dyn GenreCollection>,
    pub inner_playable: Arc<dyn Playable>,
    pub inner_artist_collection: Arc<dyn ArtistCollection>,
}

impl TrackPluginBase {
    pub fn new(inner: Arc<dyn Track>) -> Self {
        Self {
            inner_downloadable: inner.clone(),
            inner_image_collection: inner.clone(),
            inner_url_collection: inner.clone(),
            inner_genre_collection: inner.clone(),
            inner_playable: inner.clone(),
            inner_artist_collection: inner.clone(),
            inner,
        }
    }

    fn owned(&self) -> Vec<Arc<dyn Model>> {
        owned_models![
            self.inner,
            self.inner_downloadable,
            self.inner_image_collection,
            self.inner_url_collection,
            self.inner_genre_collection,
            self.inner_playable,
            self.inner_artist_collection,
        ]
    }
}

base_model!(TrackPluginBase);
crate::delegate_downloadable!(TrackPluginBase => inner_downloadable);
crate::delegate_image_collection!(TrackPluginBase => inner_image_collection);
crate::delegate_url_collection!(TrackPluginBase => inner_url_collection);
crate::delegate_genre_collection!(TrackPluginBase => inner_genre_collection);
crate::delegate_playable!(TrackPluginBase => inner_playable);
crate::delegate_artist_collection!(TrackPluginBase => inner_artist_collection);
crate::delegate_track!(TrackPluginBase => inner);

/// Pass-through decorator for `Album`
pub struct AlbumPluginBase {
    pub inner: Arc<dyn Album>,
    pub inner_downloadable: Arc<dyn Downloadable>,
    pub inner_image_collection: Arc<dyn ImageCollection>,
    pub inner_url_collection: Arc<dyn UrlCollection>,
    pub inner_genre_collection: Arc<dyn GenreCollection>,
    pub inner_playable: Arc<dyn Playable>,
    pub inner_artist_collection: Arc<dyn ArtistCollection>,
    pub inner_track_collection: Arc<dyn TrackCollection>,
}

impl AlbumPluginBase {
    pub fn new(inner: Arc<dyn Album>) -> Self {
        Self {
            inner_downloadable: inner.clone(),
            inner_image_collection: inner.clone(),
            inner_url_collection: inner.clone(),
            inner_genre_collection: inner.clone(),
            inner_playable: inner.clone(),
            inner_artist_collection: inner.clone(),
            inner_track_collection: inner.clone(),
            inner,
        }
    }

    fn owned(&self) -> Vec<Arc<dyn Model>> {
        owned_models![
            self.inner,
            self.inner_downloadable,
            self.inner_image_collection,
            self.inner_url_collection,
            self.inner_genre_collection,
            self.inner_playable,
            self.inner_artist_collection,
            self.inner_track_collection,
        ]
    }
}

base_model!(AlbumPluginBase);
crate::delegate_downloadable!(AlbumPluginBase => inner_downloadable);
crate::delegate_image_collection!(AlbumPluginBase => inner_image_collection);
crate::delegate_url_collection!(AlbumPluginBase => inner_url_collection);
crate::delegate_genre_collection!(AlbumPluginBase => inner_genre_collection);
crate::delegate_playable!(AlbumPluginBase => inner_playable);
crate::delegate_artist_collection!(AlbumPluginBase => inner_artist_collection);
crate::delegate_track_collection!(AlbumPluginBase => inner_track_collection);
crate::delegate_album!(AlbumPluginBase => inner);

/// Pass-through decorator for `Artist`
pub struct ArtistPluginBase {
    pub inner: Arc<dyn Artist>,
    pub inner_downloadable: Arc<dyn Downloadable>,
    pub inner_image_collection: Arc<dyn ImageCollection>,
    pub inner_url_collection: Arc<dyn UrlCollection>,
    pub inner_genre_collection: Arc<dyn GenreCollection>,
    pub inner_playable: Arc<dyn Playable>,
    pub inner_album_collection: Arc<dyn AlbumCollection>,
    pub inner_track_collection: Arc<dyn TrackCollection>,
}

impl ArtistPluginBase {
    pub fn new(inner: Arc<dyn Artist>) -> Self {
        Self {
            inner_downloadable: inner.clone(),
            inner_image_collection: inner.clone(),
            inner_url_collection: inner.clone(),
            inner_genre_collection: inner.clone(),
            inner_playable: inner.clone(),
            inner_album_collection: inner.clone(),
            inner_track_collection: inner.clone(),
            inner,
        }
    }

    fn owned(&self) -> Vec<Arc<dyn Model>> {
        owned_models![
            self.inner,
            self.inner_downloadable,
            self.inner_image_collection,
            self.inner_url_collection,
            self.inner_genre_collection,
            self.inner_playable,
            self.inner_album_collection,
            self.inner_track_collection,
        ]
    }
}

base_model!(ArtistPluginBase);
crate::delegate_downloadable!(ArtistPluginBase => inner_downloadable);
crate::delegate_image_collection!(ArtistPluginBase => inner_image_collection);
crate::delegate_url_collection!(ArtistPluginBase => inner_url_collection);
crate::delegate_genre_collection!(ArtistPluginBase => inner_genre_collection);
crate::delegate_playable!(ArtistPluginBase => inner_playable);
crate::delegate_album_collection!(ArtistPluginBase => inner_album_collection);
crate::delegate_track_collection!(ArtistPluginBase => inner_track_collection);
crate::delegate_artist!(ArtistPluginBase => inner);

/// Pass-through decorator for `Playlist`
pub struct PlaylistPluginBase {
    pub inner: Arc<dyn Playlist>,
    pub inner_downloadable: Arc<dyn Downloadable>,
    pub inner_image_collection: Arc<dyn ImageCollection>,
    pub inner_url_collection: Arc<dyn UrlCollection>,
    pub inner_playable: Arc<dyn Playable>,
    pub inner_track_collection: Arc<dyn TrackCollection>,
}

impl PlaylistPluginBase {
    pub fn new(inner: Arc<dyn Playlist>) -> Self {
        Self {
            inner_downloadable: inner.clone(),
            inner_image_collection: inner.clone(),
            inner_url_collection: inner.clone(),
            inner_playable: inner.clone(),
            inner_track_collection: inner.clone(),
            inner,
        }
    }

    fn owned(&self) -> Vec<Arc<dyn Model>> {
        owned_models![
            self.inner,
            self.inner_downloadable,
            self.inner_image_collection,
            self.inner_url_collection,
            self.inner_playable,
            self.inner_track_collection,
        ]
    }
}

base_model!(PlaylistPluginBase);
crate::delegate_downloadable!(PlaylistPluginBase => inner_downloadable);
crate::delegate_image_collection!(PlaylistPluginBase => inner_image_collection);
crate::delegate_url_collection!(PlaylistPluginBase => inner_url_collection);
crate::delegate_playable!(PlaylistPluginBase => inner_playable);
crate::delegate_track_collection!(PlaylistPluginBase => inner_track_collection);
crate::delegate_playlist!(PlaylistPluginBase => inner);
