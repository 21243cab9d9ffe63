//! Item transforms
//!
//! Wrap a nested model with a plugin set. Collection items are closed sum
//! types, so each transform is an exhaustive match over their variants.

use std::sync::Arc;

use crate::model::{
    Album, AlbumCollectionItem, ArtistCollectionItem, PlayableCollectionGroup, PlaylistCollectionItem,
    Track,
};
use crate::plugin::ActivePlugins;
use crate::wrapper::collections::{AlbumCollectionWrapper, ArtistCollectionWrapper, PlaylistCollectionWrapper};
use crate::wrapper::composites::{AlbumWrapper, ArtistWrapper, PlaylistWrapper, TrackWrapper};
use crate::wrapper::group::PlayableCollectionGroupWrapper;

pub fn wrap_track(track: &Arc<dyn Track>, plugins: &Arc<ActivePlugins>) -> Arc<dyn Track> {
    Arc::new(TrackWrapper::with_plugins(track.clone(), plugins.clone()))
}

pub fn wrap_album(album: &Arc<dyn Album>, plugins: &Arc<ActivePlugins>) -> Arc<dyn Album> {
    Arc::new(AlbumWrapper::with_plugins(album.clone(), plugins.clone()))
}

pub fn wrap_group(
    group: &Arc<dyn PlayableCollectionGroup>,
    plugins: &Arc<ActivePlugins>,
) -> Arc<dyn PlayableCollectionGroup> {
    Arc::new(PlayableCollectionGroupWrapper::with_plugins(group.clone(), plugins.clone()))
}

pub fn wrap_artist_item(item: &ArtistCollectionItem, plugins: &Arc<ActivePlugins>) -> ArtistCollectionItem {
    match item {
        ArtistCollectionItem::Artist(artist) => {
            ArtistCollectionItem::Artist(Arc::new(ArtistWrapper::with_plugins(artist.clone(), plugins.clone())))
        }
        ArtistCollectionItem::Collection(collection) => ArtistCollectionItem::Collection(Arc::new(
            ArtistCollectionWrapper::with_plugins(collection.clone(), plugins.clone()),
        )),
    }
}

pub fn wrap_album_item(item: &AlbumCollectionItem, plugins: &Arc<ActivePlugins>) -> AlbumCollectionItem {
    match item {
        AlbumCollectionItem::Album(album) => AlbumCollectionItem::Album(wrap_album(album, plugins)),
        AlbumCollectionItem::Collection(collection) => AlbumCollectionItem::Collection(Arc::new(
            AlbumCollectionWrapper::with_plugins(collection.clone(), plugins.clone()),
        )),
    }
}

pub fn wrap_playlist_item(item: &PlaylistCollectionItem, plugins: &Arc<ActivePlugins>) -> PlaylistCollectionItem {
    match item {
        PlaylistCollectionItem::Playlist(playlist) => PlaylistCollectionItem::Playlist(Arc::new(
            PlaylistWrapper::with_plugins(playlist.clone(), plugins.clone()),
        )),
        PlaylistCollectionItem::Collection(collection) => PlaylistCollectionItem::Collection(Arc::new(
            PlaylistCollectionWrapper::with_plugins(collection.clone(), plugins.clone()),
        )),
    }
}
