//! Collection capability bases. Each collection embeds Playable, which in
//! turn embeds the download, image and url capabilities.

use std::sync::Arc;

use crate::model::{
    AlbumCollection, ArtistCollection, Downloadable, ImageCollection, Model, Playable,
    PlaylistCollection, TrackCollection, UrlCollection,
};

macro_rules! collection_base {
    ($(#[$doc:meta])* $name:ident, $contract:ident, $delegate:ident) => {
        $(#[$doc])*
        pub struct $name {
            pub inner: Arc<dyn $contract>,
            pub inner_downloadable: Arc<dyn Downloadable>,
            pub inner_image_collection: Arc<dyn ImageCollection>,
            pub inner_url_collection: Arc<dyn UrlCollection>,
            pub inner_playable: Arc<dyn Playable>,
        }

        impl $name {
            pub fn new(inner: Arc<dyn $contract>) -> Self {
                Self {
                    inner_downloadable: inner.clone(),
                    inner_image_collection: inner.clone(),
                    inner_url_collection: inner.clone(),
                    inner_playable: inner.clone(),
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
                ]
            }
        }

        base_model!($name);
        crate::delegate_downloadable!($name => inner_downloadable);
        crate::delegate_image_collection!($name => inner_image_collection);
        crate::delegate_url_collection!($name => inner_url_collection);
        crate::delegate_playable!($name => inner_playable);
        crate::$delegate!($name => inner);
    };
}

collection_base!(
    /// Pass-through decorator for `TrackCollection`
    TrackCollectionPluginBase, TrackCollection, delegate_track_collection
);
collection_base!(
    /// Pass-through decorator for `ArtistCollection`
    ArtistCollectionPluginBase, ArtistCollection, delegate_artist_collection
);
collection_base!(
    /// Pass-through decorator for `AlbumCollection`
    AlbumCollectionPluginBase, AlbumCollection, delegate_album_collection
);
collection_base!(
    /// Pass-through decorator for `PlaylistCollection`
    PlaylistCollectionPluginBase, PlaylistCollection, delegate_playlist_collection
);
