//! Global Capability Connector
//!
//! Appends one derived stage to every composite and collection chain that
//! has a plugin to fan out. The stage re-resolves each embedded capability of
//! the instance by running that capability's own chain against it, so a
//! plugin registered only for `Downloadable` reaches every album, track,
//! playlist and group.
//!
//! Within one stage later assignments overwrite earlier ones:
//! 1. direct primitive capabilities (downloadable, images, urls, genres)
//! 2. Playable and the primitives it embeds, from the connected Playable chain
//! 3. each nested collection in declaration order, together with the
//!    Playable members it embeds
//!
//! A capability whose chain is empty keeps the reference the base was built
//! with, so a contract without plugins holds the provider once and disposes
//! it once.

use std::sync::Arc;
use log::debug;

use crate::model::{
    Album, AlbumCollection, Artist, ArtistCollection, Downloadable, GenreCollection, ImageCollection,
    Playable, PlaylistCollection, Playlist, Track, TrackCollection, UrlCollection,
};
use crate::plugin::base::{
    AlbumCollectionPluginBase, AlbumPluginBase, ArtistCollectionPluginBase, ArtistPluginBase,
    GroupKind, GroupPluginBase, PlayablePluginBase, PlaylistCollectionPluginBase,
    PlaylistPluginBase, TrackCollectionPluginBase, TrackPluginBase,
};
use crate::plugin::chain::ChainedProxyBuilder;
use crate::plugin::registry::ContractChains;

/// Standalone chains of the primitive capabilities
struct Primitives {
    downloadable: ChainedProxyBuilder<dyn Downloadable>,
    image_collection: ChainedProxyBuilder<dyn ImageCollection>,
    url_collection: ChainedProxyBuilder<dyn UrlCollection>,
    genre_collection: ChainedProxyBuilder<dyn GenreCollection>,
}

/// Connected chains of the collection capabilities
#[derive(Clone)]
struct Collections {
    playable: ChainedProxyBuilder<dyn Playable>,
    track: ChainedProxyBuilder<dyn TrackCollection>,
    artist: ChainedProxyBuilder<dyn ArtistCollection>,
    album: ChainedProxyBuilder<dyn AlbumCollection>,
    playlist: ChainedProxyBuilder<dyn PlaylistCollection>,
}

impl Collections {
    fn any_group_member(&self) -> bool {
        !(self.playable.is_empty()
            && self.track.is_empty()
            && self.artist.is_empty()
            && self.album.is_empty()
            && self.playlist.is_empty())
    }
}

macro_rules! assign_from {
    ($base:ident . $field:ident, $chain:expr, $x:expr) => {
        if !$chain.is_empty() {
            $base.$field = $chain.execute($x.clone());
        }
    };
}

macro_rules! assign_primitives {
    ($base:ident, $x:expr, $primitives:expr) => {
        assign_from!($base.inner_downloadable, $primitives.downloadable, $x);
        assign_from!($base.inner_image_collection, $primitives.image_collection, $x);
        assign_from!($base.inner_url_collection, $primitives.url_collection, $x);
    };
}

macro_rules! set_playable {
    ($base:ident, $playable:expr) => {{
        let playable: Arc<dyn Playable> = $playable;
        $base.inner_downloadable = playable.clone();
        $base.inner_image_collection = playable.clone();
        $base.inner_url_collection = playable.clone();
        $base.inner_playable = playable;
    }};
}

macro_rules! assign_playable {
    ($base:ident, $chain:expr, $x:expr) => {
        if !$chain.is_empty() {
            set_playable!($base, $chain.execute($x.clone()));
        }
    };
}

macro_rules! assign_collection {
    ($base:ident . $field:ident, $chain:expr, $x:expr) => {
        if !$chain.is_empty() {
            let collection = $chain.execute($x.clone());
            set_playable!($base, collection.clone());
            $base.$field = collection;
        }
    };
}

macro_rules! collection_stage {
    ($contract:ident, $base_ty:ident, $primitives:expr, $playable:expr) => {{
        let primitives = Arc::clone(&$primitives);
        let playable = $playable.clone();
        move |x: Arc<dyn $contract>| -> Arc<dyn $contract> {
            let mut base = $base_ty::new(x.clone());
            assign_primitives!(base, x, primitives);
            assign_playable!(base, playable, x);
            Arc::new(base)
        }
    }};
}

/// Derives the capability fan-out stages of a chain table
pub struct GlobalCapabilityConnector;

impl GlobalCapabilityConnector {
    /// Clone `user` and append a connector stage to every chain that embeds
    /// a capability with plugins. Primitive chains and the DataRoot chain are
    /// unchanged.
    pub fn connect(user: &ContractChains) -> ContractChains {
        let mut connected = user.clone();
        let primitives = Arc::new(Primitives {
            downloadable: user.downloadable.clone(),
            image_collection: user.image_collection.clone(),
            url_collection: user.url_collection.clone(),
            genre_collection: user.genre_collection.clone(),
        });
        let playable_primitives = !(user.downloadable.is_empty()
            && user.image_collection.is_empty()
            && user.url_collection.is_empty());
        let genres = !user.genre_collection.is_empty();

        if playable_primitives {
            let primitives = Arc::clone(&primitives);
            connected.playable.add(move |x: Arc<dyn Playable>| -> Arc<dyn Playable> {
                let mut base = PlayablePluginBase::new(x.clone());
                assign_primitives!(base, x, primitives);
                Arc::new(base)
            });
        }

        if !connected.playable.is_empty() {
            connected.track_collection.add(collection_stage!(
                TrackCollection, TrackCollectionPluginBase, primitives, connected.playable
            ));
            connected.artist_collection.add(collection_stage!(
                ArtistCollection, ArtistCollectionPluginBase, primitives, connected.playable
            ));
            connected.album_collection.add(collection_stage!(
                AlbumCollection, AlbumCollectionPluginBase, primitives, connected.playable
            ));
            connected.playlist_collection.add(collection_stage!(
                PlaylistCollection, PlaylistCollectionPluginBase, primitives, connected.playable
            ));
        }

        let collections = Collections {
            playable: connected.playable.clone(),
            track: connected.track_collection.clone(),
            artist: connected.artist_collection.clone(),
            album: connected.album_collection.clone(),
            playlist: connected.playlist_collection.clone(),
        };
        let playable = !collections.playable.is_empty();

        if genres || playable || !collections.artist.is_empty() {
            let (primitives, c) = (Arc::clone(&primitives), collections.clone());
            connected.track.add(move |x: Arc<dyn Track>| -> Arc<dyn Track> {
                let mut base = TrackPluginBase::new(x.clone());
                assign_primitives!(base, x, primitives);
                assign_from!(base.inner_genre_collection, primitives.genre_collection, x);
                assign_playable!(base, c.playable, x);
                assign_collection!(base.inner_artist_collection, c.artist, x);
                Arc::new(base)
            });
        }

        if genres || playable || !collections.artist.is_empty() || !collections.track.is_empty() {
            let (primitives, c) = (Arc::clone(&primitives), collections.clone());
            connected.album.add(move |x: Arc<dyn Album>| -> Arc<dyn Album> {
                let mut base = AlbumPluginBase::new(x.clone());
                assign_primitives!(base, x, primitives);
                assign_from!(base.inner_genre_collection, primitives.genre_collection, x);
                assign_playable!(base, c.playable, x);
                assign_collection!(base.inner_artist_collection, c.artist, x);
                assign_collection!(base.inner_track_collection, c.track, x);
                Arc::new(base)
            });
        }

        if genres || playable || !collections.album.is_empty() || !collections.track.is_empty() {
            let (primitives, c) = (Arc::clone(&primitives), collections.clone());
            connected.artist.add(move |x: Arc<dyn Artist>| -> Arc<dyn Artist> {
                let mut base = ArtistPluginBase::new(x.clone());
                assign_primitives!(base, x, primitives);
                assign_from!(base.inner_genre_collection, primitives.genre_collection, x);
                assign_playable!(base, c.playable, x);
                assign_collection!(base.inner_album_collection, c.album, x);
                assign_collection!(base.inner_track_collection, c.track, x);
                Arc::new(base)
            });
        }

        if playable || !collections.track.is_empty() {
            let (primitives, c) = (Arc::clone(&primitives), collections.clone());
            connected.playlist.add(move |x: Arc<dyn Playlist>| -> Arc<dyn Playlist> {
                let mut base = PlaylistPluginBase::new(x.clone());
                assign_primitives!(base, x, primitives);
                assign_playable!(base, c.playable, x);
                assign_collection!(base.inner_track_collection, c.track, x);
                Arc::new(base)
            });
        }

        if collections.any_group_member() {
            connected.playable_collection_group.add(group_stage(&primitives, &collections));
            connected.library.add(group_stage(&primitives, &collections));
            connected.discoverables.add(group_stage(&primitives, &collections));
            connected.recently_played.add(group_stage(&primitives, &collections));
            connected.search_history.add(group_stage(&primitives, &collections));
            connected.search_results.add(group_stage(&primitives, &collections));
        }

        debug!("Connected capability chains: {:?}", connected.summary());
        connected
    }
}

/// Connector stage shared by the group contract and its refinements
fn group_stage<C>(
    primitives: &Arc<Primitives>,
    collections: &Collections,
) -> impl Fn(Arc<C>) -> Arc<C> + Send + Sync + 'static
where
    C: ?Sized + GroupKind,
{
    let (primitives, c) = (Arc::clone(primitives), collections.clone());
    move |x: Arc<C>| -> Arc<C> {
        let group = C::upcast(x.clone());
        let mut base = GroupPluginBase::<C>::new(x);
        assign_primitives!(base, group, primitives);
        assign_playable!(base, c.playable, group);
        assign_collection!(base.inner_playlist_collection, c.playlist, group);
        assign_collection!(base.inner_track_collection, c.track, group);
        assign_collection!(base.inner_album_collection, c.album, group);
        assign_collection!(base.inner_artist_collection, c.artist, group);
        C::from_base(base)
    }
}
