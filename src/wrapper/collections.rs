//! Collection wrappers. Each relays the playable notifications plus those of
//! its own collection, and wraps every item a page read returns.

use std::sync::Arc;

use crate::model::{AlbumCollection, ArtistCollection, PlaylistCollection, TrackCollection};
use crate::notifications::SubscriptionLedger;
use crate::plugin::{ActivePlugins, PluginRegistry, PluginResult};
use crate::wrapper::hubs::WrapperHubs;
use crate::wrapper::{relay, PluginWrapper};

macro_rules! collection_wrapper {
    ($(#[$doc:meta])* $name:ident, $contract:ident, $relay:ident, $impl_contract:ident) => {
        $(#[$doc])*
        pub struct $name {
            inner: Arc<dyn $contract>,
            plugins: Arc<ActivePlugins>,
            hubs: WrapperHubs,
            ledger: SubscriptionLedger,
        }

        impl $name {
            /// Wrap `inner` with the plugins merged from `registries`
            pub fn new(inner: Arc<dyn $contract>, registries: &[PluginRegistry]) -> PluginResult<Self> {
                Ok(Self::with_plugins(inner, ActivePlugins::from_registries(registries)?))
            }

            pub fn with_plugins(inner: Arc<dyn $contract>, plugins: Arc<ActivePlugins>) -> Self {
                let inner = plugins.execute(inner);
                let hubs = WrapperHubs::new();
                let ledger = SubscriptionLedger::new();
                relay::playable_events(inner.clone(), &hubs, &ledger);
                relay::$relay(inner.clone(), &hubs, &ledger, &plugins);

                Self {
                    inner,
                    plugins,
                    hubs,
                    ledger,
                }
            }

            /// The plugin-decorated instance behind this wrapper
            pub fn decorated(&self) -> &Arc<dyn $contract> {
                &self.inner
            }
        }

        impl PluginWrapper for $name {
            fn active_plugins(&self) -> &Arc<ActivePlugins> {
                &self.plugins
            }

            fn ledger(&self) -> &SubscriptionLedger {
                &self.ledger
            }
        }

        wrapper_model!($name => inner);
        wrapper_downloadable!($name => inner);
        wrapper_image_collection!($name => inner);
        wrapper_url_collection!($name => inner);
        wrapper_playable!($name => inner);
        $impl_contract!($name => inner);
    };
}

collection_wrapper!(
    /// Plugin-aware façade over a `TrackCollection`
    TrackCollectionWrapper,
    TrackCollection,
    track_collection_events,
    wrapper_track_collection
);

collection_wrapper!(
    /// Plugin-aware façade over an `ArtistCollection`
    ArtistCollectionWrapper,
    ArtistCollection,
    artist_collection_events,
    wrapper_artist_collection
);

collection_wrapper!(
    /// Plugin-aware façade over an `AlbumCollection`
    AlbumCollectionWrapper,
    AlbumCollection,
    album_collection_events,
    wrapper_album_collection
);

collection_wrapper!(
    /// Plugin-aware façade over a `PlaylistCollection`
    PlaylistCollectionWrapper,
    PlaylistCollection,
    playlist_collection_events,
    wrapper_playlist_collection
);
