//! Group wrappers
//!
//! One generic wrapper covers `PlayableCollectionGroup` and its refinements.
//! The refinement chain runs first; the result is then viewed as a plain
//! group for every member.

use std::sync::Arc;

use crate::model::{
    Discoverables, Library, PlayableCollectionGroup, RecentlyPlayed, SearchHistory, SearchResults,
};
use crate::notifications::SubscriptionLedger;
use crate::plugin::base::GroupKind;
use crate::plugin::{ActivePlugins, PluginRegistry, PluginResult};
use crate::wrapper::hubs::WrapperHubs;
use crate::wrapper::{relay, PluginWrapper};

/// Plugin-aware façade over a group contract
pub struct GroupWrapper<C: ?Sized + GroupKind> {
    inner: Arc<C>,
    group: Arc<dyn PlayableCollectionGroup>,
    plugins: Arc<ActivePlugins>,
    hubs: WrapperHubs,
    ledger: SubscriptionLedger,
}

pub type PlayableCollectionGroupWrapper = GroupWrapper<dyn PlayableCollectionGroup>;
pub type LibraryWrapper = GroupWrapper<dyn Library>;
pub type DiscoverablesWrapper = GroupWrapper<dyn Discoverables>;
pub type RecentlyPlayedWrapper = GroupWrapper<dyn RecentlyPlayed>;
pub type SearchHistoryWrapper = GroupWrapper<dyn SearchHistory>;
pub type SearchResultsWrapper = GroupWrapper<dyn SearchResults>;

impl<C: ?Sized + GroupKind> GroupWrapper<C> {
    /// Wrap `inner` with the plugins merged from `registries`
    pub fn new(inner: Arc<C>, registries: &[PluginRegistry]) -> PluginResult<Self> {
        Ok(Self::with_plugins(inner, ActivePlugins::from_registries(registries)?))
    }

    pub fn with_plugins(inner: Arc<C>, plugins: Arc<ActivePlugins>) -> Self {
        let inner = plugins.execute::<C>(inner);
        let group = C::upcast(inner.clone());
        let hubs = WrapperHubs::new();
        let ledger = SubscriptionLedger::new();

        relay::playable_events(group.clone(), &hubs, &ledger);
        relay::playlist_collection_events(group.clone(), &hubs, &ledger, &plugins);
        relay::track_collection_events(group.clone(), &hubs, &ledger, &plugins);
        relay::album_collection_events(group.clone(), &hubs, &ledger, &plugins);
        relay::artist_collection_events(group.clone(), &hubs, &ledger, &plugins);
        relay::group_events(group.clone(), &hubs, &ledger, &plugins);

        Self {
            inner,
            group,
            plugins,
            hubs,
            ledger,
        }
    }

    /// The plugin-decorated instance behind this wrapper
    pub fn decorated(&self) -> &Arc<C> {
        &self.inner
    }
}

impl<C: ?Sized + GroupKind> PluginWrapper for GroupWrapper<C> {
    fn active_plugins(&self) -> &Arc<ActivePlugins> {
        &self.plugins
    }

    fn ledger(&self) -> &SubscriptionLedger {
        &self.ledger
    }
}

wrapper_model!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);
wrapper_downloadable!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);
wrapper_image_collection!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);
wrapper_url_collection!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);
wrapper_playable!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);
wrapper_playlist_collection!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);
wrapper_track_collection!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);
wrapper_album_collection!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);
wrapper_artist_collection!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);
wrapper_group!(impl[C: ?Sized + GroupKind] GroupWrapper<C> => group);

impl Library for LibraryWrapper {}
impl Discoverables for DiscoverablesWrapper {}
impl RecentlyPlayed for RecentlyPlayedWrapper {}
impl SearchHistory for SearchHistoryWrapper {}
impl SearchResults for SearchResultsWrapper {}
