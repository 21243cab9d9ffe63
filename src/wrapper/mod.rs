//! Plugin Wrappers
//!
//! Outward-facing façades over provider models. A wrapper runs the active
//! plugin chain of its contract once against the provider instance, relays
//! every change notification of the decorated result through its own event
//! hubs, and wraps every model it hands out (paged reads, notification
//! payloads, related items) with the same plugin set.
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use polyphony::model::{Album, Model, ModelKind, Playable};
//! use polyphony::plugin::ActivePlugins;
//! use polyphony::testing::MemoryModel;
//! use polyphony::wrapper::{AlbumWrapper, PluginWrapper};
//!
//! # tokio_test::block_on(async {
//! let album: Arc<dyn Album> = Arc::new(MemoryModel::new(ModelKind::Album, "a1"));
//! let wrapper = AlbumWrapper::with_plugins(album, ActivePlugins::empty());
//! assert_eq!(wrapper.name(), "a1");
//! println!("{} forwarded subscriptions", wrapper.subscription_count());
//!
//! wrapper.dispose().await.unwrap();
//! assert_eq!(wrapper.subscription_count(), 0);
//! # });
//! ```

use std::sync::Arc;

use crate::model::Model;
use crate::notifications::SubscriptionLedger;
use crate::plugin::ActivePlugins;

#[macro_use]
mod macros;
pub mod collections;
pub mod composites;
pub mod data_root;
pub mod group;
pub mod hubs;
pub mod relay;
pub mod transform;

pub use collections::{
    AlbumCollectionWrapper, ArtistCollectionWrapper, PlaylistCollectionWrapper, TrackCollectionWrapper,
};
pub use composites::{AlbumWrapper, ArtistWrapper, PlaylistWrapper, TrackWrapper};
pub use data_root::DataRootWrapper;
pub use group::{
    DiscoverablesWrapper, GroupWrapper, LibraryWrapper, PlayableCollectionGroupWrapper,
    RecentlyPlayedWrapper, SearchHistoryWrapper, SearchResultsWrapper,
};
pub use hubs::WrapperHubs;
pub use transform::{
    wrap_album, wrap_album_item, wrap_artist_item, wrap_group, wrap_playlist_item, wrap_track,
};

/// State shared by every wrapper type
pub trait PluginWrapper: Model {
    /// The plugin set this wrapper was built from; nested models are wrapped
    /// with the same set
    fn active_plugins(&self) -> &Arc<ActivePlugins>;

    /// Subscriptions this wrapper holds on its decorated instance
    fn ledger(&self) -> &SubscriptionLedger;

    /// Wrappers created together with this one
    fn eager_children(&self) -> Vec<Arc<dyn PluginWrapper>> {
        Vec::new()
    }

    /// Detach every forwarded subscription, including those of eager
    /// children. Returns the number released.
    fn detach_events(&self) -> usize {
        let children: usize = self.eager_children().iter().map(|child| child.detach_events()).sum();
        self.ledger().release_all() + children
    }

    /// Forwarded subscriptions still attached, including eager children
    fn subscription_count(&self) -> usize {
        let children: usize = self
            .eager_children()
            .iter()
            .map(|child| child.subscription_count())
            .sum();
        self.ledger().len() + children
    }
}
