//! Group bases
//!
//! `PlayableCollectionGroup` and its refinements (library, discoverables,
//! recently played, search history, search results) share one generic base.

use std::sync::Arc;

use crate::model::{
    AlbumCollection, ArtistCollection, Discoverables, Downloadable, ImageCollection, Library, Model,
    Playable, PlayableCollectionGroup, PlaylistCollection, RecentlyPlayed, SearchHistory,
    SearchResults, TrackCollection, UrlCollection,
};
use crate::plugin::registry::PluginContract;

/// The group contract and its refinements
pub trait GroupKind: PlayableCollectionGroup + PluginContract {
    /// View an instance as a plain group
    fn upcast(inner: Arc<Self>) -> Arc<dyn PlayableCollectionGroup>;

    /// Share a base decorating this contract
    fn from_base(base: GroupPluginBase<Self>) -> Arc<Self>;
}

/// Pass-through decorator for the group contracts
pub struct GroupPluginBase<C: ?Sized> {
    pub inner: Arc<C>,
    pub inner_downloadable: Arc<dyn Downloadable>,
    pub inner_image_collection: Arc<dyn ImageCollection>,
    pub inner_url_collection: Arc<dyn UrlCollection>,
    pub inner_playable: Arc<dyn Playable>,
    pub inner_playlist_collection: Arc<dyn PlaylistCollection>,
    pub inner_track_collection: Arc<dyn TrackCollection>,
    pub inner_album_collection: Arc<dyn AlbumCollection>,
    pub inner_artist_collection: Arc<dyn ArtistCollection>,
}

pub type PlayableCollectionGroupPluginBase = GroupPluginBase<dyn PlayableCollectionGroup>;
pub type LibraryPluginBase = GroupPluginBase<dyn Library>;
pub type DiscoverablesPluginBase = GroupPluginBase<dyn Discoverables>;
pub type RecentlyPlayedPluginBase = GroupPluginBase<dyn RecentlyPlayed>;
pub type SearchHistoryPluginBase = GroupPluginBase<dyn SearchHistory>;
pub type SearchResultsPluginBase = GroupPluginBase<dyn SearchResults>;

impl<C: ?Sized + GroupKind> GroupPluginBase<C> {
    pub fn new(inner: Arc<C>) -> Self {
        let group = C::upcast(inner.clone());
        Self {
            inner,
            inner_downloadable: group.clone(),
            inner_image_collection: group.clone(),
            inner_url_collection: group.clone(),
            inner_playable: group.clone(),
            inner_playlist_collection: group.clone(),
            inner_track_collection: group.clone(),
            inner_album_collection: group.clone(),
            inner_artist_collection: group,
        }
    }

    fn owned(&self) -> Vec<Arc<dyn Model>> {
        owned_models![
            C::upcast(self.inner.clone()),
            self.inner_downloadable,
            self.inner_image_collection,
            self.inner_url_collection,
            self.inner_playable,
            self.inner_playlist_collection,
            self.inner_track_collection,
            self.inner_album_collection,
            self.inner_artist_collection,
        ]
    }
}

base_model!(impl[C: ?Sized + GroupKind] GroupPluginBase<C>);
crate::delegate_downloadable!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner_downloadable);
crate::delegate_image_collection!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner_image_collection);
crate::delegate_url_collection!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner_url_collection);
crate::delegate_playable!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner_playable);
crate::delegate_playlist_collection!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner_playlist_collection);
crate::delegate_track_collection!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner_track_collection);
crate::delegate_album_collection!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner_album_collection);
crate::delegate_artist_collection!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner_artist_collection);
crate::delegate_group!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner);

macro_rules! group_kind {
    ($($contract:ident),* $(,)?) => {
        $(
            impl GroupKind for dyn $contract {
                fn upcast(inner: Arc<Self>) -> Arc<dyn PlayableCollectionGroup> {
                    inner
                }

                fn from_base(base: GroupPluginBase<Self>) -> Arc<Self> {
                    Arc::new(base)
                }
            }
        )*
    };
}

group_kind!(PlayableCollectionGroup, Library, Discoverables, RecentlyPlayed, SearchHistory, SearchResults);

impl Library for GroupPluginBase<dyn Library> {}
impl Discoverables for GroupPluginBase<dyn Discoverables> {}
impl RecentlyPlayed for GroupPluginBase<dyn RecentlyPlayed> {}
impl SearchHistory for GroupPluginBase<dyn SearchHistory> {}
impl SearchResults for GroupPluginBase<dyn SearchResults> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelIdentity, ModelKind};
    use crate::testing::MemoryModel;

    #[tokio::test]
    async fn test_group_base_disposes_shared_inner_once() {
        let model = Arc::new(MemoryModel::new(ModelKind::Library, "library"));
        let base = LibraryPluginBase::new(model.clone());

        base.dispose().await.unwrap();
        assert_eq!(model.dispose_count(), 1);
    }

    #[test]
    fn test_group_base_reads_identity_from_inner() {
        let model = Arc::new(MemoryModel::new(ModelKind::SearchResults, "q:miles"));
        let base = SearchResultsPluginBase::new(model.clone());

        assert_eq!(base.identity(), model.identity());
        assert!(base.equals(&*model));
    }

    #[test]
    fn test_group_base_asks_inner_for_equality() {
        let model = Arc::new(
            MemoryModel::new(ModelKind::Library, "core-a-id")
                .with_merged_source(ModelIdentity::new(ModelKind::Library, "core-b-id")),
        );
        let merged = MemoryModel::new(ModelKind::Library, "core-b-id");
        let base = LibraryPluginBase::new(model.clone());

        assert_ne!(base.identity(), merged.identity());
        assert!(base.equals(&merged));
        assert!(!base.equals(&MemoryModel::new(ModelKind::Library, "core-c-id")));
    }
}
