//! Data root wrapper
//!
//! The root raises no notifications of its own. Its five top-level groups
//! are wrapped at construction; search results are wrapped per query.

use std::sync::Arc;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::model::{
    DataRoot, Discoverables, Library, ModelResult, PlayableCollectionGroup, RecentlyPlayed,
    SearchHistory, SearchResults,
};
use crate::notifications::SubscriptionLedger;
use crate::plugin::{ActivePlugins, PluginRegistry, PluginResult};
use crate::wrapper::group::{
    DiscoverablesWrapper, LibraryWrapper, PlayableCollectionGroupWrapper, RecentlyPlayedWrapper,
    SearchHistoryWrapper, SearchResultsWrapper,
};
use crate::wrapper::PluginWrapper;

/// Plugin-aware façade over a `DataRoot`
pub struct DataRootWrapper {
    inner: Arc<dyn DataRoot>,
    plugins: Arc<ActivePlugins>,
    ledger: SubscriptionLedger,
    library: Arc<LibraryWrapper>,
    discoverables: Arc<DiscoverablesWrapper>,
    recently_played: Arc<RecentlyPlayedWrapper>,
    pins: Arc<PlayableCollectionGroupWrapper>,
    search_history: Arc<SearchHistoryWrapper>,
}

impl DataRootWrapper {
    /// Wrap `inner` with the plugins merged from `registries`
    pub fn new(inner: Arc<dyn DataRoot>, registries: &[PluginRegistry]) -> PluginResult<Self> {
        Ok(Self::with_plugins(inner, ActivePlugins::from_registries(registries)?))
    }

    pub fn with_plugins(inner: Arc<dyn DataRoot>, plugins: Arc<ActivePlugins>) -> Self {
        let inner = plugins.execute(inner);
        debug!("Wrapping data root {} with {} plugin(s)", inner.identity(), plugins.len());

        Self {
            library: Arc::new(LibraryWrapper::with_plugins(inner.library(), plugins.clone())),
            discoverables: Arc::new(DiscoverablesWrapper::with_plugins(inner.discoverables(), plugins.clone())),
            recently_played: Arc::new(RecentlyPlayedWrapper::with_plugins(inner.recently_played(), plugins.clone())),
            pins: Arc::new(PlayableCollectionGroupWrapper::with_plugins(inner.pins(), plugins.clone())),
            search_history: Arc::new(SearchHistoryWrapper::with_plugins(inner.search_history(), plugins.clone())),
            ledger: SubscriptionLedger::new(),
            inner,
            plugins,
        }
    }

    /// The plugin-decorated instance behind this wrapper
    pub fn decorated(&self) -> &Arc<dyn DataRoot> {
        &self.inner
    }
}

impl PluginWrapper for DataRootWrapper {
    fn active_plugins(&self) -> &Arc<ActivePlugins> {
        &self.plugins
    }

    fn ledger(&self) -> &SubscriptionLedger {
        &self.ledger
    }

    fn eager_children(&self) -> Vec<Arc<dyn PluginWrapper>> {
        vec![
            self.library.clone() as Arc<dyn PluginWrapper>,
            self.discoverables.clone() as Arc<dyn PluginWrapper>,
            self.recently_played.clone() as Arc<dyn PluginWrapper>,
            self.pins.clone() as Arc<dyn PluginWrapper>,
            self.search_history.clone() as Arc<dyn PluginWrapper>,
        ]
    }
}

wrapper_model!(DataRootWrapper => inner);

#[async_trait::async_trait]
impl DataRoot for DataRootWrapper {
    async fn init(&self, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.init(cancel).await
    }

    fn is_initialized(&self) -> bool {
        self.inner.is_initialized()
    }

    fn library(&self) -> Arc<dyn Library> {
        self.library.clone()
    }

    fn discoverables(&self) -> Arc<dyn Discoverables> {
        self.discoverables.clone()
    }

    fn recently_played(&self) -> Arc<dyn RecentlyPlayed> {
        self.recently_played.clone()
    }

    fn pins(&self) -> Arc<dyn PlayableCollectionGroup> {
        self.pins.clone()
    }

    fn search_history(&self) -> Arc<dyn SearchHistory> {
        self.search_history.clone()
    }

    async fn search(&self, query: &str, cancel: &CancellationToken) -> ModelResult<Arc<dyn SearchResults>> {
        let results = self.inner.search(query, cancel).await?;
        let wrapped: Arc<dyn SearchResults> =
            Arc::new(SearchResultsWrapper::with_plugins(results, self.plugins.clone()));
        Ok(wrapped)
    }

    async fn search_autocomplete(&self, query: &str, cancel: &CancellationToken) -> ModelResult<Vec<String>> {
        self.inner.search_autocomplete(query, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Model, ModelKind, Playable, Track, TrackCollection};
    use crate::plugin::tests::mock_plugins::{playable_override, plugin_registry};
    use crate::testing::MemoryModel;

    fn suffixed_plugins() -> Arc<ActivePlugins> {
        let mut registry = plugin_registry("suffix");
        registry.add(playable_override(" [hd]", None));
        registry.finalize()
    }

    async fn stocked_root() -> Arc<MemoryModel> {
        let root = Arc::new(MemoryModel::new(ModelKind::DataRoot, "root"));
        let cancel = CancellationToken::new();
        for (index, name) in ["So What", "Freddie Freeloader", "Blue in Green"].iter().enumerate() {
            let track: Arc<dyn Track> = Arc::new(MemoryModel::new(ModelKind::Track, format!("t{}", index)).with_name(*name));
            root.library_model().add_track(track, index, &cancel).await.unwrap();
        }
        root
    }

    #[tokio::test]
    async fn test_top_level_groups_are_wrapped() {
        let root = stocked_root().await;
        let wrapper = DataRootWrapper::with_plugins(root.clone(), suffixed_plugins());

        assert_eq!(wrapper.library().id(), "root/library");
        assert_eq!(wrapper.library().name(), "library [hd]");
        assert_eq!(wrapper.pins().name(), "pins [hd]");
        assert_eq!(wrapper.library().total_track_count(), 3);
        assert!(wrapper.equals(&*root));
    }

    #[tokio::test]
    async fn test_search_results_are_wrapped() {
        let root = stocked_root().await;
        let wrapper = DataRootWrapper::with_plugins(root, suffixed_plugins());
        let cancel = CancellationToken::new();

        let results = wrapper.search("green", &cancel).await.unwrap();
        assert_eq!(results.name(), "green [hd]");
        let tracks = results.get_tracks(10, 0, &cancel).await.unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].name(), "Blue in Green [hd]");

        let names = wrapper.search_autocomplete("fr", &cancel).await.unwrap();
        assert_eq!(names, vec!["Freddie Freeloader".to_string()]);
    }

    #[tokio::test]
    async fn test_dispose_detaches_every_group() {
        let root = stocked_root().await;
        let wrapper = DataRootWrapper::with_plugins(root.clone(), ActivePlugins::empty());
        assert_eq!(wrapper.subscription_count(), 45);
        assert_eq!(root.library_model().subscriber_count(), 9);

        wrapper.init(&CancellationToken::new()).await.unwrap();
        assert!(wrapper.is_initialized());

        wrapper.dispose().await.unwrap();
        assert_eq!(wrapper.subscription_count(), 0);
        assert_eq!(root.library_model().subscriber_count(), 0);
        assert_eq!(root.dispose_count(), 1);
        assert_eq!(root.library_model().dispose_count(), 1);
    }
}
