//! Track, album, artist and playlist wrappers.
//!
//! Related items are wrapped once, at construction, and disposed with the
//! wrapper. A track's album is wrapped on every read.

use std::sync::Arc;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::model::{
    Album, AlbumEvent, Artist, Lyrics, ModelResult, PlayableCollectionGroup, Playlist, Track,
    TrackEvent, TrackType, UserProfile,
};
use crate::notifications::{EventHandler, SubscriptionId, SubscriptionLedger};
use crate::plugin::{ActivePlugins, PluginRegistry, PluginResult};
use crate::wrapper::group::PlayableCollectionGroupWrapper;
use crate::wrapper::hubs::WrapperHubs;
use crate::wrapper::transform::wrap_album;
use crate::wrapper::{relay, PluginWrapper};

fn wrap_related(
    related: Option<Arc<dyn PlayableCollectionGroup>>,
    plugins: &Arc<ActivePlugins>,
) -> Option<Arc<PlayableCollectionGroupWrapper>> {
    related.map(|group| Arc::new(PlayableCollectionGroupWrapper::with_plugins(group, plugins.clone())))
}

macro_rules! composite_wrapper {
    (
        $(#[$doc:meta])*
        $name:ident, $contract:ident,
        |$inner:ident, $hubs:ident, $ledger:ident, $plugins:ident| $relays:block
    ) => {
        $(#[$doc])*
        pub struct $name {
            inner: Arc<dyn $contract>,
            plugins: Arc<ActivePlugins>,
            hubs: WrapperHubs,
            ledger: SubscriptionLedger,
            related: Option<Arc<PlayableCollectionGroupWrapper>>,
        }

        impl $name {
            /// Wrap `inner` with the plugins merged from `registries`
            pub fn new(inner: Arc<dyn $contract>, registries: &[PluginRegistry]) -> PluginResult<Self> {
                Ok(Self::with_plugins(inner, ActivePlugins::from_registries(registries)?))
            }

            pub fn with_plugins(inner: Arc<dyn $contract>, plugins: Arc<ActivePlugins>) -> Self {
                let $inner = plugins.execute(inner);
                let $hubs = WrapperHubs::new();
                let $ledger = SubscriptionLedger::new();
                let $plugins = &plugins;
                $relays
                let related = wrap_related($contract::related_items(&*$inner), $plugins);

                Self {
                    inner: $inner,
                    plugins,
                    hubs: $hubs,
                    ledger: $ledger,
                    related,
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

            fn eager_children(&self) -> Vec<Arc<dyn PluginWrapper>> {
                self.related
                    .iter()
                    .map(|related| related.clone() as Arc<dyn PluginWrapper>)
                    .collect()
            }
        }

        wrapper_model!($name => inner);
        wrapper_downloadable!($name => inner);
        wrapper_image_collection!($name => inner);
        wrapper_url_collection!($name => inner);
        wrapper_playable!($name => inner);
    };
}

composite_wrapper!(
    /// Plugin-aware façade over a `Track`
    TrackWrapper, Track,
    |inner, hubs, ledger, plugins| {
        relay::playable_events(inner.clone(), &hubs, &ledger);
        relay::genre_events(inner.clone(), &hubs, &ledger);
        relay::artist_collection_events(inner.clone(), &hubs, &ledger, plugins);
        relay::track_events(inner.clone(), &hubs, &ledger, plugins);
    }
);
wrapper_genre_collection!(TrackWrapper => inner);
wrapper_artist_collection!(TrackWrapper => inner);

composite_wrapper!(
    /// Plugin-aware façade over an `Album`
    AlbumWrapper, Album,
    |inner, hubs, ledger, plugins| {
        relay::playable_events(inner.clone(), &hubs, &ledger);
        relay::genre_events(inner.clone(), &hubs, &ledger);
        relay::artist_collection_events(inner.clone(), &hubs, &ledger, plugins);
        relay::track_collection_events(inner.clone(), &hubs, &ledger, plugins);
        relay::album_events(inner.clone(), &hubs, &ledger);
    }
);
wrapper_genre_collection!(AlbumWrapper => inner);
wrapper_artist_collection!(AlbumWrapper => inner);
wrapper_track_collection!(AlbumWrapper => inner);

composite_wrapper!(
    /// Plugin-aware façade over an `Artist`
    ArtistWrapper, Artist,
    |inner, hubs, ledger, plugins| {
        relay::playable_events(inner.clone(), &hubs, &ledger);
        relay::genre_events(inner.clone(), &hubs, &ledger);
        relay::album_collection_events(inner.clone(), &hubs, &ledger, plugins);
        relay::track_collection_events(inner.clone(), &hubs, &ledger, plugins);
    }
);
wrapper_genre_collection!(ArtistWrapper => inner);
wrapper_album_collection!(ArtistWrapper => inner);
wrapper_track_collection!(ArtistWrapper => inner);

composite_wrapper!(
    /// Plugin-aware façade over a `Playlist`
    PlaylistWrapper, Playlist,
    |inner, hubs, ledger, plugins| {
        relay::playable_events(inner.clone(), &hubs, &ledger);
        relay::track_collection_events(inner.clone(), &hubs, &ledger, plugins);
    }
);
wrapper_track_collection!(PlaylistWrapper => inner);

#[async_trait::async_trait]
impl Track for TrackWrapper {
    fn track_type(&self) -> TrackType {
        self.inner.track_type()
    }

    fn album(&self) -> Option<Arc<dyn Album>> {
        self.inner.album().map(|album| wrap_album(&album, &self.plugins))
    }

    fn track_number(&self) -> Option<u32> {
        self.inner.track_number()
    }

    fn disc_number(&self) -> Option<u32> {
        self.inner.disc_number()
    }

    fn language(&self) -> Option<String> {
        self.inner.language()
    }

    fn lyrics(&self) -> Option<Lyrics> {
        self.inner.lyrics()
    }

    fn is_explicit(&self) -> bool {
        self.inner.is_explicit()
    }

    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>> {
        self.related.clone().map(|related| related as Arc<dyn PlayableCollectionGroup>)
    }

    fn is_change_album_available(&self) -> bool {
        self.inner.is_change_album_available()
    }

    fn is_change_track_number_available(&self) -> bool {
        self.inner.is_change_track_number_available()
    }

    fn is_change_language_available(&self) -> bool {
        self.inner.is_change_language_available()
    }

    fn is_change_lyrics_available(&self) -> bool {
        self.inner.is_change_lyrics_available()
    }

    fn is_change_is_explicit_available(&self) -> bool {
        self.inner.is_change_is_explicit_available()
    }

    async fn change_album(&self, album: Option<Arc<dyn Album>>, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.change_album(album, cancel).await
    }

    async fn change_track_number(&self, track_number: Option<u32>, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.change_track_number(track_number, cancel).await
    }

    async fn change_language(&self, language: Option<String>, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.change_language(language, cancel).await
    }

    async fn change_lyrics(&self, lyrics: Option<Lyrics>, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.change_lyrics(lyrics, cancel).await
    }

    async fn change_is_explicit(&self, is_explicit: bool, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.change_is_explicit(is_explicit, cancel).await
    }

    fn subscribe_track(&self, handler: EventHandler<TrackEvent>) -> SubscriptionId {
        self.hubs.track.subscribe(handler)
    }

    fn unsubscribe_track(&self, id: SubscriptionId) -> bool {
        self.hubs.track.unsubscribe(id)
    }
}

#[async_trait::async_trait]
impl Album for AlbumWrapper {
    fn date_published(&self) -> Option<DateTime<Utc>> {
        self.inner.date_published()
    }

    fn is_change_date_published_available(&self) -> bool {
        self.inner.is_change_date_published_available()
    }

    async fn change_date_published(&self, date: DateTime<Utc>, cancel: &CancellationToken) -> ModelResult<()> {
        self.inner.change_date_published(date, cancel).await
    }

    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>> {
        self.related.clone().map(|related| related as Arc<dyn PlayableCollectionGroup>)
    }

    fn subscribe_album(&self, handler: EventHandler<AlbumEvent>) -> SubscriptionId {
        self.hubs.album.subscribe(handler)
    }

    fn unsubscribe_album(&self, id: SubscriptionId) -> bool {
        self.hubs.album.unsubscribe(id)
    }
}

impl Artist for ArtistWrapper {
    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>> {
        self.related.clone().map(|related| related as Arc<dyn PlayableCollectionGroup>)
    }
}

impl Playlist for PlaylistWrapper {
    fn owner(&self) -> Option<UserProfile> {
        self.inner.owner()
    }

    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>> {
        self.related.clone().map(|related| related as Arc<dyn PlayableCollectionGroup>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Model, ModelKind, Playable, TrackCollection};
    use crate::plugin::tests::mock_plugins::{playable_override, plugin_registry};
    use crate::testing::MemoryModel;
    use chrono::TimeZone;
    use parking_lot::Mutex;

    fn suffixed_plugins() -> Arc<ActivePlugins> {
        let mut registry = plugin_registry("suffix");
        registry.add(playable_override(" [hd]", None));
        registry.finalize()
    }

    fn group(id: &str) -> Arc<MemoryModel> {
        Arc::new(MemoryModel::new(ModelKind::PlayableCollectionGroup, id))
    }

    #[test]
    fn test_track_album_is_wrapped_on_read() {
        let album: Arc<dyn Album> = Arc::new(MemoryModel::new(ModelKind::Album, "a1"));
        let track = Arc::new(MemoryModel::new(ModelKind::Track, "t1").with_album(album.clone()));
        let wrapper = TrackWrapper::with_plugins(track, suffixed_plugins());

        let wrapped = wrapper.album().unwrap();
        assert_eq!(wrapped.name(), "a1 [hd]");
        assert!(wrapped.equals(&*album));
    }

    #[tokio::test]
    async fn test_track_event_album_is_rewrapped() {
        let track = Arc::new(MemoryModel::new(ModelKind::Track, "t1"));
        let wrapper = TrackWrapper::with_plugins(track.clone(), suffixed_plugins());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        wrapper.subscribe_track(Arc::new(move |event: &TrackEvent| {
            if let TrackEvent::AlbumChanged(Some(album)) = event {
                sink.lock().push(album.name());
            }
        }));

        let album: Arc<dyn Album> = Arc::new(MemoryModel::new(ModelKind::Album, "a2"));
        track.change_album(Some(album), &CancellationToken::new()).await.unwrap();
        assert_eq!(*seen.lock(), vec!["a2 [hd]".to_string()]);
    }

    #[tokio::test]
    async fn test_related_items_are_wrapped_and_disposed() {
        let related = group("rel");
        let track = Arc::new(MemoryModel::new(ModelKind::Track, "t1").with_related_items(related.clone()));
        let wrapper = TrackWrapper::with_plugins(track.clone(), suffixed_plugins());

        assert_eq!(wrapper.related_items().unwrap().name(), "rel [hd]");
        // 7 on the track, 9 on the related group
        assert_eq!(wrapper.subscription_count(), 16);
        assert_eq!(related.subscriber_count(), 9);

        wrapper.dispose().await.unwrap();
        assert_eq!(wrapper.subscription_count(), 0);
        assert_eq!(track.subscriber_count(), 0);
        assert_eq!(related.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_dispose_without_plugins_releases_each_model_once() {
        let related = group("rel");
        let album = Arc::new(MemoryModel::new(ModelKind::Album, "a1").with_related_items(related.clone()));
        let wrapper = AlbumWrapper::with_plugins(album.clone(), ActivePlugins::empty());

        wrapper.dispose().await.unwrap();
        assert_eq!(album.dispose_count(), 1);
        assert_eq!(related.dispose_count(), 1);
    }

    #[tokio::test]
    async fn test_album_members_forward() {
        let album = Arc::new(MemoryModel::new(ModelKind::Album, "a1"));
        let wrapper = AlbumWrapper::with_plugins(album.clone(), ActivePlugins::empty());

        let published = Utc.with_ymd_and_hms(1959, 8, 17, 0, 0, 0).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        wrapper.subscribe_album(Arc::new(move |event: &AlbumEvent| sink.lock().push(event.clone())));

        wrapper.change_date_published(published, &CancellationToken::new()).await.unwrap();
        assert_eq!(album.date_published(), Some(published));
        assert_eq!(wrapper.date_published(), Some(published));
        assert_eq!(seen.lock().len(), 1);
        assert!(wrapper.related_items().is_none());
    }

    #[tokio::test]
    async fn test_read_only_provider_errors_pass_through() {
        let artist = Arc::new(MemoryModel::new(ModelKind::Artist, "ar1").read_only());
        let wrapper = ArtistWrapper::with_plugins(artist, ActivePlugins::empty());

        let result = wrapper.change_name("renamed".to_string(), &CancellationToken::new()).await;
        assert!(result.is_err());
        assert_eq!(wrapper.name(), "ar1");
    }

    #[tokio::test]
    async fn test_playlist_tracks_are_wrapped() {
        let track: Arc<dyn Track> = Arc::new(MemoryModel::new(ModelKind::Track, "t1"));
        let owner = UserProfile {
            id: "u1".to_string(),
            display_name: "Miles".to_string(),
        };
        let playlist = Arc::new(
            MemoryModel::new(ModelKind::Playlist, "p1")
                .with_owner(owner.clone())
                .with_tracks(vec![track]),
        );
        let wrapper = PlaylistWrapper::with_plugins(playlist, suffixed_plugins());

        assert_eq!(wrapper.owner(), Some(owner));
        let tracks = wrapper.get_tracks(1, 0, &CancellationToken::new()).await.unwrap();
        assert_eq!(tracks[0].name(), "t1 [hd]");
    }
}
