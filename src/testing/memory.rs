//! In-memory model implementing every contract.
//!
//! State lives behind a `parking_lot` lock; every mutation publishes the
//! matching change events after the lock is released, the way a provider
//! model would.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::model::{
    Album, AlbumCollection, AlbumCollectionEvent, AlbumCollectionItem, AlbumEvent, Artist,
    ArtistCollection, ArtistCollectionEvent, ArtistCollectionItem, CollectionChange, CoreInfo,
    DataRoot, Discoverables, DownloadInfo, DownloadOperation, DownloadState, Downloadable,
    DownloadableEvent, Genre, GenreCollection, GenreCollectionEvent, GroupEvent, Image,
    ImageCollection, ImageCollectionEvent, Library, Link, Lyrics, Model, ModelError,
    ModelIdentity, ModelKind, ModelResult, Playable, PlayableCollectionGroup, PlayableEvent,
    PlaybackState, Playlist, PlaylistCollection, PlaylistCollectionEvent, PlaylistCollectionItem,
    RecentlyPlayed, SearchHistory, SearchResults, Track, TrackCollection, TrackCollectionEvent,
    TrackEvent, TrackType, UrlCollection, UrlCollectionEvent, UserProfile,
};
use crate::notifications::{EventHandler, EventHub, SubscriptionId};

/// Events describing an ordered collection of `T`
trait ItemEvent<T>: Sized {
    fn changed(added: Vec<CollectionChange<T>>, removed: Vec<CollectionChange<T>>) -> Self;

    fn counted(count: usize) -> Self;
}

macro_rules! item_event {
    ($event:ident, $item:ty, $changed:ident, $counted:ident) => {
        impl ItemEvent<$item> for $event {
            fn changed(added: Vec<CollectionChange<$item>>, removed: Vec<CollectionChange<$item>>) -> Self {
                $event::$changed { added, removed }
            }

            fn counted(count: usize) -> Self {
                $event::$counted(count)
            }
        }
    };
}

item_event!(ImageCollectionEvent, Image, ImagesChanged, ImagesCountChanged);
item_event!(UrlCollectionEvent, Link, UrlsChanged, UrlsCountChanged);
item_event!(GenreCollectionEvent, Genre, GenresChanged, GenresCountChanged);
item_event!(TrackCollectionEvent, Arc<dyn Track>, TracksChanged, TracksCountChanged);
item_event!(ArtistCollectionEvent, ArtistCollectionItem, ArtistItemsChanged, ArtistItemsCountChanged);
item_event!(AlbumCollectionEvent, AlbumCollectionItem, AlbumItemsChanged, AlbumItemsCountChanged);
item_event!(PlaylistCollectionEvent, PlaylistCollectionItem, PlaylistItemsChanged, PlaylistItemsCountChanged);
item_event!(GroupEvent, Arc<dyn PlayableCollectionGroup>, ChildItemsChanged, ChildrenCountChanged);

struct MemoryState {
    name: String,
    description: Option<String>,
    playback_state: PlaybackState,
    duration: Duration,
    last_played: Option<DateTime<Utc>>,
    added_at: Option<DateTime<Utc>>,
    download_info: DownloadInfo,
    editable: bool,

    images: Vec<Image>,
    urls: Vec<Link>,
    genres: Vec<Genre>,
    tracks: Vec<Arc<dyn Track>>,
    artists: Vec<ArtistCollectionItem>,
    albums: Vec<AlbumCollectionItem>,
    playlists: Vec<PlaylistCollectionItem>,
    children: Vec<Arc<dyn PlayableCollectionGroup>>,

    track_type: TrackType,
    album: Option<Arc<dyn Album>>,
    track_number: Option<u32>,
    disc_number: Option<u32>,
    language: Option<String>,
    lyrics: Option<Lyrics>,
    is_explicit: bool,
    date_published: Option<DateTime<Utc>>,
    owner: Option<UserProfile>,
    related_items: Option<Arc<dyn PlayableCollectionGroup>>,
}

#[derive(Default)]
struct MemoryHubs {
    downloadable: EventHub<DownloadableEvent>,
    images: EventHub<ImageCollectionEvent>,
    urls: EventHub<UrlCollectionEvent>,
    genres: EventHub<GenreCollectionEvent>,
    playable: EventHub<PlayableEvent>,
    tracks: EventHub<TrackCollectionEvent>,
    artists: EventHub<ArtistCollectionEvent>,
    albums: EventHub<AlbumCollectionEvent>,
    playlists: EventHub<PlaylistCollectionEvent>,
    track: EventHub<TrackEvent>,
    album: EventHub<AlbumEvent>,
    group: EventHub<GroupEvent>,
}

impl MemoryHubs {
    fn subscriber_count(&self) -> usize {
        self.downloadable.subscriber_count()
            + self.images.subscriber_count()
            + self.urls.subscriber_count()
            + self.genres.subscriber_count()
            + self.playable.subscriber_count()
            + self.tracks.subscriber_count()
            + self.artists.subscriber_count()
            + self.albums.subscriber_count()
            + self.playlists.subscriber_count()
            + self.track.subscriber_count()
            + self.album.subscriber_count()
            + self.group.subscriber_count()
    }
}

/// Children of a data root
struct RootParts {
    library: Arc<MemoryModel>,
    discoverables: Arc<MemoryModel>,
    recently_played: Arc<MemoryModel>,
    pins: Arc<MemoryModel>,
    search_history: Arc<MemoryModel>,
}

impl RootParts {
    fn new(root_id: &str) -> Self {
        let part = |kind: ModelKind, suffix: &str| {
            Arc::new(MemoryModel::new(kind, format!("{}/{}", root_id, suffix)).with_name(suffix))
        };
        Self {
            library: part(ModelKind::Library, "library"),
            discoverables: part(ModelKind::Discoverables, "discoverables"),
            recently_played: part(ModelKind::RecentlyPlayed, "recently-played"),
            pins: part(ModelKind::PlayableCollectionGroup, "pins"),
            search_history: part(ModelKind::SearchHistory, "search-history"),
        }
    }
}

/// In-memory model usable as any contract
pub struct MemoryModel {
    identity: ModelIdentity,
    sources: Vec<ModelIdentity>,
    source_cores: Vec<CoreInfo>,
    state: RwLock<MemoryState>,
    hubs: MemoryHubs,
    disposals: AtomicUsize,
    initialized: AtomicBool,
    roots: OnceLock<RootParts>,
}

fn check_cancel(cancel: &CancellationToken) -> ModelResult<()> {
    if cancel.is_cancelled() {
        return Err(ModelError::Cancelled);
    }
    Ok(())
}

fn page<T: Clone>(items: &[T], limit: usize, offset: usize) -> Vec<T> {
    items.iter().skip(offset).take(limit).cloned().collect()
}

impl MemoryModel {
    /// Create a model of `kind` named after its id
    pub fn new<S: Into<String>>(kind: ModelKind, id: S) -> Self {
        let id = id.into();
        let identity = ModelIdentity::new(kind, id.clone());
        Self {
            sources: vec![identity.clone()],
            source_cores: vec![CoreInfo::new("memory", "In-memory core")],
            identity,
            state: RwLock::new(MemoryState {
                name: id,
                description: None,
                playback_state: PlaybackState::None,
                duration: Duration::ZERO,
                last_played: None,
                added_at: None,
                download_info: DownloadInfo::default(),
                editable: true,
                images: Vec::new(),
                urls: Vec::new(),
                genres: Vec::new(),
                tracks: Vec::new(),
                artists: Vec::new(),
                albums: Vec::new(),
                playlists: Vec::new(),
                children: Vec::new(),
                track_type: TrackType::Song,
                album: None,
                track_number: None,
                disc_number: None,
                language: None,
                lyrics: None,
                is_explicit: false,
                date_published: None,
                owner: None,
                related_items: None,
            }),
            hubs: MemoryHubs::default(),
            disposals: AtomicUsize::new(0),
            initialized: AtomicBool::new(false),
            roots: OnceLock::new(),
        }
    }

    /// Create a model of `kind` with a random id
    pub fn generated(kind: ModelKind) -> Self {
        Self::new(kind, Uuid::new_v4().to_string())
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.state.get_mut().name = name.into();
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.state.get_mut().duration = duration;
        self
    }

    pub fn with_download_state(mut self, state: DownloadState) -> Self {
        self.state.get_mut().download_info = DownloadInfo::new(state, 0);
        self
    }

    /// Refuse every edit
    pub fn read_only(mut self) -> Self {
        self.state.get_mut().editable = false;
        self
    }

    /// Record another provider item merged into this one; it compares equal
    pub fn with_merged_source(mut self, source: ModelIdentity) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_source_core(mut self, core: CoreInfo) -> Self {
        self.source_cores.push(core);
        self
    }

    pub fn with_tracks(mut self, tracks: Vec<Arc<dyn Track>>) -> Self {
        self.state.get_mut().tracks = tracks;
        self
    }

    pub fn with_artist_items(mut self, items: Vec<ArtistCollectionItem>) -> Self {
        self.state.get_mut().artists = items;
        self
    }

    pub fn with_album_items(mut self, items: Vec<AlbumCollectionItem>) -> Self {
        self.state.get_mut().albums = items;
        self
    }

    pub fn with_playlist_items(mut self, items: Vec<PlaylistCollectionItem>) -> Self {
        self.state.get_mut().playlists = items;
        self
    }

    pub fn with_children(mut self, children: Vec<Arc<dyn PlayableCollectionGroup>>) -> Self {
        self.state.get_mut().children = children;
        self
    }

    pub fn with_album(mut self, album: Arc<dyn Album>) -> Self {
        self.state.get_mut().album = Some(album);
        self
    }

    pub fn with_owner(mut self, owner: UserProfile) -> Self {
        self.state.get_mut().owner = Some(owner);
        self
    }

    pub fn with_related_items(mut self, related: Arc<dyn PlayableCollectionGroup>) -> Self {
        self.state.get_mut().related_items = Some(related);
        self
    }

    /// Number of times `dispose` was called
    pub fn dispose_count(&self) -> usize {
        self.disposals.load(Ordering::SeqCst)
    }

    /// Handlers currently attached to any of this model's events
    pub fn subscriber_count(&self) -> usize {
        self.hubs.subscriber_count()
    }

    /// The concrete library model behind `DataRoot::library`
    pub fn library_model(&self) -> Arc<MemoryModel> {
        self.roots().library.clone()
    }

    fn roots(&self) -> &RootParts {
        self.roots.get_or_init(|| RootParts::new(&self.identity.id))
    }

    fn ensure_editable(&self, operation: &str) -> ModelResult<()> {
        if !self.state.read().editable {
            return Err(ModelError::not_supported(operation));
        }
        Ok(())
    }

    fn read_page<T, F>(&self, select: F, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<T>>
    where
        T: Clone,
        F: FnOnce(&MemoryState) -> &Vec<T>,
    {
        check_cancel(cancel)?;
        let state = self.state.read();
        Ok(page(select(&state), limit, offset))
    }

    fn insert_item<T, E, F>(&self, hub: &EventHub<E>, select: F, item: T, index: usize, cancel: &CancellationToken) -> ModelResult<()>
    where
        T: Clone,
        E: ItemEvent<T>,
        F: FnOnce(&mut MemoryState) -> &mut Vec<T>,
    {
        check_cancel(cancel)?;
        self.ensure_editable("add")?;
        let (change, count) = {
            let mut state = self.state.write();
            let items = select(&mut state);
            if index > items.len() {
                return Err(ModelError::index_out_of_range(index, items.len()));
            }
            items.insert(index, item.clone());
            (CollectionChange::new(item, index), items.len())
        };
        hub.publish(&E::changed(vec![change], Vec::new()));
        hub.publish(&E::counted(count));
        Ok(())
    }

    fn remove_item<T, E, F>(&self, hub: &EventHub<E>, select: F, index: usize, cancel: &CancellationToken) -> ModelResult<()>
    where
        E: ItemEvent<T>,
        F: FnOnce(&mut MemoryState) -> &mut Vec<T>,
    {
        check_cancel(cancel)?;
        self.ensure_editable("remove")?;
        let (change, count) = {
            let mut state = self.state.write();
            let items = select(&mut state);
            if index >= items.len() {
                return Err(ModelError::index_out_of_range(index, items.len()));
            }
            let item = items.remove(index);
            (CollectionChange::new(item, index), items.len())
        };
        hub.publish(&E::changed(Vec::new(), vec![change]));
        hub.publish(&E::counted(count));
        Ok(())
    }

    fn can_add<T, F>(&self, select: F, index: usize, cancel: &CancellationToken) -> ModelResult<bool>
    where
        F: FnOnce(&MemoryState) -> &Vec<T>,
    {
        check_cancel(cancel)?;
        let state = self.state.read();
        Ok(state.editable && index <= select(&state).len())
    }

    fn can_remove<T, F>(&self, select: F, index: usize, cancel: &CancellationToken) -> ModelResult<bool>
    where
        F: FnOnce(&MemoryState) -> &Vec<T>,
    {
        check_cancel(cancel)?;
        let state = self.state.read();
        Ok(state.editable && index < select(&state).len())
    }

    fn set_playback_state(&self, playback_state: PlaybackState, cancel: &CancellationToken) -> ModelResult<()> {
        check_cancel(cancel)?;
        {
            let mut state = self.state.write();
            state.playback_state = playback_state;
            if playback_state == PlaybackState::Playing {
                state.last_played = Some(Utc::now());
            }
        }
        self.hubs.playable.publish(&PlayableEvent::PlaybackStateChanged(playback_state));
        Ok(())
    }

    fn update_track<F>(&self, event: TrackEvent, cancel: &CancellationToken, apply: F) -> ModelResult<()>
    where
        F: FnOnce(&mut MemoryState),
    {
        check_cancel(cancel)?;
        self.ensure_editable("change track")?;
        apply(&mut self.state.write());
        self.hubs.track.publish(&event);
        Ok(())
    }
}

#[async_trait]
impl Model for MemoryModel {
    fn identity(&self) -> &ModelIdentity {
        &self.identity
    }

    fn sources(&self) -> &[ModelIdentity] {
        &self.sources
    }

    fn source_cores(&self) -> &[CoreInfo] {
        &self.source_cores
    }

    /// Equal to any item merged into this one
    fn equals(&self, other: &dyn Model) -> bool {
        self.sources.iter().any(|source| source == other.identity())
    }

    async fn dispose(&self) -> ModelResult<()> {
        self.disposals.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl Downloadable for MemoryModel {
    fn download_info(&self) -> DownloadInfo {
        self.state.read().download_info
    }

    async fn start_download_operation(&self, operation: DownloadOperation, cancel: &CancellationToken) -> ModelResult<()> {
        check_cancel(cancel)?;
        let info = {
            let mut state = self.state.write();
            let current = state.download_info;
            state.download_info = match operation {
                DownloadOperation::Start | DownloadOperation::Resume => {
                    DownloadInfo::new(DownloadState::Downloading, current.progress)
                }
                DownloadOperation::Pause => DownloadInfo::new(DownloadState::Queued, current.progress),
                DownloadOperation::Cancel | DownloadOperation::Delete => DownloadInfo::default(),
            };
            state.download_info
        };
        self.hubs.downloadable.publish(&DownloadableEvent::DownloadInfoChanged(info));
        Ok(())
    }

    fn subscribe_downloadable(&self, handler: EventHandler<DownloadableEvent>) -> SubscriptionId {
        self.hubs.downloadable.subscribe(handler)
    }

    fn unsubscribe_downloadable(&self, id: SubscriptionId) -> bool {
        self.hubs.downloadable.unsubscribe(id)
    }
}

#[async_trait]
impl ImageCollection for MemoryModel {
    fn total_image_count(&self) -> usize {
        self.state.read().images.len()
    }

    async fn is_add_image_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_add(|s| &s.images, index, cancel)
    }

    async fn is_remove_image_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_remove(|s| &s.images, index, cancel)
    }

    async fn get_images(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<Image>> {
        self.read_page(|s| &s.images, limit, offset, cancel)
    }

    async fn add_image(&self, image: Image, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.insert_item(&self.hubs.images, |s| &mut s.images, image, index, cancel)
    }

    async fn remove_image(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.remove_item(&self.hubs.images, |s| &mut s.images, index, cancel)
    }

    fn subscribe_image_collection(&self, handler: EventHandler<ImageCollectionEvent>) -> SubscriptionId {
        self.hubs.images.subscribe(handler)
    }

    fn unsubscribe_image_collection(&self, id: SubscriptionId) -> bool {
        self.hubs.images.unsubscribe(id)
    }
}

#[async_trait]
impl UrlCollection for MemoryModel {
    fn total_url_count(&self) -> usize {
        self.state.read().urls.len()
    }

    async fn is_add_url_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_add(|s| &s.urls, index, cancel)
    }

    async fn is_remove_url_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_remove(|s| &s.urls, index, cancel)
    }

    async fn get_urls(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<Link>> {
        self.read_page(|s| &s.urls, limit, offset, cancel)
    }

    async fn add_url(&self, link: Link, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.insert_item(&self.hubs.urls, |s| &mut s.urls, link, index, cancel)
    }

    async fn remove_url(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.remove_item(&self.hubs.urls, |s| &mut s.urls, index, cancel)
    }

    fn subscribe_url_collection(&self, handler: EventHandler<UrlCollectionEvent>) -> SubscriptionId {
        self.hubs.urls.subscribe(handler)
    }

    fn unsubscribe_url_collection(&self, id: SubscriptionId) -> bool {
        self.hubs.urls.unsubscribe(id)
    }
}

#[async_trait]
impl GenreCollection for MemoryModel {
    fn total_genre_count(&self) -> usize {
        self.state.read().genres.len()
    }

    async fn is_add_genre_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_add(|s| &s.genres, index, cancel)
    }

    async fn is_remove_genre_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_remove(|s| &s.genres, index, cancel)
    }

    async fn get_genres(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<Genre>> {
        self.read_page(|s| &s.genres, limit, offset, cancel)
    }

    async fn add_genre(&self, genre: Genre, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.insert_item(&self.hubs.genres, |s| &mut s.genres, genre, index, cancel)
    }

    async fn remove_genre(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.remove_item(&self.hubs.genres, |s| &mut s.genres, index, cancel)
    }

    fn subscribe_genre_collection(&self, handler: EventHandler<GenreCollectionEvent>) -> SubscriptionId {
        self.hubs.genres.subscribe(handler)
    }

    fn unsubscribe_genre_collection(&self, id: SubscriptionId) -> bool {
        self.hubs.genres.unsubscribe(id)
    }
}

#[async_trait]
impl Playable for MemoryModel {
    fn id(&self) -> &str {
        &self.identity.id
    }

    fn name(&self) -> String {
        self.state.read().name.clone()
    }

    fn description(&self) -> Option<String> {
        self.state.read().description.clone()
    }

    fn playback_state(&self) -> PlaybackState {
        self.state.read().playback_state
    }

    fn duration(&self) -> Duration {
        self.state.read().duration
    }

    fn last_played(&self) -> Option<DateTime<Utc>> {
        self.state.read().last_played
    }

    fn added_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().added_at
    }

    fn is_change_name_available(&self) -> bool {
        self.state.read().editable
    }

    fn is_change_description_available(&self) -> bool {
        self.state.read().editable
    }

    fn is_change_duration_available(&self) -> bool {
        self.state.read().editable
    }

    async fn change_name(&self, name: String, cancel: &CancellationToken) -> ModelResult<()> {
        check_cancel(cancel)?;
        self.ensure_editable("change name")?;
        self.state.write().name = name.clone();
        self.hubs.playable.publish(&PlayableEvent::NameChanged(name));
        Ok(())
    }

    async fn change_description(&self, description: Option<String>, cancel: &CancellationToken) -> ModelResult<()> {
        check_cancel(cancel)?;
        self.ensure_editable("change description")?;
        self.state.write().description = description.clone();
        self.hubs.playable.publish(&PlayableEvent::DescriptionChanged(description));
        Ok(())
    }

    async fn change_duration(&self, duration: Duration, cancel: &CancellationToken) -> ModelResult<()> {
        check_cancel(cancel)?;
        self.ensure_editable("change duration")?;
        self.state.write().duration = duration;
        self.hubs.playable.publish(&PlayableEvent::DurationChanged(duration));
        Ok(())
    }

    fn subscribe_playable(&self, handler: EventHandler<PlayableEvent>) -> SubscriptionId {
        self.hubs.playable.subscribe(handler)
    }

    fn unsubscribe_playable(&self, id: SubscriptionId) -> bool {
        self.hubs.playable.unsubscribe(id)
    }
}

#[async_trait]
impl TrackCollection for MemoryModel {
    fn total_track_count(&self) -> usize {
        self.state.read().tracks.len()
    }

    async fn play_track_collection(&self, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Playing, cancel)
    }

    async fn play_track(&self, _track: Arc<dyn Track>, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Playing, cancel)
    }

    async fn pause_track_collection(&self, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Paused, cancel)
    }

    async fn is_add_track_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_add(|s| &s.tracks, index, cancel)
    }

    async fn is_remove_track_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_remove(|s| &s.tracks, index, cancel)
    }

    async fn get_tracks(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<Arc<dyn Track>>> {
        self.read_page(|s| &s.tracks, limit, offset, cancel)
    }

    async fn add_track(&self, track: Arc<dyn Track>, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.insert_item(&self.hubs.tracks, |s| &mut s.tracks, track, index, cancel)
    }

    async fn remove_track(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.remove_item(&self.hubs.tracks, |s| &mut s.tracks, index, cancel)
    }

    fn subscribe_track_collection(&self, handler: EventHandler<TrackCollectionEvent>) -> SubscriptionId {
        self.hubs.tracks.subscribe(handler)
    }

    fn unsubscribe_track_collection(&self, id: SubscriptionId) -> bool {
        self.hubs.tracks.unsubscribe(id)
    }
}

#[async_trait]
impl ArtistCollection for MemoryModel {
    fn total_artist_count(&self) -> usize {
        self.state.read().artists.len()
    }

    async fn play_artist_collection(&self, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Playing, cancel)
    }

    async fn play_artist_item(&self, _item: ArtistCollectionItem, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Playing, cancel)
    }

    async fn pause_artist_collection(&self, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Paused, cancel)
    }

    async fn is_add_artist_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_add(|s| &s.artists, index, cancel)
    }

    async fn is_remove_artist_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_remove(|s| &s.artists, index, cancel)
    }

    async fn get_artist_items(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<ArtistCollectionItem>> {
        self.read_page(|s| &s.artists, limit, offset, cancel)
    }

    async fn add_artist_item(&self, item: ArtistCollectionItem, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.insert_item(&self.hubs.artists, |s| &mut s.artists, item, index, cancel)
    }

    async fn remove_artist_item(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.remove_item(&self.hubs.artists, |s| &mut s.artists, index, cancel)
    }

    fn subscribe_artist_collection(&self, handler: EventHandler<ArtistCollectionEvent>) -> SubscriptionId {
        self.hubs.artists.subscribe(handler)
    }

    fn unsubscribe_artist_collection(&self, id: SubscriptionId) -> bool {
        self.hubs.artists.unsubscribe(id)
    }
}

#[async_trait]
impl AlbumCollection for MemoryModel {
    fn total_album_count(&self) -> usize {
        self.state.read().albums.len()
    }

    async fn play_album_collection(&self, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Playing, cancel)
    }

    async fn play_album_item(&self, _item: AlbumCollectionItem, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Playing, cancel)
    }

    async fn pause_album_collection(&self, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Paused, cancel)
    }

    async fn is_add_album_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_add(|s| &s.albums, index, cancel)
    }

    async fn is_remove_album_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_remove(|s| &s.albums, index, cancel)
    }

    async fn get_album_items(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<AlbumCollectionItem>> {
        self.read_page(|s| &s.albums, limit, offset, cancel)
    }

    async fn add_album_item(&self, item: AlbumCollectionItem, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.insert_item(&self.hubs.albums, |s| &mut s.albums, item, index, cancel)
    }

    async fn remove_album_item(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.remove_item(&self.hubs.albums, |s| &mut s.albums, index, cancel)
    }

    fn subscribe_album_collection(&self, handler: EventHandler<AlbumCollectionEvent>) -> SubscriptionId {
        self.hubs.albums.subscribe(handler)
    }

    fn unsubscribe_album_collection(&self, id: SubscriptionId) -> bool {
        self.hubs.albums.unsubscribe(id)
    }
}

#[async_trait]
impl PlaylistCollection for MemoryModel {
    fn total_playlist_count(&self) -> usize {
        self.state.read().playlists.len()
    }

    async fn play_playlist_collection(&self, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Playing, cancel)
    }

    async fn play_playlist_item(&self, _item: PlaylistCollectionItem, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Playing, cancel)
    }

    async fn pause_playlist_collection(&self, cancel: &CancellationToken) -> ModelResult<()> {
        self.set_playback_state(PlaybackState::Paused, cancel)
    }

    async fn is_add_playlist_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_add(|s| &s.playlists, index, cancel)
    }

    async fn is_remove_playlist_item_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_remove(|s| &s.playlists, index, cancel)
    }

    async fn get_playlist_items(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<PlaylistCollectionItem>> {
        self.read_page(|s| &s.playlists, limit, offset, cancel)
    }

    async fn add_playlist_item(&self, item: PlaylistCollectionItem, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.insert_item(&self.hubs.playlists, |s| &mut s.playlists, item, index, cancel)
    }

    async fn remove_playlist_item(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.remove_item(&self.hubs.playlists, |s| &mut s.playlists, index, cancel)
    }

    fn subscribe_playlist_collection(&self, handler: EventHandler<PlaylistCollectionEvent>) -> SubscriptionId {
        self.hubs.playlists.subscribe(handler)
    }

    fn unsubscribe_playlist_collection(&self, id: SubscriptionId) -> bool {
        self.hubs.playlists.unsubscribe(id)
    }
}

#[async_trait]
impl Track for MemoryModel {
    fn track_type(&self) -> TrackType {
        self.state.read().track_type
    }

    fn album(&self) -> Option<Arc<dyn Album>> {
        self.state.read().album.clone()
    }

    fn track_number(&self) -> Option<u32> {
        self.state.read().track_number
    }

    fn disc_number(&self) -> Option<u32> {
        self.state.read().disc_number
    }

    fn language(&self) -> Option<String> {
        self.state.read().language.clone()
    }

    fn lyrics(&self) -> Option<Lyrics> {
        self.state.read().lyrics.clone()
    }

    fn is_explicit(&self) -> bool {
        self.state.read().is_explicit
    }

    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>> {
        self.state.read().related_items.clone()
    }

    fn is_change_album_available(&self) -> bool {
        self.state.read().editable
    }

    fn is_change_track_number_available(&self) -> bool {
        self.state.read().editable
    }

    fn is_change_language_available(&self) -> bool {
        self.state.read().editable
    }

    fn is_change_lyrics_available(&self) -> bool {
        self.state.read().editable
    }

    fn is_change_is_explicit_available(&self) -> bool {
        self.state.read().editable
    }

    async fn change_album(&self, album: Option<Arc<dyn Album>>, cancel: &CancellationToken) -> ModelResult<()> {
        let event = TrackEvent::AlbumChanged(album.clone());
        self.update_track(event, cancel, |s| s.album = album)
    }

    async fn change_track_number(&self, track_number: Option<u32>, cancel: &CancellationToken) -> ModelResult<()> {
        self.update_track(TrackEvent::TrackNumberChanged(track_number), cancel, |s| s.track_number = track_number)
    }

    async fn change_language(&self, language: Option<String>, cancel: &CancellationToken) -> ModelResult<()> {
        let event = TrackEvent::LanguageChanged(language.clone());
        self.update_track(event, cancel, |s| s.language = language)
    }

    async fn change_lyrics(&self, lyrics: Option<Lyrics>, cancel: &CancellationToken) -> ModelResult<()> {
        let event = TrackEvent::LyricsChanged(lyrics.clone());
        self.update_track(event, cancel, |s| s.lyrics = lyrics)
    }

    async fn change_is_explicit(&self, is_explicit: bool, cancel: &CancellationToken) -> ModelResult<()> {
        self.update_track(TrackEvent::IsExplicitChanged(is_explicit), cancel, |s| s.is_explicit = is_explicit)
    }

    fn subscribe_track(&self, handler: EventHandler<TrackEvent>) -> SubscriptionId {
        self.hubs.track.subscribe(handler)
    }

    fn unsubscribe_track(&self, id: SubscriptionId) -> bool {
        self.hubs.track.unsubscribe(id)
    }
}

#[async_trait]
impl Album for MemoryModel {
    fn date_published(&self) -> Option<DateTime<Utc>> {
        self.state.read().date_published
    }

    fn is_change_date_published_available(&self) -> bool {
        self.state.read().editable
    }

    async fn change_date_published(&self, date: DateTime<Utc>, cancel: &CancellationToken) -> ModelResult<()> {
        check_cancel(cancel)?;
        self.ensure_editable("change date published")?;
        self.state.write().date_published = Some(date);
        self.hubs.album.publish(&AlbumEvent::DatePublishedChanged(Some(date)));
        Ok(())
    }

    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>> {
        self.state.read().related_items.clone()
    }

    fn subscribe_album(&self, handler: EventHandler<AlbumEvent>) -> SubscriptionId {
        self.hubs.album.subscribe(handler)
    }

    fn unsubscribe_album(&self, id: SubscriptionId) -> bool {
        self.hubs.album.unsubscribe(id)
    }
}

impl Artist for MemoryModel {
    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>> {
        self.state.read().related_items.clone()
    }
}

impl Playlist for MemoryModel {
    fn owner(&self) -> Option<UserProfile> {
        self.state.read().owner.clone()
    }

    fn related_items(&self) -> Option<Arc<dyn PlayableCollectionGroup>> {
        self.state.read().related_items.clone()
    }
}

#[async_trait]
impl PlayableCollectionGroup for MemoryModel {
    fn total_children_count(&self) -> usize {
        self.state.read().children.len()
    }

    async fn is_add_child_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_add(|s| &s.children, index, cancel)
    }

    async fn is_remove_child_available(&self, index: usize, cancel: &CancellationToken) -> ModelResult<bool> {
        self.can_remove(|s| &s.children, index, cancel)
    }

    async fn get_children(&self, limit: usize, offset: usize, cancel: &CancellationToken) -> ModelResult<Vec<Arc<dyn PlayableCollectionGroup>>> {
        self.read_page(|s| &s.children, limit, offset, cancel)
    }

    async fn add_child(&self, child: Arc<dyn PlayableCollectionGroup>, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.insert_item(&self.hubs.group, |s| &mut s.children, child, index, cancel)
    }

    async fn remove_child(&self, index: usize, cancel: &CancellationToken) -> ModelResult<()> {
        self.remove_item(&self.hubs.group, |s| &mut s.children, index, cancel)
    }

    fn subscribe_group(&self, handler: EventHandler<GroupEvent>) -> SubscriptionId {
        self.hubs.group.subscribe(handler)
    }

    fn unsubscribe_group(&self, id: SubscriptionId) -> bool {
        self.hubs.group.unsubscribe(id)
    }
}

impl Library for MemoryModel {}
impl Discoverables for MemoryModel {}
impl RecentlyPlayed for MemoryModel {}
impl SearchHistory for MemoryModel {}
impl SearchResults for MemoryModel {}

#[async_trait]
impl DataRoot for MemoryModel {
    async fn init(&self, cancel: &CancellationToken) -> ModelResult<()> {
        check_cancel(cancel)?;
        self.roots();
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    fn library(&self) -> Arc<dyn Library> {
        self.roots().library.clone()
    }

    fn discoverables(&self) -> Arc<dyn Discoverables> {
        self.roots().discoverables.clone()
    }

    fn recently_played(&self) -> Arc<dyn RecentlyPlayed> {
        self.roots().recently_played.clone()
    }

    fn pins(&self) -> Arc<dyn PlayableCollectionGroup> {
        self.roots().pins.clone()
    }

    fn search_history(&self) -> Arc<dyn SearchHistory> {
        self.roots().search_history.clone()
    }

    /// Library tracks whose name contains `query`, case-insensitively
    async fn search(&self, query: &str, cancel: &CancellationToken) -> ModelResult<Arc<dyn SearchResults>> {
        check_cancel(cancel)?;
        let needle = query.to_lowercase();
        let matches: Vec<Arc<dyn Track>> = self
            .roots()
            .library
            .state
            .read()
            .tracks
            .iter()
            .filter(|track| track.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        let results: Arc<dyn SearchResults> = Arc::new(
            MemoryModel::new(ModelKind::SearchResults, format!("search:{}", query))
                .with_name(query)
                .with_tracks(matches),
        );
        Ok(results)
    }

    /// Names of library tracks starting with `query`, case-insensitively
    async fn search_autocomplete(&self, query: &str, cancel: &CancellationToken) -> ModelResult<Vec<String>> {
        check_cancel(cancel)?;
        let prefix = query.to_lowercase();
        Ok(self
            .roots()
            .library
            .state
            .read()
            .tracks
            .iter()
            .map(|track| track.name())
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .collect())
    }
}
