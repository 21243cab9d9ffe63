//! Tests for the Global Capability Connector
//!
//! A plugin registered for one capability must reach every composite,
//! collection and group that embeds it, with the documented precedence.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::mock_plugins::*;
use crate::model::{
    Album, AlbumCollection, Artist, ArtistCollection, DataRoot, DownloadOperation, DownloadState,
    Downloadable, GenreCollection, ImageCollection, Library, Model, ModelKind, Playable,
    PlayableCollectionGroup, Playlist, PlaylistCollection, SearchResults, Track, TrackCollection,
    UrlCollection,
};
use crate::plugin::base::AlbumPluginBase;
use crate::plugin::connector::GlobalCapabilityConnector;
use crate::plugin::registry::ActivePlugins;
use crate::testing::MemoryModel;

fn memory(kind: ModelKind, id: &str) -> Arc<MemoryModel> {
    Arc::new(MemoryModel::new(kind, id))
}

fn downloaded_everywhere() -> Arc<ActivePlugins> {
    let mut registry = plugin_registry("offline");
    registry.add::<dyn Downloadable, _>(recording_download(
        "offline",
        Some(DownloadState::Downloaded),
        &new_trace(),
    ));
    registry.finalize()
}

#[test]
fn test_downloadable_plugin_reaches_composites() {
    let active = downloaded_everywhere();

    let track: Arc<dyn Track> = active.execute::<dyn Track>(memory(ModelKind::Track, "t1"));
    let album: Arc<dyn Album> = active.execute::<dyn Album>(memory(ModelKind::Album, "a1"));
    let artist: Arc<dyn Artist> = active.execute::<dyn Artist>(memory(ModelKind::Artist, "ar1"));
    let playlist: Arc<dyn Playlist> = active.execute::<dyn Playlist>(memory(ModelKind::Playlist, "p1"));

    assert_eq!(track.download_info().state, DownloadState::Downloaded);
    assert_eq!(album.download_info().state, DownloadState::Downloaded);
    assert_eq!(artist.download_info().state, DownloadState::Downloaded);
    assert_eq!(playlist.download_info().state, DownloadState::Downloaded);
}

#[test]
fn test_downloadable_plugin_reaches_collections_and_groups() {
    let active = downloaded_everywhere();

    let playable = active.execute::<dyn Playable>(memory(ModelKind::Track, "t1"));
    let tracks = active.execute::<dyn TrackCollection>(memory(ModelKind::TrackCollection, "tc"));
    let artists = active.execute::<dyn ArtistCollection>(memory(ModelKind::ArtistCollection, "arc"));
    let albums = active.execute::<dyn AlbumCollection>(memory(ModelKind::AlbumCollection, "alc"));
    let playlists = active.execute::<dyn PlaylistCollection>(memory(ModelKind::PlaylistCollection, "plc"));
    let group = active.execute::<dyn PlayableCollectionGroup>(memory(ModelKind::PlayableCollectionGroup, "g"));
    let library = active.execute::<dyn Library>(memory(ModelKind::Library, "lib"));
    let results = active.execute::<dyn SearchResults>(memory(ModelKind::SearchResults, "q"));

    for info in [
        playable.download_info(),
        tracks.download_info(),
        artists.download_info(),
        albums.download_info(),
        playlists.download_info(),
        group.download_info(),
        library.download_info(),
        results.download_info(),
    ] {
        assert_eq!(info.state, DownloadState::Downloaded);
    }
}

#[test]
fn test_capability_plugin_leaves_identity_alone() {
    let active = downloaded_everywhere();
    let model = memory(ModelKind::Album, "a1");

    let album = active.execute::<dyn Album>(model.clone());

    assert_eq!(album.identity(), model.identity());
    assert_eq!(album.name(), "a1");
}

#[test]
fn test_playable_override_beats_direct_primitive() {
    let mut registry = plugin_registry("mixed");
    registry
        .add::<dyn Downloadable, _>(recording_download("direct", Some(DownloadState::Downloaded), &new_trace()))
        .add::<dyn Playable, _>(playable_override(" [hd]", Some(DownloadState::Failed)));
    let active = registry.finalize();

    let album = active.execute::<dyn Album>(memory(ModelKind::Album, "a1"));

    assert_eq!(album.download_info().state, DownloadState::Failed);
    assert_eq!(album.name(), "a1 [hd]");
}

#[test]
fn test_playable_plugin_reaches_every_playable_composite() {
    let mut registry = plugin_registry("badges");
    registry.add::<dyn Playable, _>(playable_override(" *", None));
    let active = registry.finalize();

    assert_eq!(active.execute::<dyn Track>(memory(ModelKind::Track, "t")).name(), "t *");
    assert_eq!(active.execute::<dyn Playlist>(memory(ModelKind::Playlist, "p")).name(), "p *");
    assert_eq!(active.execute::<dyn Library>(memory(ModelKind::Library, "l")).name(), "l *");
    assert_eq!(
        active.execute::<dyn TrackCollection>(memory(ModelKind::TrackCollection, "tc")).name(),
        "tc *"
    );
}

#[test]
fn test_composite_plugin_wraps_connector_stage() {
    let mut registry = plugin_registry("layered");
    registry.add::<dyn Downloadable, _>(recording_download("capability", Some(DownloadState::Downloaded), &new_trace()));
    registry.add::<dyn Album, _>(|inner: Arc<dyn Album>| -> Arc<dyn Album> {
        let mut base = AlbumPluginBase::new(inner.clone());
        base.inner_downloadable = Arc::new(RecordingDownload::new(
            inner,
            "album",
            Some(DownloadState::Queued),
            new_trace(),
        ));
        Arc::new(base)
    });
    let active = registry.finalize();

    let album = active.execute::<dyn Album>(memory(ModelKind::Album, "a1"));

    assert_eq!(album.download_info().state, DownloadState::Queued);
}

#[tokio::test]
async fn test_capability_plugin_runs_once_per_operation() {
    let trace = new_trace();
    let mut registry = plugin_registry("audit");
    registry.add::<dyn Downloadable, _>(recording_download("audit", None, &trace));
    let active = registry.finalize();

    let album = active.execute::<dyn Album>(memory(ModelKind::Album, "a1"));
    album
        .start_download_operation(DownloadOperation::Start, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(recorded(&trace), vec!["audit"]);
    assert_eq!(album.download_info().state, DownloadState::Downloading);
}

#[test]
fn test_connect_appends_one_stage_per_embedding_chain() {
    let mut registry = plugin_registry("offline");
    registry.add::<dyn Downloadable, _>(recording_download("offline", None, &new_trace()));

    let connected = GlobalCapabilityConnector::connect(registry.chains());

    assert_eq!(connected.downloadable.len(), 1);
    assert_eq!(connected.image_collection.len(), 0);
    assert_eq!(connected.playable.len(), 1);
    assert_eq!(connected.album.len(), 1);
    assert_eq!(connected.library.len(), 1);
    assert_eq!(connected.data_root.len(), 0);

    // the registry keeps its own chains
    assert_eq!(registry.chains().album.len(), 0);
}

#[tokio::test]
async fn test_data_root_chain_is_not_connected() {
    let active = downloaded_everywhere();
    let root = active.execute::<dyn DataRoot>(memory(ModelKind::DataRoot, "root"));

    root.init(&CancellationToken::new()).await.unwrap();
    assert!(root.is_initialized());
    assert_eq!(root.library().download_info().state, DownloadState::None);
}

#[tokio::test]
async fn test_chains_without_plugins_dispose_model_once() {
    let active = ActivePlugins::empty();

    let album_model = memory(ModelKind::Album, "a1");
    active.execute::<dyn Album>(album_model.clone()).dispose().await.unwrap();
    assert_eq!(album_model.dispose_count(), 1);

    let library_model = memory(ModelKind::Library, "lib");
    active.execute::<dyn Library>(library_model.clone()).dispose().await.unwrap();
    assert_eq!(library_model.dispose_count(), 1);
}

#[test]
fn test_connect_without_plugins_adds_no_stage() {
    let registry = plugin_registry("empty");

    let connected = GlobalCapabilityConnector::connect(registry.chains());

    for (name, len) in connected.summary() {
        assert_eq!(len, 0, "{} chain gained a stage", name);
    }
}

#[test]
fn test_genre_plugin_reaches_genre_composites_only() {
    let mut registry = plugin_registry("genres");
    registry.add::<dyn GenreCollection, _>(fixed_genres(7));

    let connected = GlobalCapabilityConnector::connect(registry.chains());
    assert_eq!(connected.track.len(), 1);
    assert_eq!(connected.album.len(), 1);
    assert_eq!(connected.artist.len(), 1);
    assert_eq!(connected.playable.len(), 0);
    assert_eq!(connected.playlist.len(), 0);
    assert_eq!(connected.library.len(), 0);

    let active = registry.finalize();
    let track = active.execute::<dyn Track>(memory(ModelKind::Track, "t1"));
    let album = active.execute::<dyn Album>(memory(ModelKind::Album, "a1"));
    let artist = active.execute::<dyn Artist>(memory(ModelKind::Artist, "ar1"));

    assert_eq!(track.total_genre_count(), 7);
    assert_eq!(album.total_genre_count(), 7);
    assert_eq!(artist.total_genre_count(), 7);
    assert_eq!(album.total_image_count(), 0);
}

#[test]
fn test_image_and_url_plugins_reach_every_playable() {
    let mut registry = plugin_registry("artwork");
    registry
        .add::<dyn ImageCollection, _>(fixed_images(3))
        .add::<dyn UrlCollection, _>(fixed_urls(2));
    let active = registry.finalize();

    fn check(label: &str, item: Arc<dyn Playable>) {
        assert_eq!(item.total_image_count(), 3, "{} images", label);
        assert_eq!(item.total_url_count(), 2, "{} urls", label);
        assert_eq!(item.download_info().state, DownloadState::None, "{} download", label);
    }

    check("track", active.execute::<dyn Track>(memory(ModelKind::Track, "t1")));
    check("album", active.execute::<dyn Album>(memory(ModelKind::Album, "a1")));
    check("artist", active.execute::<dyn Artist>(memory(ModelKind::Artist, "ar1")));
    check("playlist", active.execute::<dyn Playlist>(memory(ModelKind::Playlist, "p1")));
    check("tracks", active.execute::<dyn TrackCollection>(memory(ModelKind::TrackCollection, "tc")));
    check("artists", active.execute::<dyn ArtistCollection>(memory(ModelKind::ArtistCollection, "arc")));
    check("albums", active.execute::<dyn AlbumCollection>(memory(ModelKind::AlbumCollection, "alc")));
    check("playlists", active.execute::<dyn PlaylistCollection>(memory(ModelKind::PlaylistCollection, "plc")));
    check("group", active.execute::<dyn PlayableCollectionGroup>(memory(ModelKind::PlayableCollectionGroup, "g")));
    check("library", active.execute::<dyn Library>(memory(ModelKind::Library, "lib")));
    check("results", active.execute::<dyn SearchResults>(memory(ModelKind::SearchResults, "q")));
}
