//! Capability plugins reach every composite that embeds the capability,
//! including models handed out by paged reads.

mod common;

use std::sync::Arc;

use polyphony::model::{
    Album, AlbumCollection, AlbumCollectionItem, DataRoot, DownloadState, Downloadable, ModelKind,
    Playable, Track, TrackCollection,
};
use polyphony::plugin::{ActivePlugins, PluginError, PluginMetadata, PluginRegistry};
use polyphony::testing::MemoryModel;
use polyphony::wrapper::{
    AlbumCollectionWrapper, AlbumWrapper, ArtistWrapper, DataRootWrapper, LibraryWrapper,
    PlaylistWrapper, TrackCollectionWrapper, TrackWrapper,
};
use polyphony::CancellationToken;
use semver::Version;

use common::{offline_plugin, tagged_plugin};

fn memory(kind: ModelKind, id: &str) -> Arc<MemoryModel> {
    Arc::new(MemoryModel::new(kind, id))
}

#[test]
fn downloadable_plugin_reaches_every_composite() {
    let active = ActivePlugins::from_registries(&[offline_plugin()]).unwrap();
    let downloaded = DownloadState::Downloaded;

    let track = TrackWrapper::with_plugins(memory(ModelKind::Track, "t1"), active.clone());
    let album = AlbumWrapper::with_plugins(memory(ModelKind::Album, "a1"), active.clone());
    let artist = ArtistWrapper::with_plugins(memory(ModelKind::Artist, "ar1"), active.clone());
    let playlist = PlaylistWrapper::with_plugins(memory(ModelKind::Playlist, "p1"), active.clone());
    let tracks = TrackCollectionWrapper::with_plugins(memory(ModelKind::TrackCollection, "tc"), active.clone());
    let library = LibraryWrapper::with_plugins(memory(ModelKind::Library, "lib"), active);

    assert_eq!(track.download_info().state, downloaded);
    assert_eq!(album.download_info().state, downloaded);
    assert_eq!(artist.download_info().state, downloaded);
    assert_eq!(playlist.download_info().state, downloaded);
    assert_eq!(tracks.download_info().state, downloaded);
    assert_eq!(library.download_info().state, downloaded);
}

#[test]
fn provider_is_left_untouched() {
    let album = memory(ModelKind::Album, "a1");
    let wrapper = AlbumWrapper::new(album.clone(), &[offline_plugin()]).unwrap();

    assert_eq!(wrapper.download_info().state, DownloadState::Downloaded);
    assert_eq!(album.download_info().state, DownloadState::None);
}

#[tokio::test]
async fn nested_models_from_paged_reads_are_decorated() {
    let album: Arc<dyn Album> = memory(ModelKind::Album, "kind-of-blue");
    let nested: Arc<dyn AlbumCollection> = memory(ModelKind::AlbumCollection, "boxset");
    let collection = Arc::new(
        MemoryModel::new(ModelKind::AlbumCollection, "shelf")
            .with_album_items(vec![AlbumCollectionItem::Album(album), AlbumCollectionItem::Collection(nested)]),
    );
    let wrapper =
        AlbumCollectionWrapper::new(collection, &[tagged_plugin("tags", "remaster", None)]).unwrap();

    let items = wrapper.get_album_items(10, 0, &CancellationToken::new()).await.unwrap();
    let names: Vec<String> = items
        .iter()
        .map(|item| match item {
            AlbumCollectionItem::Album(album) => album.name(),
            AlbumCollectionItem::Collection(collection) => collection.name(),
        })
        .collect();
    assert_eq!(names, vec!["kind-of-blue (remaster)", "boxset (remaster)"]);
}

#[test]
fn playable_override_takes_precedence_over_direct_capability() {
    let registries = [offline_plugin(), tagged_plugin("pins", "pinned", Some(DownloadState::Failed))];
    let album = AlbumWrapper::new(memory(ModelKind::Album, "a1"), &registries).unwrap();
    let track = TrackWrapper::new(memory(ModelKind::Track, "t1"), &registries).unwrap();

    assert_eq!(album.download_info().state, DownloadState::Failed);
    assert_eq!(track.download_info().state, DownloadState::Failed);
    assert_eq!(album.name(), "a1 (pinned)");
}

#[test]
fn import_order_is_kept() {
    let active = ActivePlugins::from_registries(&[
        tagged_plugin("outer", "outer", None),
        tagged_plugin("inner", "inner", None),
    ])
    .unwrap();

    let ids: Vec<&str> = active.plugins().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["outer", "inner"]);

    // The first plugin is outermost, so its tag is appended last
    let track = TrackWrapper::with_plugins(memory(ModelKind::Track, "t1"), active);
    assert_eq!(track.name(), "t1 (inner) (outer)");
}

#[tokio::test]
async fn data_root_groups_and_search_results_are_decorated() {
    let root = memory(ModelKind::DataRoot, "root");
    let track: Arc<dyn Track> = Arc::new(MemoryModel::new(ModelKind::Track, "t1").with_name("Moanin'"));
    root.library_model().add_track(track, 0, &CancellationToken::new()).await.unwrap();

    let wrapper = DataRootWrapper::new(root, &[offline_plugin()]).unwrap();
    assert_eq!(wrapper.library().download_info().state, DownloadState::Downloaded);
    assert_eq!(wrapper.pins().download_info().state, DownloadState::Downloaded);

    let results = wrapper.search("moan", &CancellationToken::new()).await.unwrap();
    let found = results.get_tracks(10, 0, &CancellationToken::new()).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].download_info().state, DownloadState::Downloaded);
    assert_eq!(results.total_children_count(), 0);
}

#[test]
fn incompatible_plugin_is_rejected_before_any_chain_runs() {
    let mut future = PluginRegistry::new(PluginMetadata::new("future", "Future", Version::new(99, 0, 0)));
    future.add::<dyn Downloadable, _>(|inner| inner);

    let error = match AlbumWrapper::new(memory(ModelKind::Album, "a1"), &[offline_plugin(), future]) {
        Ok(_) => panic!("incompatible plugin accepted"),
        Err(error) => error,
    };
    assert!(matches!(error, PluginError::VersionIncompatible { .. }));
}
