//! Identity, notification and disposal behaviour of wrappers as seen by a
//! host application.

mod common;

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use polyphony::config::ConfigManager;
use polyphony::model::{
    Album, AlbumCollection, AlbumCollectionItem, DownloadState, Downloadable, Model, ModelError,
    ModelIdentity, ModelKind, Playable, PlayableEvent, Track, TrackCollection, TrackCollectionEvent,
};
use polyphony::plugin::base::AlbumPluginBase;
use polyphony::plugin::{ActivePlugins, PluginCatalog};
use polyphony::testing::MemoryModel;
use polyphony::wrapper::{wrap_album_item, AlbumWrapper, PluginWrapper, TrackCollectionWrapper, TrackWrapper};
use polyphony::CancellationToken;
use tempfile::NamedTempFile;

use common::{offline_plugin, tagged_plugin};

fn track(id: &str) -> Arc<dyn Track> {
    Arc::new(MemoryModel::new(ModelKind::Track, id))
}

#[test]
fn equality_ignores_the_plugin_set() {
    let album = Arc::new(MemoryModel::new(ModelKind::Album, "a1"));
    let plain = AlbumWrapper::with_plugins(album.clone(), ActivePlugins::empty());
    let tagged = AlbumWrapper::new(album.clone(), &[tagged_plugin("tags", "live", None), offline_plugin()]).unwrap();

    assert!(plain.equals(&tagged));
    assert!(tagged.equals(&*album));
    assert_eq!(plain.identity(), tagged.identity());
    assert_ne!(plain.name(), tagged.name());

    let other = Arc::new(MemoryModel::new(ModelKind::Album, "a2"));
    assert!(!tagged.equals(&*other));
}

#[test]
fn provider_equality_survives_every_layer() {
    let merged = Arc::new(
        MemoryModel::new(ModelKind::Album, "core-a-id")
            .with_merged_source(ModelIdentity::new(ModelKind::Album, "core-b-id")),
    );
    let same_item = MemoryModel::new(ModelKind::Album, "core-b-id");
    let unrelated = MemoryModel::new(ModelKind::Album, "core-c-id");
    assert!(merged.equals(&same_item));

    let base = AlbumPluginBase::new(merged.clone());
    let plain = AlbumWrapper::with_plugins(merged.clone(), ActivePlugins::empty());
    let decorated = AlbumWrapper::new(merged.clone(), &[tagged_plugin("tags", "live", None), offline_plugin()]).unwrap();

    assert!(base.equals(&same_item));
    assert!(plain.equals(&same_item));
    assert!(decorated.equals(&same_item));
    assert!(!decorated.equals(&unrelated));
}

#[tokio::test]
async fn notification_payloads_carry_plugin_behaviour() {
    let model = Arc::new(MemoryModel::new(ModelKind::TrackCollection, "queue"));
    let wrapper = TrackCollectionWrapper::new(model.clone(), &[tagged_plugin("tags", "live", None)]).unwrap();

    let added = Arc::new(Mutex::new(Vec::new()));
    let sink = added.clone();
    wrapper.subscribe_track_collection(Arc::new(move |event: &TrackCollectionEvent| {
        if let TrackCollectionEvent::TracksChanged { added, .. } = event {
            sink.lock().extend(added.iter().map(|change| (change.index, change.item.name())));
        }
    }));

    model.add_track(track("t1"), 0, &CancellationToken::new()).await.unwrap();
    assert_eq!(*added.lock(), vec![(0, "t1 (live)".to_string())]);
}

#[tokio::test]
async fn playable_events_are_forwarded() {
    let model = Arc::new(MemoryModel::new(ModelKind::Track, "t1"));
    let wrapper = TrackWrapper::with_plugins(model.clone(), ActivePlugins::empty());

    let names = Arc::new(Mutex::new(Vec::new()));
    let sink = names.clone();
    let id = wrapper.subscribe_playable(Arc::new(move |event: &PlayableEvent| {
        if let PlayableEvent::NameChanged(name) = event {
            sink.lock().push(name.clone());
        }
    }));

    wrapper.change_name("Take Five".to_string(), &CancellationToken::new()).await.unwrap();
    assert_eq!(model.name(), "Take Five");

    assert!(wrapper.unsubscribe_playable(id));
    model.change_name("Blue Rondo".to_string(), &CancellationToken::new()).await.unwrap();
    assert_eq!(*names.lock(), vec!["Take Five".to_string()]);
}

#[tokio::test]
async fn dispose_detaches_and_can_repeat() {
    let model = Arc::new(MemoryModel::new(ModelKind::TrackCollection, "queue"));
    let wrapper = TrackCollectionWrapper::with_plugins(model.clone(), ActivePlugins::empty());
    assert!(model.subscriber_count() > 0);

    let seen = Arc::new(Mutex::new(0usize));
    let sink = seen.clone();
    wrapper.subscribe_track_collection(Arc::new(move |_: &TrackCollectionEvent| {
        *sink.lock() += 1;
    }));

    wrapper.dispose().await.unwrap();
    assert_eq!(wrapper.subscription_count(), 0);
    assert_eq!(model.subscriber_count(), 0);

    model.add_track(track("t1"), 0, &CancellationToken::new()).await.unwrap();
    assert_eq!(*seen.lock(), 0);

    wrapper.dispose().await.unwrap();
    assert_eq!(model.dispose_count(), 2);
}

#[test]
fn dropping_a_wrapper_detaches_it() {
    let album = Arc::new(MemoryModel::new(ModelKind::Album, "a1"));
    let wrapper = AlbumWrapper::with_plugins(album.clone(), ActivePlugins::empty());
    assert!(album.subscriber_count() > 0);

    drop(wrapper);
    assert_eq!(album.subscriber_count(), 0);
}

#[test]
fn wrapped_items_keep_their_variant() {
    let plugins = ActivePlugins::from_registries(&[offline_plugin()]).unwrap();
    let album: Arc<dyn Album> = Arc::new(MemoryModel::new(ModelKind::Album, "a1"));
    let collection: Arc<dyn AlbumCollection> = Arc::new(MemoryModel::new(ModelKind::AlbumCollection, "ac1"));

    match wrap_album_item(&AlbumCollectionItem::Album(album), &plugins) {
        AlbumCollectionItem::Album(album) => {
            assert_eq!(album.id(), "a1");
            assert_eq!(album.download_info().state, DownloadState::Downloaded);
        }
        AlbumCollectionItem::Collection(_) => panic!("album became a collection"),
    }

    match wrap_album_item(&AlbumCollectionItem::Collection(collection), &plugins) {
        AlbumCollectionItem::Collection(collection) => assert_eq!(collection.id(), "ac1"),
        AlbumCollectionItem::Album(_) => panic!("collection became an album"),
    }
}

#[tokio::test]
async fn cancellation_passes_through_the_wrapper() {
    let model = Arc::new(MemoryModel::new(ModelKind::TrackCollection, "queue").with_tracks(vec![track("t1")]));
    let wrapper = TrackCollectionWrapper::new(model, &[offline_plugin()]).unwrap();

    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = wrapper.get_tracks(10, 0, &cancel).await;
    assert!(matches!(result, Err(ModelError::Cancelled)));
}

#[test]
fn configured_plugins_decorate_wrappers() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[plugins]").unwrap();
    writeln!(file, "enabled = [\"tags\", \"offline\"]").unwrap();
    file.flush().unwrap();

    let mut catalog = PluginCatalog::new();
    catalog.register(offline_plugin()).unwrap();
    catalog.register(tagged_plugin("tags", "cfg", None)).unwrap();

    let config = ConfigManager::load_from_file(file.path().to_path_buf()).unwrap();
    let registries = config.resolve_plugins(&catalog).unwrap();
    assert_eq!(registries.len(), 2);
    assert_eq!(registries[0].metadata().id, "tags");

    let wrapper = TrackWrapper::new(track("t1"), &registries).unwrap();
    assert_eq!(wrapper.name(), "t1 (cfg)");
    assert_eq!(wrapper.download_info().state, DownloadState::Downloaded);
}
