//! Notification relays
//!
//! Each relay subscribes one handler on the decorated instance that
//! re-publishes the event on a wrapper hub, wrapping model payloads with the
//! wrapper's plugin set first. The matching detach action is recorded in the
//! wrapper's ledger.

use std::sync::Arc;

use crate::model::{
    Album, AlbumCollection, ArtistCollection, Downloadable, GenreCollection, ImageCollection,
    Playable, PlayableCollectionGroup, PlaylistCollection, Track, TrackCollection, UrlCollection,
};
use crate::notifications::{EventHandler, EventHub, SubscriptionId, SubscriptionLedger};
use crate::plugin::ActivePlugins;
use crate::wrapper::hubs::WrapperHubs;
use crate::wrapper::transform::{wrap_album, wrap_album_item, wrap_artist_item, wrap_group, wrap_playlist_item, wrap_track};

/// Subscribe `hub` to `source` through `transform` and record the detach
pub fn forward<T, E, S, U, F>(
    ledger: &SubscriptionLedger,
    hub: &Arc<EventHub<E>>,
    source: Arc<T>,
    subscribe: S,
    unsubscribe: U,
    transform: F,
) where
    T: ?Sized + Send + Sync + 'static,
    E: 'static,
    S: FnOnce(&T, EventHandler<E>) -> SubscriptionId,
    U: FnOnce(&T, SubscriptionId) -> bool + Send + 'static,
    F: Fn(&E) -> E + Send + Sync + 'static,
{
    let target = Arc::clone(hub);
    let id = subscribe(&source, Arc::new(move |event: &E| {
        target.publish(&transform(event));
    }));
    ledger.track(move || {
        unsubscribe(&source, id);
    });
}

/// Download, image, link and playable notifications
pub fn playable_events(source: Arc<dyn Playable>, hubs: &WrapperHubs, ledger: &SubscriptionLedger) {
    let downloadable: Arc<dyn Downloadable> = source.clone();
    forward(
        ledger,
        &hubs.downloadable,
        downloadable,
        |s, h| s.subscribe_downloadable(h),
        |s, id| s.unsubscribe_downloadable(id),
        Clone::clone,
    );

    let images: Arc<dyn ImageCollection> = source.clone();
    forward(
        ledger,
        &hubs.images,
        images,
        |s, h| s.subscribe_image_collection(h),
        |s, id| s.unsubscribe_image_collection(id),
        Clone::clone,
    );

    let urls: Arc<dyn UrlCollection> = source.clone();
    forward(
        ledger,
        &hubs.urls,
        urls,
        |s, h| s.subscribe_url_collection(h),
        |s, id| s.unsubscribe_url_collection(id),
        Clone::clone,
    );

    forward(
        ledger,
        &hubs.playable,
        source,
        |s, h| s.subscribe_playable(h),
        |s, id| s.unsubscribe_playable(id),
        Clone::clone,
    );
}

pub fn genre_events(source: Arc<dyn GenreCollection>, hubs: &WrapperHubs, ledger: &SubscriptionLedger) {
    forward(
        ledger,
        &hubs.genres,
        source,
        |s, h| s.subscribe_genre_collection(h),
        |s, id| s.unsubscribe_genre_collection(id),
        Clone::clone,
    );
}

/// Track collection notifications with every track wrapped
pub fn track_collection_events(
    source: Arc<dyn TrackCollection>,
    hubs: &WrapperHubs,
    ledger: &SubscriptionLedger,
    plugins: &Arc<ActivePlugins>,
) {
    let plugins = Arc::clone(plugins);
    forward(
        ledger,
        &hubs.tracks,
        source,
        |s, h| s.subscribe_track_collection(h),
        |s, id| s.unsubscribe_track_collection(id),
        move |event| event.map_tracks(|track| wrap_track(track, &plugins)),
    );
}

/// Artist collection notifications with every item wrapped
pub fn artist_collection_events(
    source: Arc<dyn ArtistCollection>,
    hubs: &WrapperHubs,
    ledger: &SubscriptionLedger,
    plugins: &Arc<ActivePlugins>,
) {
    let plugins = Arc::clone(plugins);
    forward(
        ledger,
        &hubs.artists,
        source,
        |s, h| s.subscribe_artist_collection(h),
        |s, id| s.unsubscribe_artist_collection(id),
        move |event| event.map_items(|item| wrap_artist_item(item, &plugins)),
    );
}

/// Album collection notifications with every item wrapped
pub fn album_collection_events(
    source: Arc<dyn AlbumCollection>,
    hubs: &WrapperHubs,
    ledger: &SubscriptionLedger,
    plugins: &Arc<ActivePlugins>,
) {
    let plugins = Arc::clone(plugins);
    forward(
        ledger,
        &hubs.albums,
        source,
        |s, h| s.subscribe_album_collection(h),
        |s, id| s.unsubscribe_album_collection(id),
        move |event| event.map_items(|item| wrap_album_item(item, &plugins)),
    );
}

/// Playlist collection notifications with every item wrapped
pub fn playlist_collection_events(
    source: Arc<dyn PlaylistCollection>,
    hubs: &WrapperHubs,
    ledger: &SubscriptionLedger,
    plugins: &Arc<ActivePlugins>,
) {
    let plugins = Arc::clone(plugins);
    forward(
        ledger,
        &hubs.playlists,
        source,
        |s, h| s.subscribe_playlist_collection(h),
        |s, id| s.unsubscribe_playlist_collection(id),
        move |event| event.map_items(|item| wrap_playlist_item(item, &plugins)),
    );
}

/// Track notifications with the new album wrapped
pub fn track_events(
    source: Arc<dyn Track>,
    hubs: &WrapperHubs,
    ledger: &SubscriptionLedger,
    plugins: &Arc<ActivePlugins>,
) {
    let plugins = Arc::clone(plugins);
    forward(
        ledger,
        &hubs.track,
        source,
        |s, h| s.subscribe_track(h),
        |s, id| s.unsubscribe_track(id),
        move |event| event.map_album(|album| wrap_album(album, &plugins)),
    );
}

pub fn album_events(source: Arc<dyn Album>, hubs: &WrapperHubs, ledger: &SubscriptionLedger) {
    forward(
        ledger,
        &hubs.album,
        source,
        |s, h| s.subscribe_album(h),
        |s, id| s.unsubscribe_album(id),
        Clone::clone,
    );
}

/// Child group notifications with every child wrapped
pub fn group_events(
    source: Arc<dyn PlayableCollectionGroup>,
    hubs: &WrapperHubs,
    ledger: &SubscriptionLedger,
    plugins: &Arc<ActivePlugins>,
) {
    let plugins = Arc::clone(plugins);
    forward(
        ledger,
        &hubs.group,
        source,
        |s, h| s.subscribe_group(h),
        |s, id| s.unsubscribe_group(id),
        move |event| event.map_children(|child| wrap_group(child, &plugins)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DownloadOperation, DownloadableEvent, ModelKind};
    use crate::testing::MemoryModel;
    use parking_lot::Mutex;
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn test_forward_republishes_and_detaches() {
        let model = Arc::new(MemoryModel::new(ModelKind::Track, "t1"));
        let hubs = WrapperHubs::new();
        let ledger = SubscriptionLedger::new();
        playable_events(model.clone(), &hubs, &ledger);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        hubs.downloadable.subscribe(Arc::new(move |event: &DownloadableEvent| {
            sink.lock().push(event.clone());
        }));

        model
            .start_download_operation(DownloadOperation::Start, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(seen.lock().len(), 1);
        assert_eq!(model.subscriber_count(), 4);

        assert_eq!(ledger.release_all(), 4);
        assert_eq!(model.subscriber_count(), 0);

        model
            .start_download_operation(DownloadOperation::Pause, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(seen.lock().len(), 1);
    }
}
