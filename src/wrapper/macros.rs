//! Wrapper contract implementations
//!
//! Each macro implements one contract for a wrapper by forwarding reads and
//! mutations to the decorated instance in `$field`, wrapping every model a
//! paged read returns, and routing subscriptions to the wrapper's own hubs.
//! Wrappers must have `plugins: Arc<ActivePlugins>` and `hubs: WrapperHubs`
//! fields and implement `PluginWrapper`.

macro_rules! wrapper_model {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::Model for $ty {
            fn identity(&self) -> &$crate::model::ModelIdentity {
                self.$field.identity()
            }

            fn sources(&self) -> &[$crate::model::ModelIdentity] {
                self.$field.sources()
            }

            fn source_cores(&self) -> &[$crate::model::CoreInfo] {
                self.$field.source_cores()
            }

            fn equals(&self, other: &dyn $crate::model::Model) -> bool {
                self.$field.equals(other)
            }

            async fn dispose(&self) -> $crate::model::ModelResult<()> {
                let released = $crate::wrapper::PluginWrapper::detach_events(self);
                log::debug!("Disposing wrapper of {} ({} subscriptions released)", self.$field.identity(), released);

                let mut owned = vec![self.$field.clone() as ::std::sync::Arc<dyn $crate::model::Model>];
                owned.extend(
                    $crate::wrapper::PluginWrapper::eager_children(self)
                        .into_iter()
                        .map(|child| child as ::std::sync::Arc<dyn $crate::model::Model>),
                );
                $crate::plugin::base::dispose_distinct(owned).await
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_model!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_downloadable {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::Downloadable for $ty {
            fn download_info(&self) -> $crate::model::DownloadInfo {
                self.$field.download_info()
            }

            async fn start_download_operation(
                &self,
                operation: $crate::model::DownloadOperation,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.start_download_operation(operation, cancel).await
            }

            fn subscribe_downloadable(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::DownloadableEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.downloadable.subscribe(handler)
            }

            fn unsubscribe_downloadable(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.downloadable.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_downloadable!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_image_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::ImageCollection for $ty {
            fn total_image_count(&self) -> usize {
                self.$field.total_image_count()
            }

            async fn is_add_image_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_add_image_available(index, cancel).await
            }

            async fn is_remove_image_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_remove_image_available(index, cancel).await
            }

            async fn get_images(&self, limit: usize, offset: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<Vec<$crate::model::Image>> {
                self.$field.get_images(limit, offset, cancel).await
            }

            async fn add_image(&self, image: $crate::model::Image, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.add_image(image, index, cancel).await
            }

            async fn remove_image(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.remove_image(index, cancel).await
            }

            fn subscribe_image_collection(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::ImageCollectionEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.images.subscribe(handler)
            }

            fn unsubscribe_image_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.images.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_image_collection!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_url_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::UrlCollection for $ty {
            fn total_url_count(&self) -> usize {
                self.$field.total_url_count()
            }

            async fn is_add_url_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_add_url_available(index, cancel).await
            }

            async fn is_remove_url_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_remove_url_available(index, cancel).await
            }

            async fn get_urls(&self, limit: usize, offset: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<Vec<$crate::model::Link>> {
                self.$field.get_urls(limit, offset, cancel).await
            }

            async fn add_url(&self, link: $crate::model::Link, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.add_url(link, index, cancel).await
            }

            async fn remove_url(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.remove_url(index, cancel).await
            }

            fn subscribe_url_collection(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::UrlCollectionEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.urls.subscribe(handler)
            }

            fn unsubscribe_url_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.urls.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_url_collection!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_genre_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::GenreCollection for $ty {
            fn total_genre_count(&self) -> usize {
                self.$field.total_genre_count()
            }

            async fn is_add_genre_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_add_genre_available(index, cancel).await
            }

            async fn is_remove_genre_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_remove_genre_available(index, cancel).await
            }

            async fn get_genres(&self, limit: usize, offset: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<Vec<$crate::model::Genre>> {
                self.$field.get_genres(limit, offset, cancel).await
            }

            async fn add_genre(&self, genre: $crate::model::Genre, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.add_genre(genre, index, cancel).await
            }

            async fn remove_genre(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.remove_genre(index, cancel).await
            }

            fn subscribe_genre_collection(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::GenreCollectionEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.genres.subscribe(handler)
            }

            fn unsubscribe_genre_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.genres.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_genre_collection!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_playable {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::Playable for $ty {
            fn id(&self) -> &str {
                self.$field.id()
            }

            fn name(&self) -> String {
                self.$field.name()
            }

            fn description(&self) -> Option<String> {
                self.$field.description()
            }

            fn playback_state(&self) -> $crate::model::PlaybackState {
                self.$field.playback_state()
            }

            fn duration(&self) -> ::std::time::Duration {
                self.$field.duration()
            }

            fn last_played(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.$field.last_played()
            }

            fn added_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.$field.added_at()
            }

            fn is_change_name_available(&self) -> bool {
                self.$field.is_change_name_available()
            }

            fn is_change_description_available(&self) -> bool {
                self.$field.is_change_description_available()
            }

            fn is_change_duration_available(&self) -> bool {
                self.$field.is_change_duration_available()
            }

            async fn change_name(&self, name: String, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.change_name(name, cancel).await
            }

            async fn change_description(&self, description: Option<String>, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.change_description(description, cancel).await
            }

            async fn change_duration(&self, duration: ::std::time::Duration, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.change_duration(duration, cancel).await
            }

            fn subscribe_playable(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::PlayableEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.playable.subscribe(handler)
            }

            fn unsubscribe_playable(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.playable.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_playable!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_track_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::TrackCollection for $ty {
            fn total_track_count(&self) -> usize {
                self.$field.total_track_count()
            }

            async fn play_track_collection(&self, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.play_track_collection(cancel).await
            }

            async fn play_track(
                &self,
                track: ::std::sync::Arc<dyn $crate::model::Track>,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.play_track(track, cancel).await
            }

            async fn pause_track_collection(&self, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.pause_track_collection(cancel).await
            }

            async fn is_add_track_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_add_track_available(index, cancel).await
            }

            async fn is_remove_track_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_remove_track_available(index, cancel).await
            }

            async fn get_tracks(
                &self,
                limit: usize,
                offset: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<Vec<::std::sync::Arc<dyn $crate::model::Track>>> {
                let tracks = self.$field.get_tracks(limit, offset, cancel).await?;
                Ok(tracks
                    .iter()
                    .map(|track| $crate::wrapper::transform::wrap_track(track, &self.plugins))
                    .collect())
            }

            async fn add_track(
                &self,
                track: ::std::sync::Arc<dyn $crate::model::Track>,
                index: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.add_track(track, index, cancel).await
            }

            async fn remove_track(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.remove_track(index, cancel).await
            }

            fn subscribe_track_collection(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::TrackCollectionEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.tracks.subscribe(handler)
            }

            fn unsubscribe_track_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.tracks.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_track_collection!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_artist_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::ArtistCollection for $ty {
            fn total_artist_count(&self) -> usize {
                self.$field.total_artist_count()
            }

            async fn play_artist_collection(&self, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.play_artist_collection(cancel).await
            }

            async fn play_artist_item(
                &self,
                item: $crate::model::ArtistCollectionItem,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.play_artist_item(item, cancel).await
            }

            async fn pause_artist_collection(&self, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.pause_artist_collection(cancel).await
            }

            async fn is_add_artist_item_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_add_artist_item_available(index, cancel).await
            }

            async fn is_remove_artist_item_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_remove_artist_item_available(index, cancel).await
            }

            async fn get_artist_items(
                &self,
                limit: usize,
                offset: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<Vec<$crate::model::ArtistCollectionItem>> {
                let items = self.$field.get_artist_items(limit, offset, cancel).await?;
                Ok(items
                    .iter()
                    .map(|item| $crate::wrapper::transform::wrap_artist_item(item, &self.plugins))
                    .collect())
            }

            async fn add_artist_item(
                &self,
                item: $crate::model::ArtistCollectionItem,
                index: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.add_artist_item(item, index, cancel).await
            }

            async fn remove_artist_item(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.remove_artist_item(index, cancel).await
            }

            fn subscribe_artist_collection(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::ArtistCollectionEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.artists.subscribe(handler)
            }

            fn unsubscribe_artist_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.artists.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_artist_collection!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_album_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::AlbumCollection for $ty {
            fn total_album_count(&self) -> usize {
                self.$field.total_album_count()
            }

            async fn play_album_collection(&self, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.play_album_collection(cancel).await
            }

            async fn play_album_item(
                &self,
                item: $crate::model::AlbumCollectionItem,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.play_album_item(item, cancel).await
            }

            async fn pause_album_collection(&self, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.pause_album_collection(cancel).await
            }

            async fn is_add_album_item_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_add_album_item_available(index, cancel).await
            }

            async fn is_remove_album_item_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_remove_album_item_available(index, cancel).await
            }

            async fn get_album_items(
                &self,
                limit: usize,
                offset: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<Vec<$crate::model::AlbumCollectionItem>> {
                let items = self.$field.get_album_items(limit, offset, cancel).await?;
                Ok(items
                    .iter()
                    .map(|item| $crate::wrapper::transform::wrap_album_item(item, &self.plugins))
                    .collect())
            }

            async fn add_album_item(
                &self,
                item: $crate::model::AlbumCollectionItem,
                index: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.add_album_item(item, index, cancel).await
            }

            async fn remove_album_item(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.remove_album_item(index, cancel).await
            }

            fn subscribe_album_collection(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::AlbumCollectionEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.albums.subscribe(handler)
            }

            fn unsubscribe_album_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.albums.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_album_collection!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_playlist_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::PlaylistCollection for $ty {
            fn total_playlist_count(&self) -> usize {
                self.$field.total_playlist_count()
            }

            async fn play_playlist_collection(&self, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.play_playlist_collection(cancel).await
            }

            async fn play_playlist_item(
                &self,
                item: $crate::model::PlaylistCollectionItem,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.play_playlist_item(item, cancel).await
            }

            async fn pause_playlist_collection(&self, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.pause_playlist_collection(cancel).await
            }

            async fn is_add_playlist_item_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_add_playlist_item_available(index, cancel).await
            }

            async fn is_remove_playlist_item_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_remove_playlist_item_available(index, cancel).await
            }

            async fn get_playlist_items(
                &self,
                limit: usize,
                offset: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<Vec<$crate::model::PlaylistCollectionItem>> {
                let items = self.$field.get_playlist_items(limit, offset, cancel).await?;
                Ok(items
                    .iter()
                    .map(|item| $crate::wrapper::transform::wrap_playlist_item(item, &self.plugins))
                    .collect())
            }

            async fn add_playlist_item(
                &self,
                item: $crate::model::PlaylistCollectionItem,
                index: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.add_playlist_item(item, index, cancel).await
            }

            async fn remove_playlist_item(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.remove_playlist_item(index, cancel).await
            }

            fn subscribe_playlist_collection(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::PlaylistCollectionEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.playlists.subscribe(handler)
            }

            fn unsubscribe_playlist_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.playlists.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_playlist_collection!(impl[] $ty => $field);
    };
}

macro_rules! wrapper_group {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::PlayableCollectionGroup for $ty {
            fn total_children_count(&self) -> usize {
                self.$field.total_children_count()
            }

            async fn is_add_child_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_add_child_available(index, cancel).await
            }

            async fn is_remove_child_available(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<bool> {
                self.$field.is_remove_child_available(index, cancel).await
            }

            async fn get_children(
                &self,
                limit: usize,
                offset: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<Vec<::std::sync::Arc<dyn $crate::model::PlayableCollectionGroup>>> {
                let children = self.$field.get_children(limit, offset, cancel).await?;
                Ok(children
                    .iter()
                    .map(|child| $crate::wrapper::transform::wrap_group(child, &self.plugins))
                    .collect())
            }

            async fn add_child(
                &self,
                child: ::std::sync::Arc<dyn $crate::model::PlayableCollectionGroup>,
                index: usize,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.add_child(child, index, cancel).await
            }

            async fn remove_child(&self, index: usize, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.remove_child(index, cancel).await
            }

            fn subscribe_group(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::GroupEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.hubs.group.subscribe(handler)
            }

            fn unsubscribe_group(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.hubs.group.unsubscribe(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        wrapper_group!(impl[] $ty => $field);
    };
}
