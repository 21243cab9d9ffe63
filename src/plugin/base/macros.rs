//! Delegation Macros
//!
//! Each macro implements one contract for a type by forwarding every member
//! to a field holding an `Arc` of that contract (or of any contract that
//! embeds it). Plugin authors implement the contract they change by hand and
//! delegate the rest:
//!
//! ```ignore
//! struct Offline { inner: Arc<dyn Downloadable> }
//!
//! polyphony::delegate_model!(Offline => inner);
//!
//! #[polyphony::async_trait]
//! impl Downloadable for Offline {
//!     fn download_info(&self) -> DownloadInfo {
//!         DownloadInfo::new(DownloadState::Downloaded, 1000)
//!     }
//!     // ...
//! }
//! ```
//!
//! Generic types pass their parameters in brackets:
//! `delegate_playable!(impl[C: ?Sized + GroupKind] GroupPluginBase<C> => inner_playable);`

/// Forward [`Model`](crate::model::Model) to a field
#[macro_export]
macro_rules! delegate_model {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.dispose().await
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_model!(impl[] $ty => $field);
    };
}

/// Forward [`Downloadable`](crate::model::Downloadable) to a field
#[macro_export]
macro_rules! delegate_downloadable {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.subscribe_downloadable(handler)
            }

            fn unsubscribe_downloadable(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_downloadable(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_downloadable!(impl[] $ty => $field);
    };
}

/// Forward [`ImageCollection`](crate::model::ImageCollection) to a field
#[macro_export]
macro_rules! delegate_image_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.subscribe_image_collection(handler)
            }

            fn unsubscribe_image_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_image_collection(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_image_collection!(impl[] $ty => $field);
    };
}

/// Forward [`UrlCollection`](crate::model::UrlCollection) to a field
#[macro_export]
macro_rules! delegate_url_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.subscribe_url_collection(handler)
            }

            fn unsubscribe_url_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_url_collection(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_url_collection!(impl[] $ty => $field);
    };
}

/// Forward [`GenreCollection`](crate::model::GenreCollection) to a field
#[macro_export]
macro_rules! delegate_genre_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.subscribe_genre_collection(handler)
            }

            fn unsubscribe_genre_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_genre_collection(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_genre_collection!(impl[] $ty => $field);
    };
}

/// Forward [`Playable`](crate::model::Playable) to a field
#[macro_export]
macro_rules! delegate_playable {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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

            fn last_played(&self) -> Option<$crate::__private::DateTime<$crate::__private::Utc>> {
                self.$field.last_played()
            }

            fn added_at(&self) -> Option<$crate::__private::DateTime<$crate::__private::Utc>> {
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
                self.$field.subscribe_playable(handler)
            }

            fn unsubscribe_playable(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_playable(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_playable!(impl[] $ty => $field);
    };
}

/// Forward [`TrackCollection`](crate::model::TrackCollection) to a field
#[macro_export]
macro_rules! delegate_track_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.get_tracks(limit, offset, cancel).await
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
                self.$field.subscribe_track_collection(handler)
            }

            fn unsubscribe_track_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_track_collection(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_track_collection!(impl[] $ty => $field);
    };
}

/// Forward [`ArtistCollection`](crate::model::ArtistCollection) to a field
#[macro_export]
macro_rules! delegate_artist_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.get_artist_items(limit, offset, cancel).await
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
                self.$field.subscribe_artist_collection(handler)
            }

            fn unsubscribe_artist_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_artist_collection(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_artist_collection!(impl[] $ty => $field);
    };
}

/// Forward [`AlbumCollection`](crate::model::AlbumCollection) to a field
#[macro_export]
macro_rules! delegate_album_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.get_album_items(limit, offset, cancel).await
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
                self.$field.subscribe_album_collection(handler)
            }

            fn unsubscribe_album_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_album_collection(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_album_collection!(impl[] $ty => $field);
    };
}

/// Forward [`PlaylistCollection`](crate::model::PlaylistCollection) to a field
#[macro_export]
macro_rules! delegate_playlist_collection {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.get_playlist_items(limit, offset, cancel).await
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
                self.$field.subscribe_playlist_collection(handler)
            }

            fn unsubscribe_playlist_collection(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_playlist_collection(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_playlist_collection!(impl[] $ty => $field);
    };
}

/// Forward the members specific to [`Track`](crate::model::Track) to a field
#[macro_export]
macro_rules! delegate_track {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
        impl<$($g)*> $crate::model::Track for $ty {
            fn track_type(&self) -> $crate::model::TrackType {
                self.$field.track_type()
            }

            fn album(&self) -> Option<::std::sync::Arc<dyn $crate::model::Album>> {
                self.$field.album()
            }

            fn track_number(&self) -> Option<u32> {
                self.$field.track_number()
            }

            fn disc_number(&self) -> Option<u32> {
                self.$field.disc_number()
            }

            fn language(&self) -> Option<String> {
                self.$field.language()
            }

            fn lyrics(&self) -> Option<$crate::model::Lyrics> {
                self.$field.lyrics()
            }

            fn is_explicit(&self) -> bool {
                self.$field.is_explicit()
            }

            fn related_items(&self) -> Option<::std::sync::Arc<dyn $crate::model::PlayableCollectionGroup>> {
                $crate::model::Track::related_items(&*self.$field)
            }

            fn is_change_album_available(&self) -> bool {
                self.$field.is_change_album_available()
            }

            fn is_change_track_number_available(&self) -> bool {
                self.$field.is_change_track_number_available()
            }

            fn is_change_language_available(&self) -> bool {
                self.$field.is_change_language_available()
            }

            fn is_change_lyrics_available(&self) -> bool {
                self.$field.is_change_lyrics_available()
            }

            fn is_change_is_explicit_available(&self) -> bool {
                self.$field.is_change_is_explicit_available()
            }

            async fn change_album(
                &self,
                album: Option<::std::sync::Arc<dyn $crate::model::Album>>,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.change_album(album, cancel).await
            }

            async fn change_track_number(&self, track_number: Option<u32>, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.change_track_number(track_number, cancel).await
            }

            async fn change_language(&self, language: Option<String>, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.change_language(language, cancel).await
            }

            async fn change_lyrics(&self, lyrics: Option<$crate::model::Lyrics>, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.change_lyrics(lyrics, cancel).await
            }

            async fn change_is_explicit(&self, is_explicit: bool, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.change_is_explicit(is_explicit, cancel).await
            }

            fn subscribe_track(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::TrackEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.$field.subscribe_track(handler)
            }

            fn unsubscribe_track(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_track(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_track!(impl[] $ty => $field);
    };
}

/// Forward the members specific to [`Album`](crate::model::Album) to a field
#[macro_export]
macro_rules! delegate_album {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
        impl<$($g)*> $crate::model::Album for $ty {
            fn date_published(&self) -> Option<$crate::__private::DateTime<$crate::__private::Utc>> {
                self.$field.date_published()
            }

            fn is_change_date_published_available(&self) -> bool {
                self.$field.is_change_date_published_available()
            }

            async fn change_date_published(
                &self,
                date: $crate::__private::DateTime<$crate::__private::Utc>,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<()> {
                self.$field.change_date_published(date, cancel).await
            }

            fn related_items(&self) -> Option<::std::sync::Arc<dyn $crate::model::PlayableCollectionGroup>> {
                $crate::model::Album::related_items(&*self.$field)
            }

            fn subscribe_album(
                &self,
                handler: $crate::notifications::EventHandler<$crate::model::AlbumEvent>,
            ) -> $crate::notifications::SubscriptionId {
                self.$field.subscribe_album(handler)
            }

            fn unsubscribe_album(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_album(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_album!(impl[] $ty => $field);
    };
}

/// Forward the members specific to [`Artist`](crate::model::Artist) to a field
#[macro_export]
macro_rules! delegate_artist {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        impl<$($g)*> $crate::model::Artist for $ty {
            fn related_items(&self) -> Option<::std::sync::Arc<dyn $crate::model::PlayableCollectionGroup>> {
                $crate::model::Artist::related_items(&*self.$field)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_artist!(impl[] $ty => $field);
    };
}

/// Forward the members specific to [`Playlist`](crate::model::Playlist) to a field
#[macro_export]
macro_rules! delegate_playlist {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        impl<$($g)*> $crate::model::Playlist for $ty {
            fn owner(&self) -> Option<$crate::model::UserProfile> {
                self.$field.owner()
            }

            fn related_items(&self) -> Option<::std::sync::Arc<dyn $crate::model::PlayableCollectionGroup>> {
                $crate::model::Playlist::related_items(&*self.$field)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_playlist!(impl[] $ty => $field);
    };
}

/// Forward the child group members of
/// [`PlayableCollectionGroup`](crate::model::PlayableCollectionGroup) to a field
#[macro_export]
macro_rules! delegate_group {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
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
                self.$field.get_children(limit, offset, cancel).await
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
                self.$field.subscribe_group(handler)
            }

            fn unsubscribe_group(&self, id: $crate::notifications::SubscriptionId) -> bool {
                self.$field.unsubscribe_group(id)
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_group!(impl[] $ty => $field);
    };
}

/// Forward [`DataRoot`](crate::model::DataRoot) to a field
#[macro_export]
macro_rules! delegate_data_root {
    (impl[$($g:tt)*] $ty:ty => $field:ident) => {
        #[$crate::async_trait]
        impl<$($g)*> $crate::model::DataRoot for $ty {
            async fn init(&self, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<()> {
                self.$field.init(cancel).await
            }

            fn is_initialized(&self) -> bool {
                self.$field.is_initialized()
            }

            fn library(&self) -> ::std::sync::Arc<dyn $crate::model::Library> {
                self.$field.library()
            }

            fn discoverables(&self) -> ::std::sync::Arc<dyn $crate::model::Discoverables> {
                self.$field.discoverables()
            }

            fn recently_played(&self) -> ::std::sync::Arc<dyn $crate::model::RecentlyPlayed> {
                self.$field.recently_played()
            }

            fn pins(&self) -> ::std::sync::Arc<dyn $crate::model::PlayableCollectionGroup> {
                self.$field.pins()
            }

            fn search_history(&self) -> ::std::sync::Arc<dyn $crate::model::SearchHistory> {
                self.$field.search_history()
            }

            async fn search(
                &self,
                query: &str,
                cancel: &$crate::CancellationToken,
            ) -> $crate::model::ModelResult<::std::sync::Arc<dyn $crate::model::SearchResults>> {
                self.$field.search(query, cancel).await
            }

            async fn search_autocomplete(&self, query: &str, cancel: &$crate::CancellationToken) -> $crate::model::ModelResult<Vec<String>> {
                self.$field.search_autocomplete(query, cancel).await
            }
        }
    };
    ($ty:ty => $field:ident) => {
        $crate::delegate_data_root!(impl[] $ty => $field);
    };
}
