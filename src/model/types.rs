//! Model Value Types
//!
//! Leaf values shared by the model contracts: identity, provenance,
//! playback and download state, and the small records (images, links,
//! genres, lyrics, profiles) that collections hold without wrapping.

use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use url::Url;

/// Kind of the innermost model instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    Track,
    Album,
    Artist,
    Playlist,
    TrackCollection,
    AlbumCollection,
    ArtistCollection,
    PlaylistCollection,
    PlayableCollectionGroup,
    Library,
    Discoverables,
    RecentlyPlayed,
    SearchHistory,
    SearchResults,
    DataRoot,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Identity of a logical model item.
///
/// Two views of the same item (wrapped, decorated or raw) always report the
/// same identity because every layer reads it from the innermost instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelIdentity {
    pub kind: ModelKind,
    pub id: String,
}

impl ModelIdentity {
    pub fn new<S: Into<String>>(kind: ModelKind, id: S) -> Self {
        Self { kind, id: id.into() }
    }
}

impl fmt::Display for ModelIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// A music provider that contributed to a model item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoreInfo {
    pub instance_id: String,
    pub display_name: String,
}

impl CoreInfo {
    pub fn new<S: Into<String>>(instance_id: S, display_name: S) -> Self {
        Self {
            instance_id: instance_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Playback state of a playable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    #[default]
    None,
    Loading,
    Loaded,
    Playing,
    Paused,
    Queued,
    Failed,
}

/// Lifecycle state of a download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DownloadState {
    #[default]
    None,
    Queued,
    Downloading,
    Downloaded,
    Failed,
}

/// Download status of a downloadable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DownloadInfo {
    pub state: DownloadState,
    /// Progress in tenths of a percent (0..=1000)
    pub progress: u16,
}

impl DownloadInfo {
    pub fn new(state: DownloadState, progress: u16) -> Self {
        Self { state, progress: progress.min(1000) }
    }
}

/// Operation requested on a download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadOperation {
    Start,
    Pause,
    Resume,
    Cancel,
    Delete,
}

/// Image attached to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub uri: Url,
    pub height: Option<f64>,
    pub width: Option<f64>,
}

/// Purpose of an external link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    Generic,
    Twitter,
    Facebook,
    Instagram,
}

/// External link attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: Url,
    pub kind: LinkKind,
}

/// Genre tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

impl Genre {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

/// Lyrics of a track, plain and/or timed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lyrics {
    pub text: Option<String>,
    pub timed: Vec<(Duration, String)>,
}

/// Kind of audio a track holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackType {
    #[default]
    Song,
    Podcast,
    Audiobook,
}

/// Public profile of a playlist owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
}

/// An item added to or removed from a collection, with its position
#[derive(Clone)]
pub struct CollectionChange<T> {
    pub item: T,
    pub index: usize,
}

impl<T> CollectionChange<T> {
    pub fn new(item: T, index: usize) -> Self {
        Self { item, index }
    }

    /// Transform the item while keeping its position
    pub fn map<U, F>(&self, f: F) -> CollectionChange<U>
    where
        F: FnOnce(&T) -> U,
    {
        CollectionChange {
            item: f(&self.item),
            index: self.index,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CollectionChange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionChange")
            .field("item", &self.item)
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_progress_is_clamped() {
        let info = DownloadInfo::new(DownloadState::Downloading, 5000);
        assert_eq!(info.progress, 1000);
    }

    #[test]
    fn test_identity_display() {
        let identity = ModelIdentity::new(ModelKind::Album, "kind-of-blue");
        assert_eq!(identity.to_string(), "Album:kind-of-blue");
    }

    #[test]
    fn test_collection_change_map_keeps_index() {
        let change = CollectionChange::new(3u32, 7);
        let mapped = change.map(|value| value.to_string());
        assert_eq!(mapped.item, "3");
        assert_eq!(mapped.index, 7);
    }
}
