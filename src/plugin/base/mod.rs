//! Plugin Bases
//!
//! The default decorator of every contract. A base holds the decorated
//! instance in `inner` plus one public `inner_<capability>` reference per
//! capability the contract embeds, each defaulting to `inner`. Every member
//! delegates to the reference matching its capability, so replacing
//! `inner_downloadable` redirects only the download members.
//!
//! Disposal releases the distinct objects behind those references once each,
//! concurrently, and reports the first failure after all of them finish.

use std::collections::HashSet;
use std::sync::Arc;
use futures::future::join_all;
use log::trace;

use crate::model::{Model, ModelResult};

/// Implement `Model` for a base: identity from `inner`, deduplicated disposal
/// of everything returned by the base's `owned()`.
macro_rules! base_model {
    (impl[$($g:tt)*] $ty:ty) => {
        #[async_trait::async_trait]
        impl<$($g)*> $crate::model::Model for $ty {
            fn identity(&self) -> &$crate::model::ModelIdentity {
                self.inner.identity()
            }

            fn sources(&self) -> &[$crate::model::ModelIdentity] {
                self.inner.sources()
            }

            fn source_cores(&self) -> &[$crate::model::CoreInfo] {
                self.inner.source_cores()
            }

            fn equals(&self, other: &dyn $crate::model::Model) -> bool {
                self.inner.equals(other)
            }

            async fn dispose(&self) -> $crate::model::ModelResult<()> {
                $crate::plugin::base::dispose_distinct(self.owned()).await
            }
        }
    };
    ($ty:ty) => {
        base_model!(impl[] $ty);
    };
}

/// Collect references as plain models for disposal
macro_rules! owned_models {
    ($($reference:expr),+ $(,)?) => {
        vec![$($reference.clone() as ::std::sync::Arc<dyn $crate::model::Model>),+]
    };
}

#[macro_use]
pub mod macros;
pub mod collections;
pub mod composites;
pub mod data_root;
pub mod group;
pub mod playable;
pub mod primitives;

pub use collections::{
    AlbumCollectionPluginBase, ArtistCollectionPluginBase, PlaylistCollectionPluginBase,
    TrackCollectionPluginBase,
};
pub use composites::{AlbumPluginBase, ArtistPluginBase, PlaylistPluginBase, TrackPluginBase};
pub use data_root::DataRootPluginBase;
pub use group::{
    DiscoverablesPluginBase, GroupKind, GroupPluginBase, LibraryPluginBase,
    PlayableCollectionGroupPluginBase, RecentlyPlayedPluginBase, SearchHistoryPluginBase,
    SearchResultsPluginBase,
};
pub use playable::PlayablePluginBase;
pub use primitives::{
    DownloadablePluginBase, GenreCollectionPluginBase, ImageCollectionPluginBase,
    UrlCollectionPluginBase,
};

/// Keep the first reference to each distinct object, by pointer identity
pub fn distinct_models(owned: Vec<Arc<dyn Model>>) -> Vec<Arc<dyn Model>> {
    let mut seen = HashSet::new();
    owned
        .into_iter()
        .filter(|model| seen.insert(Arc::as_ptr(model).cast::<()>() as usize))
        .collect()
}

/// Dispose every distinct object in `owned` concurrently.
///
/// All disposals run to completion; the first failure is returned.
pub async fn dispose_distinct(owned: Vec<Arc<dyn Model>>) -> ModelResult<()> {
    let distinct = distinct_models(owned);
    trace!("Disposing {} distinct references", distinct.len());

    join_all(distinct.iter().map(|model| model.dispose()))
        .await
        .into_iter()
        .collect::<ModelResult<Vec<()>>>()
        .map(|_| ())
}
