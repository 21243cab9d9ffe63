//! Plugin Composition Module
//!
//! Registration, ordering and combination of model decorators.
//!
//! # Architecture
//!
//! - **ChainedProxyBuilder**: ordered decorator factories for one contract
//! - **PluginRegistry**: one chain per contract, merged by `import`
//! - **GlobalCapabilityConnector**: fans capability plugins out to every
//!   composite that embeds the capability
//! - **ActivePlugins**: the finalized, immutable chain table wrappers execute
//! - **Plugin bases**: default pass-through decorators with overridable
//!   capability references
//!
//! # Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use polyphony::model::Downloadable;
//! use polyphony::plugin::{DownloadablePluginBase, PluginMetadata, PluginRegistry};
//!
//! let mut registry = PluginRegistry::new(PluginMetadata::current("offline", "Offline"));
//! registry.add::<dyn Downloadable, _>(|inner| Arc::new(DownloadablePluginBase::new(inner)));
//!
//! let active = registry.finalize();
//! println!("{:?}", active.chains().summary());
//! ```

pub mod base;
pub mod catalog;
pub mod chain;
pub mod compatibility;
pub mod connector;
pub mod error;
pub mod metadata;
pub mod registry;

#[cfg(test)]
pub mod tests;

// Re-export core types for easier access
pub use base::{
    AlbumCollectionPluginBase, AlbumPluginBase, ArtistCollectionPluginBase, ArtistPluginBase,
    DataRootPluginBase, DiscoverablesPluginBase, DownloadablePluginBase, GenreCollectionPluginBase,
    GroupKind, GroupPluginBase, ImageCollectionPluginBase, LibraryPluginBase,
    PlayableCollectionGroupPluginBase, PlayablePluginBase, PlaylistCollectionPluginBase,
    PlaylistPluginBase, RecentlyPlayedPluginBase, SearchHistoryPluginBase,
    SearchResultsPluginBase, TrackCollectionPluginBase, TrackPluginBase, UrlCollectionPluginBase,
};
pub use catalog::PluginCatalog;
pub use chain::{ChainedProxyBuilder, ProxyFactory};
pub use compatibility::VersionCompatibilityChecker;
pub use connector::GlobalCapabilityConnector;
pub use error::{PluginError, PluginResult};
pub use metadata::PluginMetadata;
pub use registry::{ActivePlugins, ContractChains, PluginContract, PluginRegistry};
