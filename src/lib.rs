//! Polyphony
//!
//! Plugin composition for music model contracts. Plugins register decorator
//! chains per contract; a global connector fans capability-level plugins out
//! to every composite that embeds the capability; wrappers apply the
//! resulting chains to provider models, re-wrap nested models and forward
//! change notifications.
//!
//! # Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use polyphony::model::{Album, ModelKind, Playable};
//! use polyphony::plugin::{PluginMetadata, PluginRegistry};
//! use polyphony::testing::MemoryModel;
//! use polyphony::wrapper::AlbumWrapper;
//!
//! let registry = PluginRegistry::new(PluginMetadata::current("example", "Example"));
//! let album: Arc<dyn Album> = Arc::new(MemoryModel::new(ModelKind::Album, "kind-of-blue"));
//! let wrapped = AlbumWrapper::new(album, &[registry]).unwrap();
//! println!("{}", wrapped.name());
//! ```

pub mod config;
pub mod logging;
pub mod model;
pub mod notifications;
pub mod plugin;
pub mod testing;
pub mod version;
pub mod wrapper;

pub use tokio_util::sync::CancellationToken;

#[doc(hidden)]
pub use async_trait::async_trait;

#[doc(hidden)]
pub mod __private {
    pub use chrono::{DateTime, Utc};
}
