//! Plugin Registry
//!
//! Accumulates the decorator chains a plugin contributes, one per contract,
//! and merges registries together. Registration is the first of two phases:
//! [`PluginRegistry::finalize`] produces the immutable [`ActivePlugins`]
//! that wrappers execute.

use std::fmt;
use std::sync::Arc;
use log::{debug, trace};

use crate::model::{
    Album, AlbumCollection, Artist, ArtistCollection, DataRoot, Discoverables, Downloadable,
    GenreCollection, ImageCollection, Library, Playable, PlayableCollectionGroup, Playlist,
    PlaylistCollection, RecentlyPlayed, SearchHistory, SearchResults, Track, TrackCollection,
    UrlCollection,
};
use crate::plugin::base::{
    AlbumCollectionPluginBase, AlbumPluginBase, ArtistCollectionPluginBase, ArtistPluginBase,
    DataRootPluginBase, DiscoverablesPluginBase, DownloadablePluginBase, GenreCollectionPluginBase,
    ImageCollectionPluginBase, LibraryPluginBase, PlayableCollectionGroupPluginBase,
    PlayablePluginBase, PlaylistCollectionPluginBase, PlaylistPluginBase,
    RecentlyPlayedPluginBase, SearchHistoryPluginBase, SearchResultsPluginBase,
    TrackCollectionPluginBase, TrackPluginBase, UrlCollectionPluginBase,
};
use crate::plugin::chain::ChainedProxyBuilder;
use crate::plugin::compatibility::VersionCompatibilityChecker;
use crate::plugin::connector::GlobalCapabilityConnector;
use crate::plugin::error::PluginResult;
use crate::plugin::metadata::PluginMetadata;

/// A contract that plugins can decorate
pub trait PluginContract: Send + Sync + 'static {
    /// Contract name used in diagnostics
    const NAME: &'static str;

    /// Wrap `inner` in the contract's pass-through decorator
    fn passthrough(inner: Arc<Self>) -> Arc<Self>;

    /// The contract's chain in a chain table
    fn select(chains: &ContractChains) -> &ChainedProxyBuilder<Self>;

    fn select_mut(chains: &mut ContractChains) -> &mut ChainedProxyBuilder<Self>;
}

macro_rules! contract_chains {
    ($($field:ident: $contract:ident => $base:ident),* $(,)?) => {
        /// One decorator chain per contract
        #[derive(Clone, Default)]
        pub struct ContractChains {
            $(pub $field: ChainedProxyBuilder<dyn $contract>,)*
        }

        impl ContractChains {
            /// Append every chain of `other` to the matching chain of `self`
            pub fn append(&mut self, other: &ContractChains) {
                $(self.$field.add_range(&other.$field);)*
            }

            /// Total number of factories across all chains
            pub fn factory_count(&self) -> usize {
                0 $(+ self.$field.len())*
            }

            /// Factory count per contract, in declaration order
            pub fn summary(&self) -> Vec<(&'static str, usize)> {
                vec![$((<dyn $contract as PluginContract>::NAME, self.$field.len()),)*]
            }
        }

        impl fmt::Debug for ContractChains {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct("ContractChains")
                    $(.field(stringify!($field), &self.$field.len()))*
                    .finish()
            }
        }

        $(
            impl PluginContract for dyn $contract {
                const NAME: &'static str = stringify!($contract);

                fn passthrough(inner: Arc<Self>) -> Arc<Self> {
                    Arc::new($base::new(inner))
                }

                fn select(chains: &ContractChains) -> &ChainedProxyBuilder<Self> {
                    &chains.$field
                }

                fn select_mut(chains: &mut ContractChains) -> &mut ChainedProxyBuilder<Self> {
                    &mut chains.$field
                }
            }
        )*
    };
}

contract_chains! {
    downloadable: Downloadable => DownloadablePluginBase,
    image_collection: ImageCollection => ImageCollectionPluginBase,
    url_collection: UrlCollection => UrlCollectionPluginBase,
    genre_collection: GenreCollection => GenreCollectionPluginBase,
    playable: Playable => PlayablePluginBase,
    track_collection: TrackCollection => TrackCollectionPluginBase,
    artist_collection: ArtistCollection => ArtistCollectionPluginBase,
    album_collection: AlbumCollection => AlbumCollectionPluginBase,
    playlist_collection: PlaylistCollection => PlaylistCollectionPluginBase,
    track: Track => TrackPluginBase,
    album: Album => AlbumPluginBase,
    artist: Artist => ArtistPluginBase,
    playlist: Playlist => PlaylistPluginBase,
    playable_collection_group: PlayableCollectionGroup => PlayableCollectionGroupPluginBase,
    library: Library => LibraryPluginBase,
    discoverables: Discoverables => DiscoverablesPluginBase,
    recently_played: RecentlyPlayed => RecentlyPlayedPluginBase,
    search_history: SearchHistory => SearchHistoryPluginBase,
    search_results: SearchResults => SearchResultsPluginBase,
    data_root: DataRoot => DataRootPluginBase,
}

/// Chains contributed by one plugin, or merged from several
#[derive(Clone)]
pub struct PluginRegistry {
    /// Plugin that owns this registry
    metadata: PluginMetadata,

    /// Gate applied to imported registries
    checker: VersionCompatibilityChecker,

    /// Plugins imported so far, in import order
    imported: Vec<PluginMetadata>,

    chains: ContractChains,
}

impl PluginRegistry {
    /// Create a new plugin registry
    pub fn new(metadata: PluginMetadata) -> Self {
        Self::with_checker(metadata, VersionCompatibilityChecker::default())
    }

    /// Create a registry that checks imports against a specific SDK version
    pub fn with_checker(metadata: PluginMetadata, checker: VersionCompatibilityChecker) -> Self {
        Self {
            metadata,
            checker,
            imported: Vec::new(),
            chains: ContractChains::default(),
        }
    }

    pub fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    /// Plugins whose chains were imported into this registry
    pub fn imported(&self) -> &[PluginMetadata] {
        &self.imported
    }

    pub fn chains(&self) -> &ContractChains {
        &self.chains
    }

    /// The chain registered for contract `C`
    pub fn chain<C: ?Sized + PluginContract>(&self) -> &ChainedProxyBuilder<C> {
        C::select(&self.chains)
    }

    /// Register a decorator for contract `C`
    pub fn add<C, F>(&mut self, factory: F) -> &mut Self
    where
        C: ?Sized + PluginContract,
        F: Fn(Arc<C>) -> Arc<C> + Send + Sync + 'static,
    {
        C::select_mut(&mut self.chains).add(factory);
        trace!("Plugin '{}' registered a {} decorator", self.metadata.id, C::NAME);
        self
    }

    /// Append every chain of `other` to this registry.
    ///
    /// The SDK version of `other` is checked first; an incompatible registry
    /// leaves this one untouched.
    pub fn import(&mut self, other: &PluginRegistry) -> PluginResult<()> {
        self.checker.check_plugin_compatibility(&other.metadata)?;

        self.chains.append(&other.chains);
        self.imported.push(other.metadata.clone());
        self.imported.extend(other.imported.iter().cloned());

        debug!(
            "Imported plugin '{}' into '{}' ({} factories)",
            other.metadata.id,
            self.metadata.id,
            other.chains.factory_count()
        );
        Ok(())
    }

    /// Produce the executable plugin set.
    ///
    /// The chains are cloned before the connector stages are appended, so
    /// this registry can keep accumulating and be finalized again.
    pub fn finalize(&self) -> Arc<ActivePlugins> {
        let chains = GlobalCapabilityConnector::connect(&self.chains);
        debug!(
            "Finalized registry '{}' with {} plugin(s)",
            self.metadata.id,
            self.imported.len()
        );
        Arc::new(ActivePlugins {
            plugins: self.imported.clone(),
            chains,
        })
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("metadata", &self.metadata)
            .field("imported", &self.imported.len())
            .field("chains", &self.chains)
            .finish()
    }
}

/// Immutable, connected plugin set shared by a wrapper and its children
pub struct ActivePlugins {
    plugins: Vec<PluginMetadata>,
    chains: ContractChains,
}

impl ActivePlugins {
    /// Import `registries` in order into a fresh host registry and finalize it
    pub fn from_registries(registries: &[PluginRegistry]) -> PluginResult<Arc<Self>> {
        let mut host = PluginRegistry::new(PluginMetadata::host());
        for registry in registries {
            host.import(registry)?;
        }
        Ok(host.finalize())
    }

    /// A plugin set with no plugins; only the connector stages apply
    pub fn empty() -> Arc<Self> {
        PluginRegistry::new(PluginMetadata::host()).finalize()
    }

    /// Plugins in this set, in import order
    pub fn plugins(&self) -> &[PluginMetadata] {
        &self.plugins
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn chains(&self) -> &ContractChains {
        &self.chains
    }

    /// Run the connected chain of contract `C` against `original`
    pub fn execute<C: ?Sized + PluginContract>(&self, original: Arc<C>) -> Arc<C> {
        C::select(&self.chains).execute(original)
    }
}

impl fmt::Debug for ActivePlugins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivePlugins")
            .field("plugins", &self.plugins.iter().map(|p| p.id.as_str()).collect::<Vec<_>>())
            .field("chains", &self.chains)
            .finish()
    }
}
