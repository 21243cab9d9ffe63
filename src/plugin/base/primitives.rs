//! Primitive capability bases: downloads, images, urls and genres.
//! These embed no other capability, so `inner` is their only reference.

use std::sync::Arc;

use crate::model::{Downloadable, GenreCollection, ImageCollection, Model, UrlCollection};

macro_rules! primitive_base {
    ($(#[$doc:meta])* $name:ident, $contract:ident, $delegate:ident) => {
        $(#[$doc])*
        pub struct $name {
            pub inner: Arc<dyn $contract>,
        }

        impl $name {
            pub fn new(inner: Arc<dyn $contract>) -> Self {
                Self { inner }
            }

            fn owned(&self) -> Vec<Arc<dyn Model>> {
                owned_models![self.inner]
            }
        }

        base_model!($name);
        crate::$delegate!($name => inner);
    };
}

primitive_base!(
    /// Pass-through decorator for `Downloadable`
    DownloadablePluginBase, Downloadable, delegate_downloadable
);
primitive_base!(
    /// Pass-through decorator for `ImageCollection`
    ImageCollectionPluginBase, ImageCollection, delegate_image_collection
);
primitive_base!(
    /// Pass-through decorator for `UrlCollection`
    UrlCollectionPluginBase, UrlCollection, delegate_url_collection
);
primitive_base!(
    /// Pass-through decorator for `GenreCollection`
    GenreCollectionPluginBase, GenreCollection, delegate_genre_collection
);
