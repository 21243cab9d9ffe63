use std::sync::Arc;

use crate::model::{Downloadable, ImageCollection, Model, Playable, UrlCollection};

/// Pass-through decorator for `Playable`
pub struct PlayablePluginBase {
    pub inner: Arc<dyn Playable>,
    pub inner_downloadable: Arc<dyn Downloadable>,
    pub inner_image_collection: Arc<dyn ImageCollection>,
    pub inner_url_collection: Arc<dyn UrlCollection>,
}

impl PlayablePluginBase {
    pub fn new(inner: Arc<dyn Playable>) -> Self {
        Self {
            inner_downloadable: inner.clone(),
            inner_image_collection: inner.clone(),
            inner_url_collection: inner.clone(),
            inner,
        }
    }

    fn owned(&self) -> Vec<Arc<dyn Model>> {
        owned_models![
            self.inner,
            self.inner_downloadable,
            self.inner_image_collection,
            self.inner_url_collection,
        ]
    }
}

base_model!(PlayablePluginBase);
crate::delegate_downloadable!(PlayablePluginBase => inner_downloadable);
crate::delegate_image_collection!(PlayablePluginBase => inner_image_collection);
crate::delegate_url_collection!(PlayablePluginBase => inner_url_collection);
crate::delegate_playable!(PlayablePluginBase => inner);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DownloadState, ModelKind};
    use crate::testing::MemoryModel;

    #[tokio::test]
    async fn test_aliased_references_dispose_once() {
        let model = Arc::new(MemoryModel::new(ModelKind::Track, "t1"));
        let base = PlayablePluginBase::new(model.clone());

        base.dispose().await.unwrap();
        assert_eq!(model.dispose_count(), 1);
    }

    #[tokio::test]
    async fn test_distinct_references_each_dispose() {
        let model = Arc::new(MemoryModel::new(ModelKind::Track, "t1"));
        let downloads = Arc::new(MemoryModel::new(ModelKind::Track, "t1-downloads"));

        let mut base = PlayablePluginBase::new(model.clone());
        base.inner_downloadable = downloads.clone();
        base.dispose().await.unwrap();

        assert_eq!(model.dispose_count(), 1);
        assert_eq!(downloads.dispose_count(), 1);
    }

    #[test]
    fn test_capability_reference_redirects_members() {
        let model = Arc::new(MemoryModel::new(ModelKind::Track, "t1"));
        let downloads = Arc::new(
            MemoryModel::new(ModelKind::Track, "t1-downloads")
                .with_download_state(DownloadState::Downloaded),
        );

        let mut base = PlayablePluginBase::new(model.clone());
        assert_eq!(base.download_info().state, DownloadState::None);

        base.inner_downloadable = downloads;
        assert_eq!(base.download_info().state, DownloadState::Downloaded);
        assert_eq!(base.identity(), model.identity());
    }
}
