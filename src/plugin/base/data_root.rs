use std::sync::Arc;

use crate::model::{DataRoot, Model};

/// Pass-through decorator for `DataRoot`. The data root embeds no
/// capability, so it has no capability references.
pub struct DataRootPluginBase {
    pub inner: Arc<dyn DataRoot>,
}

impl DataRootPluginBase {
    pub fn new(inner: Arc<dyn DataRoot>) -> Self {
        Self { inner }
    }

    fn owned(&self) -> Vec<Arc<dyn Model>> {
        owned_models![self.inner]
    }
}

base_model!(DataRootPluginBase);
crate::delegate_data_root!(DataRootPluginBase => inner);
