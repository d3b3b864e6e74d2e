use std::sync::Arc;

use cv_core::AppConfig;

use crate::stores::{DetailLoader, DisplayPreferenceStore, IncrementalListStore};
use crate::AppDeps;

/// The application root.
///
/// Owns the single display preference store and hands out fresh list and
/// detail stores whenever a view mounts. Stores are never shared between
/// mounts: dropping one discards its state.
///
/// 应用根对象：持有唯一的显示偏好，并在视图挂载时创建新的 store。
pub struct App {
    deps: AppDeps,
    page_size: usize,
    display: Arc<DisplayPreferenceStore>,
}

impl App {
    /// This constructor signature IS the dependency manifest.
    /// 这个构造函数签名就是依赖清单。
    pub fn new(deps: AppDeps, config: &AppConfig) -> Self {
        Self {
            deps,
            page_size: config.list.page_size,
            display: Arc::new(DisplayPreferenceStore::new(
                config.display.default_profile,
            )),
        }
    }

    pub fn display_preference(&self) -> Arc<DisplayPreferenceStore> {
        self.display.clone()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn mount_list(&self) -> IncrementalListStore {
        IncrementalListStore::new(self.deps.catalog.clone(), self.page_size)
    }

    pub fn mount_detail(&self) -> DetailLoader {
        DetailLoader::new(self.deps.catalog.clone())
    }
}
