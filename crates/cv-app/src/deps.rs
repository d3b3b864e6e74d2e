//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for [`crate::App`] construction. Not a builder: no
//! defaults, no hidden logic.

use std::sync::Arc;

use cv_core::ports::CatalogPort;

/// All dependencies are required.
/// 所有依赖都是必需的。
pub struct AppDeps {
    pub catalog: Arc<dyn CatalogPort>,
}
