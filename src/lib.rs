//! Catalog Viewer Library
//!
//! 目录浏览器库：重新导出各层的常用入口。

pub use cv_app::{App, AppDeps};
pub use cv_core::{AppConfig, DisplayProfile, Entry, EntryId};
pub use cv_shell::bootstrap::tracing::init_tracing_subscriber;
pub use cv_shell::bootstrap::{build_app, resolve_config};
pub use cv_shell::view::Route;
pub use cv_shell::{run, Cli, Session};
