//! Dependency wiring: the only place that knows concrete adapter types.
//! 依赖装配：唯一知道具体适配器类型的地方。

use std::sync::Arc;

use anyhow::Context;
use cv_app::{App, AppDeps};
use cv_core::AppConfig;
use cv_infra::HttpCatalogClient;
use tracing::info;

pub fn build_app(config: &AppConfig) -> anyhow::Result<App> {
    let catalog =
        HttpCatalogClient::new(&config.api).context("Failed to create catalog client")?;
    info!(
        base_url = %config.api.base_url,
        resource = %config.api.resource,
        page_size = config.list.page_size,
        "Catalog client wired"
    );

    let deps = AppDeps {
        catalog: Arc::new(catalog),
    };
    Ok(App::new(deps, config))
}
