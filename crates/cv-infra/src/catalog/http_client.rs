use anyhow::Context;
use async_trait::async_trait;
use cv_core::config::ApiConfig;
use cv_core::fanout::join_all_or_nothing;
use cv_core::{CatalogError, CatalogPort, Entry, EntryId, PageNumber};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::mapper::{AbilityDescriptionMapper, EntryResourceMapper, ResourceMapper};
use super::models::{AbilityResource, EntryResource, PageResponse};

const ABILITY_RESOURCE: &str = "ability";

/// [`CatalogPort`] backed by the public REST API.
///
/// Every call issues fresh requests. There is no retry, cache or rate
/// limiting; a request timeout applies only when configured.
///
/// 基于 HTTP 的目录客户端，每次调用都发起新请求。
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
    resource: String,
}

impl HttpCatalogClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            resource: config.resource.trim_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.resource)
    }

    fn entry_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, key)
    }

    fn ability_url(&self, ability: &str) -> String {
        format!("{}/{}/{}", self.base_url, ABILITY_RESOURCE, ability)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        debug!(url, ?query, "GET");
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request
            .send()
            .await
            .map_err(|err| {
                warn!(url, error = %err, "Catalog request failed");
                CatalogError::network(url, err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "Catalog request returned non-success status");
            return Err(CatalogError::network(url, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| CatalogError::network(url, err))?;

        serde_json::from_slice(&body)
            .map_err(|err| CatalogError::DataShape(format!("{url}: {err}")))
    }

    async fn fetch_entry(&self, key: &str) -> Result<Entry, CatalogError> {
        let resource: EntryResource = self.get_json(&self.entry_url(key), &[]).await?;
        EntryResourceMapper.to_domain(resource)
    }
}

#[async_trait]
impl CatalogPort for HttpCatalogClient {
    async fn list_page(
        &self,
        page: PageNumber,
        page_size: usize,
    ) -> Result<Vec<Entry>, CatalogError> {
        let query = [
            ("limit", page_size.to_string()),
            ("offset", page.offset(page_size).to_string()),
        ];
        let listing: PageResponse = self.get_json(&self.collection_url(), &query).await?;

        join_all_or_nothing(
            listing
                .results
                .iter()
                .map(|reference| self.fetch_entry(&reference.name)),
        )
        .await
        .map_err(|err| {
            warn!(
                %page,
                failed = err.failed,
                total = err.total,
                "Discarding page after failed entry fetches"
            );
            err.first
        })
    }

    async fn get_entry(&self, id: &EntryId) -> Result<Entry, CatalogError> {
        self.fetch_entry(id.as_str()).await
    }

    async fn get_ability_description(&self, ability: &str) -> Result<String, CatalogError> {
        let resource: AbilityResource = self.get_json(&self.ability_url(ability), &[]).await?;
        AbilityDescriptionMapper { ability }.to_domain(resource)
    }
}
