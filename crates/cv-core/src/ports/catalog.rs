use async_trait::async_trait;

use super::CatalogError;
use crate::catalog::Entry;
use crate::ids::EntryId;
use crate::list::PageNumber;

/// Read access to the remote catalog.
///
/// Every call is a fresh request: no retries, no caching.
///
/// 远程目录的只读访问端口。
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetch one page of full entries.
    ///
    /// All-or-nothing: if any constituent fetch fails the whole page fails
    /// and no partial result is returned. Entries keep the order of the
    /// page listing.
    async fn list_page(
        &self,
        page: PageNumber,
        page_size: usize,
    ) -> Result<Vec<Entry>, CatalogError>;

    async fn get_entry(&self, id: &EntryId) -> Result<Entry, CatalogError>;

    /// First English short description of an ability.
    ///
    /// Fails with [`CatalogError::DataShape`] when no English entry exists.
    async fn get_ability_description(&self, ability: &str) -> Result<String, CatalogError>;
}

#[cfg(any(test, feature = "test-utils"))]
mockall::mock! {
    pub CatalogPort {}

    #[async_trait]
    impl CatalogPort for CatalogPort {
        async fn list_page(
            &self,
            page: PageNumber,
            page_size: usize,
        ) -> Result<Vec<Entry>, CatalogError>;
        async fn get_entry(&self, id: &EntryId) -> Result<Entry, CatalogError>;
        async fn get_ability_description(&self, ability: &str) -> Result<String, CatalogError>;
    }
}
