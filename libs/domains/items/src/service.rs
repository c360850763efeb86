use core_config::uploads::UploadsConfig;
use std::sync::Arc;

use crate::error::ItemResult;
use crate::models::ItemResponse;
use crate::repository::ItemRepository;

/// Service layer for the item catalog
#[derive(Clone)]
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
    uploads: UploadsConfig,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R, uploads: UploadsConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            uploads,
        }
    }

    /// List the catalog with icon filenames resolved to absolute URLs
    pub async fn list_items(&self) -> ItemResult<Vec<ItemResponse>> {
        let items = self.repository.list().await?;

        Ok(items
            .into_iter()
            .map(|item| ItemResponse::from_item(item, &self.uploads))
            .collect())
    }
}
