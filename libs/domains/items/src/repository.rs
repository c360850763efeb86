use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for the item catalog
///
/// The catalog is seeded by a migration, so only read operations exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List the full catalog ordered by id
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Return the subset of `ids` that exist in the catalog
    async fn find_existing_ids(&self, ids: &[i32]) -> ItemResult<Vec<i32>>;
}

/// In-memory implementation of ItemRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// Catalog matching the seed migration
    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }
}

/// The item catalog as inserted by the seed migration
pub fn default_catalog() -> Vec<Item> {
    [
        (1, "Lâmpadas", "lampadas.svg"),
        (2, "Pilhas e Baterias", "baterias.svg"),
        (3, "Papéis e Papelão", "papeis-papelao.svg"),
        (4, "Resíduos Eletrônicos", "eletronicos.svg"),
        (5, "Resíduos Orgânicos", "organicos.svg"),
        (6, "Óleo de Cozinha", "oleo.svg"),
    ]
    .into_iter()
    .map(|(id, title, image)| Item {
        id,
        title: title.to_string(),
        image: image.to_string(),
    })
    .collect()
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let mut items = self.items.as_ref().clone();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn find_existing_ids(&self, ids: &[i32]) -> ItemResult<Vec<i32>> {
        let existing: Vec<i32> = ids
            .iter()
            .copied()
            .filter(|id| self.items.iter().any(|item| item.id == *id))
            .collect();
        Ok(existing)
    }
}
