use async_trait::async_trait;
use domain_items::models::Item;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{PointError, PointResult};
use crate::models::{CreatePoint, Point, PointListFilter, PointWithItems};

/// Repository trait for Point persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointRepository: Send + Sync {
    /// Create a point and its item associations atomically
    ///
    /// Fails with `UnknownItems` if any referenced item id is not in the
    /// catalog.
    async fn create(&self, input: CreatePoint) -> PointResult<PointWithItems>;

    /// Get a point with its items by ID
    async fn get_by_id(&self, id: Uuid) -> PointResult<Option<PointWithItems>>;

    /// List points matching the filter, newest first
    async fn list(&self, filter: PointListFilter) -> PointResult<Vec<Point>>;
}

/// In-memory implementation of PointRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryPointRepository {
    catalog: Arc<Vec<Item>>,
    points: Arc<RwLock<HashMap<Uuid, (Point, Vec<i32>)>>>,
}

impl InMemoryPointRepository {
    pub fn new(catalog: Vec<Item>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            points: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Repository backed by the seeded item catalog
    pub fn with_default_catalog() -> Self {
        Self::new(domain_items::repository::default_catalog())
    }

    fn items_by_ids(&self, ids: &[i32]) -> Vec<Item> {
        self.catalog
            .iter()
            .filter(|item| ids.contains(&item.id))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PointRepository for InMemoryPointRepository {
    async fn create(&self, input: CreatePoint) -> PointResult<PointWithItems> {
        let unknown: Vec<i32> = input
            .items
            .iter()
            .copied()
            .filter(|id| !self.catalog.iter().any(|item| item.id == *id))
            .collect();

        if !unknown.is_empty() {
            return Err(PointError::UnknownItems(unknown));
        }

        let point = Point::new(&input);
        let items = self.items_by_ids(&input.items);

        let mut points = self.points.write().await;
        points.insert(point.id, (point.clone(), input.items));

        tracing::info!(point_id = %point.id, "Created point");
        Ok(PointWithItems { point, items })
    }

    async fn get_by_id(&self, id: Uuid) -> PointResult<Option<PointWithItems>> {
        let points = self.points.read().await;

        Ok(points.get(&id).map(|(point, item_ids)| PointWithItems {
            point: point.clone(),
            items: self.items_by_ids(item_ids),
        }))
    }

    async fn list(&self, filter: PointListFilter) -> PointResult<Vec<Point>> {
        let points = self.points.read().await;

        let mut result: Vec<Point> = points
            .values()
            .filter(|(point, item_ids)| {
                if let Some(ref uf) = filter.uf {
                    if &point.uf != uf {
                        return false;
                    }
                }
                if let Some(ref city) = filter.city {
                    if &point.city != city {
                        return false;
                    }
                }
                if !filter.items.is_empty()
                    && !item_ids.iter().any(|id| filter.items.contains(id))
                {
                    return false;
                }
                true
            })
            .map(|(point, _)| point.clone())
            .collect();

        // Newest first
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }
}
