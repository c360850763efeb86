use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::JoinType;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity::{point, point_item},
    error::{PointError, PointResult},
    models::{CreatePoint, Point, PointListFilter, PointWithItems},
    repository::PointRepository,
};

pub struct PgPointRepository {
    db: DatabaseConnection,
}

impl PgPointRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn resolve_items(
        &self,
        ids: &[i32],
    ) -> PointResult<Vec<domain_items::models::Item>> {
        let models = domain_items::entity::Entity::find()
            .filter(domain_items::entity::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(domain_items::entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}

#[async_trait]
impl PointRepository for PgPointRepository {
    async fn create(&self, input: CreatePoint) -> PointResult<PointWithItems> {
        let item_ids = input.items.clone();

        // Reject unknown item ids before touching the points table
        let items = self.resolve_items(&item_ids).await?;
        let unknown: Vec<i32> = item_ids
            .iter()
            .copied()
            .filter(|id| !items.iter().any(|item| item.id == *id))
            .collect();

        if !unknown.is_empty() {
            return Err(PointError::UnknownItems(unknown));
        }

        // The point row and its associations land in one transaction
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        let active_model: point::ActiveModel = input.into();
        let model = point::Entity::insert(active_model)
            .exec_with_returning(&txn)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        let associations = item_ids.iter().map(|item_id| point_item::ActiveModel {
            point_id: Set(model.id),
            item_id: Set(*item_id),
        });

        point_item::Entity::insert_many(associations)
            .exec(&txn)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(point_id = %model.id, item_count = item_ids.len(), "Created point");
        Ok(PointWithItems {
            point: model.into(),
            items,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> PointResult<Option<PointWithItems>> {
        let Some(model) = point::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?
        else {
            return Ok(None);
        };

        let items = model
            .find_related(domain_items::entity::Entity)
            .order_by_asc(domain_items::entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        Ok(Some(PointWithItems {
            point: model.into(),
            items: items.into_iter().map(|m| m.into()).collect(),
        }))
    }

    async fn list(&self, filter: PointListFilter) -> PointResult<Vec<Point>> {
        let mut query = point::Entity::find();

        if let Some(uf) = filter.uf {
            query = query.filter(point::Column::Uf.eq(uf));
        }

        if let Some(city) = filter.city {
            query = query.filter(point::Column::City.eq(city));
        }

        // A point joins once per matching association; DISTINCT collapses it
        if !filter.items.is_empty() {
            query = query
                .join(JoinType::InnerJoin, point::Relation::PointItems.def())
                .filter(point_item::Column::ItemId.is_in(filter.items))
                .distinct();
        }

        let models = query
            .order_by_desc(point::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}
