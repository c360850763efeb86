use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the points table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "points")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::point_item::Entity")]
    PointItems,
}

impl Related<super::point_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointItems.def()
    }
}

// Points reach the item catalog through the point_items join table
impl Related<domain_items::entity::Entity> for Entity {
    fn to() -> RelationDef {
        super::point_item::Relation::Item.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::point_item::Relation::Point.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Point
impl From<Model> for crate::models::Point {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            whatsapp: model.whatsapp,
            latitude: model.latitude,
            longitude: model.longitude,
            city: model.city,
            uf: model.uf,
            image: model.image,
            created_at: model.created_at.into(),
        }
    }
}

// Conversion from domain CreatePoint to Sea-ORM ActiveModel
impl From<crate::models::CreatePoint> for ActiveModel {
    fn from(input: crate::models::CreatePoint) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            email: Set(input.email),
            whatsapp: Set(input.whatsapp),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            city: Set(input.city),
            uf: Set(input.uf),
            image: Set(input.image),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}
