//! Relief-goods catalog entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{NewReliefGood, ReliefGood};
use crate::infra::repositories::DocumentEntity;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "relief_goods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub image_url: Option<String>,
    pub amount: f64,
    pub description: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ReliefGood {
    fn from(model: Model) -> Self {
        ReliefGood {
            id: model.id,
            details: NewReliefGood {
                title: model.title,
                category: model.category,
                image_url: model.image_url,
                amount: model.amount,
                description: model.description,
            },
            created_at: model.created_at,
        }
    }
}

impl DocumentEntity for Entity {
    type Doc = ReliefGood;

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn active_model(doc: ReliefGood) -> ActiveModel {
        ActiveModel {
            id: Set(doc.id),
            title: Set(doc.details.title),
            category: Set(doc.details.category),
            image_url: Set(doc.details.image_url),
            amount: Set(doc.details.amount),
            description: Set(doc.details.description),
            created_at: Set(doc.created_at),
        }
    }
}
