//! Supply post entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{NewSupply, Supply};
use crate::infra::repositories::DocumentEntity;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "supplies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image_url: Option<String>,
    pub category: String,
    pub title: String,
    pub amount: f64,
    pub description: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Supply {
    fn from(model: Model) -> Self {
        Supply {
            id: model.id,
            details: NewSupply {
                image_url: model.image_url,
                category: model.category,
                title: model.title,
                amount: model.amount,
                description: model.description,
            },
            created_at: model.created_at,
        }
    }
}

impl DocumentEntity for Entity {
    type Doc = Supply;

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn active_model(doc: Supply) -> ActiveModel {
        ActiveModel {
            id: Set(doc.id),
            image_url: Set(doc.details.image_url),
            category: Set(doc.details.category),
            title: Set(doc.details.title),
            amount: Set(doc.details.amount),
            description: Set(doc.details.description),
            created_at: Set(doc.created_at),
        }
    }
}
