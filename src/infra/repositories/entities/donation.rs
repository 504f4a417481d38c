//! Donation entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Donation, NewDonation};
use crate::infra::repositories::DocumentEntity;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "donations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Donation {
    fn from(model: Model) -> Self {
        Donation {
            id: model.id,
            details: NewDonation {
                name: model.name,
                email: model.email,
                amount: model.amount,
            },
            created_at: model.created_at,
        }
    }
}

impl DocumentEntity for Entity {
    type Doc = Donation;

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn active_model(doc: Donation) -> ActiveModel {
        ActiveModel {
            id: Set(doc.id),
            name: Set(doc.details.name),
            email: Set(doc.details.email),
            amount: Set(doc.details.amount),
            created_at: Set(doc.created_at),
        }
    }
}
