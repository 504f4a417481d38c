//! Newsletter subscription entity (one per email).

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{NewSubscription, NewsletterSubscription};
use crate::infra::repositories::DocumentEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "newsletter_subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for NewsletterSubscription {
    fn from(model: Model) -> Self {
        NewsletterSubscription {
            id: model.id,
            details: NewSubscription {
                name: model.name,
                email: model.email,
            },
            created_at: model.created_at,
        }
    }
}

impl DocumentEntity for Entity {
    type Doc = NewsletterSubscription;

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn email_column() -> Option<Column> {
        Some(Column::Email)
    }

    fn active_model(doc: NewsletterSubscription) -> ActiveModel {
        ActiveModel {
            id: Set(doc.id),
            name: Set(doc.details.name),
            email: Set(doc.details.email),
            created_at: Set(doc.created_at),
        }
    }
}
