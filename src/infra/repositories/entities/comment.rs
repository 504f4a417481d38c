//! Comment entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Comment, NewComment};
use crate::infra::repositories::DocumentEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Comment {
            id: model.id,
            details: NewComment {
                name: model.name,
                email: model.email,
                message: model.message,
            },
            created_at: model.created_at,
        }
    }
}

impl DocumentEntity for Entity {
    type Doc = Comment;

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn active_model(doc: Comment) -> ActiveModel {
        ActiveModel {
            id: Set(doc.id),
            name: Set(doc.details.name),
            email: Set(doc.details.email),
            message: Set(doc.details.message),
            created_at: Set(doc.created_at),
        }
    }
}
