//! Volunteer entity (one per email).

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{NewVolunteer, Volunteer};
use crate::infra::repositories::DocumentEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "volunteers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub image: Option<String>,
    pub phone: String,
    pub location: String,
    pub occupation: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Volunteer {
    fn from(model: Model) -> Self {
        Volunteer {
            id: model.id,
            details: NewVolunteer {
                name: model.name,
                email: model.email,
                image: model.image,
                phone: model.phone,
                location: model.location,
                occupation: model.occupation,
            },
            created_at: model.created_at,
        }
    }
}

impl DocumentEntity for Entity {
    type Doc = Volunteer;

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn email_column() -> Option<Column> {
        Some(Column::Email)
    }

    fn active_model(doc: Volunteer) -> ActiveModel {
        ActiveModel {
            id: Set(doc.id),
            name: Set(doc.details.name),
            email: Set(doc.details.email),
            image: Set(doc.details.image),
            phone: Set(doc.details.phone),
            location: Set(doc.details.location),
            occupation: Set(doc.details.occupation),
            created_at: Set(doc.created_at),
        }
    }
}
