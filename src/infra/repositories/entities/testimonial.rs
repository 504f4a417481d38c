//! Testimonial entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{NewTestimonial, Testimonial};
use crate::infra::repositories::DocumentEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub position: String,
    pub company: String,
    pub review: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Testimonial {
    fn from(model: Model) -> Self {
        Testimonial {
            id: model.id,
            details: NewTestimonial {
                name: model.name,
                email: model.email,
                image: model.image,
                position: model.position,
                company: model.company,
                review: model.review,
            },
            created_at: model.created_at,
        }
    }
}

impl DocumentEntity for Entity {
    type Doc = Testimonial;

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn active_model(doc: Testimonial) -> ActiveModel {
        ActiveModel {
            id: Set(doc.id),
            name: Set(doc.details.name),
            email: Set(doc.details.email),
            image: Set(doc.details.image),
            position: Set(doc.details.position),
            company: Set(doc.details.company),
            review: Set(doc.details.review),
            created_at: Set(doc.created_at),
        }
    }
}
