//! Generic document collection over a SeaORM entity.
//!
//! Every content resource exposes the same surface: list, fetch by id,
//! optional lookup by email, insert, full replacement with upsert semantics,
//! and delete. One generic implementation serves all of them; an entity opts
//! in by implementing [`DocumentEntity`].

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::domain::Document;
use crate::errors::{AppError, AppResult};
use crate::infra::db::bounded;

/// Collection of documents of one kind.
#[async_trait]
pub trait Collection<D: Document>: Send + Sync {
    /// All documents, oldest first
    async fn list(&self) -> AppResult<Vec<D>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<D>>;

    /// Lookup on the email key; only valid for email-keyed collections
    async fn find_by_email(&self, email: &str) -> AppResult<Option<D>>;

    /// Insert a new document under a fresh id.
    ///
    /// A unique-index violation surfaces as [`AppError::DuplicateKey`].
    async fn insert(&self, draft: D::Draft) -> AppResult<D>;

    /// Replace every field of the document at `id`, inserting it if absent.
    async fn upsert(&self, id: Uuid, draft: D::Draft) -> AppResult<D>;

    /// Returns whether a document was removed
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Mapping between a SeaORM entity and its domain document.
pub trait DocumentEntity: EntityTrait {
    type Doc: Document + From<Self::Model>;

    fn created_at_column() -> Self::Column;

    fn email_column() -> Option<Self::Column> {
        None
    }

    fn active_model(doc: Self::Doc) -> Self::ActiveModel;
}

/// SeaORM-backed [`Collection`]; every query runs under the store timeout.
pub struct SeaCollection<E> {
    db: DatabaseConnection,
    timeout: Duration,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaCollection<E> {
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self {
            db,
            timeout,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> Collection<E::Doc> for SeaCollection<E>
where
    E: DocumentEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    async fn list(&self) -> AppResult<Vec<E::Doc>> {
        let query = E::find().order_by_asc(E::created_at_column());
        let models = bounded(self.timeout, query.all(&self.db)).await?;
        Ok(models.into_iter().map(E::Doc::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<E::Doc>> {
        let model = bounded(self.timeout, E::find_by_id(id).one(&self.db)).await?;
        Ok(model.map(E::Doc::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<E::Doc>> {
        let column = E::email_column()
            .ok_or_else(|| AppError::internal("collection is not keyed by email"))?;

        let query = E::find().filter(ColumnTrait::eq(&column, email));
        let model = bounded(self.timeout, query.one(&self.db)).await?;
        Ok(model.map(E::Doc::from))
    }

    async fn insert(&self, draft: <E::Doc as Document>::Draft) -> AppResult<E::Doc> {
        let doc = <E::Doc as Document>::build(Uuid::new_v4(), Utc::now(), draft);
        let model = bounded(self.timeout, E::active_model(doc).insert(&self.db)).await?;
        Ok(E::Doc::from(model))
    }

    async fn upsert(&self, id: Uuid, draft: <E::Doc as Document>::Draft) -> AppResult<E::Doc> {
        let existing = bounded(self.timeout, E::find_by_id(id).one(&self.db)).await?;

        let model = match existing {
            Some(model) => {
                let created_at = E::Doc::from(model).created_at();
                let doc = <E::Doc as Document>::build(id, created_at, draft);
                bounded(self.timeout, E::active_model(doc).update(&self.db)).await?
            }
            None => {
                let doc = <E::Doc as Document>::build(id, Utc::now(), draft);
                bounded(self.timeout, E::active_model(doc).insert(&self.db)).await?
            }
        };

        Ok(E::Doc::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = bounded(self.timeout, E::delete_by_id(id).exec(&self.db)).await?;
        Ok(result.rows_affected > 0)
    }
}
