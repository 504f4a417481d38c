//! Migration: Create the content collections (catalog, donations, supply
//! posts and community submissions).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).uuid().not_null().primary_key().to_owned()
}

fn text<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).text().not_null().to_owned()
}

fn optional_text<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).text().null().to_owned()
}

fn amount<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).double().not_null().to_owned()
}

fn unique_email<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).string().not_null().unique_key().to_owned()
}

fn created_at<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReliefGoods::Table)
                    .if_not_exists()
                    .col(&mut id(ReliefGoods::Id))
                    .col(&mut text(ReliefGoods::Title))
                    .col(&mut text(ReliefGoods::Category))
                    .col(&mut optional_text(ReliefGoods::ImageUrl))
                    .col(&mut amount(ReliefGoods::Amount))
                    .col(&mut text(ReliefGoods::Description))
                    .col(&mut created_at(ReliefGoods::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Donations::Table)
                    .if_not_exists()
                    .col(&mut id(Donations::Id))
                    .col(&mut text(Donations::Name))
                    .col(&mut text(Donations::Email))
                    .col(&mut amount(Donations::Amount))
                    .col(&mut created_at(Donations::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Supplies::Table)
                    .if_not_exists()
                    .col(&mut id(Supplies::Id))
                    .col(&mut optional_text(Supplies::ImageUrl))
                    .col(&mut text(Supplies::Category))
                    .col(&mut text(Supplies::Title))
                    .col(&mut amount(Supplies::Amount))
                    .col(&mut text(Supplies::Description))
                    .col(&mut created_at(Supplies::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NewsletterSubscriptions::Table)
                    .if_not_exists()
                    .col(&mut id(NewsletterSubscriptions::Id))
                    .col(&mut text(NewsletterSubscriptions::Name))
                    .col(&mut unique_email(NewsletterSubscriptions::Email))
                    .col(&mut created_at(NewsletterSubscriptions::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(&mut id(ContactMessages::Id))
                    .col(&mut text(ContactMessages::Name))
                    .col(&mut text(ContactMessages::Email))
                    .col(&mut text(ContactMessages::Message))
                    .col(&mut created_at(ContactMessages::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(&mut id(Testimonials::Id))
                    .col(&mut text(Testimonials::Name))
                    .col(&mut text(Testimonials::Email))
                    .col(&mut optional_text(Testimonials::Image))
                    .col(&mut text(Testimonials::Position))
                    .col(&mut text(Testimonials::Company))
                    .col(&mut text(Testimonials::Review))
                    .col(&mut created_at(Testimonials::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Volunteers::Table)
                    .if_not_exists()
                    .col(&mut id(Volunteers::Id))
                    .col(&mut text(Volunteers::Name))
                    .col(&mut unique_email(Volunteers::Email))
                    .col(&mut optional_text(Volunteers::Image))
                    .col(&mut text(Volunteers::Phone))
                    .col(&mut text(Volunteers::Location))
                    .col(&mut text(Volunteers::Occupation))
                    .col(&mut created_at(Volunteers::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(&mut id(Comments::Id))
                    .col(&mut text(Comments::Name))
                    .col(&mut text(Comments::Email))
                    .col(&mut text(Comments::Message))
                    .col(&mut created_at(Comments::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ReliefGoods::Table)
                    .table(Donations::Table)
                    .table(Supplies::Table)
                    .table(NewsletterSubscriptions::Table)
                    .table(ContactMessages::Table)
                    .table(Testimonials::Table)
                    .table(Volunteers::Table)
                    .table(Comments::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum ReliefGoods {
    Table,
    Id,
    Title,
    Category,
    ImageUrl,
    Amount,
    Description,
    CreatedAt,
}

#[derive(Iden)]
enum Donations {
    Table,
    Id,
    Name,
    Email,
    Amount,
    CreatedAt,
}

#[derive(Iden)]
enum Supplies {
    Table,
    Id,
    ImageUrl,
    Category,
    Title,
    Amount,
    Description,
    CreatedAt,
}

#[derive(Iden)]
enum NewsletterSubscriptions {
    Table,
    Id,
    Name,
    Email,
    CreatedAt,
}

#[derive(Iden)]
enum ContactMessages {
    Table,
    Id,
    Name,
    Email,
    Message,
    CreatedAt,
}

#[derive(Iden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Email,
    Image,
    Position,
    Company,
    Review,
    CreatedAt,
}

#[derive(Iden)]
enum Volunteers {
    Table,
    Id,
    Name,
    Email,
    Image,
    Phone,
    Location,
    Occupation,
    CreatedAt,
}

#[derive(Iden)]
enum Comments {
    Table,
    Id,
    Name,
    Email,
    Message,
    CreatedAt,
}
