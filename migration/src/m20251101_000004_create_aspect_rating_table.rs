use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_create_review_table::Review;

static IDX_ASPECT_RATING_REVIEW_ID: &str = "idx_aspect_rating_review_id";
static FK_ASPECT_RATING_REVIEW_ID: &str = "fk_aspect_rating_review_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AspectRating::Table)
                    .if_not_exists()
                    .col(pk_auto(AspectRating::Id))
                    .col(integer(AspectRating::ReviewId))
                    .col(string_len(AspectRating::Aspect, 50))
                    .col(string_len(AspectRating::Sentiment, 20))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASPECT_RATING_REVIEW_ID)
                    .table(AspectRating::Table)
                    .col(AspectRating::ReviewId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASPECT_RATING_REVIEW_ID)
                    .from_tbl(AspectRating::Table)
                    .from_col(AspectRating::ReviewId)
                    .to_tbl(Review::Table)
                    .to_col(Review::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ASPECT_RATING_REVIEW_ID)
                    .table(AspectRating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASPECT_RATING_REVIEW_ID)
                    .table(AspectRating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AspectRating::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AspectRating {
    Table,
    Id,
    ReviewId,
    Aspect,
    Sentiment,
}
