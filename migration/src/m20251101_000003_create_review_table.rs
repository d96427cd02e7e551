use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_station_table::Station,
    m20251101_000002_create_commuter_table::Commuter,
};

static IDX_REVIEW_STATION_ID: &str = "idx_review_station_id";
static IDX_REVIEW_COMMUTER_ID: &str = "idx_review_commuter_id";
static FK_REVIEW_STATION_ID: &str = "fk_review_station_id";
static FK_REVIEW_COMMUTER_ID: &str = "fk_review_commuter_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::StationId))
                    .col(integer(Review::CommuterId))
                    .col(text(Review::Text))
                    .col(integer(Review::Rating).default(3))
                    .col(string_len_null(Review::Sentiment, 20))
                    .col(timestamp(Review::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_STATION_ID)
                    .table(Review::Table)
                    .col(Review::StationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_COMMUTER_ID)
                    .table(Review::Table)
                    .col(Review::CommuterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_STATION_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::StationId)
                    .to_tbl(Station::Table)
                    .to_col(Station::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_COMMUTER_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::CommuterId)
                    .to_tbl(Commuter::Table)
                    .to_col(Commuter::Id)
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
                    .name(FK_REVIEW_COMMUTER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REVIEW_STATION_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_COMMUTER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_STATION_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    StationId,
    CommuterId,
    Text,
    Rating,
    Sentiment,
    CreatedAt,
}
