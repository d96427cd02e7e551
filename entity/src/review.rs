use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub station_id: i32,
    #[sea_orm(indexed)]
    pub commuter_id: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub rating: i32,
    /// Overall sentiment, unset until the review has been analyzed
    pub sentiment: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Station,
    #[sea_orm(
        belongs_to = "super::commuter::Entity",
        from = "Column::CommuterId",
        to = "super::commuter::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Commuter,
    #[sea_orm(has_many = "super::aspect_rating::Entity")]
    AspectRating,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl Related<super::commuter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commuter.def()
    }
}

impl Related<super::aspect_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AspectRating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
