use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::StationModel;

pub struct StationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StationRepository<'a, C> {
    /// Creates a new instance of [`StationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, station_id: i32) -> Result<Option<StationModel>, DbErr> {
        entity::prelude::Station::find_by_id(station_id)
            .one(self.db)
            .await
    }

    /// Get all stations ordered by name
    pub async fn get_all(&self) -> Result<Vec<StationModel>, DbErr> {
        entity::prelude::Station::find()
            .order_by_asc(entity::station::Column::Name)
            .all(self.db)
            .await
    }
}
