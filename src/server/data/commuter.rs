use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::CommuterModel;

pub struct CommuterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommuterRepository<'a, C> {
    /// Creates a new instance of [`CommuterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, commuter_id: i32) -> Result<Option<CommuterModel>, DbErr> {
        entity::prelude::Commuter::find_by_id(commuter_id)
            .one(self.db)
            .await
    }
}
