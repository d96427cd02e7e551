use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_STATION_LINE, TEST_STATION_LOCATION},
    error::TestError,
    model::{CommuterModel, StationModel},
    TestSetup,
};

impl TestSetup {
    pub fn station<'a>(&'a mut self) -> StationFixtures<'a> {
        StationFixtures { setup: self }
    }
}

pub struct StationFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> StationFixtures<'a> {
    /// Insert a station on the default line
    pub async fn insert_station(&self, name: &str) -> Result<StationModel, TestError> {
        Ok(
            entity::prelude::Station::insert(entity::station::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                line: ActiveValue::Set(TEST_STATION_LINE.to_string()),
                location: ActiveValue::Set(TEST_STATION_LOCATION.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_commuter(&self, username: &str) -> Result<CommuterModel, TestError> {
        Ok(
            entity::prelude::Commuter::insert(entity::commuter::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
