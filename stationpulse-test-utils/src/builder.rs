//! Declarative test builder.
//!
//! The builder queues tables and fixtures, and `build()` creates them in order on a
//! fresh in-memory database.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::review_tables, TestSetup};

/// Builder for declarative test initialization.
///
/// Methods can be chained and finalized with `build()`. Fixture rows are inserted in
/// the order they were queued within their kind: stations, then commuters, then reviews.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_review_tables: bool,

    stations: Vec<String>,
    commuters: Vec<String>,
    reviews: Vec<(i32, i32, String)>, // (station_id, commuter_id, text)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_review_tables: false,
            stations: Vec::new(),
            commuters: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Add the station, commuter, review & aspect rating tables.
    pub fn with_review_tables(mut self) -> Self {
        self.include_review_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stationpulse_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), stationpulse_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Station)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a station; the first queued station receives ID 1.
    pub fn with_station(mut self, name: impl Into<String>) -> Self {
        self.stations.push(name.into());
        self
    }

    /// Insert a commuter; the first queued commuter receives ID 1.
    pub fn with_commuter(mut self, username: impl Into<String>) -> Self {
        self.commuters.push(username.into());
        self
    }

    /// Insert an unanalyzed review referencing previously queued station & commuter IDs.
    pub fn with_review(
        mut self,
        station_id: i32,
        commuter_id: i32,
        text: impl Into<String>,
    ) -> Self {
        self.reviews.push((station_id, commuter_id, text.into()));
        self
    }

    /// Build the test setup.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();
        if self.include_review_tables {
            all_tables.extend(review_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for name in self.stations {
            setup.station().insert_station(&name).await?;
        }

        for username in self.commuters {
            setup.station().insert_commuter(&username).await?;
        }

        for (station_id, commuter_id, text) in self.reviews {
            setup
                .review()
                .insert_review(station_id, commuter_id, &text)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
