//! In-memory database test environment.
//!
//! Each [`TestSetup`] owns its own `sqlite::memory:` database, so tests never share state.
//! Tables are created from the SeaORM entities rather than the Postgres migrations.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Create statements for every table a review needs, in foreign key order.
pub fn review_tables() -> Vec<TableCreateStatement> {
    let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Station),
        schema.create_table_from_entity(entity::prelude::Commuter),
        schema.create_table_from_entity(entity::prelude::Review),
        schema.create_table_from_entity(entity::prelude::AspectRating),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_review_tables {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;
            setup.with_tables($crate::setup::review_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
