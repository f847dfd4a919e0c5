//! Schema service: drop, create and populate the reservation tables.

use crate::db::models::DropOutcome;
use crate::db::queries::schema as queries;
use crate::db::schema::{self, TableDef};
use crate::db::{seed, DbPool};
use crate::error::AppResult;
use crate::result_ext::ResultExt;

/// Service for schema operations.
#[derive(Clone)]
pub struct SchemaService {
    pool: DbPool,
}

impl SchemaService {
    /// Create a new schema service.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Drop every table, children first.
    ///
    /// Each statement stands alone; failures are recorded and the next
    /// table is attempted.
    pub async fn drop_tables(&self) -> Vec<DropOutcome> {
        let mut outcomes = Vec::with_capacity(schema::TABLES.len());

        for table in schema::drop_order() {
            let sql = schema::drop_statement(table);
            match queries::drop_table(&self.pool, &sql).await {
                Ok(()) => {
                    tracing::info!(table = table.name, "Table dropped");
                    outcomes.push(DropOutcome::Dropped { sql });
                }
                Err(e) => {
                    tracing::debug!(table = table.name, error = %e, "Drop skipped");
                    outcomes.push(DropOutcome::Skipped {
                        sql,
                        reason: e.user_message(),
                    });
                }
            }
        }

        outcomes
    }

    /// Create every table in one transaction.
    ///
    /// The first failing statement rolls back the tables created before it.
    pub async fn create_tables(&self) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        for table in schema::tables() {
            create_one(&mut tx, table).await.log("creating tables")?;
        }

        tx.commit().await?;
        tracing::info!(tables = schema::TABLES.len(), "Schema created");
        Ok(())
    }

    /// Insert the dummy data set in one transaction.
    pub async fn populate_tables(&self) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        // Dropping `tx` on the error path rolls the inserts back.
        seed::insert_all(&mut tx).await.log("populating tables")?;

        tx.commit().await?;
        tracing::info!("Dummy data committed");
        Ok(())
    }
}

async fn create_one(conn: &mut sqlx::PgConnection, table: &TableDef) -> AppResult<()> {
    queries::create_table(conn, table).await?;
    tracing::debug!(table = table.name, "Table created");
    Ok(())
}
