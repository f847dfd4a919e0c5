//! Schema maintenance statements.

use sqlx::PgConnection;

use crate::db::schema::TableDef;
use crate::db::DbPool;
use crate::error::AppResult;

/// Run one `DROP TABLE` statement outside any transaction.
pub async fn drop_table(pool: &DbPool, sql: &str) -> AppResult<()> {
    sqlx::query(sql).execute(pool).await?;
    Ok(())
}

/// Run a table's `CREATE TABLE` statement on the given connection.
pub async fn create_table(conn: &mut PgConnection, table: &TableDef) -> AppResult<()> {
    sqlx::query(table.ddl).execute(conn).await?;
    Ok(())
}
