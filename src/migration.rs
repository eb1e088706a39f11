//! Create model tables at startup. Idempotent (IF NOT EXISTS); no schema evolution.

use crate::config::DatabaseBackend;
use crate::error::AppError;
use crate::model::{ColumnType, Model, Product, TableDescriptor};
use sqlx::AnyPool;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_type_sql(column_type: ColumnType, backend: DatabaseBackend) -> &'static str {
    match (column_type, backend) {
        (ColumnType::Integer, DatabaseBackend::Postgres) => "BIGINT",
        (ColumnType::Integer, DatabaseBackend::Sqlite) => "INTEGER",
        (ColumnType::Text, _) => "TEXT",
    }
}

/// CREATE TABLE statement for one descriptor.
pub fn create_table_sql(table: &TableDescriptor, backend: DatabaseBackend) -> String {
    let pk = match backend {
        DatabaseBackend::Postgres => format!("{} BIGSERIAL PRIMARY KEY", quote(table.pk)),
        DatabaseBackend::Sqlite => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", quote(table.pk)),
    };
    let mut defs = vec![pk];
    defs.extend(table.columns.iter().map(|c| {
        format!("{} {} NOT NULL", quote(c.name), column_type_sql(c.column_type, backend))
    }));
    format!("CREATE TABLE IF NOT EXISTS {} ({})", quote(table.name), defs.join(", "))
}

/// Create every model table that does not exist yet.
pub async fn apply_migrations(pool: &AnyPool, backend: DatabaseBackend) -> Result<(), AppError> {
    for table in [Product::TABLE] {
        let ddl = create_table_sql(&table, backend);
        tracing::debug!(sql = %ddl, "migration");
        sqlx::query(&ddl).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_ddl_uses_bigserial() {
        assert_eq!(
            create_table_sql(&Product::TABLE, DatabaseBackend::Postgres),
            r#"CREATE TABLE IF NOT EXISTS "products" ("id" BIGSERIAL PRIMARY KEY, "name" TEXT NOT NULL, "description" TEXT NOT NULL, "price" BIGINT NOT NULL)"#
        );
    }

    #[test]
    fn sqlite_ddl_uses_autoincrement() {
        let ddl = create_table_sql(&Product::TABLE, DatabaseBackend::Sqlite);
        assert!(ddl.contains(r#""id" INTEGER PRIMARY KEY AUTOINCREMENT"#));
        assert!(ddl.contains(r#""price" INTEGER NOT NULL"#));
    }
}
