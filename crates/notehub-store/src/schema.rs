//! Schema definitions and migration utilities.
//!
//! This module provides the embedded SQL schema definition and utilities
//! for applying it to a database.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the core schema (001_schema.sql).
pub const SCHEMA_MIGRATION: &str = include_str!("../../../migrations/001_schema.sql");

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
/// Migrations check for existing objects before creating them.
///
/// # Errors
///
/// Returns an error if the migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running schema migration (001_schema.sql)...");
    sqlx::raw_sql(SCHEMA_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Schema migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `notes` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_migration_embedded() {
        // Verify the migration SQL is properly embedded
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS auth_tokens"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS notes"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS note_shares"));
    }

    #[test]
    fn test_schema_migration_share_relation_is_a_set() {
        assert!(SCHEMA_MIGRATION.contains("PRIMARY KEY (note_id, user_id)"));
    }
}
