/// Schema bootstrap runner
///
/// The two tables and their indexes live in `migrations/` at the
/// workspace root and are applied at startup via sqlx's migration
/// system. The unique indexes created there are load-bearing: they are
/// the duplicate-detection mechanism for user and task creation.

use sqlx::postgres::PgPool;
use tracing::{info, warn};

/// Runs all pending migrations against the given pool
///
/// # Errors
///
/// Returns an error if a migration file is malformed or fails to
/// execute.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("../migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
