/// Database layer for SyncTask
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with a startup ping
/// - `migrations`: schema bootstrap runner
///
/// # Example
///
/// ```no_run
/// use synctask_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
