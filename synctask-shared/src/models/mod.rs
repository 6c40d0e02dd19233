/// Store documents for SyncTask
///
/// # Models
///
/// - `user`: user documents, created once and never mutated
/// - `task`: task documents with a status bucket and a JSONB catch-all
///   for caller-supplied fields
/// - `ack`: write acknowledgments returned to HTTP clients
///
/// # Example
///
/// ```no_run
/// use synctask_shared::models::user::{CreateUser, User};
/// use synctask_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let new_user = CreateUser {
///     name: "John Doe".to_string(),
///     email: "user@example.com".to_string(),
///     extra: Default::default(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// println!("Created user: {}", user.id);
/// # Ok(())
/// # }
/// ```

pub mod ack;
pub mod task;
pub mod user;
