pub mod models; // Row and request/response shapes
pub mod queries; // One async function per SQL statement

pub use models::*;
pub use queries::*;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

/// Shared handle to the connection pool, cloned into every handler through
/// the router state.
pub type Database = Arc<Pool<Postgres>>;

/// Open a bounded pool (fixed maximum, no overflow) and bring the schema up
/// to date. A connection or migration failure here is fatal to the caller.
pub async fn create_pool(database_url: &str, pool_size: u32) -> Result<Database, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(pool_size)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(pool))
}
