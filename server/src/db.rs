use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::repo::RepoError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Maximum concurrent backend connections held by the pool.
const MAX_CONNECTIONS: u32 = 10;
/// How long a checkout waits for a free or freshly established connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared connection pool. Constructed once at startup and passed
/// by reference to everything that talks to the backend; the pool re-opens
/// dropped connections on the next checkout.
pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(MAX_CONNECTIONS)
        .connection_timeout(CONNECT_TIMEOUT)
        .build(manager)
        .expect("Failed to create database pool");

    // Run pending migrations on startup
    let mut conn = pool
        .get()
        .expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");

    pool
}

/// Checks out a connection, mapping checkout failure to the connection error
/// of the repository taxonomy.
pub fn get_conn(pool: &DbPool) -> Result<DbConn, RepoError> {
    pool.get().map_err(RepoError::Connection)
}
