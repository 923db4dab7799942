/// Isolated test database utility that creates and cleans up temporary databases
/// Each test gets its own database that is automatically dropped when the test completes
///
/// This uses TEST_DATABASE_URL from the environment to connect to the test database server.
/// When the variable is unset, `TestDb::try_new` returns `None` and PostgreSQL tests skip.
use diesel::r2d2::{self, ConnectionManager};
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};
use filmorate::shared::Database;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

pub const TEST_DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

pub struct TestDb {
    default_db_url: String,
    name: String,
    database: Arc<Database>,
}

impl TestDb {
    /// Creates a new isolated, migrated test database with a unique name
    ///
    /// Database name format: test_db_{process_id}_{counter}
    /// This ensures multiple test processes can run in parallel
    pub fn try_new() -> Option<Self> {
        dotenvy::dotenv().ok();

        let test_db_url = match std::env::var(TEST_DATABASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                eprintln!("{} not set, skipping PostgreSQL test", TEST_DATABASE_URL_ENV);
                return None;
            }
        };

        // Generate unique database name
        let name = format!(
            "test_db_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let mut conn = PgConnection::establish(&test_db_url)
            .expect("Failed to connect to test database server");

        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", name, e));

        // Replace the database name in the URL (everything after the last '/')
        let isolated_db_url = match test_db_url.rfind('/') {
            Some(last_slash) => format!("{}/{}", &test_db_url[..last_slash], name),
            None => panic!("Invalid {} format: {}", TEST_DATABASE_URL_ENV, test_db_url),
        };

        let manager = ConnectionManager::<PgConnection>::new(isolated_db_url);
        let pool = r2d2::Pool::builder()
            .max_size(5) // Smaller pool for test databases
            .test_on_check_out(true)
            .build(manager)
            .expect("Failed to build test database connection pool");

        let database = Database::from_pool(pool);
        database
            .run_migrations()
            .expect("Unable to migrate the test database");

        Some(Self {
            default_db_url: test_db_url,
            name,
            database: Arc::new(database),
        })
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.database)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for TestDb {
    /// Terminates remaining connections and drops the database.
    /// If the thread is panicking the database is left for debugging.
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!(
                "TestDb leaking database '{}' due to panic - database preserved for debugging",
                self.name
            );
            return;
        }

        let mut conn = match PgConnection::establish(&self.default_db_url) {
            Ok(conn) => conn,
            Err(e) => {
                eprintln!("Failed to connect for cleanup of '{}': {}", self.name, e);
                return;
            }
        };

        let terminate_result = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn);

        if let Err(e) = terminate_result {
            eprintln!(
                "Failed to terminate connections for '{}': {}",
                self.name, e
            );
        }

        match sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut conn) {
            Ok(_) => log::debug!("Cleaned up test database: {}", self.name),
            Err(e) => eprintln!("Failed to drop test database '{}': {}", self.name, e),
        }
    }
}
