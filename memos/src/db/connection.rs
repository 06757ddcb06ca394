use libsql::{Builder, Connection};
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::Result;

use super::schema;

const BUSY_TIMEOUT_MS: u64 = 5000;

/// Where the memo table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Remote,
    Replica,
    Memory,
    File(String),
}

impl Location {
    fn from_config(config: &DatabaseConfig) -> Self {
        let url = config.url.as_str();
        if url.starts_with("libsql://") || url.starts_with("https://") {
            if config.local_path.is_some() {
                Self::Replica
            } else {
                Self::Remote
            }
        } else if url == ":memory:" || url == "file::memory:" {
            Self::Memory
        } else {
            Self::File(url.strip_prefix("file:").unwrap_or(url).to_string())
        }
    }

    fn is_local(&self) -> bool {
        matches!(self, Self::Memory | Self::File(_))
    }
}

pub struct Database {
    pub(crate) db: Arc<libsql::Database>,
    // An in-memory database only lives as long as one connection.
    shared_conn: Option<Connection>,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let location = Location::from_config(config);
        let auth_token = config.auth_token.clone().unwrap_or_default();

        let db = match &location {
            Location::Replica => {
                let local_path = config.local_path.clone().unwrap_or_default();
                Builder::new_remote_replica(local_path, config.url.clone(), auth_token)
                    .build()
                    .await?
            }
            Location::Remote => Builder::new_remote(config.url.clone(), auth_token)
                .build()
                .await?,
            Location::Memory => Builder::new_local(":memory:").build().await?,
            Location::File(path) => Builder::new_local(path).build().await?,
        };

        let shared_conn = if location == Location::Memory {
            Some(db.connect()?)
        } else {
            None
        };

        let database = Self {
            db: Arc::new(db),
            shared_conn,
        };
        if location.is_local() {
            database.configure_local().await?;
        }
        database.init_schema().await?;

        tracing::debug!(location = ?location, "Database ready");
        Ok(database)
    }

    /// Private in-memory database, mainly for tests.
    pub async fn in_memory() -> Result<Self> {
        Self::new(&DatabaseConfig {
            url: ":memory:".to_string(),
            auth_token: None,
            local_path: None,
        })
        .await
    }

    pub fn connect(&self) -> Result<Connection> {
        match &self.shared_conn {
            Some(conn) => Ok(conn.clone()),
            None => Ok(self.db.connect()?),
        }
    }

    async fn configure_local(&self) -> Result<()> {
        let conn = self.connect()?;

        let busy_timeout_sql = format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}");
        if let Err(error) = conn.execute_batch(&busy_timeout_sql).await {
            tracing::warn!(
                busy_timeout_ms = BUSY_TIMEOUT_MS,
                error = %error,
                "Failed to set SQLite busy_timeout"
            );
        }

        if let Err(error) = conn.execute_batch("PRAGMA journal_mode = WAL").await {
            tracing::warn!(error = %error, "Failed to set SQLite journal_mode");
        }

        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        schema::init_schema(&conn).await?;
        Ok(())
    }

    /// Round-trip a trivial query. Fails when the database cannot answer.
    pub async fn ping(&self) -> Result<()> {
        let conn = self.connect()?;
        let mut rows = conn.query("SELECT 1", ()).await?;
        rows.next().await?;
        Ok(())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            shared_conn: self.shared_conn.clone(),
        }
    }
}
