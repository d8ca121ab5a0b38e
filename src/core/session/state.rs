use anyhow::Context;
use sqlx::{
    Sqlite,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous},
};

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

pub(super) struct SessionState {
    session_file: Option<PathBuf>,
    pool: SqlitePool,
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("session_file", &self.session_file)
            .finish()
    }
}

impl SessionState {
    pub(super) async fn conn(&self) -> anyhow::Result<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .context("Failed to acquire session store connection")
    }

    pub(super) fn session_file(&self) -> Option<&Path> {
        self.session_file.as_deref()
    }

    pub(super) async fn open<P: AsRef<Path>>(session_file: P) -> anyhow::Result<Self> {
        let session_file = session_file.as_ref().to_path_buf();

        if let Some(parent) = session_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory {:?}", parent)
            })?;
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&session_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open session store {:?}", session_file))?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            session_file: Some(session_file),
            pool,
        })
    }

    /// A store that lives as long as the returned state. The single connection
    /// is never recycled, otherwise SQLite would drop the in-memory database.
    pub(super) async fn in_memory() -> anyhow::Result<Self> {
        let connect_opts = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_opts)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            session_file: None,
            pool,
        })
    }

    /// Flushes the WAL into the main file and releases file handles.
    pub(super) async fn close(&self) -> anyhow::Result<()> {
        if self.session_file.is_some() {
            sqlx::query("PRAGMA wal_checkpoint(TRUNCATE);")
                .execute(&self.pool)
                .await?;
        }
        self.pool.close().await;
        Ok(())
    }
}
