//! Client-side session persistence.
//!
//! The only thing the client remembers between runs is the bearer token,
//! stored under the `"token"` key of a small SQLite key/value table. Its
//! presence is what the navigation guard treats as "logged in".

mod state;

use std::{future::Future, path::Path, sync::Arc};

use state::SessionState;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tokio::sync::watch;

const TOKEN_KEY: &str = "token";

/// A persisted token together with the time it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredToken {
    pub token: String,
    pub written_at: OffsetDateTime,
}

pub trait SessionRepository {
    fn load_token(&self) -> impl Future<Output = anyhow::Result<Option<StoredToken>>> + Send;
    fn store_token(&self, token: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn delete_token(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// SQLite-backed token slot. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct SessionDb {
    state: Arc<SessionState>,
}

impl SessionDb {
    pub async fn open<P: AsRef<Path>>(session_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(SessionState::open(session_file).await?),
        })
    }

    pub async fn in_memory() -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(SessionState::in_memory().await?),
        })
    }

    pub fn session_file(&self) -> Option<&Path> {
        self.state.session_file()
    }

    /// Checkpoint and close. Further use of this store (or its clones) fails.
    pub async fn close(&self) -> anyhow::Result<()> {
        self.state.close().await
    }
}

impl SessionRepository for SessionDb {
    async fn load_token(&self) -> anyhow::Result<Option<StoredToken>> {
        let mut conn = self.state.conn().await?;
        let row: Option<(String, String)> =
            sqlx::query_as(r#"SELECT value, updated_at FROM client_state WHERE key = ?"#)
                .bind(TOKEN_KEY)
                .fetch_optional(&mut *conn)
                .await?;
        row.map(|(token, updated_at)| -> anyhow::Result<StoredToken> {
            Ok(StoredToken {
                token,
                written_at: OffsetDateTime::parse(&updated_at, &Rfc3339)?,
            })
        })
        .transpose()
    }

    async fn store_token(&self, token: &str) -> anyhow::Result<()> {
        let mut conn = self.state.conn().await?;
        let now = OffsetDateTime::now_utc().format(&Rfc3339)?;
        sqlx::query(
            r#"INSERT INTO client_state (key, value, updated_at) VALUES (?, ?, ?)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at"#,
        )
        .bind(TOKEN_KEY)
        .bind(token)
        .bind(now)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    async fn delete_token(&self) -> anyhow::Result<()> {
        let mut conn = self.state.conn().await?;
        sqlx::query(r#"DELETE FROM client_state WHERE key = ?"#)
            .bind(TOKEN_KEY)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

/// The session context handed to every view.
///
/// Reads come from an in-memory mirror so the navigation guard can consult
/// it synchronously; writes go to the store first and update the mirror only
/// once they are durable.
#[derive(Debug, Clone)]
pub struct Session {
    store: SessionDb,
    token: Arc<watch::Sender<Option<String>>>,
}

impl Session {
    pub async fn load(store: SessionDb) -> anyhow::Result<Self> {
        let token = store.load_token().await?.map(|stored| stored.token);
        tracing::debug!(authenticated = token.is_some(), "session loaded");
        Ok(Self {
            store,
            token: Arc::new(watch::Sender::new(token)),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub async fn set(&self, token: &str) -> anyhow::Result<()> {
        self.store.store_token(token).await?;
        self.token.send_replace(Some(token.to_string()));
        Ok(())
    }

    pub async fn clear(&self) -> anyhow::Result<()> {
        self.store.delete_token().await?;
        self.token.send_replace(None);
        Ok(())
    }

    pub fn store(&self) -> &SessionDb {
        &self.store
    }
}
