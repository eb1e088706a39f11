//! Process-wide database helper: owns the pool and hands out sessions.

use crate::config::{DatabaseBackend, Settings};
use crate::error::AppError;
use crate::session::{ScopedSession, ScopedSessionRegistry, Session};
use sqlx::any::{AnyConnectOptions, AnyPoolOptions};
use sqlx::AnyPool;
use sqlx::ConnectOptions;
use std::future::Future;
use std::str::FromStr;

/// Built once at startup from [`Settings`] and carried in the application state.
#[derive(Clone)]
pub struct DatabaseHelper {
    pool: AnyPool,
    backend: DatabaseBackend,
    scoped: ScopedSessionRegistry,
}

impl DatabaseHelper {
    /// Connect the pool. With `echo` off, per-statement logging is disabled entirely.
    pub async fn connect(settings: &Settings) -> Result<Self, AppError> {
        sqlx::any::install_default_drivers();
        let backend = settings.backend()?;
        let mut options = AnyConnectOptions::from_str(&settings.db_url)?;
        if !settings.db_echo {
            options = options.disable_statement_logging();
        }
        let pool = AnyPoolOptions::new()
            .max_connections(settings.db_max_connections)
            .connect_with(options)
            .await?;
        tracing::info!(?backend, max_connections = settings.db_max_connections, "database pool ready");
        Ok(Self::from_pool(pool, backend))
    }

    pub fn from_pool(pool: AnyPool, backend: DatabaseBackend) -> Self {
        DatabaseHelper {
            scoped: ScopedSessionRegistry::new(pool.clone()),
            pool,
            backend,
        }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.backend
    }

    /// A new session owned by the caller. Released when dropped.
    pub fn session(&self) -> Session {
        Session::new(self.pool.clone())
    }

    /// Session shared by the current unit of work (see [`DatabaseHelper::scope`]).
    pub fn scoped_session(&self) -> ScopedSession {
        self.scoped.current()
    }

    /// Run `fut` as one unit of work with its own scoped session.
    pub async fn scope<F: Future>(&self, fut: F) -> F::Output {
        self.scoped.scope(fut).await
    }

    pub fn scoped_sessions(&self) -> &ScopedSessionRegistry {
        &self.scoped
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
