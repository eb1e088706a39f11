//! Database sessions: a lazily begun transaction per unit of work, plus a registry that
//! hands out one shared session per request scope.

use sqlx::any::Any;
use sqlx::{AnyConnection, AnyPool};
use sqlx::Transaction;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

tokio::task_local! {
    static SESSION_SCOPE: u64;
}

/// Unit-of-work handle. Nothing is flushed or committed implicitly: statements run inside a
/// transaction opened on first use, and only [`Session::commit`] persists them. Dropping an
/// uncommitted session rolls its work back and returns the connection to the pool.
pub struct Session {
    pool: AnyPool,
    tx: Option<Transaction<'static, Any>>,
}

impl Session {
    pub fn new(pool: AnyPool) -> Self {
        Session { pool, tx: None }
    }

    /// Connection for the current transaction, beginning one if needed.
    pub async fn connection(&mut self) -> Result<&mut AnyConnection, sqlx::Error> {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => self.pool.begin().await?,
        };
        Ok(&mut **self.tx.insert(tx))
    }

    pub fn in_transaction(&self) -> bool {
        self.tx.is_some()
    }

    /// Persist pending work. A no-op when nothing has run yet.
    pub async fn commit(&mut self) -> Result<(), sqlx::Error> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
        }
        Ok(())
    }

    pub async fn rollback(&mut self) -> Result<(), sqlx::Error> {
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
        }
        Ok(())
    }

    /// Discard uncommitted work and release the connection. The session stays usable.
    pub async fn close(&mut self) -> Result<(), sqlx::Error> {
        self.rollback().await
    }
}

/// Session shared by everything running in one request scope.
pub type ScopedSession = Arc<tokio::sync::Mutex<Session>>;

/// Scoped sessions keyed by the unit of work currently executing.
#[derive(Clone)]
pub struct ScopedSessionRegistry {
    pool: AnyPool,
    sessions: Arc<Mutex<HashMap<u64, ScopedSession>>>,
    next_scope: Arc<AtomicU64>,
}

impl ScopedSessionRegistry {
    pub fn new(pool: AnyPool) -> Self {
        ScopedSessionRegistry {
            pool,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            next_scope: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Session for the current scope; the same one on every call within it.
    /// Outside [`ScopedSessionRegistry::scope`] each call gets a fresh, unshared session.
    pub fn current(&self) -> ScopedSession {
        match SESSION_SCOPE.try_with(|id| *id) {
            Ok(id) => self
                .lock()
                .entry(id)
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(Session::new(self.pool.clone()))))
                .clone(),
            Err(_) => {
                tracing::debug!("scoped session requested outside a scope; using an unshared session");
                Arc::new(tokio::sync::Mutex::new(Session::new(self.pool.clone())))
            }
        }
    }

    /// Run `fut` as one unit of work. Its scoped session is closed when `fut` completes and
    /// released even if `fut` panics or is dropped.
    pub async fn scope<F: Future>(&self, fut: F) -> F::Output {
        let id = self.next_scope.fetch_add(1, Ordering::Relaxed);
        let guard = ScopeGuard { registry: self, id };
        let out = SESSION_SCOPE.scope(id, fut).await;
        guard.close().await;
        out
    }

    /// Number of scopes currently holding a session.
    pub fn active_scopes(&self) -> usize {
        self.lock().len()
    }

    fn remove(&self, id: u64) -> Option<ScopedSession> {
        self.lock().remove(&id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, ScopedSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct ScopeGuard<'a> {
    registry: &'a ScopedSessionRegistry,
    id: u64,
}

impl ScopeGuard<'_> {
    async fn close(&self) {
        if let Some(session) = self.registry.remove(self.id) {
            if let Err(e) = session.lock().await.close().await {
                tracing::warn!(scope = self.id, error = %e, "closing scoped session failed");
            }
        }
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        // Dropping the session rolls back whatever is still open.
        self.registry.remove(self.id);
    }
}
