//! Generic CRUD execution against a session.

use crate::error::AppError;
use crate::model::{Changeset, Model};
use crate::session::Session;
use crate::sql::{bind_query, bind_query_as, delete, insert, select_all, select_by_id, update, QueryBuf};

pub struct CrudService;

impl CrudService {
    /// All rows, primary-key order.
    pub async fn list<M: Model>(session: &mut Session) -> Result<Vec<M>, AppError> {
        let q = select_all(&M::TABLE);
        Self::fetch_all(session, &q).await
    }

    /// One row by primary key, or None.
    pub async fn get<M: Model>(session: &mut Session, id: i64) -> Result<Option<M>, AppError> {
        let q = select_by_id(&M::TABLE, id);
        Self::fetch_optional(session, &q).await
    }

    /// Insert one row and commit. Returns the stored row with its assigned id.
    pub async fn create<M: Model>(session: &mut Session, payload: &impl Changeset) -> Result<M, AppError> {
        let q = insert(&M::TABLE, &payload.changes());
        let row = Self::fetch_optional(session, &q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        session.commit().await?;
        Ok(row)
    }

    /// Write the payload's columns onto `record` and commit. Full or partial depends on which
    /// columns the payload carries; with none, `record` is returned unchanged.
    pub async fn update<M: Model>(
        session: &mut Session,
        record: M,
        payload: &impl Changeset,
    ) -> Result<M, AppError> {
        let changes = payload.changes();
        if changes.is_empty() {
            return Ok(record);
        }
        let id = record.id();
        let q = update(&M::TABLE, id, &changes);
        let row = Self::fetch_optional(session, &q)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("record {} in {} not found", id, M::TABLE.name)))?;
        session.commit().await?;
        Ok(row)
    }

    /// Delete `record` and commit.
    pub async fn delete<M: Model>(session: &mut Session, record: &M) -> Result<(), AppError> {
        let q = delete(&M::TABLE, record.id());
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        bind_query(sqlx::query(&q.sql), &q.params)
            .execute(session.connection().await?)
            .await?;
        session.commit().await?;
        Ok(())
    }

    async fn fetch_all<M: Model>(session: &mut Session, q: &QueryBuf) -> Result<Vec<M>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_query_as(sqlx::query_as::<_, M>(&q.sql), &q.params)
            .fetch_all(session.connection().await?)
            .await?;
        Ok(rows)
    }

    async fn fetch_optional<M: Model>(session: &mut Session, q: &QueryBuf) -> Result<Option<M>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_query_as(sqlx::query_as::<_, M>(&q.sql), &q.params)
            .fetch_optional(session.connection().await?)
            .await?;
        Ok(row)
    }
}
