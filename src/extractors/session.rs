//! Session extractors and the middleware that gives each request its own session scope.
//!
//! Every `/products` route (and [`ProductById`](super::ProductById)) uses [`ScopedDbSession`], so
//! the lookup and the handler body share one transaction. [`DbSession`] is for handlers that want
//! a private session, such as the readiness probe.

use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use std::ops::Deref;

/// Per-call session, released when the handler returns.
pub struct DbSession(pub crate::session::Session);

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(DbSession(state.db.session()))
    }
}

/// The request's scoped session. Lock it to run queries.
#[derive(Clone)]
pub struct ScopedDbSession(pub crate::session::ScopedSession);

impl Deref for ScopedDbSession {
    type Target = crate::session::ScopedSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for ScopedDbSession {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(ScopedDbSession(state.db.scoped_session()))
    }
}

/// Run the rest of the stack as one unit of work; its scoped session is closed afterwards.
pub async fn session_scope(State(state): State<AppState>, req: Request, next: Next) -> Response {
    state.db.scope(next.run(req)).await
}
