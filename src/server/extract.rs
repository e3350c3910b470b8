use std::ops::{Deref, DerefMut};

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection, SqlitePool};

use super::error::ApiError;

/// A pooled connection held for the lifetime of one request. Dropping it
/// hands the connection back to the pool, whichever way the handler exits.
pub struct DbConn(pub PoolConnection<Sqlite>);

impl<S> FromRequestParts<S> for DbConn
where
    SqlitePool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = SqlitePool::from_ref(state);
        Ok(DbConn(pool.acquire().await?))
    }
}

impl Deref for DbConn {
    type Target = SqliteConnection;

    fn deref(&self) -> &SqliteConnection {
        &self.0
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut SqliteConnection {
        &mut self.0
    }
}
