//! Statement parameters and binding onto sqlx `Any` queries.

use sqlx::any::{Any, AnyArguments};
use sqlx::query::{Query, QueryAs};

/// A value that can be bound to a query on either backend.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Int(i64),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        BindValue::Int(n)
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

/// Bind `params` in order, matching `$1..$n` in the statement.
pub fn bind_query<'q>(
    mut query: Query<'q, Any, AnyArguments<'q>>,
    params: &[BindValue],
) -> Query<'q, Any, AnyArguments<'q>> {
    for p in params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}

/// Same as [`bind_query`] for typed row queries.
pub fn bind_query_as<'q, O>(
    mut query: QueryAs<'q, Any, O, AnyArguments<'q>>,
    params: &[BindValue],
) -> QueryAs<'q, Any, O, AnyArguments<'q>> {
    for p in params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}
