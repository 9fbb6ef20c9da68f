//! Storage seam for the paginator.

use crate::infra::query::{self, Filter, Record};
use crate::infra::{get_connection, DbPool};
use rusqlite::types::Value;
use std::marker::PhantomData;

/// One bounded fetch: filter plus key range, ordering and limit.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    /// Body of the WHERE clause, empty for "all rows".
    pub where_clause: String,
    pub params: Vec<Value>,
    /// Body of the ORDER BY clause.
    pub order_by: String,
    pub limit: u32,
}

/// What the paginator needs from storage.
pub trait PageSource {
    type Record;

    /// Unique, integer-valued key column.
    const KEY: &'static str;

    fn key_of(record: &Self::Record) -> i64;

    fn is_column(name: &str) -> bool;

    fn count(&self, filter: &Filter) -> rusqlite::Result<i64>;

    fn fetch(&self, query: &RangeQuery) -> rusqlite::Result<Vec<Self::Record>>;
}

/// [`PageSource`] over one SQLite table.
pub struct SqlSource<'a, T> {
    pool: &'a DbPool,
    _record: PhantomData<T>,
}

impl<'a, T: Record> SqlSource<'a, T> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<T: Record> PageSource for SqlSource<'_, T> {
    type Record = T;

    const KEY: &'static str = "id";

    fn key_of(record: &T) -> i64 {
        record.id()
    }

    fn is_column(name: &str) -> bool {
        T::is_column(name)
    }

    fn count(&self, filter: &Filter) -> rusqlite::Result<i64> {
        let conn = get_connection(self.pool);
        query::count::<T>(&conn, filter)
    }

    fn fetch(&self, q: &RangeQuery) -> rusqlite::Result<Vec<T>> {
        let mut params = q.params.clone();
        params.push(Value::Integer(q.limit as i64));
        let conn = get_connection(self.pool);
        query::select::<T>(
            &conn,
            &q.where_clause,
            &params,
            &format!("ORDER BY {} LIMIT ?", q.order_by),
        )
    }
}
