//! Parameter-bound query helpers shared by every entity.
//!
//! Table and column names come from [`Record`] and [`Field`]; caller input
//! only ever travels as bound values or as an opaque [`Filter`] clause.

use crate::domain::{Field, FieldKind};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::types::{ToSql, Value};
use rusqlite::{Connection, Row};

/// Caller-supplied restriction: clause text with `?` placeholders and the
/// positional values bound to them. Never parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clause: String,
    params: Vec<Value>,
}

impl Filter {
    pub fn new(clause: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            clause: clause.into(),
            params,
        }
    }

    /// Matches every row.
    pub fn none() -> Self {
        Self::default()
    }

    /// `field = ?` on an allow-listed column.
    pub fn eq<F: Field>(field: F, value: impl Into<Value>) -> Self {
        Self::new(format!("{} = ?", field.as_str()), vec![value.into()])
    }

    pub fn is_empty(&self) -> bool {
        self.clause.trim().is_empty()
    }

    pub fn clause(&self) -> &str {
        self.clause.trim()
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    fn where_sql(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clause())
        }
    }
}

/// A row type mapped onto one table.
pub trait Record: Sized {
    type Field: Field;

    const TABLE: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn id(&self) -> i64;

    fn columns() -> String {
        Self::Field::all()
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn is_column(name: &str) -> bool {
        Self::Field::from_str(name).is_some()
    }
}

pub(crate) fn to_sql_refs(values: &[Value]) -> Vec<&dyn ToSql> {
    values.iter().map(|v| v as &dyn ToSql).collect()
}

/// `SELECT <columns> FROM <table> [WHERE <where>] <tail>`
pub(crate) fn select<T: Record>(
    conn: &Connection,
    where_clause: &str,
    params: &[Value],
    tail: &str,
) -> rusqlite::Result<Vec<T>> {
    let mut sql = format!("SELECT {} FROM {}", T::columns(), T::TABLE);
    if !where_clause.trim().is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(where_clause.trim());
    }
    if !tail.is_empty() {
        sql.push(' ');
        sql.push_str(tail);
    }
    log::debug!("{} {:?}", sql, params);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(to_sql_refs(params).as_slice(), T::from_row)?;
    rows.collect()
}

pub(crate) fn count<T: Record>(conn: &Connection, filter: &Filter) -> rusqlite::Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}{}", T::TABLE, filter.where_sql());
    log::debug!("{} {:?}", sql, filter.params());
    conn.query_row(&sql, to_sql_refs(filter.params()).as_slice(), |r| r.get(0))
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

fn require_id(id: i64) -> Result<(), AppError> {
    if id == 0 {
        return Err(AppError::Validation("invalid id: it can't be zero".into()));
    }
    Ok(())
}

fn require_ids(ids: &[i64]) -> Result<(), AppError> {
    if ids.is_empty() {
        return Err(AppError::Validation("at least one id is needed".into()));
    }
    Ok(())
}

pub(crate) fn find<T: Record>(pool: &DbPool, id: i64) -> Result<T, AppError> {
    require_id(id)?;
    let conn = get_connection(pool);
    select::<T>(&conn, "id = ?", &[Value::Integer(id)], "LIMIT 1")?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("{} {}", T::TABLE, id)))
}

/// First `n` rows by id; `descending` reads from the other end.
pub(crate) fn take<T: Record>(pool: &DbPool, n: u32, descending: bool) -> Result<Vec<T>, AppError> {
    let dir = if descending { "DESC" } else { "ASC" };
    let conn = get_connection(pool);
    Ok(select::<T>(
        &conn,
        "",
        &[Value::Integer(n as i64)],
        &format!("ORDER BY id {} LIMIT ?", dir),
    )?)
}

pub(crate) fn take_one<T: Record>(pool: &DbPool, descending: bool) -> Result<T, AppError> {
    take::<T>(pool, 1, descending)?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("{} is empty", T::TABLE)))
}

pub(crate) fn find_many<T: Record>(pool: &DbPool, ids: &[i64]) -> Result<Vec<T>, AppError> {
    require_ids(ids)?;
    let params: Vec<Value> = ids.iter().map(|id| Value::Integer(*id)).collect();
    let conn = get_connection(pool);
    Ok(select::<T>(
        &conn,
        &format!("id IN ({})", placeholders(ids.len())),
        &params,
        "ORDER BY id ASC",
    )?)
}

pub(crate) fn find_where<T: Record>(pool: &DbPool, filter: &Filter) -> Result<Vec<T>, AppError> {
    let conn = get_connection(pool);
    Ok(select::<T>(
        &conn,
        filter.clause(),
        filter.params(),
        "ORDER BY id ASC",
    )?)
}

pub(crate) fn find_by<T: Record>(
    pool: &DbPool,
    field: T::Field,
    value: Value,
) -> Result<T, AppError> {
    let filter = Filter::eq(field, value);
    let conn = get_connection(pool);
    select::<T>(&conn, filter.clause(), filter.params(), "ORDER BY id ASC LIMIT 1")?
        .into_iter()
        .next()
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "{} with {} = {:?}",
                T::TABLE,
                field.as_str(),
                filter.params()[0]
            ))
        })
}

pub(crate) fn count_where<T: Record>(pool: &DbPool, filter: &Filter) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    Ok(count::<T>(&conn, filter)?)
}

fn pluck<T: Record, V: rusqlite::types::FromSql>(
    pool: &DbPool,
    field: T::Field,
    filter: &Filter,
) -> Result<Vec<V>, AppError> {
    let sql = format!(
        "SELECT {} FROM {}{} ORDER BY id ASC",
        field.as_str(),
        T::TABLE,
        filter.where_sql()
    );
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(to_sql_refs(filter.params()).as_slice(), |r| r.get(0))?;
    Ok(rows.collect::<Result<Vec<V>, _>>()?)
}

pub(crate) fn pluck_int<T: Record>(
    pool: &DbPool,
    field: T::Field,
    filter: &Filter,
) -> Result<Vec<i64>, AppError> {
    if field.kind() != FieldKind::Integer {
        return Err(AppError::Validation(format!("{} is not an integer column", field.as_str())));
    }
    pluck::<T, i64>(pool, field, filter)
}

pub(crate) fn pluck_str<T: Record>(
    pool: &DbPool,
    field: T::Field,
    filter: &Filter,
) -> Result<Vec<Option<String>>, AppError> {
    if field.kind() != FieldKind::Text {
        return Err(AppError::Validation(format!("{} is not a text column", field.as_str())));
    }
    pluck::<T, Option<String>>(pool, field, filter)
}

pub(crate) fn destroy<T: Record>(pool: &DbPool, id: i64) -> Result<(), AppError> {
    require_id(id)?;
    let conn = get_connection(pool);
    let n = conn.execute(&format!("DELETE FROM {} WHERE id = ?1", T::TABLE), [id])?;
    if n == 0 {
        return Err(AppError::NotFound(format!("{} {}", T::TABLE, id)));
    }
    Ok(())
}

pub(crate) fn destroy_many<T: Record>(pool: &DbPool, ids: &[i64]) -> Result<usize, AppError> {
    require_ids(ids)?;
    let params: Vec<Value> = ids.iter().map(|id| Value::Integer(*id)).collect();
    let sql = format!("DELETE FROM {} WHERE id IN ({})", T::TABLE, placeholders(ids.len()));
    let conn = get_connection(pool);
    Ok(conn.execute(&sql, to_sql_refs(&params).as_slice())?)
}

pub(crate) fn destroy_where<T: Record>(pool: &DbPool, filter: &Filter) -> Result<usize, AppError> {
    if filter.is_empty() {
        return Err(AppError::Validation("no WHERE conditions provided".into()));
    }
    let sql = format!("DELETE FROM {}{}", T::TABLE, filter.where_sql());
    let conn = get_connection(pool);
    Ok(conn.execute(&sql, to_sql_refs(filter.params()).as_slice())?)
}
