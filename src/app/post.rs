//! Post use cases.

use crate::domain::{validate, PostField};
use crate::error::AppError;
use crate::infra::query;
use crate::infra::{get_connection, DbPool, Filter, Record};
use crate::pagination::{Cursor, Ordering, Paginator, SqlSource};
use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Record for PostDto {
    type Field = PostField;

    const TABLE: &'static str = "posts";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(PostDto {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            user_id: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Deserialize)]
pub struct PostCreateReq {
    pub title: String,
    pub content: String,
    pub user_id: Option<i64>,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct PostUpdateReq {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<i64>,
}

pub type PostPage<'a> = Paginator<SqlSource<'a, PostDto>>;

fn validate_post(title: &str, content: &str) -> Result<(), AppError> {
    validate::post_title(title)?;
    validate::post_content(content)
}

fn require_user(pool: &DbPool, user_id: Option<i64>) -> Result<(), AppError> {
    if let Some(uid) = user_id {
        let conn = get_connection(pool);
        let exists = conn
            .query_row("SELECT 1 FROM users WHERE id = ?1", [uid], |_| Ok(()))
            .optional()?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("user {}", uid)));
        }
    }
    Ok(())
}

pub fn post_create(pool: &DbPool, req: PostCreateReq) -> Result<PostDto, AppError> {
    let title = req.title.trim();
    let content = req.content.trim();
    validate_post(title, content)?;
    require_user(pool, req.user_id)?;

    let now = Utc::now().to_rfc3339();
    let id = {
        let conn = get_connection(pool);
        conn.execute(
            "INSERT INTO posts (title, content, user_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
            params![title, content, req.user_id, &now],
        )?;
        conn.last_insert_rowid()
    };
    log::info!("Created post {}", id);
    post_find(pool, id)
}

pub fn post_update(pool: &DbPool, req: PostUpdateReq) -> Result<PostDto, AppError> {
    let current = post_find(pool, req.id)?;

    let title = req
        .title
        .as_deref()
        .map(str::trim)
        .unwrap_or(current.title.as_str())
        .to_string();
    let content = req
        .content
        .as_deref()
        .map(str::trim)
        .unwrap_or(current.content.as_str())
        .to_string();
    let user_id = req.user_id.or(current.user_id);
    validate_post(&title, &content)?;
    if req.user_id.is_some() {
        require_user(pool, user_id)?;
    }

    let now = Utc::now().to_rfc3339();
    {
        let conn = get_connection(pool);
        conn.execute(
            "UPDATE posts SET title = ?1, content = ?2, user_id = ?3, updated_at = ?4 WHERE id = ?5",
            params![&title, &content, user_id, &now, req.id],
        )?;
    } // release conn before calling post_find to avoid deadlock

    post_find(pool, req.id)
}

pub fn post_find(pool: &DbPool, id: i64) -> Result<PostDto, AppError> {
    query::find::<PostDto>(pool, id)
}

pub fn post_first(pool: &DbPool) -> Result<PostDto, AppError> {
    query::take_one::<PostDto>(pool, false)
}

pub fn post_first_n(pool: &DbPool, n: u32) -> Result<Vec<PostDto>, AppError> {
    query::take::<PostDto>(pool, n, false)
}

pub fn post_last(pool: &DbPool) -> Result<PostDto, AppError> {
    query::take_one::<PostDto>(pool, true)
}

pub fn post_last_n(pool: &DbPool, n: u32) -> Result<Vec<PostDto>, AppError> {
    query::take::<PostDto>(pool, n, true)
}

pub fn post_find_many(pool: &DbPool, ids: &[i64]) -> Result<Vec<PostDto>, AppError> {
    query::find_many::<PostDto>(pool, ids)
}

pub fn post_find_by(
    pool: &DbPool,
    field: PostField,
    value: impl Into<Value>,
) -> Result<PostDto, AppError> {
    query::find_by::<PostDto>(pool, field, value.into())
}

pub fn post_find_all_by(
    pool: &DbPool,
    field: PostField,
    value: impl Into<Value>,
) -> Result<Vec<PostDto>, AppError> {
    query::find_where::<PostDto>(pool, &Filter::eq(field, value))
}

pub fn post_all(pool: &DbPool) -> Result<Vec<PostDto>, AppError> {
    query::find_where::<PostDto>(pool, &Filter::none())
}

pub fn post_find_where(pool: &DbPool, filter: &Filter) -> Result<Vec<PostDto>, AppError> {
    query::find_where::<PostDto>(pool, filter)
}

pub fn post_count(pool: &DbPool) -> Result<i64, AppError> {
    query::count_where::<PostDto>(pool, &Filter::none())
}

pub fn post_count_where(pool: &DbPool, filter: &Filter) -> Result<i64, AppError> {
    query::count_where::<PostDto>(pool, filter)
}

pub fn post_ids(pool: &DbPool) -> Result<Vec<i64>, AppError> {
    query::pluck_int::<PostDto>(pool, PostField::Id, &Filter::none())
}

pub fn post_ids_where(pool: &DbPool, filter: &Filter) -> Result<Vec<i64>, AppError> {
    query::pluck_int::<PostDto>(pool, PostField::Id, filter)
}

pub fn post_int_col(
    pool: &DbPool,
    field: PostField,
    filter: &Filter,
) -> Result<Vec<i64>, AppError> {
    query::pluck_int::<PostDto>(pool, field, filter)
}

pub fn post_str_col(
    pool: &DbPool,
    field: PostField,
    filter: &Filter,
) -> Result<Vec<Option<String>>, AppError> {
    query::pluck_str::<PostDto>(pool, field, filter)
}

pub fn post_destroy(pool: &DbPool, id: i64) -> Result<(), AppError> {
    query::destroy::<PostDto>(pool, id)?;
    log::info!("Destroyed post {}", id);
    Ok(())
}

pub fn post_destroy_many(pool: &DbPool, ids: &[i64]) -> Result<usize, AppError> {
    query::destroy_many::<PostDto>(pool, ids)
}

pub fn post_destroy_where(pool: &DbPool, filter: &Filter) -> Result<usize, AppError> {
    query::destroy_where::<PostDto>(pool, filter)
}

/// Keyset paginator over posts.
pub fn post_page<'a>(
    pool: &'a DbPool,
    filter: Filter,
    order: Ordering,
    per_page: u32,
) -> PostPage<'a> {
    Paginator::new(SqlSource::new(pool), filter, order, per_page)
}

pub fn post_page_resume<'a>(
    pool: &'a DbPool,
    filter: Filter,
    order: Ordering,
    per_page: u32,
    cursor: Cursor,
) -> PostPage<'a> {
    Paginator::resume(SqlSource::new(pool), filter, order, per_page, cursor)
}
