//! User use cases, including the user → posts association.

use super::post::{post_create, PostCreateReq, PostDto};
use crate::domain::{validate, PostField, UserField};
use crate::error::AppError;
use crate::infra::query;
use crate::infra::{get_connection, DbPool, Filter, Record};
use crate::pagination::{Cursor, Ordering, Paginator, SqlSource};
use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params, ErrorCode, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub encrypted_password: String,
    pub role: String,
    pub sign_in_count: i64,
    pub last_sign_in_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Record for UserDto {
    type Field = UserField;

    const TABLE: &'static str = "users";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(UserDto {
            id: row.get(0)?,
            email: row.get(1)?,
            encrypted_password: row.get(2)?,
            role: row.get(3)?,
            sign_in_count: row.get(4)?,
            last_sign_in_at: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Deserialize)]
pub struct UserCreateReq {
    pub email: String,
    pub encrypted_password: Option<String>,
    pub role: Option<String>,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdateReq {
    pub id: i64,
    pub email: Option<String>,
    pub encrypted_password: Option<String>,
    pub role: Option<String>,
    pub sign_in_count: Option<i64>,
    pub last_sign_in_at: Option<String>,
}

pub type UserPage<'a> = Paginator<SqlSource<'a, UserDto>>;

fn email_taken(e: rusqlite::Error, email: &str) -> AppError {
    match e {
        rusqlite::Error::SqliteFailure(ref f, _) if f.code == ErrorCode::ConstraintViolation => {
            AppError::Conflict(format!("email already registered: {}", email))
        }
        other => other.into(),
    }
}

pub fn user_create(pool: &DbPool, req: UserCreateReq) -> Result<UserDto, AppError> {
    let email = req.email.trim();
    validate::user_email(email)?;
    let encrypted_password = req.encrypted_password.unwrap_or_default();
    let role = req.role.unwrap_or_default();

    let now = Utc::now().to_rfc3339();
    let id = {
        let conn = get_connection(pool);
        conn.execute(
            "INSERT INTO users (email, encrypted_password, role, sign_in_count, created_at, updated_at) VALUES (?1, ?2, ?3, 0, ?4, ?4)",
            params![email, &encrypted_password, &role, &now],
        )
        .map_err(|e| email_taken(e, email))?;
        conn.last_insert_rowid()
    };
    log::info!("Created user {}", id);
    user_find(pool, id)
}

pub fn user_update(pool: &DbPool, req: UserUpdateReq) -> Result<UserDto, AppError> {
    let current = user_find(pool, req.id)?;

    let email = req
        .email
        .as_deref()
        .map(str::trim)
        .unwrap_or(current.email.as_str())
        .to_string();
    validate::user_email(&email)?;
    let encrypted_password = req.encrypted_password.unwrap_or(current.encrypted_password);
    let role = req.role.unwrap_or(current.role);
    let sign_in_count = req.sign_in_count.unwrap_or(current.sign_in_count);
    if sign_in_count < 0 {
        return Err(AppError::Validation("sign_in_count can't be negative".into()));
    }
    let last_sign_in_at = req.last_sign_in_at.or(current.last_sign_in_at);

    let now = Utc::now().to_rfc3339();
    {
        let conn = get_connection(pool);
        conn.execute(
            "UPDATE users SET email = ?1, encrypted_password = ?2, role = ?3, sign_in_count = ?4, last_sign_in_at = ?5, updated_at = ?6 WHERE id = ?7",
            params![&email, &encrypted_password, &role, sign_in_count, &last_sign_in_at, &now, req.id],
        )
        .map_err(|e| email_taken(e, &email))?;
    } // release conn before calling user_find to avoid deadlock

    user_find(pool, req.id)
}

pub fn user_find(pool: &DbPool, id: i64) -> Result<UserDto, AppError> {
    query::find::<UserDto>(pool, id)
}

pub fn user_first(pool: &DbPool) -> Result<UserDto, AppError> {
    query::take_one::<UserDto>(pool, false)
}

pub fn user_first_n(pool: &DbPool, n: u32) -> Result<Vec<UserDto>, AppError> {
    query::take::<UserDto>(pool, n, false)
}

pub fn user_last(pool: &DbPool) -> Result<UserDto, AppError> {
    query::take_one::<UserDto>(pool, true)
}

pub fn user_last_n(pool: &DbPool, n: u32) -> Result<Vec<UserDto>, AppError> {
    query::take::<UserDto>(pool, n, true)
}

pub fn user_find_many(pool: &DbPool, ids: &[i64]) -> Result<Vec<UserDto>, AppError> {
    query::find_many::<UserDto>(pool, ids)
}

pub fn user_find_by(
    pool: &DbPool,
    field: UserField,
    value: impl Into<Value>,
) -> Result<UserDto, AppError> {
    query::find_by::<UserDto>(pool, field, value.into())
}

pub fn user_find_all_by(
    pool: &DbPool,
    field: UserField,
    value: impl Into<Value>,
) -> Result<Vec<UserDto>, AppError> {
    query::find_where::<UserDto>(pool, &Filter::eq(field, value))
}

pub fn user_all(pool: &DbPool) -> Result<Vec<UserDto>, AppError> {
    query::find_where::<UserDto>(pool, &Filter::none())
}

pub fn user_find_where(pool: &DbPool, filter: &Filter) -> Result<Vec<UserDto>, AppError> {
    query::find_where::<UserDto>(pool, filter)
}

pub fn user_count(pool: &DbPool) -> Result<i64, AppError> {
    query::count_where::<UserDto>(pool, &Filter::none())
}

pub fn user_count_where(pool: &DbPool, filter: &Filter) -> Result<i64, AppError> {
    query::count_where::<UserDto>(pool, filter)
}

pub fn user_ids(pool: &DbPool) -> Result<Vec<i64>, AppError> {
    query::pluck_int::<UserDto>(pool, UserField::Id, &Filter::none())
}

pub fn user_ids_where(pool: &DbPool, filter: &Filter) -> Result<Vec<i64>, AppError> {
    query::pluck_int::<UserDto>(pool, UserField::Id, filter)
}

pub fn user_int_col(
    pool: &DbPool,
    field: UserField,
    filter: &Filter,
) -> Result<Vec<i64>, AppError> {
    query::pluck_int::<UserDto>(pool, field, filter)
}

pub fn user_str_col(
    pool: &DbPool,
    field: UserField,
    filter: &Filter,
) -> Result<Vec<Option<String>>, AppError> {
    query::pluck_str::<UserDto>(pool, field, filter)
}

/// Removes the user; their posts go with them.
pub fn user_destroy(pool: &DbPool, id: i64) -> Result<(), AppError> {
    query::destroy::<UserDto>(pool, id)?;
    log::info!("Destroyed user {}", id);
    Ok(())
}

pub fn user_destroy_many(pool: &DbPool, ids: &[i64]) -> Result<usize, AppError> {
    query::destroy_many::<UserDto>(pool, ids)
}

pub fn user_destroy_where(pool: &DbPool, filter: &Filter) -> Result<usize, AppError> {
    query::destroy_where::<UserDto>(pool, filter)
}

pub fn user_posts(pool: &DbPool, user_id: i64) -> Result<Vec<PostDto>, AppError> {
    user_find(pool, user_id)?;
    query::find_where::<PostDto>(pool, &Filter::eq(PostField::UserId, user_id))
}

pub fn user_create_post(
    pool: &DbPool,
    user_id: i64,
    req: PostCreateReq,
) -> Result<PostDto, AppError> {
    user_find(pool, user_id)?;
    post_create(
        pool,
        PostCreateReq {
            user_id: Some(user_id),
            ..req
        },
    )
}

/// Author of a post.
pub fn post_user(pool: &DbPool, post_id: i64) -> Result<UserDto, AppError> {
    let post = query::find::<PostDto>(pool, post_id)?;
    let user_id = post
        .user_id
        .ok_or_else(|| AppError::NotFound(format!("user of post {}", post_id)))?;
    user_find(pool, user_id)
}

pub fn user_page<'a>(
    pool: &'a DbPool,
    filter: Filter,
    order: Ordering,
    per_page: u32,
) -> UserPage<'a> {
    Paginator::new(SqlSource::new(pool), filter, order, per_page)
}

pub fn user_page_resume<'a>(
    pool: &'a DbPool,
    filter: Filter,
    order: Ordering,
    per_page: u32,
    cursor: Cursor,
) -> UserPage<'a> {
    Paginator::resume(SqlSource::new(pool), filter, order, per_page, cursor)
}
