//! Post index (keyset paged) and show handlers.

use super::AppState;
use crate::app::{post_find, post_page_resume, PostDto};
use crate::domain::{Field, PostField};
use crate::error::AppError;
use crate::infra::Filter;
use crate::pagination::{Cursor, Direction, Ordering};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Query string of `GET /posts`. The cursor fields echo back the `page`
/// object of the previous response.
#[derive(Debug, Default, Deserialize)]
pub struct PostIndexParams {
    pub direction: Option<String>,
    pub page: Option<usize>,
    pub first_id: Option<i64>,
    pub last_id: Option<i64>,
    pub total_items: Option<i64>,
    pub total_pages: Option<usize>,
    pub per_page: Option<u32>,
    pub order: Option<String>,
    pub user_id: Option<i64>,
}

impl PostIndexParams {
    fn cursor(&self) -> Cursor {
        Cursor {
            page: self.page.unwrap_or(0),
            first_id: self.first_id,
            last_id: self.last_id,
            total_items: self.total_items.unwrap_or(0),
            total_pages: self.total_pages.unwrap_or(0),
        }
    }

    fn filter(&self) -> Filter {
        match self.user_id {
            Some(uid) => Filter::eq(PostField::UserId, uid),
            None => Filter::none(),
        }
    }

    fn ordering(&self) -> Ordering {
        Ordering::new().by(
            PostField::Id.as_str(),
            self.order.as_deref().unwrap_or("desc"),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct PostPageBody {
    pub data: Vec<PostDto>,
    pub page: Cursor,
}

#[derive(Debug, Serialize)]
pub struct PostBody {
    pub data: PostDto,
}

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PostIndexParams>,
) -> Result<Json<PostPageBody>, AppError> {
    let direction = params.direction.as_deref().unwrap_or(Direction::Current.as_str());
    // Reject before touching storage.
    Direction::from_str(direction)
        .ok_or_else(|| AppError::InvalidDirection(direction.to_string()))?;

    let body = state
        .blocking(move |s| {
            let per_page = params.per_page.unwrap_or(s.per_page);
            let mut page = post_page_resume(
                &s.pool,
                params.filter(),
                params.ordering(),
                per_page,
                params.cursor(),
            );
            let data = page.get_page(params.direction.as_deref().unwrap_or("current"))?;
            Ok(PostPageBody {
                data,
                page: page.cursor(),
            })
        })
        .await?;
    Ok(Json(body))
}

/// A non-numeric id is looked up as id 0 and rejected there.
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PostBody>, AppError> {
    let id = raw_id.parse::<i64>().unwrap_or(0);
    let data = state.blocking(move |s| post_find(&s.pool, id)).await?;
    Ok(Json(PostBody { data }))
}
