//! Keyset (cursor) pagination.
//!
//! A [`Paginator`] walks a filtered, ordered row set one page at a time
//! using the unique key of the first and last row it has seen as the
//! boundary for the next query, instead of an offset. Rows inserted or
//! deleted outside the captured range do not shift the page.
//!
//! Each call issues one count query and one range query. Nothing is
//! cached across calls, so the total page count follows concurrent
//! writers.

mod order;
mod source;

pub use order::{Ordering, SortDir};
pub use source::{PageSource, RangeQuery, SqlSource};

use crate::error::AppError;
use crate::infra::Filter;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Current,
    Next,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Current => "current",
            Self::Next => "next",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "previous" => Some(Self::Previous),
            "current" => Some(Self::Current),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Snapshot of a paginator's position, handed to clients and back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub page: usize,
    pub first_id: Option<i64>,
    pub last_id: Option<i64>,
    pub total_items: i64,
    pub total_pages: usize,
}

/// `ceil(total_items / per_page)`; zero rows means zero pages.
pub fn page_count(total_items: i64, per_page: u32) -> usize {
    let per_page = if per_page == 0 { DEFAULT_PER_PAGE } else { per_page };
    if total_items <= 0 {
        return 0;
    }
    (total_items as f64 / per_page as f64).ceil() as usize
}

/// Owned by a single caller; not meant to be shared between threads.
pub struct Paginator<S> {
    source: S,
    filter: Filter,
    order: Ordering,
    per_page: u32,
    page: usize,
    first_key: Option<i64>,
    last_key: Option<i64>,
    total_items: i64,
    total_pages: usize,
}

impl<S: PageSource> Paginator<S> {
    /// `per_page` of 0 falls back to [`DEFAULT_PER_PAGE`].
    pub fn new(source: S, filter: Filter, order: Ordering, per_page: u32) -> Self {
        Self {
            source,
            filter,
            order,
            per_page: if per_page == 0 { DEFAULT_PER_PAGE } else { per_page },
            page: 0,
            first_key: None,
            last_key: None,
            total_items: 0,
            total_pages: 0,
        }
    }

    /// Continue from a previously issued [`Cursor`]. A cursor without a
    /// complete boundary, or with a page index outside its own page count,
    /// starts over from the first page.
    pub fn resume(
        source: S,
        filter: Filter,
        order: Ordering,
        per_page: u32,
        cursor: Cursor,
    ) -> Self {
        let mut p = Self::new(source, filter, order, per_page);
        if let (Some(first), Some(last)) = (cursor.first_id, cursor.last_id) {
            if cursor.page >= cursor.total_pages {
                log::debug!(
                    "discarding cursor: page {} of {}",
                    cursor.page,
                    cursor.total_pages
                );
                return p;
            }
            p.page = cursor.page;
            p.first_key = Some(first);
            p.last_key = Some(last);
            p.total_items = cursor.total_items;
            p.total_pages = cursor.total_pages;
        }
        p
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn first_key(&self) -> Option<i64> {
        self.first_key
    }

    pub fn last_key(&self) -> Option<i64> {
        self.last_key
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            page: self.page,
            first_id: self.first_key,
            last_id: self.last_key,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    /// Dispatch on a direction name: `previous`, `current` or `next`.
    pub fn get_page(&mut self, direction: &str) -> Result<Vec<S::Record>, AppError> {
        let direction = Direction::from_str(direction)
            .ok_or_else(|| AppError::InvalidDirection(direction.to_string()))?;
        self.fetch(direction)
    }

    pub fn fetch(&mut self, direction: Direction) -> Result<Vec<S::Record>, AppError> {
        match direction {
            Direction::Previous => self.previous(),
            Direction::Current => self.current(),
            Direction::Next => self.next(),
        }
    }

    /// Reload the page between the current boundary keys, or the first
    /// page if nothing has been fetched yet. The page index is unchanged.
    pub fn current(&mut self) -> Result<Vec<S::Record>, AppError> {
        self.run(Direction::Current)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Vec<S::Record>, AppError> {
        if self.total_pages == 0 || self.page >= self.total_pages - 1 {
            log::debug!("no next page: page {} of {}", self.page, self.total_pages);
            return Err(AppError::NoNextPage);
        }
        self.run(Direction::Next)
    }

    pub fn previous(&mut self) -> Result<Vec<S::Record>, AppError> {
        if self.page == 0 {
            log::debug!("no previous page");
            return Err(AppError::NoPreviousPage);
        }
        self.run(Direction::Previous)
    }

    fn run(&mut self, direction: Direction) -> Result<Vec<S::Record>, AppError> {
        let dir = self.key_direction()?;
        self.refresh_count()?;

        let query = self.build_query(direction, dir);
        log::debug!(
            "{} page: WHERE {} ORDER BY {} LIMIT {} {:?}",
            direction.as_str(),
            query.where_clause,
            query.order_by,
            query.limit,
            query.params
        );
        let mut rows = self.source.fetch(&query).map_err(|e| {
            log::warn!("range query failed: {}", e);
            AppError::RangeQueryFailed(e)
        })?;
        // Fetched walking backwards from the boundary.
        if direction == Direction::Previous {
            rows.reverse();
        }

        if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
            self.first_key = Some(S::key_of(first));
            self.last_key = Some(S::key_of(last));
        }
        self.step_page(direction);
        Ok(rows)
    }

    /// Move the page index and keep it inside the freshly counted pages.
    fn step_page(&mut self, direction: Direction) {
        let page = match direction {
            Direction::Previous => self.page.saturating_sub(1),
            Direction::Current => self.page,
            Direction::Next => self.page.saturating_add(1),
        };
        self.page = page.min(self.total_pages.saturating_sub(1));
    }

    /// Validate the ordering and return the key column's direction.
    fn key_direction(&self) -> Result<SortDir, AppError> {
        let dir = self
            .order
            .direction_of(S::KEY)
            .ok_or_else(|| AppError::MissingOrderKey(S::KEY.to_string()))?;
        if let Some(col) = self.order.columns().find(|c| !S::is_column(c)) {
            return Err(AppError::UnknownColumn(col.to_string()));
        }
        Ok(dir)
    }

    fn refresh_count(&mut self) -> Result<(), AppError> {
        let total = self.source.count(&self.filter).map_err(|e| {
            log::warn!("count query failed: {}", e);
            AppError::CountQueryFailed(e)
        })?;
        self.total_items = total;
        self.total_pages = page_count(total, self.per_page);
        Ok(())
    }

    /// Key predicate for `direction`; `None` when there is no boundary yet.
    fn key_range(&self, direction: Direction, dir: SortDir) -> Option<(String, Vec<Value>)> {
        let key = S::KEY;
        match direction {
            Direction::Previous => self.first_key.map(|first| {
                let op = match dir {
                    SortDir::Desc => ">",
                    SortDir::Asc => "<",
                };
                (format!("{} {} ?", key, op), vec![Value::Integer(first)])
            }),
            Direction::Current => match (self.first_key, self.last_key) {
                (Some(first), Some(last)) => {
                    let (from, to) = match dir {
                        SortDir::Desc => ("<=", ">="),
                        SortDir::Asc => (">=", "<="),
                    };
                    Some((
                        format!("{} {} ? AND {} {} ?", key, from, key, to),
                        vec![Value::Integer(first), Value::Integer(last)],
                    ))
                }
                _ => None,
            },
            Direction::Next => self.last_key.map(|last| {
                let op = match dir {
                    SortDir::Desc => "<",
                    SortDir::Asc => ">",
                };
                (format!("{} {} ?", key, op), vec![Value::Integer(last)])
            }),
        }
    }

    fn build_query(&self, direction: Direction, dir: SortDir) -> RangeQuery {
        let mut params = self.filter.params().to_vec();
        let where_clause = match self.key_range(direction, dir) {
            Some((range, range_params)) => {
                params.extend(range_params);
                if self.filter.is_empty() {
                    range
                } else {
                    format!("({}) AND {}", self.filter.clause(), range)
                }
            }
            None => self.filter.clause().to_string(),
        };
        RangeQuery {
            where_clause,
            params,
            order_by: self.order.to_sql(direction == Direction::Previous),
            limit: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Hands out canned pages and records every query it receives.
    #[derive(Default)]
    struct FakeSource {
        total: i64,
        pages: RefCell<VecDeque<Vec<i64>>>,
        queries: RefCell<Vec<RangeQuery>>,
        counts: Cell<usize>,
        fail_count: bool,
        fail_fetch: bool,
    }

    impl FakeSource {
        fn with(total: i64, pages: Vec<Vec<i64>>) -> Self {
            Self {
                total,
                pages: RefCell::new(pages.into()),
                ..Default::default()
            }
        }
    }

    impl PageSource for &FakeSource {
        type Record = i64;

        const KEY: &'static str = "id";

        fn key_of(record: &i64) -> i64 {
            *record
        }

        fn is_column(name: &str) -> bool {
            matches!(name, "id" | "title" | "user_id")
        }

        fn count(&self, _filter: &Filter) -> rusqlite::Result<i64> {
            self.counts.set(self.counts.get() + 1);
            if self.fail_count {
                return Err(rusqlite::Error::InvalidQuery);
            }
            Ok(self.total)
        }

        fn fetch(&self, query: &RangeQuery) -> rusqlite::Result<Vec<i64>> {
            self.queries.borrow_mut().push(query.clone());
            if self.fail_fetch {
                return Err(rusqlite::Error::QueryReturnedNoRows);
            }
            Ok(self.pages.borrow_mut().pop_front().unwrap_or_default())
        }
    }

    fn asc() -> Ordering {
        Ordering::new().by("id", "asc")
    }

    fn desc() -> Ordering {
        Ordering::new().by("id", "desc")
    }

    fn last_query(src: &FakeSource) -> RangeQuery {
        src.queries.borrow().last().cloned().unwrap()
    }

    #[test]
    fn first_current_has_no_key_range() {
        let src = FakeSource::with(3, vec![vec![1, 2, 3]]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 10);
        assert_eq!(p.current().unwrap(), vec![1, 2, 3]);

        let q = last_query(&src);
        assert_eq!(q.where_clause, "");
        assert!(q.params.is_empty());
        assert_eq!(q.order_by, "id ASC");
        assert_eq!(q.limit, 10);
        assert_eq!((p.first_key(), p.last_key()), (Some(1), Some(3)));
        assert_eq!(p.page(), 0);
        assert_eq!(p.total_pages(), 1);
    }

    #[test]
    fn first_current_keeps_filter_alone() {
        let src = FakeSource::with(1, vec![vec![4]]);
        let filter = Filter::new("user_id = ?", vec![Value::Integer(9)]);
        let mut p = Paginator::new(&src, filter, asc(), 10);
        p.current().unwrap();

        let q = last_query(&src);
        assert_eq!(q.where_clause, "user_id = ?");
        assert_eq!(q.params, vec![Value::Integer(9)]);
    }

    #[test]
    fn current_with_boundary_is_inclusive_range() {
        let src = FakeSource::with(30, vec![vec![1, 5, 10], vec![1, 5, 10]]);
        let filter = Filter::new("user_id = ?", vec![Value::Integer(2)]);
        let mut p = Paginator::new(&src, filter, asc(), 3);
        p.current().unwrap();
        p.current().unwrap();

        let q = last_query(&src);
        assert_eq!(q.where_clause, "(user_id = ?) AND id >= ? AND id <= ?");
        assert_eq!(
            q.params,
            vec![Value::Integer(2), Value::Integer(1), Value::Integer(10)]
        );
    }

    #[test]
    fn current_with_boundary_descending_flips_operators() {
        let src = FakeSource::with(30, vec![vec![30, 29, 28], vec![30, 29, 28]]);
        let mut p = Paginator::new(&src, Filter::none(), desc(), 3);
        p.current().unwrap();
        p.current().unwrap();

        let q = last_query(&src);
        assert_eq!(q.where_clause, "id <= ? AND id >= ?");
        assert_eq!(q.params, vec![Value::Integer(30), Value::Integer(28)]);
        assert_eq!(q.order_by, "id DESC");
    }

    #[test]
    fn next_uses_last_key() {
        let src = FakeSource::with(6, vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 3);
        p.current().unwrap();
        assert_eq!(p.next().unwrap(), vec![4, 5, 6]);

        let q = last_query(&src);
        assert_eq!(q.where_clause, "id > ?");
        assert_eq!(q.params, vec![Value::Integer(3)]);
        assert_eq!(p.page(), 1);
        assert_eq!((p.first_key(), p.last_key()), (Some(4), Some(6)));
    }

    #[test]
    fn next_descending_uses_less_than() {
        let src = FakeSource::with(6, vec![vec![6, 5, 4], vec![3, 2, 1]]);
        let mut p = Paginator::new(&src, Filter::none(), desc(), 3);
        p.current().unwrap();
        p.next().unwrap();
        assert_eq!(last_query(&src).where_clause, "id < ?");
        assert_eq!(last_query(&src).params, vec![Value::Integer(4)]);
    }

    #[test]
    fn previous_walks_backwards_and_restores_order() {
        // The source answers in the reversed order it was asked for.
        let src = FakeSource::with(6, vec![vec![1, 2, 3], vec![4, 5, 6], vec![3, 2, 1]]);
        let filter = Filter::new("title <> ''", vec![]);
        let order = Ordering::new().by("title", "asc").by("id", "asc");
        let mut p = Paginator::new(&src, filter, order, 3);
        p.current().unwrap();
        p.next().unwrap();
        assert_eq!(p.previous().unwrap(), vec![1, 2, 3]);

        let q = last_query(&src);
        assert_eq!(q.where_clause, "(title <> '') AND id < ?");
        assert_eq!(q.params, vec![Value::Integer(4)]);
        assert_eq!(q.order_by, "title DESC, id DESC");
        assert_eq!(p.page(), 0);
        assert_eq!((p.first_key(), p.last_key()), (Some(1), Some(3)));
    }

    #[test]
    fn previous_descending_uses_greater_than() {
        let src = FakeSource::with(6, vec![vec![6, 5, 4], vec![3, 2, 1], vec![4, 5, 6]]);
        let mut p = Paginator::new(&src, Filter::none(), desc(), 3);
        p.current().unwrap();
        p.next().unwrap();
        assert_eq!(p.previous().unwrap(), vec![6, 5, 4]);
        let q = last_query(&src);
        assert_eq!(q.where_clause, "id > ?");
        assert_eq!(q.order_by, "id ASC");
    }

    #[test]
    fn previous_on_first_page_issues_no_query() {
        let src = FakeSource::with(6, vec![]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 3);
        assert!(matches!(p.previous(), Err(AppError::NoPreviousPage)));
        assert_eq!(src.counts.get(), 0);
        assert!(src.queries.borrow().is_empty());
    }

    #[test]
    fn next_before_any_fetch_has_no_pages() {
        let src = FakeSource::with(25, vec![]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 10);
        assert!(matches!(p.next(), Err(AppError::NoNextPage)));
        assert_eq!(src.counts.get(), 0);
    }

    #[test]
    fn next_with_zero_rows_fails() {
        let src = FakeSource::with(0, vec![vec![]]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 10);
        assert!(p.current().unwrap().is_empty());
        assert_eq!(p.total_pages(), 0);
        assert_eq!((p.first_key(), p.last_key()), (None, None));
        assert!(matches!(p.next(), Err(AppError::NoNextPage)));
    }

    #[test]
    fn missing_order_key_fails_before_querying() {
        let src = FakeSource::with(5, vec![vec![1]]);
        let mut p = Paginator::new(&src, Filter::none(), Ordering::new().by("title", "asc"), 10);
        let err = p.current().unwrap_err();
        assert!(matches!(err, AppError::MissingOrderKey(ref k) if k == "id"));
        assert_eq!(src.counts.get(), 0);

        let mut p = Paginator::new(&src, Filter::none(), Ordering::new(), 10);
        assert!(matches!(p.get_page("current"), Err(AppError::MissingOrderKey(_))));
    }

    #[test]
    fn missing_order_key_wins_over_unknown_column() {
        let src = FakeSource::with(5, vec![]);
        let order = Ordering::new().by("bogus", "asc");
        let mut p = Paginator::new(&src, Filter::none(), order, 10);
        assert!(matches!(p.current(), Err(AppError::MissingOrderKey(_))));
    }

    #[test]
    fn unknown_order_column_is_rejected() {
        let src = FakeSource::with(5, vec![]);
        let order = Ordering::new().by("id", "asc").by("id; DROP TABLE posts", "asc");
        let mut p = Paginator::new(&src, Filter::none(), order, 10);
        let err = p.current().unwrap_err();
        assert!(matches!(err, AppError::UnknownColumn(ref c) if c == "id; DROP TABLE posts"));
        assert!(src.queries.borrow().is_empty());
    }

    #[test]
    fn invalid_direction_fails_before_querying() {
        let src = FakeSource::with(5, vec![vec![1]]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 10);
        for bad in ["", "NEXT", "forward", "last"] {
            let err = p.get_page(bad).unwrap_err();
            assert_eq!(err.code(), "INVALID_DIRECTION");
        }
        assert_eq!(src.counts.get(), 0);
        assert!(src.queries.borrow().is_empty());
    }

    #[test]
    fn get_page_dispatches() {
        let src = FakeSource::with(6, vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 3);
        assert_eq!(p.get_page("current").unwrap(), vec![1, 2, 3]);
        assert_eq!(p.get_page("next").unwrap(), vec![4, 5, 6]);
        assert!(matches!(p.get_page("next"), Err(AppError::NoNextPage)));
    }

    #[test]
    fn count_failure_is_surfaced_and_state_kept() {
        let src = FakeSource {
            fail_count: true,
            ..FakeSource::with(5, vec![vec![1]])
        };
        let mut p = Paginator::new(&src, Filter::none(), asc(), 10);
        let err = p.current().unwrap_err();
        assert!(matches!(err, AppError::CountQueryFailed(rusqlite::Error::InvalidQuery)));
        assert!(src.queries.borrow().is_empty());
        assert_eq!(p.first_key(), None);
    }

    #[test]
    fn range_failure_is_surfaced_and_page_kept() {
        let src = FakeSource::with(6, vec![vec![1, 2, 3]]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 3);
        p.current().unwrap();

        let failing = FakeSource {
            fail_fetch: true,
            ..FakeSource::with(6, vec![])
        };
        let mut p = Paginator::resume(&failing, Filter::none(), asc(), 3, p.cursor());
        let err = p.next().unwrap_err();
        assert!(matches!(
            err,
            AppError::RangeQueryFailed(rusqlite::Error::QueryReturnedNoRows)
        ));
        assert_eq!(p.page(), 0);
        assert_eq!((p.first_key(), p.last_key()), (Some(1), Some(3)));
    }

    #[test]
    fn empty_result_leaves_boundary() {
        let src = FakeSource::with(6, vec![vec![1, 2, 3], vec![]]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 3);
        p.current().unwrap();
        assert!(p.current().unwrap().is_empty());
        assert_eq!((p.first_key(), p.last_key()), (Some(1), Some(3)));
    }

    #[test]
    fn zero_per_page_defaults_to_ten() {
        let src = FakeSource::with(25, vec![vec![1]]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 0);
        assert_eq!(p.per_page(), DEFAULT_PER_PAGE);
        p.current().unwrap();
        assert_eq!(last_query(&src).limit, 10);
        assert_eq!(p.total_pages(), 3);
    }

    #[test]
    fn count_is_recomputed_every_call() {
        let src = FakeSource::with(6, vec![vec![1, 2, 3], vec![1, 2, 3], vec![4, 5, 6]]);
        let mut p = Paginator::new(&src, Filter::none(), asc(), 3);
        p.current().unwrap();
        p.current().unwrap();
        p.next().unwrap();
        assert_eq!(src.counts.get(), 3);
    }

    #[test]
    fn resume_restores_position() {
        let src = FakeSource::with(6, vec![vec![4, 5, 6]]);
        let cursor = Cursor {
            page: 0,
            first_id: Some(1),
            last_id: Some(3),
            total_items: 6,
            total_pages: 2,
        };
        let mut p = Paginator::resume(&src, Filter::none(), asc(), 3, cursor);
        assert_eq!(p.cursor(), cursor);
        assert_eq!(p.next().unwrap(), vec![4, 5, 6]);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn resume_without_boundary_starts_over() {
        let src = FakeSource::with(6, vec![]);
        let cursor = Cursor {
            page: 4,
            first_id: None,
            last_id: Some(3),
            total_items: 60,
            total_pages: 20,
        };
        let p = Paginator::resume(&src, Filter::none(), asc(), 3, cursor);
        assert_eq!(p.cursor(), Cursor::default());
    }

    #[test]
    fn resume_past_last_page_starts_over() {
        let src = FakeSource::with(15, vec![vec![1, 2, 3]]);
        let cursor = Cursor {
            page: 7,
            first_id: Some(11),
            last_id: Some(15),
            total_items: 15,
            total_pages: 2,
        };
        let mut p = Paginator::resume(&src, Filter::none(), asc(), 10, cursor);
        assert_eq!(p.cursor(), Cursor::default());
        assert!(matches!(p.previous(), Err(AppError::NoPreviousPage)));
        assert_eq!(p.current().unwrap(), vec![1, 2, 3]);
        assert_eq!(last_query(&src).where_clause, "");
    }

    #[test]
    fn resume_at_max_page_does_not_overflow() {
        let src = FakeSource::with(15, vec![]);
        let cursor = Cursor {
            page: usize::MAX,
            first_id: Some(1),
            last_id: Some(10),
            total_items: 15,
            total_pages: 2,
        };
        let mut p = Paginator::resume(&src, Filter::none(), asc(), 10, cursor);
        assert_eq!(p.page(), 0);
        assert!(matches!(p.next(), Err(AppError::NoNextPage)));

        let cursor = Cursor {
            page: usize::MAX - 1,
            total_pages: usize::MAX,
            ..cursor
        };
        let mut p = Paginator::resume(&src, Filter::none(), asc(), 10, cursor);
        assert!(matches!(p.next(), Err(AppError::NoNextPage)));
        assert_eq!(p.page(), usize::MAX - 1);
        assert!(src.queries.borrow().is_empty());
    }

    #[test]
    fn page_is_clamped_when_rows_disappear() {
        // Six rows when resumed, three by the time the next page is read.
        let src = FakeSource::with(3, vec![vec![4, 5, 6]]);
        let cursor = Cursor {
            page: 1,
            first_id: Some(4),
            last_id: Some(6),
            total_items: 9,
            total_pages: 3,
        };
        let mut p = Paginator::resume(&src, Filter::none(), asc(), 3, cursor);
        p.next().unwrap();
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn direction_names() {
        for d in [Direction::Previous, Direction::Current, Direction::Next] {
            assert_eq!(Direction::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Direction::from_str("Current"), None);
    }

    #[test]
    fn page_count_examples() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(25, 0), 3);
    }

    proptest! {
        #[test]
        fn page_count_is_ceiling(n in 0i64..1_000_000, p in 1u32..1_000) {
            let pages = page_count(n, p);
            let expected = (n as u64).div_ceil(p as u64) as usize;
            prop_assert_eq!(pages, expected);
            prop_assert_eq!(pages == 0, n == 0);
        }
    }
}
