//! Ordering specification for keyset pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// Only a case-insensitive `"desc"` sorts descending; every other
    /// string, including the empty one, is ascending.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Column → direction entries, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ordering {
    entries: Vec<(String, String)>,
}

impl Ordering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `column`.
    pub fn by(mut self, column: impl Into<String>, direction: impl Into<String>) -> Self {
        let column = column.into();
        let direction = direction.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = direction,
            None => self.entries.push((column, direction)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// Direction configured for `column`, `None` when it has no entry.
    pub fn direction_of(&self, column: &str) -> Option<SortDir> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, d)| SortDir::parse(d))
    }

    /// `ORDER BY` body; `reversed` flips every entry.
    pub(crate) fn to_sql(&self, reversed: bool) -> String {
        self.entries
            .iter()
            .map(|(c, d)| {
                let dir = SortDir::parse(d);
                let dir = if reversed { dir.reverse() } else { dir };
                format!("{} {}", c, dir.as_sql())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<C: Into<String>, D: Into<String>> FromIterator<(C, D)> for Ordering {
    fn from_iter<I: IntoIterator<Item = (C, D)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |o, (c, d)| o.by(c, d))
    }
}
