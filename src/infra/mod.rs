//! Infrastructure: SQLite connection, migrations, query helpers.

pub mod db;
pub mod query;

pub(crate) use db::get_connection;
pub use db::{init_db, init_test_db, DbPool};
pub use query::{Filter, Record};
