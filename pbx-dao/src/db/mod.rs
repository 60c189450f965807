mod sqlite;
mod table;
mod tables;

pub use sqlite::Database;
pub use table::{FromRow, RowMap, TableBacked};
pub(crate) use table::conversion_failure;
