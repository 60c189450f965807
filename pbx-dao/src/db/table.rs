//! Table-backed entities - the shared row export capability
//!
//! Any entity stored in a table implements `TableBacked` to declare its
//! column schema. The capability carries no data; it gives every entity the
//! same `to_row_map` export and lets `Database` insert and fetch entities
//! generically.

use rusqlite::types::{Type, Value as SqlValue};
use serde_json::Value;
use std::collections::HashMap;

use super::Database;
use crate::error::{DaoError, DaoResult};

/// Column name to current value
pub type RowMap = HashMap<String, Value>;

pub trait TableBacked {
    const TABLE: &'static str;
    /// Declared columns, in table order
    const COLUMNS: &'static [&'static str];

    /// Current value of a declared column, `None` if the entity has no such attribute
    fn column_value(&self, column: &str) -> Option<Value>;

    /// Export the entity as a mapping with exactly one entry per declared column
    fn to_row_map(&self) -> DaoResult<RowMap> {
        Self::COLUMNS
            .iter()
            .map(|column| {
                self.column_value(column)
                    .map(|value| (column.to_string(), value))
                    .ok_or_else(|| DaoError::SchemaMismatch {
                        table: Self::TABLE,
                        column: column.to_string(),
                    })
            })
            .collect()
    }
}

/// Decode an entity from a row selected with `TableBacked::COLUMNS` in order
pub trait FromRow: Sized {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self>;
}

pub(crate) fn conversion_failure<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

/// Integers beyond the SQLite INTEGER range are rejected rather than stored as REAL
fn json_to_sql(table: &'static str, column: &str, value: Value) -> DaoResult<SqlValue> {
    let sql = match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(if b { 1 } else { 0 }),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => SqlValue::Integer(i),
            (None, Some(f)) if !n.is_u64() => SqlValue::Real(f),
            _ => {
                return Err(DaoError::ColumnValue {
                    table,
                    column: column.to_string(),
                    value: n.to_string(),
                });
            }
        },
        Value::String(s) => SqlValue::Text(s),
        other => SqlValue::Text(other.to_string()),
    };
    Ok(sql)
}

fn column_list(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Database {
    /// Insert an entity using its exported row
    pub fn insert_entity<T: TableBacked>(&self, entity: &T) -> DaoResult<()> {
        let mut row = entity.to_row_map()?;
        let values: Vec<SqlValue> = T::COLUMNS
            .iter()
            .map(|column| json_to_sql(T::TABLE, column, row.remove(*column).unwrap_or(Value::Null)))
            .collect::<DaoResult<_>>()?;

        let placeholders: Vec<String> = (1..=values.len()).map(|i| format!("?{}", i)).collect();
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::TABLE,
            column_list(T::COLUMNS),
            placeholders.join(", ")
        );

        let conn = self.conn.lock();
        conn.execute(&query, rusqlite::params_from_iter(values.iter()))?;
        log::debug!("Inserted row into {}", T::TABLE);
        Ok(())
    }

    /// Load every row of the entity's table
    pub fn fetch_all<T: TableBacked + FromRow>(&self) -> DaoResult<Vec<T>> {
        let conn = self.conn.lock();
        let query = format!("SELECT {} FROM {}", column_list(T::COLUMNS), T::TABLE);
        let mut stmt = conn.prepare(&query)?;

        let rows = stmt
            .query_map([], |row| T::from_row(row))?
            .collect::<rusqlite::Result<Vec<T>>>()?;

        Ok(rows)
    }
}
