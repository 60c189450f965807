use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaoError {
    #[error("Cannot convert {value} to an integer user id")]
    Conversion { value: String },
    #[error("Missing field in message: {0}")]
    MissingField(String),
    #[error("Table {table} declares column {column} but the entity has no value for it")]
    SchemaMismatch { table: &'static str, column: String },
    #[error("Value {value} for {table}.{column} does not fit a SQLite column")]
    ColumnValue {
        table: &'static str,
        column: String,
        value: String,
    },
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Command {name} expects {expected} parameters")]
    ParamsMismatch { name: String, expected: &'static str },
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type DaoResult<T> = Result<T, DaoError>;
