//! Data access layer for PBX extension configuration.
//!
//! - [`models`]: immutable extension records and the table-mapped rows
//! - [`db`]: SQLite repository and the [`db::TableBacked`] row export
//! - [`commands`]: command parameter marshaling and notifications

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use db::Database;
pub use error::{DaoError, DaoResult};
