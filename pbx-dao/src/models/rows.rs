//! Table-mapped entities for the `extensions` and `feature_extension` tables

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::db::{FromRow, TableBacked, conversion_failure};

/// What an extension routes to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExtensionType {
    User,
    Group,
    Queue,
    Meetme,
    Incall,
    Outcall,
    Extenfeatures,
    Parking,
}

impl ExtensionType {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// A row of the `extensions` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRow {
    pub id: i64,
    pub commented: bool,
    pub context: String,
    pub exten: String,
    #[serde(rename = "type")]
    pub extension_type: ExtensionType,
    pub typeval: String,
}

impl TableBacked for ExtensionRow {
    const TABLE: &'static str = "extensions";
    const COLUMNS: &'static [&'static str] =
        &["id", "commented", "context", "exten", "type", "typeval"];

    fn column_value(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(json!(self.id)),
            "commented" => Some(json!(self.commented)),
            "context" => Some(json!(self.context)),
            "exten" => Some(json!(self.exten)),
            "type" => Some(json!(self.extension_type.as_str())),
            "typeval" => Some(json!(self.typeval)),
            _ => None,
        }
    }
}

impl FromRow for ExtensionRow {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        let type_str: String = row.get(4)?;
        let extension_type =
            ExtensionType::from_str(&type_str).map_err(|e| conversion_failure(4, e))?;

        Ok(ExtensionRow {
            id: row.get(0)?,
            commented: row.get::<_, i32>(1)? != 0,
            context: row.get(2)?,
            exten: row.get(3)?,
            extension_type,
            typeval: row.get(5)?,
        })
    }
}

/// A row of the `feature_extension` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureExtensionRow {
    pub uuid: Uuid,
    pub enabled: bool,
    pub exten: String,
    pub feature: String,
}

impl TableBacked for FeatureExtensionRow {
    const TABLE: &'static str = "feature_extension";
    const COLUMNS: &'static [&'static str] = &["uuid", "enabled", "exten", "feature"];

    fn column_value(&self, column: &str) -> Option<Value> {
        match column {
            "uuid" => Some(json!(self.uuid.to_string())),
            "enabled" => Some(json!(self.enabled)),
            "exten" => Some(json!(self.exten)),
            "feature" => Some(json!(self.feature)),
            _ => None,
        }
    }
}

impl FromRow for FeatureExtensionRow {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        let uuid_str: String = row.get(0)?;
        let uuid = Uuid::parse_str(&uuid_str).map_err(|e| conversion_failure(0, e))?;

        Ok(FeatureExtensionRow {
            uuid,
            enabled: row.get::<_, i32>(1)? != 0,
            exten: row.get(2)?,
            feature: row.get(3)?,
        })
    }
}
