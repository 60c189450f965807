//! Feature extension database operations

use rusqlite::{params, params_from_iter};
use uuid::Uuid;

use super::features::{
    AGENT_ACTIONS, FORWARDS, SERVICES, agent_action_name, clean_exten, forward_name, placeholders,
};
use crate::db::{Database, FromRow};
use crate::error::DaoResult;
use crate::models::{
    AgentActionFeatureExtension, FeatureExtensionRow, ForwardFeatureExtension,
    ServiceFeatureExtension,
};

impl Database {
    /// Create a feature extension with a fresh uuid
    pub fn create_feature_extension(
        &self,
        exten: &str,
        feature: &str,
        enabled: bool,
    ) -> DaoResult<FeatureExtensionRow> {
        let row = FeatureExtensionRow {
            uuid: Uuid::new_v4(),
            enabled,
            exten: exten.to_string(),
            feature: feature.to_string(),
        };

        self.insert_entity(&row)?;
        log::debug!("Created feature extension {} for {}", row.exten, row.feature);

        Ok(row)
    }

    pub fn get_feature_extension(&self, uuid: Uuid) -> DaoResult<Option<FeatureExtensionRow>> {
        let conn = self.conn.lock();

        let result = conn.query_row(
            "SELECT uuid, enabled, exten, feature FROM feature_extension WHERE uuid = ?1",
            [uuid.to_string()],
            FeatureExtensionRow::from_row,
        );

        match result {
            Ok(row) => Ok(Some(row)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set_feature_extension_enabled(&self, uuid: Uuid, enabled: bool) -> DaoResult<bool> {
        let conn = self.conn.lock();
        let rows_affected = conn.execute(
            "UPDATE feature_extension SET enabled = ?1 WHERE uuid = ?2",
            params![if enabled { 1 } else { 0 }, uuid.to_string()],
        )?;
        Ok(rows_affected > 0)
    }

    pub fn delete_feature_extension(&self, uuid: Uuid) -> DaoResult<bool> {
        let conn = self.conn.lock();
        let rows_affected = conn.execute(
            "DELETE FROM feature_extension WHERE uuid = ?1",
            [uuid.to_string()],
        )?;
        Ok(rows_affected > 0)
    }

    /// (uuid, cleaned exten, feature) of enabled feature extensions in `features`
    fn find_enabled_features(&self, features: &[&str]) -> DaoResult<Vec<(Uuid, String, String)>> {
        let conn = self.conn.lock();

        let query = format!(
            "SELECT uuid, enabled, exten, feature FROM feature_extension
             WHERE enabled = 1 AND feature IN ({})
             ORDER BY exten",
            placeholders(1, features.len())
        );

        let mut stmt = conn.prepare(&query)?;
        let rows = stmt
            .query_map(params_from_iter(features.iter()), FeatureExtensionRow::from_row)?
            .map(|r| r.map(|row| (row.uuid, clean_exten(&row.exten), row.feature)))
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    pub fn find_all_service_feature_extensions(&self) -> DaoResult<Vec<ServiceFeatureExtension>> {
        let rows = self.find_enabled_features(SERVICES)?;
        Ok(rows
            .into_iter()
            .map(|(uuid, exten, feature)| ServiceFeatureExtension::new(uuid, exten, feature))
            .collect())
    }

    pub fn find_all_forward_feature_extensions(&self) -> DaoResult<Vec<ForwardFeatureExtension>> {
        let rows = self.find_enabled_features(FORWARDS)?;
        Ok(rows
            .into_iter()
            .filter_map(|(uuid, exten, feature)| {
                forward_name(&feature)
                    .map(|forward| ForwardFeatureExtension::new(uuid, exten, forward))
            })
            .collect())
    }

    pub fn find_all_agent_action_feature_extensions(
        &self,
    ) -> DaoResult<Vec<AgentActionFeatureExtension>> {
        let rows = self.find_enabled_features(AGENT_ACTIONS)?;
        Ok(rows
            .into_iter()
            .filter_map(|(uuid, exten, feature)| {
                agent_action_name(&feature)
                    .map(|action| AgentActionFeatureExtension::new(uuid, exten, action))
            })
            .collect())
    }
}
