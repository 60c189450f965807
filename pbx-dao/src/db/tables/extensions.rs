//! Extension database operations

use rusqlite::{params, params_from_iter};

use super::features::{
    AGENT_ACTIONS, FORWARDS, SERVICES, agent_action_name, clean_exten, forward_name, placeholders,
};
use crate::db::{Database, FromRow};
use crate::error::DaoResult;
use crate::models::{
    AgentActionExtension, ExtensionRow, ExtensionType, ForwardExtension, ServiceExtension,
};

impl Database {
    /// Create an extension in a context
    pub fn create_extension(
        &self,
        context: &str,
        exten: &str,
        extension_type: ExtensionType,
        typeval: &str,
    ) -> DaoResult<ExtensionRow> {
        let conn = self.conn.lock();

        conn.execute(
            "INSERT INTO extensions (commented, context, exten, type, typeval) VALUES (0, ?1, ?2, ?3, ?4)",
            params![context, exten, extension_type.as_str(), typeval],
        )?;

        let id = conn.last_insert_rowid();
        log::debug!("Created extension {}@{} (id {})", exten, context, id);

        Ok(ExtensionRow {
            id,
            commented: false,
            context: context.to_string(),
            exten: exten.to_string(),
            extension_type,
            typeval: typeval.to_string(),
        })
    }

    /// Get an extension by ID
    pub fn get_extension(&self, id: i64) -> DaoResult<Option<ExtensionRow>> {
        let conn = self.conn.lock();

        let result = conn.query_row(
            "SELECT id, commented, context, exten, type, typeval FROM extensions WHERE id = ?1",
            [id],
            ExtensionRow::from_row,
        );

        match result {
            Ok(row) => Ok(Some(row)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List the extensions of a context, ordered by exten
    pub fn list_extensions_by_context(&self, context: &str) -> DaoResult<Vec<ExtensionRow>> {
        let conn = self.conn.lock();

        let mut stmt = conn.prepare(
            "SELECT id, commented, context, exten, type, typeval FROM extensions WHERE context = ?1 ORDER BY exten",
        )?;

        let rows = stmt
            .query_map([context], ExtensionRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Comment out (disable) or restore an extension
    pub fn set_extension_commented(&self, id: i64, commented: bool) -> DaoResult<bool> {
        let conn = self.conn.lock();
        let rows_affected = conn.execute(
            "UPDATE extensions SET commented = ?1 WHERE id = ?2",
            params![if commented { 1 } else { 0 }, id],
        )?;
        Ok(rows_affected > 0)
    }

    /// Delete an extension by ID
    pub fn delete_extension(&self, id: i64) -> DaoResult<bool> {
        let conn = self.conn.lock();
        let rows_affected = conn.execute("DELETE FROM extensions WHERE id = ?1", [id])?;
        if rows_affected > 0 {
            log::debug!("Deleted extension {}", id);
        }
        Ok(rows_affected > 0)
    }

    /// (id, cleaned exten, typeval) of extenfeatures rows whose typeval is in `typevals`
    fn find_extenfeatures(&self, typevals: &[&str]) -> DaoResult<Vec<(i64, String, String)>> {
        let conn = self.conn.lock();

        let query = format!(
            "SELECT id, exten, typeval FROM extensions
             WHERE type = ?1 AND typeval IN ({})
             ORDER BY id",
            placeholders(2, typevals.len())
        );

        let mut params: Vec<&str> = vec![ExtensionType::Extenfeatures.as_str()];
        params.extend_from_slice(typevals);

        let mut stmt = conn.prepare(&query)?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                let exten: String = row.get(1)?;
                Ok((row.get(0)?, clean_exten(&exten), row.get(2)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    pub fn find_all_service_extensions(&self) -> DaoResult<Vec<ServiceExtension>> {
        let rows = self.find_extenfeatures(SERVICES)?;
        Ok(rows
            .into_iter()
            .map(|(id, exten, typeval)| ServiceExtension::new(id, exten, typeval))
            .collect())
    }

    pub fn find_all_forward_extensions(&self) -> DaoResult<Vec<ForwardExtension>> {
        let rows = self.find_extenfeatures(FORWARDS)?;
        Ok(rows
            .into_iter()
            .filter_map(|(id, exten, typeval)| {
                forward_name(&typeval).map(|forward| ForwardExtension::new(id, exten, forward))
            })
            .collect())
    }

    pub fn find_all_agent_action_extensions(&self) -> DaoResult<Vec<AgentActionExtension>> {
        let rows = self.find_extenfeatures(AGENT_ACTIONS)?;
        Ok(rows
            .into_iter()
            .filter_map(|(id, exten, typeval)| {
                agent_action_name(&typeval)
                    .map(|action| AgentActionExtension::new(id, exten, action))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DaoError;

    const FEATURES: &str = "xivo-features";

    fn seeded() -> Database {
        let db = Database::in_memory().unwrap();
        db.create_extension(FEATURES, "*98", ExtensionType::Extenfeatures, "vmusermsg").unwrap();
        db.create_extension(FEATURES, "_*21.", ExtensionType::Extenfeatures, "fwdunc").unwrap();
        db.create_extension(FEATURES, "_*23.", ExtensionType::Extenfeatures, "fwdbusy").unwrap();
        db.create_extension(FEATURES, "_*31.", ExtensionType::Extenfeatures, "agentstaticlogin").unwrap();
        db.create_extension(FEATURES, "*10", ExtensionType::Extenfeatures, "phonestatus").unwrap();
        db.create_extension("default", "1000", ExtensionType::User, "12").unwrap();
        db
    }

    #[test]
    fn test_create_and_get_extension() {
        let db = Database::in_memory().unwrap();
        let created = db
            .create_extension("default", "1001", ExtensionType::User, "3")
            .unwrap();

        let fetched = db.get_extension(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert!(!fetched.commented);

        assert!(db.get_extension(created.id + 100).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_exten_in_context_fails() {
        let db = Database::in_memory().unwrap();
        db.create_extension("default", "1001", ExtensionType::User, "3").unwrap();

        let err = db
            .create_extension("default", "1001", ExtensionType::Queue, "4")
            .unwrap_err();
        assert!(matches!(err, DaoError::Database(_)));

        // Same exten in another context is fine
        db.create_extension("other", "1001", ExtensionType::User, "3").unwrap();
    }

    #[test]
    fn test_find_all_service_extensions() {
        let db = seeded();
        let services = db.find_all_service_extensions().unwrap();

        assert_eq!(services.len(), 2);
        assert_eq!(services[0].exten(), "*98");
        assert_eq!(services[0].service(), "vmusermsg");
        assert_eq!(services[1].service(), "phonestatus");
    }

    #[test]
    fn test_find_all_forward_extensions_maps_names() {
        let db = seeded();
        let forwards = db.find_all_forward_extensions().unwrap();

        let found: Vec<(&str, &str)> = forwards.iter().map(|f| (f.exten(), f.forward())).collect();
        assert_eq!(found, vec![("*21", "unconditional"), ("*23", "busy")]);
    }

    #[test]
    fn test_find_all_agent_action_extensions() {
        let db = seeded();
        let actions = db.find_all_agent_action_extensions().unwrap();

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].exten(), "*31");
        assert_eq!(actions[0].action(), "login");
    }

    #[test]
    fn test_commented_extensions_are_still_found() {
        let db = seeded();
        let vm = db.find_all_service_extensions().unwrap()[0].clone();

        assert!(db.set_extension_commented(vm.id(), true).unwrap());
        assert!(db.get_extension(vm.id()).unwrap().unwrap().commented);

        let services = db.find_all_service_extensions().unwrap();
        assert!(services.contains(&vm));
    }

    #[test]
    fn test_non_feature_types_are_ignored() {
        let db = Database::in_memory().unwrap();
        db.create_extension("default", "*98", ExtensionType::User, "vmusermsg").unwrap();
        assert!(db.find_all_service_extensions().unwrap().is_empty());
    }

    #[test]
    fn test_list_and_delete() {
        let db = seeded();
        let default = db.list_extensions_by_context("default").unwrap();
        assert_eq!(default.len(), 1);

        assert!(db.delete_extension(default[0].id).unwrap());
        assert!(!db.delete_extension(default[0].id).unwrap());
        assert!(db.list_extensions_by_context("default").unwrap().is_empty());
    }

    #[test]
    fn test_fetch_all_extension_rows() {
        let db = seeded();
        let rows: Vec<ExtensionRow> = db.fetch_all().unwrap();
        assert_eq!(rows.len(), 6);
    }
}
