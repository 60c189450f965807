//! Feature extension records read from the `feature_extension` table (uuid-keyed)
//!
//! Same shape as the records in `extension.rs`, but keyed by the feature
//! extension uuid instead of the legacy integer id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceFeatureExtension {
    uuid: Uuid,
    exten: String,
    service: String,
}

impl ServiceFeatureExtension {
    pub fn new(uuid: Uuid, exten: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            uuid,
            exten: exten.into(),
            service: service.into(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn exten(&self) -> &str {
        &self.exten
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForwardFeatureExtension {
    uuid: Uuid,
    exten: String,
    forward: String,
}

impl ForwardFeatureExtension {
    pub fn new(uuid: Uuid, exten: impl Into<String>, forward: impl Into<String>) -> Self {
        Self {
            uuid,
            exten: exten.into(),
            forward: forward.into(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn exten(&self) -> &str {
        &self.exten
    }

    pub fn forward(&self) -> &str {
        &self.forward
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentActionFeatureExtension {
    uuid: Uuid,
    exten: String,
    action: String,
}

impl AgentActionFeatureExtension {
    pub fn new(uuid: Uuid, exten: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            uuid,
            exten: exten.into(),
            action: action.into(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn exten(&self) -> &str {
        &self.exten
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_follows_fields() {
        let uuid = Uuid::new_v4();
        let a = ForwardFeatureExtension::new(uuid, "*21", "unconditional");
        assert_eq!(a, ForwardFeatureExtension::new(uuid, "*21", "unconditional"));
        assert_ne!(a, ForwardFeatureExtension::new(Uuid::new_v4(), "*21", "unconditional"));
        assert_ne!(a, ForwardFeatureExtension::new(uuid, "*21", "busy"));
    }

    #[test]
    fn test_uuid_serializes_as_string() {
        let uuid = Uuid::new_v4();
        let action = AgentActionFeatureExtension::new(uuid, "*32", "logout");
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["uuid"], uuid.to_string());
        assert_eq!(json["action"], "logout");

        let back: AgentActionFeatureExtension = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }
}
