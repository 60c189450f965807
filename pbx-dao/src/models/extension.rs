//! Extension records read from the `extensions` table (integer-keyed)

use serde::{Deserialize, Serialize};

/// An `extenfeatures` extension that triggers a PBX service (voicemail, pickup, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceExtension {
    id: i64,
    exten: String,
    service: String,
}

impl ServiceExtension {
    pub fn new(id: i64, exten: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            id,
            exten: exten.into(),
            service: service.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn exten(&self) -> &str {
        &self.exten
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

/// An `extenfeatures` extension that toggles a call forward
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForwardExtension {
    id: i64,
    exten: String,
    /// "busy", "noanswer" or "unconditional"
    forward: String,
}

impl ForwardExtension {
    pub fn new(id: i64, exten: impl Into<String>, forward: impl Into<String>) -> Self {
        Self {
            id,
            exten: exten.into(),
            forward: forward.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn exten(&self) -> &str {
        &self.exten
    }

    pub fn forward(&self) -> &str {
        &self.forward
    }
}

/// An `extenfeatures` extension for static agent login/logout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentActionExtension {
    id: i64,
    exten: String,
    /// "login", "logout" or "toggle"
    action: String,
}

impl AgentActionExtension {
    pub fn new(id: i64, exten: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id,
            exten: exten.into(),
            action: action.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn exten(&self) -> &str {
        &self.exten
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}
