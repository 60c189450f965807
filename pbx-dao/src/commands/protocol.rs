use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString, IntoStaticStr};

use super::params::{CommandParams, ParamsKind};
use crate::error::{DaoError, DaoResult};

/// Notifications sent after configuration changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum NotificationKind {
    // User events
    #[strum(serialize = "user.created")]
    UserCreated,
    #[strum(serialize = "user.edited")]
    UserEdited,
    #[strum(serialize = "user.deleted")]
    UserDeleted,
    // Dialplan events
    #[strum(serialize = "extensions.edited")]
    ExtensionsEdited,
    #[strum(serialize = "feature_extensions.edited")]
    FeatureExtensionsEdited,
}

impl NotificationKind {
    pub fn all() -> Vec<NotificationKind> {
        vec![
            Self::UserCreated,
            Self::UserEdited,
            Self::UserDeleted,
            Self::ExtensionsEdited,
            Self::FeatureExtensionsEdited,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Parameter shape carried by this notification
    pub fn params_kind(&self) -> ParamsKind {
        match self {
            Self::UserCreated | Self::UserEdited | Self::UserDeleted => ParamsKind::UserId,
            Self::ExtensionsEdited | Self::FeatureExtensionsEdited => ParamsKind::NoData,
        }
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Message form of a notification, as handed to the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEnvelope {
    pub name: String,
    /// `null` for notifications without parameters; only user-id
    /// notifications look inside it
    #[serde(default)]
    pub data: Value,
    pub timestamp: DateTime<Utc>,
}

/// A notification with validated parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    kind: NotificationKind,
    params: CommandParams,
}

impl Notification {
    pub fn new(kind: NotificationKind, params: CommandParams) -> DaoResult<Self> {
        if params.kind() != kind.params_kind() {
            return Err(DaoError::ParamsMismatch {
                name: kind.to_string(),
                expected: kind.params_kind().as_str(),
            });
        }
        Ok(Self { kind, params })
    }

    pub fn user_created(user_id: i64) -> Self {
        Self {
            kind: NotificationKind::UserCreated,
            params: CommandParams::user_id(user_id),
        }
    }

    pub fn user_edited(user_id: i64) -> Self {
        Self {
            kind: NotificationKind::UserEdited,
            params: CommandParams::user_id(user_id),
        }
    }

    pub fn user_deleted(user_id: i64) -> Self {
        Self {
            kind: NotificationKind::UserDeleted,
            params: CommandParams::user_id(user_id),
        }
    }

    pub fn extensions_edited() -> Self {
        Self {
            kind: NotificationKind::ExtensionsEdited,
            params: CommandParams::NoData,
        }
    }

    pub fn feature_extensions_edited() -> Self {
        Self {
            kind: NotificationKind::FeatureExtensionsEdited,
            params: CommandParams::NoData,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn params(&self) -> &CommandParams {
        &self.params
    }

    pub fn marshal(&self) -> NotificationEnvelope {
        NotificationEnvelope {
            name: self.kind.into(),
            data: self.params.marshal().map(Value::Object).unwrap_or(Value::Null),
            timestamp: Utc::now(),
        }
    }

    pub fn unmarshal(envelope: &NotificationEnvelope) -> DaoResult<Self> {
        let kind: NotificationKind = envelope
            .name
            .parse()
            .map_err(|_| DaoError::UnknownCommand(envelope.name.clone()))?;
        // A non-object payload carries no `user_id`
        let params = CommandParams::unmarshal(kind.params_kind(), envelope.data.as_object())?;
        Ok(Self { kind, params })
    }

    pub fn to_json(&self) -> DaoResult<String> {
        Ok(serde_json::to_string(&self.marshal())?)
    }

    pub fn from_json(json: &str) -> DaoResult<Self> {
        let envelope: NotificationEnvelope = serde_json::from_str(json)?;
        Self::unmarshal(&envelope)
    }
}
