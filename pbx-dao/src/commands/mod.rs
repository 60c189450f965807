//! Command parameter marshaling and the notification envelope

pub mod params;
pub mod protocol;

pub use params::{CommandParams, Message, ParamsKind, UserIdParams};
pub use protocol::{Notification, NotificationEnvelope, NotificationKind};
