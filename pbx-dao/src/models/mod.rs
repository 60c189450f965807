//! Record and entity types

mod extension;
mod feature_extension;
mod rows;

pub use extension::{AgentActionExtension, ForwardExtension, ServiceExtension};
pub use feature_extension::{
    AgentActionFeatureExtension, ForwardFeatureExtension, ServiceFeatureExtension,
};
pub use rows::{ExtensionRow, ExtensionType, FeatureExtensionRow};
