//! Table modules - extends Database with domain-specific methods
//!
//! Each module adds `impl Database` blocks with methods for a specific table.

mod extensions;         // extensions
mod feature_extensions; // feature_extension
mod features;           // feature name sets shared by both tables
