//! Core building blocks shared by every command
//!
//! - **context**: Immutable run context (global flags, endpoints, token)
//! - **error**: Error types with exit codes and contextual help messages
//! - **repo**: `owner/name` repository identifiers

pub mod context;
pub mod error;
pub mod repo;
