//! Error types for the OasForge core library
//!
//! This module defines the caller-visible failure surface of the object model
//! and its serialization engine, using thiserror for ergonomic error
//! definitions. Every error is raised synchronously at the point of
//! serialization or attachment; there is no partial or degraded output mode.
//!
//! Copyright (c) 2025 OasForge Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

use crate::spec::ComponentKind;

/// Main error type for OasForge operations
#[derive(Error, Debug)]
pub enum Error {
    /// A field still holding its `Required` marker was reached during
    /// serialization
    #[error("Missing required field `{field}` on {object} at {path}")]
    MissingRequiredField {
        /// Type name of the owning node, e.g. `"Info"`
        object: &'static str,
        /// Rust-side name of the unpopulated field
        field: &'static str,
        /// Traversal path from the document root to the field's output key
        path: String,
    },

    /// An extension entry was attached under a key without the reserved
    /// `x-` prefix
    #[error("Invalid extension key `{key}`: extension keys must start with `x-`")]
    InvalidExtensionKey { key: String },

    /// A component without a ref name was handed to a registry store
    #[error("Cannot store an unnamed component in `{kind}`: set its ref name first")]
    UnnamedComponent { kind: ComponentKind },

    /// JSON conversion errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
