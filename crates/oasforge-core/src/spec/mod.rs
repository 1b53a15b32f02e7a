//! Document-section types
//!
//! One module per region of the document: the root and its top-level
//! neighbors, metadata, paths and operations, parameters, payloads,
//! schemas, references, and the components section.

pub mod components;
pub mod document;
pub mod info;
pub mod media;
pub mod parameter;
pub mod paths;
pub mod reference;
pub mod schema;

pub use components::{ComponentKind, ComponentObject, Components};
pub use document::{ExternalDocs, OpenApi, SecurityRequirement, Server, Tag, OPENAPI_VERSION};
pub use info::{Contact, Info, License};
pub use media::{MediaType, RequestBody, Response};
pub use parameter::{Parameter, ParameterLocation};
pub use paths::{Operation, PathItem};
pub use reference::{RefOr, Reference};
pub use schema::Schema;
