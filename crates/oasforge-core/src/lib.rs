//! OasForge Core - Object model and serialization engine for OpenAPI 3.0 documents
//!
//! Build a document as typed Rust values, then serialize the whole graph in
//! one pass to ordered `serde_json::Value` output. Three-state fields keep
//! "required but missing" and "deliberately absent" distinct from every real
//! value, and ref-named inline components hoist into the document's
//! `components` section automatically.
//!
//! # Main Components
//!
//! - **Field States**: [`Field`] tracks required, skipped, and present values
//! - **Document Model**: typed sections from [`OpenApi`] down to [`Schema`]
//! - **Serialization Engine**: [`to_value`] for single nodes, [`OpenApi::serialize`]
//!   for whole documents with component hoisting
//! - **Schema Inference**: [`ToSchema`] maps Rust types to their schemas
//! - **Handler Glue**: [`OperationBuilder`] assembles operations from handler metadata
//!
//! # Example
//!
//! ```
//! use oasforge_core::{Info, MediaType, OpenApi, Operation, PathItem, Response, Schema};
//!
//! fn main() -> oasforge_core::Result<()> {
//!     let pet = Schema::object()
//!         .property("name", Schema::of::<String>())
//!         .property("age", Schema::of::<i64>())
//!         .named("Pet");
//!
//!     let mut response = Response::new("Your favourite pet");
//!     response.add_content("application/json", MediaType::of(pet));
//!
//!     let mut operation = Operation::new();
//!     operation.add_response("200", response);
//!
//!     let mut path_item = PathItem::new();
//!     path_item.get = operation.into();
//!
//!     let mut api = OpenApi::new(Info::new("Foo", "0.1.0"));
//!     api.add_path("/", path_item);
//!
//!     let document = api.serialize()?;
//!     assert_eq!(
//!         document["paths"]["/"]["get"]["responses"]["200"]["content"]
//!             ["application/json"]["schema"]["$ref"],
//!         "#/components/schemas/Pet"
//!     );
//!     assert_eq!(document["components"]["schemas"]["Pet"]["type"], "object");
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod error;
pub mod extensions;
pub mod field;
pub mod node;
pub mod ser;
pub mod spec;
pub mod to_schema;

// Re-export main types for convenience
pub use builder::OperationBuilder;
pub use error::{Error, Result};
pub use extensions::{Extensions, EXTENSION_PREFIX};
pub use field::Field;
pub use node::{FieldEntry, FieldView, ItemView, SpecObject};
pub use ser::{serialize_document, to_value};
pub use to_schema::ToSchema;

pub use spec::{
    // Document root and top-level neighbors
    ExternalDocs, OpenApi, SecurityRequirement, Server, Tag, OPENAPI_VERSION,

    // Metadata
    Contact, Info, License,

    // Paths and operations
    Operation, PathItem,

    // Parameters and payloads
    MediaType, Parameter, ParameterLocation, RequestBody, Response,

    // References and components
    ComponentKind, ComponentObject, Components, RefOr, Reference,

    // Schemas
    Schema,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_compose() {
        let mut operation = OperationBuilder::new()
            .summary("List pets")
            .response_schema::<Vec<i64>>("200", "pet ids")
            .build();
        operation.add_tag("pets");

        let value = to_value(&operation).unwrap();
        assert_eq!(value["summary"], "List pets");
        assert_eq!(value["tags"][0], "pets");
    }
}
