//! Reusable component registries
//!
//! The components section of a document holds named, reusable definitions
//! that the rest of the document points at with `$ref` paths. Four kinds of
//! definition are reusable: schemas, responses, parameters, and request
//! bodies. Each reusable type carries an out-of-band `ref_name` that decides
//! the name it is registered and hoisted under; the name itself never
//! appears in serialized output.
//!
//! Copyright (c) 2025 OasForge Team
//! Licensed under the Apache-2.0 license

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::extensions::Extensions;
use crate::field::Field;
use crate::node::{FieldEntry, FieldView, SpecObject};
use crate::spec::media::{RequestBody, Response};
use crate::spec::parameter::Parameter;
use crate::spec::reference::{RefOr, Reference};
use crate::spec::schema::Schema;

/// The registry a reusable component belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Schemas,
    Responses,
    Parameters,
    RequestBodies,
}

impl ComponentKind {
    /// Every registry kind, in serialized order
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Schemas,
        ComponentKind::Responses,
        ComponentKind::Parameters,
        ComponentKind::RequestBodies,
    ];

    /// Output key of the registry inside the components section
    pub fn key(&self) -> &'static str {
        match self {
            ComponentKind::Schemas => "schemas",
            ComponentKind::Responses => "responses",
            ComponentKind::Parameters => "parameters",
            ComponentKind::RequestBodies => "requestBodies",
        }
    }

    /// Reference target for a named entry of this kind
    pub fn ref_path(&self, name: &str) -> String {
        format!("#/components/{}/{}", self.key(), name)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Capability of types that can live in a components registry
pub trait ComponentObject: SpecObject {
    /// Registry this type belongs to
    const KIND: ComponentKind;

    /// The name this item registers and hoists under, if set
    fn ref_name(&self) -> Option<&str>;
}

/// The components section: named registries of reusable definitions
///
/// Registry values are [`RefOr`] so an entry may itself be an alias for
/// another reference target.
#[derive(Debug, Clone, PartialEq)]
pub struct Components {
    pub schemas: Field<IndexMap<String, RefOr<Schema>>>,
    pub responses: Field<IndexMap<String, RefOr<Response>>>,
    pub parameters: Field<IndexMap<String, RefOr<Parameter>>>,
    pub request_bodies: Field<IndexMap<String, RefOr<RequestBody>>>,
    pub extensions: Extensions,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            schemas: Field::Skip,
            responses: Field::Skip,
            parameters: Field::Skip,
            request_bodies: Field::Skip,
            extensions: Extensions::new(),
        }
    }
}

fn store_entry<T: ComponentObject>(
    registry: &mut Field<IndexMap<String, RefOr<T>>>,
    item: T,
) -> Result<Reference> {
    let name = match item.ref_name() {
        Some(name) => name.to_string(),
        None => return Err(Error::UnnamedComponent { kind: T::KIND }),
    };
    let reference = Reference::component(T::KIND, &name);
    log::debug!("registering {} entry `{}`", T::KIND, name);
    registry
        .get_or_insert_with(IndexMap::new)
        .insert(name, RefOr::Item(item));
    Ok(reference)
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named schema, returning the reference pointing at it
    ///
    /// # Errors
    ///
    /// Returns `Error::UnnamedComponent` if the item's ref name is unset.
    pub fn store_schema(&mut self, schema: Schema) -> Result<Reference> {
        store_entry(&mut self.schemas, schema)
    }

    /// Register a named response, returning the reference pointing at it
    pub fn store_response(&mut self, response: Response) -> Result<Reference> {
        store_entry(&mut self.responses, response)
    }

    /// Register a named parameter, returning the reference pointing at it
    pub fn store_parameter(&mut self, parameter: Parameter) -> Result<Reference> {
        store_entry(&mut self.parameters, parameter)
    }

    /// Register a named request body, returning the reference pointing at it
    pub fn store_request_body(&mut self, request_body: RequestBody) -> Result<Reference> {
        store_entry(&mut self.request_bodies, request_body)
    }

    /// Whether a registry holds an entry under the given name
    pub fn contains(&self, kind: ComponentKind, name: &str) -> bool {
        match kind {
            ComponentKind::Schemas => self
                .schemas
                .get()
                .is_some_and(|registry| registry.contains_key(name)),
            ComponentKind::Responses => self
                .responses
                .get()
                .is_some_and(|registry| registry.contains_key(name)),
            ComponentKind::Parameters => self
                .parameters
                .get()
                .is_some_and(|registry| registry.contains_key(name)),
            ComponentKind::RequestBodies => self
                .request_bodies
                .get()
                .is_some_and(|registry| registry.contains_key(name)),
        }
    }
}

impl SpecObject for Components {
    fn object_type(&self) -> &'static str {
        "Components"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("schemas", "schemas", FieldView::registry(&self.schemas)),
            FieldEntry::new("responses", "responses", FieldView::registry(&self.responses)),
            FieldEntry::new(
                "parameters",
                "parameters",
                FieldView::registry(&self.parameters),
            ),
            FieldEntry::new(
                "request_bodies",
                "requestBodies",
                FieldView::registry(&self.request_bodies),
            ),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_paths() {
        assert_eq!(
            ComponentKind::Schemas.ref_path("Pet"),
            "#/components/schemas/Pet"
        );
        assert_eq!(
            ComponentKind::RequestBodies.ref_path("NewPet"),
            "#/components/requestBodies/NewPet"
        );
    }

    #[test]
    fn test_store_named_schema_returns_reference() {
        let mut components = Components::new();
        let schema = Schema::new("object").named("Pet");
        let reference = components.store_schema(schema).unwrap();

        assert_eq!(reference.ref_path, "#/components/schemas/Pet");
        assert!(components.contains(ComponentKind::Schemas, "Pet"));
        assert!(!components.contains(ComponentKind::Responses, "Pet"));
    }

    #[test]
    fn test_store_unnamed_component_fails() {
        let mut components = Components::new();
        let err = components.store_response(Response::new("ok")).unwrap_err();
        match err {
            Error::UnnamedComponent { kind } => assert_eq!(kind, ComponentKind::Responses),
            other => panic!("unexpected error: {other}"),
        }
        assert!(components.responses.is_skip());
    }

    #[test]
    fn test_store_replaces_same_name() {
        let mut components = Components::new();
        components
            .store_schema(Schema::new("string").named("Id"))
            .unwrap();
        components
            .store_schema(Schema::new("integer").named("Id"))
            .unwrap();

        let registry = components.schemas.get().unwrap();
        assert_eq!(registry.len(), 1);
        let stored = registry.get("Id").and_then(RefOr::as_item).unwrap();
        assert_eq!(stored.schema_type.get().map(String::as_str), Some("integer"));
    }
}
