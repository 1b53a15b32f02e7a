//! Schema objects describing payload shapes
//!
//! Every field starts out skipped: a default `Schema` serializes to `{}`,
//! and callers set only the keywords they mean. The nesting slots hold
//! [`RefOr<Schema>`] so any subschema position can be a `$ref` instead of
//! an inline definition.
//!
//! Copyright (c) 2025 OasForge Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde_json::Value;

use crate::extensions::Extensions;
use crate::field::Field;
use crate::node::{FieldEntry, FieldView, SpecObject};
use crate::spec::components::{ComponentKind, ComponentObject};
use crate::spec::reference::{RefOr, Reference};

/// A schema describing the shape of a payload value
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub title: Field<String>,
    pub description: Field<String>,
    pub schema_type: Field<String>,
    pub format: Field<String>,
    pub nullable: Field<bool>,
    pub default: Field<Value>,
    pub example: Field<Value>,
    pub enum_values: Field<Vec<Value>>,
    pub multiple_of: Field<f64>,
    pub maximum: Field<f64>,
    pub exclusive_maximum: Field<bool>,
    pub minimum: Field<f64>,
    pub exclusive_minimum: Field<bool>,
    pub max_length: Field<u64>,
    pub min_length: Field<u64>,
    pub pattern: Field<String>,
    pub items: Field<Box<RefOr<Schema>>>,
    pub properties: Field<IndexMap<String, RefOr<Schema>>>,
    pub additional_properties: Field<Box<RefOr<Schema>>>,
    pub required_properties: Field<Vec<String>>,
    pub all_of: Field<Vec<RefOr<Schema>>>,
    pub any_of: Field<Vec<RefOr<Schema>>>,
    pub one_of: Field<Vec<RefOr<Schema>>>,
    pub not_schema: Field<Box<RefOr<Schema>>>,
    pub ref_name: Option<String>,
    pub extensions: Extensions,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            title: Field::Skip,
            description: Field::Skip,
            schema_type: Field::Skip,
            format: Field::Skip,
            nullable: Field::Skip,
            default: Field::Skip,
            example: Field::Skip,
            enum_values: Field::Skip,
            multiple_of: Field::Skip,
            maximum: Field::Skip,
            exclusive_maximum: Field::Skip,
            minimum: Field::Skip,
            exclusive_minimum: Field::Skip,
            max_length: Field::Skip,
            min_length: Field::Skip,
            pattern: Field::Skip,
            items: Field::Skip,
            properties: Field::Skip,
            additional_properties: Field::Skip,
            required_properties: Field::Skip,
            all_of: Field::Skip,
            any_of: Field::Skip,
            one_of: Field::Skip,
            not_schema: Field::Skip,
            ref_name: None,
            extensions: Extensions::new(),
        }
    }
}

impl Schema {
    /// Schema with the given `type` keyword
    pub fn new(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Field::Present(schema_type.into()),
            ..Self::default()
        }
    }

    /// `{"type": "object"}`
    pub fn object() -> Self {
        Self::new("object")
    }

    /// `{"type": "array"}` with the given item schema
    pub fn array_of(items: impl Into<RefOr<Schema>>) -> Self {
        Self {
            items: Field::Present(Box::new(items.into())),
            ..Self::new("array")
        }
    }

    /// Add a named property, materializing the property mapping
    pub fn property(mut self, name: impl Into<String>, schema: impl Into<RefOr<Schema>>) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema.into());
        self
    }

    /// Set the ref name this schema registers and hoists under
    pub fn named(mut self, ref_name: impl Into<String>) -> Self {
        self.ref_name = Some(ref_name.into());
        self
    }
}

impl SpecObject for Schema {
    fn object_type(&self) -> &'static str {
        "Schema"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("title", "title", FieldView::string(&self.title)),
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
            FieldEntry::new("schema_type", "type", FieldView::string(&self.schema_type)),
            FieldEntry::new("format", "format", FieldView::string(&self.format)),
            FieldEntry::new("nullable", "nullable", FieldView::boolean(&self.nullable)),
            FieldEntry::new("default", "default", FieldView::json(&self.default)),
            FieldEntry::new("example", "example", FieldView::json(&self.example)),
            FieldEntry::new("enum_values", "enum", FieldView::json_list(&self.enum_values)),
            FieldEntry::new("multiple_of", "multipleOf", FieldView::float(&self.multiple_of)),
            FieldEntry::new("maximum", "maximum", FieldView::float(&self.maximum)),
            FieldEntry::new(
                "exclusive_maximum",
                "exclusiveMaximum",
                FieldView::boolean(&self.exclusive_maximum),
            ),
            FieldEntry::new("minimum", "minimum", FieldView::float(&self.minimum)),
            FieldEntry::new(
                "exclusive_minimum",
                "exclusiveMinimum",
                FieldView::boolean(&self.exclusive_minimum),
            ),
            FieldEntry::new("max_length", "maxLength", FieldView::unsigned(&self.max_length)),
            FieldEntry::new("min_length", "minLength", FieldView::unsigned(&self.min_length)),
            FieldEntry::new("pattern", "pattern", FieldView::string(&self.pattern)),
            FieldEntry::new("items", "items", FieldView::boxed_slot(&self.items)),
            FieldEntry::new("properties", "properties", FieldView::slot_map(&self.properties)),
            FieldEntry::new(
                "additional_properties",
                "additionalProperties",
                FieldView::boxed_slot(&self.additional_properties),
            ),
            FieldEntry::new(
                "required_properties",
                "required",
                FieldView::string_list(&self.required_properties),
            ),
            FieldEntry::new("all_of", "allOf", FieldView::slot_list(&self.all_of)),
            FieldEntry::new("any_of", "anyOf", FieldView::slot_list(&self.any_of)),
            FieldEntry::new("one_of", "oneOf", FieldView::slot_list(&self.one_of)),
            FieldEntry::new("not_schema", "not", FieldView::boxed_slot(&self.not_schema)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

impl ComponentObject for Schema {
    const KIND: ComponentKind = ComponentKind::Schemas;

    fn ref_name(&self) -> Option<&str> {
        self.ref_name.as_deref()
    }
}

impl From<Reference> for RefOr<Schema> {
    fn from(reference: Reference) -> Self {
        RefOr::Ref(reference)
    }
}
