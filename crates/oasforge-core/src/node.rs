//! Spec-object capability surface shared by every document-section type
//!
//! Document-section types do not serialize themselves. Each one exposes an
//! ordered field table through [`SpecObject::fields`], and the single
//! recursive algorithm in [`crate::ser`] consumes those views. This keeps
//! the traversal, required-field enforcement, and extension merging in one
//! place instead of duplicated per type.
//!
//! The view constructors on [`FieldView`] cover one field shape each, so a
//! `fields()` implementation stays a flat, declarative table.
//!
//! Copyright (c) 2025 OasForge Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde_json::Value;

use crate::extensions::Extensions;
use crate::field::Field;
use crate::spec::components::{ComponentKind, ComponentObject};
use crate::spec::reference::RefOr;

/// Capability set every document-section type implements
pub trait SpecObject {
    /// Type name used in diagnostics, e.g. `"Info"`
    fn object_type(&self) -> &'static str;

    /// Declared fields, in declaration order
    ///
    /// Declaration order is output order: serializing the same node twice
    /// yields byte-for-byte identical output.
    fn fields(&self) -> Vec<FieldEntry<'_>>;

    /// Extension entries attached to this node
    fn extensions(&self) -> &Extensions;
}

/// One row of a type's field table
pub struct FieldEntry<'a> {
    /// Rust-side field name, reported in missing-required diagnostics
    pub name: &'static str,
    /// Output key in the serialized document
    pub key: &'static str,
    /// Borrowed view of the field's current value
    pub value: FieldView<'a>,
}

impl<'a> FieldEntry<'a> {
    pub fn new(name: &'static str, key: &'static str, value: FieldView<'a>) -> Self {
        Self { name, key, value }
    }
}

/// Serializer-facing view of a single field value
pub enum FieldView<'a> {
    /// Field still holds its `Required` marker
    Required,
    /// Field is deliberately omitted from output
    Skip,
    /// Pre-encoded scalar or plain data, passed through unchanged
    Raw(Value),
    /// One nested item
    Item(ItemView<'a>),
    /// Ordered sequence of items
    List(Vec<ItemView<'a>>),
    /// Ordered mapping of named items
    Map(Vec<(&'a str, ItemView<'a>)>),
}

/// One element inside an item, list, or map view
pub enum ItemView<'a> {
    /// Pre-encoded value
    Raw(Value),
    /// Nested node, serialized recursively
    Node(&'a dyn SpecObject),
    /// Inline component occupying a slot, carrying its registry kind and
    /// ref name so the document serializer can hoist it
    Component {
        kind: ComponentKind,
        name: Option<&'a str>,
        node: &'a dyn SpecObject,
    },
}

impl<'a> FieldView<'a> {
    /// View of a string field
    pub fn string(field: &'a Field<String>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(value) => Self::Raw(Value::String(value.clone())),
        }
    }

    /// View of a field whose value serializes as its display string
    pub fn display<T: std::fmt::Display>(field: &'a Field<T>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(value) => Self::Raw(Value::String(value.to_string())),
        }
    }

    /// View of a boolean field
    pub fn boolean(field: &'a Field<bool>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(value) => Self::Raw(Value::Bool(*value)),
        }
    }

    /// View of an unsigned integer field
    pub fn unsigned(field: &'a Field<u64>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(value) => Self::Raw(Value::from(*value)),
        }
    }

    /// View of a floating-point field
    ///
    /// Non-finite numbers fall back to `null`, matching serde_json.
    pub fn float(field: &'a Field<f64>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(value) => Self::Raw(Value::from(*value)),
        }
    }

    /// View of a free-form JSON field
    pub fn json(field: &'a Field<Value>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(value) => Self::Raw(value.clone()),
        }
    }

    /// View of a list of free-form JSON values
    pub fn json_list(field: &'a Field<Vec<Value>>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(values) => Self::Raw(Value::Array(values.clone())),
        }
    }

    /// View of a list of strings
    pub fn string_list(field: &'a Field<Vec<String>>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(values) => Self::Raw(Value::Array(
                values.iter().cloned().map(Value::String).collect(),
            )),
        }
    }

    /// View of a nested node field
    pub fn node<T: SpecObject>(field: &'a Field<T>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(node) => Self::Item(ItemView::Node(node)),
        }
    }

    /// View of a list of nested nodes
    pub fn node_list<T: SpecObject>(field: &'a Field<Vec<T>>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(nodes) => Self::List(
                nodes
                    .iter()
                    .map(|node| ItemView::Node(node as &dyn SpecObject))
                    .collect(),
            ),
        }
    }

    /// View of a mapping of named nested nodes
    pub fn node_map<T: SpecObject>(field: &'a Field<IndexMap<String, T>>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(map) => Self::Map(
                map.iter()
                    .map(|(key, node)| (key.as_str(), ItemView::Node(node as &dyn SpecObject)))
                    .collect(),
            ),
        }
    }

    /// View of a reference-or-inline slot
    pub fn slot<T: ComponentObject>(field: &'a Field<RefOr<T>>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(slot) => Self::Item(slot.view()),
        }
    }

    /// View of a boxed reference-or-inline slot (self-nesting types)
    pub fn boxed_slot<T: ComponentObject>(field: &'a Field<Box<RefOr<T>>>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(slot) => Self::Item(slot.view()),
        }
    }

    /// View of a list of reference-or-inline slots
    pub fn slot_list<T: ComponentObject>(field: &'a Field<Vec<RefOr<T>>>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(slots) => Self::List(slots.iter().map(|slot| slot.view()).collect()),
        }
    }

    /// View of a mapping of named reference-or-inline slots
    pub fn slot_map<T: ComponentObject>(field: &'a Field<IndexMap<String, RefOr<T>>>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(map) => Self::Map(
                map.iter()
                    .map(|(key, slot)| (key.as_str(), slot.view()))
                    .collect(),
            ),
        }
    }

    /// View of a components registry
    ///
    /// Registry entries serialize inline where they stand even when
    /// ref-named; only their nested slots participate in hoisting.
    pub fn registry<T: ComponentObject>(field: &'a Field<IndexMap<String, RefOr<T>>>) -> Self {
        match field {
            Field::Required => Self::Required,
            Field::Skip => Self::Skip,
            Field::Present(map) => Self::Map(
                map.iter()
                    .map(|(key, slot)| (key.as_str(), slot.inline_view()))
                    .collect(),
            ),
        }
    }
}
