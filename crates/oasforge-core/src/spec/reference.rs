//! References and the reference-or-inline slot
//!
//! Everywhere the document format accepts either a reusable-component
//! reference or an inline definition, the model holds a [`RefOr<T>`]. The
//! tagged union makes the either/or exclusivity structural: a slot cannot
//! carry both occupants, so no runtime conflict check exists anywhere in
//! the crate.
//!
//! Copyright (c) 2025 OasForge Team
//! Licensed under the Apache-2.0 license

use serde_json::{json, Value};

use crate::node::ItemView;
use crate::spec::components::{ComponentKind, ComponentObject};

/// Pointer to a reusable component, serialized as `{"$ref": "<target>"}`
///
/// A reference is complete by construction; there is no unset state to
/// guard at serialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Reference target, e.g. `#/components/schemas/Pet`
    pub ref_path: String,
}

impl Reference {
    /// Reference to an arbitrary target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            ref_path: target.into(),
        }
    }

    /// Reference into the document's components section
    pub fn component(kind: ComponentKind, name: &str) -> Self {
        Self {
            ref_path: kind.ref_path(name),
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        json!({ "$ref": self.ref_path })
    }
}

/// Slot holding either a reference or an inline item
#[derive(Debug, Clone, PartialEq)]
pub enum RefOr<T> {
    /// Pointer to a definition living elsewhere
    Ref(Reference),
    /// Definition carried in place
    Item(T),
}

impl<T> RefOr<T> {
    /// Slot occupied by an inline item
    pub fn item(item: T) -> Self {
        RefOr::Item(item)
    }

    /// Slot occupied by a reference to an arbitrary target
    pub fn new_ref(target: impl Into<String>) -> Self {
        RefOr::Ref(Reference::new(target))
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, RefOr::Ref(_))
    }

    pub fn is_item(&self) -> bool {
        matches!(self, RefOr::Item(_))
    }

    /// The inline item, if this slot holds one
    pub fn as_item(&self) -> Option<&T> {
        match self {
            RefOr::Item(item) => Some(item),
            RefOr::Ref(_) => None,
        }
    }

    /// Mutable access to the inline item, if this slot holds one
    pub fn as_item_mut(&mut self) -> Option<&mut T> {
        match self {
            RefOr::Item(item) => Some(item),
            RefOr::Ref(_) => None,
        }
    }
}

impl<T: ComponentObject> RefOr<T> {
    /// View for slot positions: inline items expose their registry kind
    /// and ref name so the document serializer can hoist them
    pub(crate) fn view(&self) -> ItemView<'_> {
        match self {
            RefOr::Ref(reference) => ItemView::Raw(reference.to_value()),
            RefOr::Item(item) => ItemView::Component {
                kind: T::KIND,
                name: item.ref_name(),
                node: item,
            },
        }
    }

    /// View for registry positions: inline items serialize where they
    /// stand even when ref-named
    pub(crate) fn inline_view(&self) -> ItemView<'_> {
        match self {
            RefOr::Ref(reference) => ItemView::Raw(reference.to_value()),
            RefOr::Item(item) => ItemView::Node(item),
        }
    }
}

impl<T> From<T> for RefOr<T> {
    fn from(item: T) -> Self {
        RefOr::Item(item)
    }
}
