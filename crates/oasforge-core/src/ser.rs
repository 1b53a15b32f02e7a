//! Recursive serialization of the document graph
//!
//! A single depth-first pass walks the field tables exposed through
//! [`SpecObject::fields`] and produces `serde_json::Value` output. The pass
//! is fail-fast: the first field found still holding its `Required` marker
//! aborts the whole serialization with the traversal path from the root,
//! and nothing is emitted.
//!
//! Serializing through [`serialize_document`] additionally hoists ref-named
//! inline components into the document's components section, replacing each
//! occurrence with its `{"$ref": ...}` wrapper. [`to_value`] serializes a
//! single node standalone, with no hoisting.
//!
//! Copyright (c) 2025 OasForge Team
//! Licensed under the Apache-2.0 license

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::field::Field;
use crate::node::{FieldEntry, FieldView, ItemView, SpecObject};
use crate::spec::components::{ComponentKind, Components};
use crate::spec::document::OpenApi;
use crate::spec::reference::{RefOr, Reference};

/// Serialize a single node standalone
///
/// Ref-named nodes inside the graph stay inline; hoisting only happens
/// through [`serialize_document`].
pub fn to_value(node: &dyn SpecObject) -> Result<Value> {
    Serializer::new(None).serialize_node(node)
}

/// Serialize a whole document, hoisting ref-named inline components
pub fn serialize_document(root: &OpenApi) -> Result<Value> {
    let authored = match root.components.get() {
        Some(components) => authored_paths(components),
        None => HashSet::new(),
    };
    let mut serializer = Serializer::new(Some(HoistState {
        authored,
        collected: CollectedComponents::default(),
    }));
    let mut document = serializer.serialize_node(root)?;

    let collected = serializer
        .hoist
        .map(|state| state.collected)
        .unwrap_or_default();
    if !collected.is_empty() {
        merge_components(&mut document, collected);
    }
    Ok(document)
}

struct Serializer {
    /// Traversal path from the document root, reported in errors
    path: String,
    /// Present only when serializing through the document entry point
    hoist: Option<HoistState>,
}

struct HoistState {
    /// Ref paths of entries the caller authored in the components section;
    /// these win over hoisted definitions of the same name
    authored: HashSet<String>,
    collected: CollectedComponents,
}

/// Definitions lifted out of the graph, per registry, in hoist order
#[derive(Default)]
struct CollectedComponents {
    schemas: IndexMap<String, Value>,
    responses: IndexMap<String, Value>,
    parameters: IndexMap<String, Value>,
    request_bodies: IndexMap<String, Value>,
}

impl CollectedComponents {
    fn registry_mut(&mut self, kind: ComponentKind) -> &mut IndexMap<String, Value> {
        match kind {
            ComponentKind::Schemas => &mut self.schemas,
            ComponentKind::Responses => &mut self.responses,
            ComponentKind::Parameters => &mut self.parameters,
            ComponentKind::RequestBodies => &mut self.request_bodies,
        }
    }

    fn is_empty(&self) -> bool {
        self.schemas.is_empty()
            && self.responses.is_empty()
            && self.parameters.is_empty()
            && self.request_bodies.is_empty()
    }
}

impl Serializer {
    fn new(hoist: Option<HoistState>) -> Self {
        Self {
            path: String::from("$"),
            hoist,
        }
    }

    fn serialize_node(&mut self, node: &dyn SpecObject) -> Result<Value> {
        let mut output = Map::new();
        for FieldEntry { name, key, value } in node.fields() {
            match value {
                FieldView::Required => {
                    return Err(Error::MissingRequiredField {
                        object: node.object_type(),
                        field: name,
                        path: format!("{}.{}", self.path, key),
                    });
                }
                FieldView::Skip => {}
                FieldView::Raw(raw) => {
                    output.insert(key.to_string(), raw);
                }
                FieldView::Item(item) => {
                    let value = self.with_key(key, |ser| ser.serialize_item(item))?;
                    output.insert(key.to_string(), value);
                }
                FieldView::List(items) => {
                    let value = self.with_key(key, |ser| ser.serialize_list(items))?;
                    output.insert(key.to_string(), value);
                }
                FieldView::Map(entries) => {
                    let value = self.with_key(key, |ser| ser.serialize_map(entries))?;
                    output.insert(key.to_string(), value);
                }
            }
        }
        for (key, value) in node.extensions().iter() {
            output.insert(key.to_string(), value.clone());
        }
        Ok(Value::Object(output))
    }

    fn serialize_item(&mut self, item: ItemView<'_>) -> Result<Value> {
        match item {
            ItemView::Raw(value) => Ok(value),
            ItemView::Node(node) => self.serialize_node(node),
            ItemView::Component { kind, name, node } => self.serialize_component(kind, name, node),
        }
    }

    fn serialize_list(&mut self, items: Vec<ItemView<'_>>) -> Result<Value> {
        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let value = self.with_index(index, |ser| ser.serialize_item(item))?;
            output.push(value);
        }
        Ok(Value::Array(output))
    }

    fn serialize_map(&mut self, entries: Vec<(&str, ItemView<'_>)>) -> Result<Value> {
        let mut output = Map::new();
        for (key, item) in entries {
            let value = self.with_map_key(key, |ser| ser.serialize_item(item))?;
            output.insert(key.to_string(), value);
        }
        Ok(Value::Object(output))
    }

    /// Serialize an inline component occupying a slot
    ///
    /// Unnamed components, and any component outside a document pass, stay
    /// inline. Named ones hoist once per `(kind, name)` and every
    /// occurrence collapses to the reference wrapper.
    fn serialize_component(
        &mut self,
        kind: ComponentKind,
        name: Option<&str>,
        node: &dyn SpecObject,
    ) -> Result<Value> {
        let name = match name {
            Some(name) => name,
            None => return self.serialize_node(node),
        };
        let ref_path = kind.ref_path(name);

        let needs_definition = match self.hoist.as_mut() {
            None => return self.serialize_node(node),
            Some(hoist) => {
                if hoist.authored.contains(&ref_path) {
                    log::warn!(
                        "inline {kind} component `{name}` collides with an authored \
                         components entry; keeping the authored definition"
                    );
                    false
                } else if hoist.collected.registry_mut(kind).contains_key(name) {
                    false
                } else {
                    // reserve the slot before recursing so self-referential
                    // definitions terminate
                    hoist
                        .collected
                        .registry_mut(kind)
                        .insert(name.to_string(), Value::Null);
                    true
                }
            }
        };

        if needs_definition {
            log::debug!("hoisting {kind} component `{name}`");
            let definition =
                self.at_component_path(kind, name, |ser| ser.serialize_node(node))?;
            if let Some(hoist) = self.hoist.as_mut() {
                hoist
                    .collected
                    .registry_mut(kind)
                    .insert(name.to_string(), definition);
            }
        }

        Ok(Reference::new(ref_path).to_value())
    }

    fn with_key<R>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.path.len();
        self.path.push('.');
        self.path.push_str(key);
        let result = f(self);
        self.path.truncate(saved);
        result
    }

    fn with_map_key<R>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.path.len();
        self.path.push_str(&format!("[\"{key}\"]"));
        let result = f(self);
        self.path.truncate(saved);
        result
    }

    fn with_index<R>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.path.len();
        self.path.push_str(&format!("[{index}]"));
        let result = f(self);
        self.path.truncate(saved);
        result
    }

    fn at_component_path<R>(
        &mut self,
        kind: ComponentKind,
        name: &str,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let hoisted_path = format!("$.components.{}.{}", kind.key(), name);
        let saved = std::mem::replace(&mut self.path, hoisted_path);
        let result = f(self);
        self.path = saved;
        result
    }
}

fn authored_paths(components: &Components) -> HashSet<String> {
    let mut authored = HashSet::new();
    record_names(&mut authored, ComponentKind::Schemas, &components.schemas);
    record_names(&mut authored, ComponentKind::Responses, &components.responses);
    record_names(&mut authored, ComponentKind::Parameters, &components.parameters);
    record_names(
        &mut authored,
        ComponentKind::RequestBodies,
        &components.request_bodies,
    );
    authored
}

fn record_names<T>(
    authored: &mut HashSet<String>,
    kind: ComponentKind,
    registry: &Field<IndexMap<String, RefOr<T>>>,
) {
    if let Some(registry) = registry.get() {
        for name in registry.keys() {
            authored.insert(kind.ref_path(name));
        }
    }
}

/// Merge hoisted definitions into the serialized root
///
/// Registries already present (from authored components) keep their
/// entries; hoisted ones append after them. A missing `components` key is
/// appended after the root's declared output.
fn merge_components(document: &mut Value, mut collected: CollectedComponents) {
    let Value::Object(root) = document else { return };
    let components = root
        .entry("components")
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(components) = components else { return };

    for kind in ComponentKind::ALL {
        let entries = std::mem::take(collected.registry_mut(kind));
        if entries.is_empty() {
            continue;
        }
        let registry = components
            .entry(kind.key())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(registry) = registry {
            for (name, definition) in entries {
                registry.insert(name, definition);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::info::Info;
    use crate::spec::schema::Schema;
    use serde_json::json;

    #[test]
    fn test_missing_required_field_reports_path() {
        let mut info = Info::new("Pet Store", "1.0.0");
        info.title = Field::Required;

        let err = to_value(&info).unwrap_err();
        match err {
            Error::MissingRequiredField {
                object,
                field,
                path,
            } => {
                assert_eq!(object, "Info");
                assert_eq!(field, "title");
                assert_eq!(path, "$.title");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skip_produces_no_key() {
        let info = Info::new("Pet Store", "1.0.0");
        let value = to_value(&info).unwrap();
        assert_eq!(value, json!({"title": "Pet Store", "version": "1.0.0"}));
    }

    #[test]
    fn test_extensions_follow_declared_fields() {
        let mut info = Info::new("Pet Store", "1.0.0");
        info.extensions.insert("x-audience", "internal").unwrap();
        info.extensions.insert("x-owner", "platform").unwrap();

        let value = to_value(&info).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["title", "version", "x-audience", "x-owner"]);
    }

    #[test]
    fn test_standalone_serialization_keeps_named_schemas_inline() {
        let schema = Schema::object().property("id", Schema::new("integer").named("Id"));
        let value = to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "object",
                "properties": {"id": {"type": "integer"}},
            })
        );
    }

    #[test]
    fn test_list_index_appears_in_error_path() {
        let mut path_item = crate::spec::paths::PathItem::new();
        path_item.add_parameter(crate::spec::parameter::Parameter::default());

        let err = to_value(&path_item).unwrap_err();
        match err {
            Error::MissingRequiredField { path, .. } => {
                assert_eq!(path, "$.parameters[0].name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
