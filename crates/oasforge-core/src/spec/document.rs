//! The document root and its top-level neighbors
//!
//! Copyright (c) 2025 OasForge Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::Result;
use crate::extensions::Extensions;
use crate::field::Field;
use crate::node::{FieldEntry, FieldView, SpecObject};
use crate::ser;
use crate::spec::components::Components;
use crate::spec::info::Info;
use crate::spec::paths::PathItem;

/// Version of the document format this model targets
pub const OPENAPI_VERSION: &str = "3.0.0";

/// One security requirement: scheme name to the scopes it needs
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// The root document object
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApi {
    pub openapi: Field<String>,
    pub info: Field<Info>,
    pub servers: Field<Vec<Server>>,
    pub paths: Field<IndexMap<String, PathItem>>,
    pub components: Field<Components>,
    pub security: Field<Vec<SecurityRequirement>>,
    pub tags: Field<Vec<Tag>>,
    pub external_docs: Field<ExternalDocs>,
    pub extensions: Extensions,
}

impl Default for OpenApi {
    fn default() -> Self {
        Self {
            openapi: Field::Present(OPENAPI_VERSION.to_string()),
            info: Field::Required,
            servers: Field::Skip,
            paths: Field::Required,
            components: Field::Skip,
            security: Field::Skip,
            tags: Field::Skip,
            external_docs: Field::Skip,
            extensions: Extensions::new(),
        }
    }
}

impl OpenApi {
    pub fn new(info: Info) -> Self {
        Self {
            info: Field::Present(info),
            ..Self::default()
        }
    }

    /// Add a path item under its route template
    pub fn add_path(&mut self, route: impl Into<String>, path_item: PathItem) -> &mut Self {
        self.paths
            .get_or_insert_with(IndexMap::new)
            .insert(route.into(), path_item);
        self
    }

    /// Serialize the whole document, hoisting ref-named inline components
    /// into the components section
    ///
    /// # Errors
    ///
    /// Fails with `Error::MissingRequiredField` if any reachable field
    /// still holds its `Required` marker.
    pub fn serialize(&self) -> Result<Value> {
        ser::serialize_document(self)
    }

    /// Serialize and pretty-print as JSON text
    pub fn to_json_pretty(&self) -> Result<String> {
        let value = self.serialize()?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

fn security_view(field: &Field<Vec<SecurityRequirement>>) -> FieldView<'_> {
    match field {
        Field::Required => FieldView::Required,
        Field::Skip => FieldView::Skip,
        Field::Present(requirements) => FieldView::Raw(Value::Array(
            requirements
                .iter()
                .map(|requirement| {
                    let mut entry = serde_json::Map::new();
                    for (scheme, scopes) in requirement {
                        let scopes = scopes.iter().cloned().map(Value::String).collect();
                        entry.insert(scheme.clone(), Value::Array(scopes));
                    }
                    Value::Object(entry)
                })
                .collect(),
        )),
    }
}

impl SpecObject for OpenApi {
    fn object_type(&self) -> &'static str {
        "OpenApi"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("openapi", "openapi", FieldView::string(&self.openapi)),
            FieldEntry::new("info", "info", FieldView::node(&self.info)),
            FieldEntry::new("servers", "servers", FieldView::node_list(&self.servers)),
            FieldEntry::new("paths", "paths", FieldView::node_map(&self.paths)),
            FieldEntry::new("components", "components", FieldView::node(&self.components)),
            FieldEntry::new("security", "security", security_view(&self.security)),
            FieldEntry::new("tags", "tags", FieldView::node_list(&self.tags)),
            FieldEntry::new("external_docs", "externalDocs", FieldView::node(&self.external_docs)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// A server the API is reachable on
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub url: Field<String>,
    pub description: Field<String>,
    pub extensions: Extensions,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            url: Field::Required,
            description: Field::Skip,
            extensions: Extensions::new(),
        }
    }
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Field::Present(url.into()),
            ..Self::default()
        }
    }
}

impl SpecObject for Server {
    fn object_type(&self) -> &'static str {
        "Server"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("url", "url", FieldView::string(&self.url)),
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// A tag declared at the document level
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: Field<String>,
    pub description: Field<String>,
    pub external_docs: Field<ExternalDocs>,
    pub extensions: Extensions,
}

impl Default for Tag {
    fn default() -> Self {
        Self {
            name: Field::Required,
            description: Field::Skip,
            external_docs: Field::Skip,
            extensions: Extensions::new(),
        }
    }
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Field::Present(name.into()),
            ..Self::default()
        }
    }
}

impl SpecObject for Tag {
    fn object_type(&self) -> &'static str {
        "Tag"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("name", "name", FieldView::string(&self.name)),
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
            FieldEntry::new("external_docs", "externalDocs", FieldView::node(&self.external_docs)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// Link to external documentation
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalDocs {
    pub description: Field<String>,
    pub url: Field<String>,
    pub extensions: Extensions,
}

impl Default for ExternalDocs {
    fn default() -> Self {
        Self {
            description: Field::Skip,
            url: Field::Required,
            extensions: Extensions::new(),
        }
    }
}

impl ExternalDocs {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Field::Present(url.into()),
            ..Self::default()
        }
    }
}

impl SpecObject for ExternalDocs {
    fn object_type(&self) -> &'static str {
        "ExternalDocs"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
            FieldEntry::new("url", "url", FieldView::string(&self.url)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_defaults() {
        let document = OpenApi::default();
        assert_eq!(
            document.openapi.get().map(String::as_str),
            Some(OPENAPI_VERSION)
        );
        assert!(document.info.is_required());
        assert!(document.paths.is_required());
        assert!(document.components.is_skip());
    }

    #[test]
    fn test_add_path_materializes_mapping() {
        let mut document = OpenApi::new(Info::new("t", "1.0.0"));
        document.add_path("/pets", PathItem::new());
        document.add_path("/pets/{petId}", PathItem::new());

        let paths = document.paths.get().unwrap();
        let routes: Vec<&String> = paths.keys().collect();
        assert_eq!(routes, ["/pets", "/pets/{petId}"]);
    }

    #[test]
    fn test_security_view_shape() {
        let mut requirement = SecurityRequirement::new();
        requirement.insert("api_key".to_string(), Vec::new());
        requirement.insert("oauth".to_string(), vec!["read:pets".to_string()]);
        let field = Field::Present(vec![requirement]);

        match security_view(&field) {
            FieldView::Raw(value) => {
                assert_eq!(value, json!([{"api_key": [], "oauth": ["read:pets"]}]));
            }
            _ => panic!("expected a raw view"),
        }
    }
}
