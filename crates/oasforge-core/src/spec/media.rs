//! Payload descriptions: media types, request bodies, and responses

use indexmap::IndexMap;
use serde_json::Value;

use crate::extensions::Extensions;
use crate::field::Field;
use crate::node::{FieldEntry, FieldView, SpecObject};
use crate::spec::components::{ComponentKind, ComponentObject};
use crate::spec::reference::{RefOr, Reference};
use crate::spec::schema::Schema;

/// Payload description for one media type, keyed by media-type string in
/// the owning `content` mapping
#[derive(Debug, Clone, PartialEq)]
pub struct MediaType {
    pub schema: Field<RefOr<Schema>>,
    pub example: Field<Value>,
    pub extensions: Extensions,
}

impl Default for MediaType {
    fn default() -> Self {
        Self {
            schema: Field::Skip,
            example: Field::Skip,
            extensions: Extensions::new(),
        }
    }
}

impl MediaType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Media type whose payload the given schema describes
    pub fn of(schema: impl Into<RefOr<Schema>>) -> Self {
        Self {
            schema: Field::Present(schema.into()),
            ..Self::default()
        }
    }
}

impl SpecObject for MediaType {
    fn object_type(&self) -> &'static str {
        "MediaType"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("schema", "schema", FieldView::slot(&self.schema)),
            FieldEntry::new("example", "example", FieldView::json(&self.example)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// Request payload of an operation
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    pub content: Field<IndexMap<String, MediaType>>,
    pub description: Field<String>,
    pub ref_name: Option<String>,
    pub extensions: Extensions,
}

impl Default for RequestBody {
    fn default() -> Self {
        Self {
            content: Field::Required,
            description: Field::Skip,
            ref_name: None,
            extensions: Extensions::new(),
        }
    }
}

impl RequestBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ref name this request body registers and hoists under
    pub fn named(mut self, ref_name: impl Into<String>) -> Self {
        self.ref_name = Some(ref_name.into());
        self
    }

    /// Add a media-type entry to the body's content mapping
    pub fn add_content(&mut self, media_type: impl Into<String>, payload: MediaType) -> &mut Self {
        self.content
            .get_or_insert_with(IndexMap::new)
            .insert(media_type.into(), payload);
        self
    }
}

impl SpecObject for RequestBody {
    fn object_type(&self) -> &'static str {
        "RequestBody"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("content", "content", FieldView::node_map(&self.content)),
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

impl ComponentObject for RequestBody {
    const KIND: ComponentKind = ComponentKind::RequestBodies;

    fn ref_name(&self) -> Option<&str> {
        self.ref_name.as_deref()
    }
}

impl From<Reference> for RefOr<RequestBody> {
    fn from(reference: Reference) -> Self {
        RefOr::Ref(reference)
    }
}

/// A single response of an operation, keyed by status code or `default`
/// in the owning `responses` mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub description: Field<String>,
    pub content: Field<IndexMap<String, MediaType>>,
    pub ref_name: Option<String>,
    pub extensions: Extensions,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            description: Field::Required,
            content: Field::Skip,
            ref_name: None,
            extensions: Extensions::new(),
        }
    }
}

impl Response {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Field::Present(description.into()),
            ..Self::default()
        }
    }

    /// Set the ref name this response registers and hoists under
    pub fn named(mut self, ref_name: impl Into<String>) -> Self {
        self.ref_name = Some(ref_name.into());
        self
    }

    /// Add a media-type entry to the response's content mapping
    pub fn add_content(&mut self, media_type: impl Into<String>, payload: MediaType) -> &mut Self {
        self.content
            .get_or_insert_with(IndexMap::new)
            .insert(media_type.into(), payload);
        self
    }
}

impl SpecObject for Response {
    fn object_type(&self) -> &'static str {
        "Response"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
            FieldEntry::new("content", "content", FieldView::node_map(&self.content)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

impl ComponentObject for Response {
    const KIND: ComponentKind = ComponentKind::Responses;

    fn ref_name(&self) -> Option<&str> {
        self.ref_name.as_deref()
    }
}

impl From<Reference> for RefOr<Response> {
    fn from(reference: Reference) -> Self {
        RefOr::Ref(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_of_schema() {
        let media_type = MediaType::of(Schema::new("string"));
        assert!(media_type.schema.is_present());
        assert!(media_type.example.is_skip());
    }

    #[test]
    fn test_add_content_materializes_mapping() {
        let mut body = RequestBody::new();
        assert!(body.content.is_required());

        body.add_content("application/json", MediaType::of(Schema::new("object")));
        let content = body.content.get().unwrap();
        assert!(content.contains_key("application/json"));
    }

    #[test]
    fn test_response_content_keeps_insertion_order() {
        let mut response = Response::new("ok");
        response.add_content("application/json", MediaType::new());
        response.add_content("text/plain", MediaType::new());
        response.add_content("application/xml", MediaType::new());

        let keys: Vec<&String> = response.content.get().unwrap().keys().collect();
        assert_eq!(keys, ["application/json", "text/plain", "application/xml"]);
    }
}
