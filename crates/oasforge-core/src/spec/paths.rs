//! Path items and the operations attached to them

use indexmap::IndexMap;

use crate::extensions::Extensions;
use crate::field::Field;
use crate::node::{FieldEntry, FieldView, SpecObject};
use crate::spec::media::{RequestBody, Response};
use crate::spec::parameter::Parameter;
use crate::spec::reference::RefOr;

/// The operations available on a single path
#[derive(Debug, Clone, PartialEq)]
pub struct PathItem {
    pub summary: Field<String>,
    pub description: Field<String>,
    pub get: Field<Operation>,
    pub put: Field<Operation>,
    pub post: Field<Operation>,
    pub delete: Field<Operation>,
    pub options: Field<Operation>,
    pub head: Field<Operation>,
    pub patch: Field<Operation>,
    pub trace: Field<Operation>,
    pub parameters: Field<Vec<RefOr<Parameter>>>,
    pub extensions: Extensions,
}

impl Default for PathItem {
    fn default() -> Self {
        Self {
            summary: Field::Skip,
            description: Field::Skip,
            get: Field::Skip,
            put: Field::Skip,
            post: Field::Skip,
            delete: Field::Skip,
            options: Field::Skip,
            head: Field::Skip,
            patch: Field::Skip,
            trace: Field::Skip,
            parameters: Field::Skip,
            extensions: Extensions::new(),
        }
    }
}

impl PathItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter shared by every operation on this path
    pub fn add_parameter(&mut self, parameter: impl Into<RefOr<Parameter>>) -> &mut Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(parameter.into());
        self
    }
}

impl SpecObject for PathItem {
    fn object_type(&self) -> &'static str {
        "PathItem"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("summary", "summary", FieldView::string(&self.summary)),
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
            FieldEntry::new("get", "get", FieldView::node(&self.get)),
            FieldEntry::new("put", "put", FieldView::node(&self.put)),
            FieldEntry::new("post", "post", FieldView::node(&self.post)),
            FieldEntry::new("delete", "delete", FieldView::node(&self.delete)),
            FieldEntry::new("options", "options", FieldView::node(&self.options)),
            FieldEntry::new("head", "head", FieldView::node(&self.head)),
            FieldEntry::new("patch", "patch", FieldView::node(&self.patch)),
            FieldEntry::new("trace", "trace", FieldView::node(&self.trace)),
            FieldEntry::new("parameters", "parameters", FieldView::slot_list(&self.parameters)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// A single API operation on a path
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub tags: Field<Vec<String>>,
    pub summary: Field<String>,
    pub description: Field<String>,
    pub responses: Field<IndexMap<String, RefOr<Response>>>,
    pub operation_id: Field<String>,
    pub parameters: Field<Vec<RefOr<Parameter>>>,
    pub request_body: Field<RefOr<RequestBody>>,
    pub extensions: Extensions,
}

impl Default for Operation {
    fn default() -> Self {
        Self {
            tags: Field::Skip,
            summary: Field::Skip,
            description: Field::Skip,
            responses: Field::Required,
            operation_id: Field::Skip,
            parameters: Field::Skip,
            request_body: Field::Skip,
            extensions: Extensions::new(),
        }
    }
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag, keeping tags unique while preserving first-seen order
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        let tag = tag.into();
        let tags = self.tags.get_or_insert_with(Vec::new);
        if !tags.contains(&tag) {
            tags.push(tag);
        }
        self
    }

    /// Add a response under a status code or `default` key
    pub fn add_response(
        &mut self,
        status: impl Into<String>,
        response: impl Into<RefOr<Response>>,
    ) -> &mut Self {
        self.responses
            .get_or_insert_with(IndexMap::new)
            .insert(status.into(), response.into());
        self
    }

    /// Add a parameter specific to this operation
    pub fn add_parameter(&mut self, parameter: impl Into<RefOr<Parameter>>) -> &mut Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(parameter.into());
        self
    }
}

impl SpecObject for Operation {
    fn object_type(&self) -> &'static str {
        "Operation"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("tags", "tags", FieldView::string_list(&self.tags)),
            FieldEntry::new("summary", "summary", FieldView::string(&self.summary)),
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
            FieldEntry::new("responses", "responses", FieldView::slot_map(&self.responses)),
            FieldEntry::new("operation_id", "operationId", FieldView::string(&self.operation_id)),
            FieldEntry::new("parameters", "parameters", FieldView::slot_list(&self.parameters)),
            FieldEntry::new("request_body", "requestBody", FieldView::slot(&self.request_body)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
