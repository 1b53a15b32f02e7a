//! Operation assembly from handler metadata
//!
//! [`OperationBuilder`] collects what a route-registration layer knows
//! about a handler (doc text, payload types, tags) and produces the
//! corresponding [`Operation`]. Schema-bearing payloads wrap in an
//! `application/json` media type.
//!
//! Copyright (c) 2025 OasForge Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;

use crate::field::Field;
use crate::spec::media::{MediaType, RequestBody, Response};
use crate::spec::parameter::Parameter;
use crate::spec::paths::Operation;
use crate::spec::reference::RefOr;
use crate::to_schema::ToSchema;

/// Step-by-step construction of an [`Operation`]
#[derive(Debug, Clone, Default)]
pub struct OperationBuilder {
    summary: Option<String>,
    description: Option<String>,
    operation_id: Option<String>,
    tags: Vec<String>,
    parameters: Vec<RefOr<Parameter>>,
    request_body: Option<RefOr<RequestBody>>,
    responses: IndexMap<String, RefOr<Response>>,
}

impl OperationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Use a handler's doc text: the full text becomes the description,
    /// and when no summary was set explicitly, the first non-empty line
    /// becomes the summary
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if self.summary.is_none() {
            self.summary = text
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(str::to_string);
        }
        self.description = Some(text);
        self
    }

    pub fn operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    /// Add a tag, keeping tags unique while preserving first-seen order
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    pub fn parameter(mut self, parameter: impl Into<RefOr<Parameter>>) -> Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Declare the request payload from a Rust type
    pub fn request_schema<T: ToSchema + ?Sized>(self) -> Self {
        let mut body = RequestBody::new();
        body.add_content("application/json", MediaType::of(T::schema()));
        self.request_body(body)
    }

    pub fn request_body(mut self, body: impl Into<RefOr<RequestBody>>) -> Self {
        self.request_body = Some(body.into());
        self
    }

    /// Declare a response payload from a Rust type
    pub fn response_schema<T: ToSchema + ?Sized>(
        self,
        status: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut response = Response::new(description);
        response.add_content("application/json", MediaType::of(T::schema()));
        self.response(status, response)
    }

    pub fn response(
        mut self,
        status: impl Into<String>,
        response: impl Into<RefOr<Response>>,
    ) -> Self {
        self.responses.insert(status.into(), response.into());
        self
    }

    /// Produce the operation
    ///
    /// `responses` is always present, as an empty mapping when nothing was
    /// declared, so the built operation serializes without further setup.
    pub fn build(self) -> Operation {
        Operation {
            tags: if self.tags.is_empty() {
                Field::Skip
            } else {
                Field::Present(self.tags)
            },
            summary: Field::or_skip(self.summary),
            description: Field::or_skip(self.description),
            responses: Field::Present(self.responses),
            operation_id: Field::or_skip(self.operation_id),
            parameters: if self.parameters.is_empty() {
                Field::Skip
            } else {
                Field::Present(self.parameters)
            },
            request_body: Field::or_skip(self.request_body),
            ..Operation::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::parameter::ParameterLocation;

    #[test]
    fn test_doc_derives_summary_from_first_nonempty_line() {
        let operation = OperationBuilder::new()
            .doc("\n  Find pets.\n\n  Returns every pet in the store.\n")
            .build();

        assert_eq!(
            operation.summary.get().map(String::as_str),
            Some("Find pets.")
        );
        assert!(operation
            .description
            .get()
            .is_some_and(|text| text.contains("Returns every pet")));
    }

    #[test]
    fn test_explicit_summary_wins_over_doc() {
        let operation = OperationBuilder::new()
            .summary("List pets")
            .doc("Something else entirely.")
            .build();

        assert_eq!(
            operation.summary.get().map(String::as_str),
            Some("List pets")
        );
    }

    #[test]
    fn test_schema_payloads_wrap_in_json_media_type() {
        let operation = OperationBuilder::new()
            .request_schema::<Vec<i64>>()
            .response_schema::<i64>("200", "the count")
            .build();

        let body = operation
            .request_body
            .get()
            .and_then(RefOr::as_item)
            .unwrap();
        assert!(body.content.get().unwrap().contains_key("application/json"));

        let responses = operation.responses.get().unwrap();
        let response = responses.get("200").and_then(RefOr::as_item).unwrap();
        assert!(response
            .content
            .get()
            .unwrap()
            .contains_key("application/json"));
    }

    #[test]
    fn test_parameters_collect_in_attachment_order() {
        let operation = OperationBuilder::new()
            .parameter(Parameter::new("limit", ParameterLocation::Query))
            .parameter(Parameter::new("offset", ParameterLocation::Query))
            .build();

        assert_eq!(operation.parameters.get().map(Vec::len), Some(2));

        let value = crate::ser::to_value(&operation).unwrap();
        assert_eq!(value["parameters"][0]["name"], "limit");
        assert_eq!(value["parameters"][1]["name"], "offset");
    }

    #[test]
    fn test_build_without_responses_leaves_empty_mapping() {
        let operation = OperationBuilder::new().build();
        assert_eq!(operation.responses.get().map(IndexMap::len), Some(0));
    }

    #[test]
    fn test_tags_deduplicate() {
        let operation = OperationBuilder::new()
            .tag("pets")
            .tag("pets")
            .tag("store")
            .build();
        assert_eq!(
            operation.tags.get(),
            Some(&vec!["pets".to_string(), "store".to_string()])
        );
    }
}
