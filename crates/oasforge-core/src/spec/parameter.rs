//! Operation parameters

use std::fmt;

use crate::extensions::Extensions;
use crate::field::Field;
use crate::node::{FieldEntry, FieldView, SpecObject};
use crate::spec::components::{ComponentKind, ComponentObject};
use crate::spec::reference::{RefOr, Reference};
use crate::spec::schema::Schema;

/// Where a parameter is carried, serialized under the `in` key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Path => "path",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single operation parameter
///
/// Parameters are reusable components: give one a ref name with
/// [`Parameter::named`] to register or hoist it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Field<String>,
    pub location: Field<ParameterLocation>,
    pub description: Field<String>,
    pub required: Field<bool>,
    pub deprecated: Field<bool>,
    pub allow_empty_value: Field<bool>,
    pub schema: Field<RefOr<Schema>>,
    pub ref_name: Option<String>,
    pub extensions: Extensions,
}

impl Default for Parameter {
    fn default() -> Self {
        Self {
            name: Field::Required,
            location: Field::Present(ParameterLocation::Query),
            description: Field::Skip,
            required: Field::Skip,
            deprecated: Field::Skip,
            allow_empty_value: Field::Skip,
            schema: Field::Skip,
            ref_name: None,
            extensions: Extensions::new(),
        }
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: Field::Present(name.into()),
            location: Field::Present(location),
            ..Self::default()
        }
    }

    /// Set the ref name this parameter registers and hoists under
    pub fn named(mut self, ref_name: impl Into<String>) -> Self {
        self.ref_name = Some(ref_name.into());
        self
    }

    /// Attach the schema describing the parameter value
    pub fn with_schema(mut self, schema: impl Into<RefOr<Schema>>) -> Self {
        self.schema = Field::Present(schema.into());
        self
    }
}

impl SpecObject for Parameter {
    fn object_type(&self) -> &'static str {
        "Parameter"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("name", "name", FieldView::string(&self.name)),
            FieldEntry::new("location", "in", FieldView::display(&self.location)),
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
            FieldEntry::new("required", "required", FieldView::boolean(&self.required)),
            FieldEntry::new("deprecated", "deprecated", FieldView::boolean(&self.deprecated)),
            FieldEntry::new(
                "allow_empty_value",
                "allowEmptyValue",
                FieldView::boolean(&self.allow_empty_value),
            ),
            FieldEntry::new("schema", "schema", FieldView::slot(&self.schema)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

impl ComponentObject for Parameter {
    const KIND: ComponentKind = ComponentKind::Parameters;

    fn ref_name(&self) -> Option<&str> {
        self.ref_name.as_deref()
    }
}

impl From<Reference> for RefOr<Parameter> {
    fn from(reference: Reference) -> Self {
        RefOr::Ref(reference)
    }
}
