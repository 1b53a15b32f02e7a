//! Document metadata: the info section and its nested objects

use crate::extensions::Extensions;
use crate::field::Field;
use crate::node::{FieldEntry, FieldView, SpecObject};

/// Metadata about the API, serialized under the document's `info` key
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    pub title: Field<String>,
    pub description: Field<String>,
    pub terms_of_service: Field<String>,
    pub contact: Field<Contact>,
    pub license: Field<License>,
    pub version: Field<String>,
    pub extensions: Extensions,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            title: Field::Required,
            description: Field::Skip,
            terms_of_service: Field::Skip,
            contact: Field::Skip,
            license: Field::Skip,
            version: Field::Required,
            extensions: Extensions::new(),
        }
    }
}

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: Field::Present(title.into()),
            version: Field::Present(version.into()),
            ..Self::default()
        }
    }
}

impl SpecObject for Info {
    fn object_type(&self) -> &'static str {
        "Info"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("title", "title", FieldView::string(&self.title)),
            FieldEntry::new("description", "description", FieldView::string(&self.description)),
            FieldEntry::new(
                "terms_of_service",
                "termsOfService",
                FieldView::string(&self.terms_of_service),
            ),
            FieldEntry::new("contact", "contact", FieldView::node(&self.contact)),
            FieldEntry::new("license", "license", FieldView::node(&self.license)),
            FieldEntry::new("version", "version", FieldView::string(&self.version)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// Contact information for the API
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: Field<String>,
    pub url: Field<String>,
    pub email: Field<String>,
    pub extensions: Extensions,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            name: Field::Skip,
            url: Field::Skip,
            email: Field::Skip,
            extensions: Extensions::new(),
        }
    }
}

impl Contact {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpecObject for Contact {
    fn object_type(&self) -> &'static str {
        "Contact"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("name", "name", FieldView::string(&self.name)),
            FieldEntry::new("url", "url", FieldView::string(&self.url)),
            FieldEntry::new("email", "email", FieldView::string(&self.email)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// License information for the API
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    pub name: Field<String>,
    pub url: Field<String>,
    pub extensions: Extensions,
}

impl Default for License {
    fn default() -> Self {
        Self {
            name: Field::Required,
            url: Field::Skip,
            extensions: Extensions::new(),
        }
    }
}

impl License {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Field::Present(name.into()),
            ..Self::default()
        }
    }
}

impl SpecObject for License {
    fn object_type(&self) -> &'static str {
        "License"
    }

    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("name", "name", FieldView::string(&self.name)),
            FieldEntry::new("url", "url", FieldView::string(&self.url)),
        ]
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
