//! Three-state field values for document-section types
//!
//! Every declared field of a document-section type starts out holding one of
//! two markers and is replaced by `Present(value)` once the caller assigns a
//! real value. The markers keep "required but missing" and "deliberately
//! absent" distinguishable from every legitimate value, including `null` and
//! empty collections: a field holding `Present(Value::Null)` serializes as
//! `null`, while `Skip` produces no output key at all.
//!
//! Types declare their per-field defaults in hand-written `Default` impls,
//! which double as the field table of default states. There is deliberately
//! no blanket `Default` for `Field<T>` itself.
//!
//! Copyright (c) 2025 OasForge Team
//! Licensed under the Apache-2.0 license

use std::fmt;

/// Current state of a single declared field
#[derive(Clone, PartialEq)]
pub enum Field<T> {
    /// The field must be supplied before serialization; serializing a node
    /// while one of its fields is in this state fails with a
    /// missing-required-field error
    Required,
    /// The field is deliberately absent and its key is omitted from output
    /// entirely
    Skip,
    /// A concrete value, serialized under the field's declared output key
    Present(T),
}

impl<T> Field<T> {
    /// Whether the field still holds the `Required` marker
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Required)
    }

    /// Whether the field holds the `Skip` marker
    pub fn is_skip(&self) -> bool {
        matches!(self, Field::Skip)
    }

    /// Whether the field holds a concrete value
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// The contained value, if present
    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the contained value, if present
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Map a present value, carrying markers through unchanged
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Required => Field::Required,
            Field::Skip => Field::Skip,
            Field::Present(value) => Field::Present(f(value)),
        }
    }

    /// Build a field from an optional value, treating `None` as `Skip`
    pub fn or_skip(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Skip,
        }
    }

    /// Access the contained value, materializing a default over either marker
    ///
    /// This is what the mutating `add_*` helpers on document-section types
    /// use to turn a `Required` or `Skip` collection into an empty present
    /// one before inserting.
    pub fn get_or_insert_with(&mut self, default: impl FnOnce() -> T) -> &mut T {
        if !self.is_present() {
            *self = Field::Present(default());
        }
        match self {
            Field::Present(value) => value,
            // the state was just forced to Present above
            _ => unreachable!(),
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Field::Present(value.to_string())
    }
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
    /// Markers print as the fixed literals `Required` and `Skip`; present
    /// values print as the value itself, like they read at the call site
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Required => f.write_str("Required"),
            Field::Skip => f.write_str("Skip"),
            Field::Present(value) => value.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_checks() {
        let required: Field<String> = Field::Required;
        let skip: Field<String> = Field::Skip;
        let present = Field::Present("value".to_string());

        assert!(required.is_required());
        assert!(!required.is_present());
        assert!(skip.is_skip());
        assert!(present.is_present());
        assert!(!present.is_skip());
    }

    #[test]
    fn test_get_returns_present_only() {
        assert_eq!(Field::<u64>::Required.get(), None);
        assert_eq!(Field::<u64>::Skip.get(), None);
        assert_eq!(Field::Present(7u64).get(), Some(&7));
    }

    #[test]
    fn test_or_skip() {
        assert_eq!(Field::or_skip(Some(1)), Field::Present(1));
        assert_eq!(Field::<i32>::or_skip(None), Field::Skip);
    }

    #[test]
    fn test_map_carries_markers() {
        let doubled = Field::Present(2).map(|n| n * 2);
        assert_eq!(doubled, Field::Present(4));
        assert_eq!(Field::<i32>::Skip.map(|n| n * 2), Field::Skip);
        assert_eq!(Field::<i32>::Required.map(|n| n * 2), Field::Required);
    }

    #[test]
    fn test_get_or_insert_with_materializes_markers() {
        let mut field: Field<Vec<u8>> = Field::Required;
        field.get_or_insert_with(Vec::new).push(1);
        assert_eq!(field, Field::Present(vec![1]));

        let mut field: Field<Vec<u8>> = Field::Skip;
        field.get_or_insert_with(Vec::new).push(2);
        assert_eq!(field, Field::Present(vec![2]));
    }

    #[test]
    fn test_get_or_insert_with_keeps_existing_value() {
        let mut field = Field::Present(vec![1]);
        field.get_or_insert_with(Vec::new).push(2);
        assert_eq!(field, Field::Present(vec![1, 2]));
    }

    #[test]
    fn test_from_value() {
        let field: Field<String> = "title".into();
        assert_eq!(field, Field::Present("title".to_string()));
    }

    #[test]
    fn test_debug_literals_distinct_from_values() {
        assert_eq!(format!("{:?}", Field::<String>::Required), "Required");
        assert_eq!(format!("{:?}", Field::<String>::Skip), "Skip");
        // a real string that happens to spell a marker still prints quoted
        let tricky = Field::Present("Required".to_string());
        assert_eq!(format!("{:?}", tricky), "\"Required\"");
    }
}
