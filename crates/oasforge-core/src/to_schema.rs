//! Schema inference for Rust types
//!
//! [`ToSchema`] maps a Rust type to the schema describing its payload
//! shape. Unsupported types are compile errors, so there is no runtime
//! fallback path and no inference failure to handle.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use crate::field::Field;
use crate::spec::reference::RefOr;
use crate::spec::schema::Schema;

/// Types that know the schema describing their serialized shape
pub trait ToSchema {
    fn schema() -> Schema;
}

impl Schema {
    /// Schema of a Rust type, `Schema::of::<u32>()`
    pub fn of<T: ToSchema + ?Sized>() -> Schema {
        T::schema()
    }
}

fn formatted(schema_type: &str, format: &str) -> Schema {
    Schema {
        format: Field::Present(format.to_string()),
        ..Schema::new(schema_type)
    }
}

fn map_of(values: Schema) -> Schema {
    Schema {
        additional_properties: Field::Present(Box::new(RefOr::Item(values))),
        ..Schema::object()
    }
}

macro_rules! simple_schemas {
    ($($ty:ty => $type_name:literal),* $(,)?) => {
        $(
            impl ToSchema for $ty {
                fn schema() -> Schema {
                    Schema::new($type_name)
                }
            }
        )*
    };
}

macro_rules! formatted_schemas {
    ($($ty:ty => ($type_name:literal, $format:literal)),* $(,)?) => {
        $(
            impl ToSchema for $ty {
                fn schema() -> Schema {
                    formatted($type_name, $format)
                }
            }
        )*
    };
}

simple_schemas! {
    String => "string",
    str => "string",
    &str => "string",
    bool => "boolean",
}

formatted_schemas! {
    i8 => ("integer", "int32"),
    i16 => ("integer", "int32"),
    i32 => ("integer", "int32"),
    u8 => ("integer", "int32"),
    u16 => ("integer", "int32"),
    u32 => ("integer", "int32"),
    i64 => ("integer", "int64"),
    isize => ("integer", "int64"),
    u64 => ("integer", "int64"),
    usize => ("integer", "int64"),
    f32 => ("number", "float"),
    f64 => ("number", "double"),
}

impl<T: ToSchema> ToSchema for Vec<T> {
    fn schema() -> Schema {
        Schema::array_of(T::schema())
    }
}

impl<T: ToSchema> ToSchema for [T] {
    fn schema() -> Schema {
        Schema::array_of(T::schema())
    }
}

impl<V: ToSchema, S> ToSchema for HashMap<String, V, S> {
    fn schema() -> Schema {
        map_of(V::schema())
    }
}

impl<V: ToSchema> ToSchema for BTreeMap<String, V> {
    fn schema() -> Schema {
        map_of(V::schema())
    }
}

impl<V: ToSchema, S> ToSchema for IndexMap<String, V, S> {
    fn schema() -> Schema {
        map_of(V::schema())
    }
}

impl<T: ToSchema> ToSchema for Option<T> {
    fn schema() -> Schema {
        Schema {
            nullable: Field::Present(true),
            ..T::schema()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_and_format(schema: &Schema) -> (Option<&str>, Option<&str>) {
        (
            schema.schema_type.get().map(String::as_str),
            schema.format.get().map(String::as_str),
        )
    }

    #[test]
    fn test_simple_types() {
        assert_eq!(type_and_format(&Schema::of::<String>()), (Some("string"), None));
        assert_eq!(type_and_format(&Schema::of::<str>()), (Some("string"), None));
        assert_eq!(type_and_format(&Schema::of::<bool>()), (Some("boolean"), None));
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(
            type_and_format(&Schema::of::<u16>()),
            (Some("integer"), Some("int32"))
        );
        assert_eq!(
            type_and_format(&Schema::of::<i64>()),
            (Some("integer"), Some("int64"))
        );
        assert_eq!(
            type_and_format(&Schema::of::<usize>()),
            (Some("integer"), Some("int64"))
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(
            type_and_format(&Schema::of::<f32>()),
            (Some("number"), Some("float"))
        );
        assert_eq!(
            type_and_format(&Schema::of::<f64>()),
            (Some("number"), Some("double"))
        );
    }

    #[test]
    fn test_sequences_nest_item_schemas() {
        let schema = Schema::of::<Vec<i64>>();
        assert_eq!(schema.schema_type.get().map(String::as_str), Some("array"));
        let items = schema.items.get().and_then(|slot| slot.as_item()).unwrap();
        assert_eq!(type_and_format(items), (Some("integer"), Some("int64")));
    }

    #[test]
    fn test_maps_use_additional_properties() {
        let schema = Schema::of::<HashMap<String, bool>>();
        assert_eq!(schema.schema_type.get().map(String::as_str), Some("object"));
        let values = schema
            .additional_properties
            .get()
            .and_then(|slot| slot.as_item())
            .unwrap();
        assert_eq!(type_and_format(values), (Some("boolean"), None));
    }

    #[test]
    fn test_option_marks_nullable() {
        let schema = Schema::of::<Option<String>>();
        assert_eq!(schema.schema_type.get().map(String::as_str), Some("string"));
        assert_eq!(schema.nullable.get(), Some(&true));
    }
}
