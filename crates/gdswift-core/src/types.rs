//! Schema type references to Swift type references.
//!
//! # Type Mappings
//!
//! | Schema | Swift |
//! |--------|-------|
//! | `int` | `Int` (`Int8` … `UInt64` with a width meta) |
//! | `float` | `Double` (`Float` with meta `float`) |
//! | `bool` | `Bool` |
//! | `String`, `Array`, ... | renamed per [`RENAMED_TYPES`] |
//! | `enum::Variant.Type` | `Variant.GType` |
//! | `bitfield::MethodFlags` | `MethodFlags` |
//! | `typedarray::Vector2` | `VariantCollection<Vector2>` |
//! | `typedarray::Node` | `ObjectCollection<Node>` |

use crate::classify::ClassificationRegistry;

/// Schema names that clash with Swift or Foundation names.
///
/// Revalidate when the engine API version changes.
pub const RENAMED_TYPES: &[(&str, &str)] = &[
    ("Array", "GArray"),
    ("Dictionary", "GDictionary"),
    ("Error", "GodotError"),
    ("String", "GString"),
    ("Type", "GType"),
];

const ENUM_PREFIX: &str = "enum::";
const BITFIELD_PREFIX: &str = "bitfield::";
const TYPED_ARRAY_PREFIX: &str = "typedarray::";

/// Swift name of a single (possibly dotted) schema type name.
///
/// Each dotted segment is mapped on its own, so `Variant.Type` becomes
/// `Variant.GType`.
pub fn swift_type_name(name: &str) -> String {
    name.split('.')
        .map(map_segment)
        .collect::<Vec<_>>()
        .join(".")
}

fn map_segment(segment: &str) -> &str {
    match segment {
        "int" => "Int",
        "float" => "Double",
        "bool" => "Bool",
        "void" => "Void",
        _ => RENAMED_TYPES
            .iter()
            .find(|(from, _)| *from == segment)
            .map_or(segment, |(_, to)| *to),
    }
}

/// Swift type for a primitive with a width `meta` (`int32`, `float`, ...).
fn map_meta(meta: &str) -> Option<&'static str> {
    let mapped = match meta {
        "int8" => "Int8",
        "int16" => "Int16",
        "int32" => "Int32",
        "int64" => "Int",
        "uint8" => "UInt8",
        "uint16" => "UInt16",
        "uint32" => "UInt32",
        "uint64" => "UInt",
        "char16" => "UInt16",
        "char32" => "UInt32",
        "float" => "Float",
        "double" => "Double",
        _ => return None,
    };
    Some(mapped)
}

/// Maps schema type references, consulting the built-in classification for
/// typed collections.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    registry: &'a ClassificationRegistry,
}

impl<'a> TypeMapper<'a> {
    pub fn new(registry: &'a ClassificationRegistry) -> Self {
        Self { registry }
    }

    /// Swift type for a schema type reference and its optional `meta`.
    pub fn map(&self, schema_type: &str, meta: Option<&str>) -> String {
        if let Some(name) = schema_type
            .strip_prefix(ENUM_PREFIX)
            .or_else(|| schema_type.strip_prefix(BITFIELD_PREFIX))
        {
            return swift_type_name(name);
        }

        if let Some(element) = schema_type.strip_prefix(TYPED_ARRAY_PREFIX) {
            let element_type = self.map(element, None);
            return if self.registry.is_builtin(element) {
                format!("VariantCollection<{element_type}>")
            } else {
                format!("ObjectCollection<{element_type}>")
            };
        }

        if matches!(schema_type, "int" | "float") {
            if let Some(mapped) = meta.and_then(map_meta) {
                return mapped.to_string();
            }
        }

        swift_type_name(schema_type)
    }
}
