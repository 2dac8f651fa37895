//! Value-type vs opaque-handle classification of built-in types.
//!
//! A built-in with inline data members (`Vector2`, `Color`) is a value type:
//! copied by value with inline storage. A built-in without data members
//! (`String`, `Array`, `Callable`) is an opaque handle to engine-side storage.
//! Marshaling code depends on this split, so it is computed once per run and
//! only read afterwards.

use gdswift_schema::{BuildConfigurationSizes, BuiltinClass};
use std::collections::HashMap;

/// Names treated as value types whatever their member count.
///
/// These bridge to Swift primitives or to the generic variant and carry no
/// data members in the schema. Revalidate when the engine API version changes.
pub const FORCED_VALUE_TYPES: &[&str] = &[
    "Float", "Int", "float", "int", "Variant", "Int32", "Bool", "bool",
];

/// Build configuration whose sizes are recorded by default.
pub const DEFAULT_BUILD_CONFIGURATION: &str = "float_64";

/// How a built-in is represented in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// Inline data members, passed by value.
    Value,
    /// No data members, represented by a handle to native storage.
    OpaqueHandle,
}

impl TypeClass {
    fn from_member_count(count: usize) -> Self {
        if count > 0 {
            TypeClass::Value
        } else {
            TypeClass::OpaqueHandle
        }
    }
}

/// Classification and native size of every built-in type.
#[derive(Debug, Clone, Default)]
pub struct ClassificationRegistry {
    classes: HashMap<String, TypeClass>,
    sizes: HashMap<String, usize>,
}

impl ClassificationRegistry {
    /// Classify `builtins` and record sizes from the `build_configuration`
    /// entry of `sizes`. Sizes stay unset when that configuration is absent.
    pub fn build(
        builtins: &[BuiltinClass],
        sizes: &[BuildConfigurationSizes],
        build_configuration: &str,
    ) -> Self {
        let mut classes: HashMap<String, TypeClass> = builtins
            .iter()
            .map(|b| (b.name.clone(), TypeClass::from_member_count(b.member_count())))
            .collect();
        for name in FORCED_VALUE_TYPES {
            classes.insert((*name).to_string(), TypeClass::Value);
        }

        let mut registry = Self {
            classes,
            sizes: HashMap::new(),
        };

        match sizes
            .iter()
            .find(|s| s.build_configuration == build_configuration)
        {
            Some(config) => {
                for size in &config.sizes {
                    registry.sizes.insert(size.name.clone(), size.size);
                }
            }
            None => {
                tracing::warn!(
                    build_configuration,
                    "build configuration not found, built-in sizes left unset"
                );
            }
        }

        let values = registry
            .classes
            .values()
            .filter(|c| **c == TypeClass::Value)
            .count();
        tracing::debug!(
            builtins = builtins.len(),
            value_types = values,
            sized = registry.sizes.len(),
            "classified built-in types"
        );

        registry
    }

    /// Classification of `name`, or `None` if it is not a built-in.
    pub fn classify(&self, name: &str) -> Option<TypeClass> {
        self.classes.get(name).copied()
    }

    /// Whether `name` is a known value type; unknown names are not.
    pub fn is_value_type(&self, name: &str) -> bool {
        self.classify(name) == Some(TypeClass::Value)
    }

    /// Whether `name` is a built-in (or forced) type at all.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Native size of `name` in the designated build configuration.
    pub fn size_of(&self, name: &str) -> Option<usize> {
        self.sizes.get(name).copied()
    }

    /// Number of classified names.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
