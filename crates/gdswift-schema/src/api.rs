//! The engine API description (`extension_api.json`).
//!
//! Only the fields the generator consumes are modelled; unknown fields are
//! ignored. Top-level sections are required, and a description missing any of
//! them is rejected as malformed. Fields the engine omits for some entries
//! are `Option`s, and the accessors on each type document the fallback.

use crate::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Decoded `extension_api.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionApi {
    /// Engine version information.
    #[serde(default)]
    pub header: Option<ApiHeader>,

    /// Built-in type sizes, one set per build configuration.
    pub builtin_class_sizes: Vec<BuildConfigurationSizes>,

    /// Global enumerations and bitfields.
    pub global_enums: Vec<EnumDefinition>,

    /// Built-in (variant) types such as `Vector2` or `String`.
    pub builtin_classes: Vec<BuiltinClass>,

    /// Engine classes.
    pub classes: Vec<ApiClass>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHeader {
    pub version_major: u32,
    pub version_minor: u32,
    pub version_patch: u32,
    #[serde(default)]
    pub version_status: Option<String>,
    #[serde(default)]
    pub version_full_name: Option<String>,
}

/// An enumeration or bitfield, at global, built-in or class scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// Schema name, possibly dotted (`Variant.Type`).
    pub name: String,

    /// Whether members are combinable flags. Built-in enums omit it.
    #[serde(default)]
    pub is_bitfield: Option<bool>,

    /// Members in schema order. Values may repeat.
    pub values: Vec<EnumMember>,
}

impl EnumDefinition {
    /// Create a plain enumeration.
    pub fn new(name: impl Into<String>, values: Vec<EnumMember>) -> Self {
        Self {
            name: name.into(),
            is_bitfield: Some(false),
            values,
        }
    }

    /// Create a bitfield.
    pub fn bitfield(name: impl Into<String>, values: Vec<EnumMember>) -> Self {
        Self {
            name: name.into(),
            is_bitfield: Some(true),
            values,
        }
    }

    /// Whether this is a bitfield; absent means plain enumeration.
    pub fn is_bitfield(&self) -> bool {
        self.is_bitfield.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Schema identifier, usually SCREAMING_SNAKE_CASE.
    pub name: String,
    pub value: i64,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Descriptor of a built-in type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinClass {
    pub name: String,

    /// Inline data members; absent for handle-backed types.
    #[serde(default)]
    pub members: Option<Vec<BuiltinMember>>,

    #[serde(default)]
    pub enums: Option<Vec<EnumDefinition>>,
}

impl BuiltinClass {
    /// Number of inline data members; absent counts as zero.
    pub fn member_count(&self) -> usize {
        self.members.as_ref().map_or(0, Vec::len)
    }

    /// Nested enums; absent means none.
    pub fn enums(&self) -> &[EnumDefinition] {
        self.enums.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinMember {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Built-in type sizes for one build configuration (`float_64`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfigurationSizes {
    pub build_configuration: String,
    pub sizes: Vec<TypeSize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSize {
    pub name: String,
    pub size: usize,
}

/// Descriptor of an engine class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiClass {
    pub name: String,

    /// Parent class; absent for the root class.
    #[serde(default)]
    pub inherits: Option<String>,

    #[serde(default)]
    pub is_refcounted: Option<bool>,

    #[serde(default)]
    pub is_instantiable: Option<bool>,

    #[serde(default)]
    pub enums: Option<Vec<EnumDefinition>>,
}

impl ApiClass {
    /// Nested enums; absent means none.
    pub fn enums(&self) -> &[EnumDefinition] {
        self.enums.as_deref().unwrap_or_default()
    }
}

impl ExtensionApi {
    /// Load the API description from a file.
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_str(&content)
    }

    /// Parse the API description from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Classes keyed by name.
    pub fn class_map(&self) -> HashMap<&str, &ApiClass> {
        self.classes.iter().map(|c| (c.name.as_str(), c)).collect()
    }

    /// Size table for one build configuration, if the description carries it.
    pub fn sizes_for(&self, build_configuration: &str) -> Option<&BuildConfigurationSizes> {
        self.builtin_class_sizes
            .iter()
            .find(|s| s.build_configuration == build_configuration)
    }

    /// Human-readable engine version, when the header is present.
    pub fn version_name(&self) -> Option<String> {
        let header = self.header.as_ref()?;
        Some(header.version_full_name.clone().unwrap_or_else(|| {
            format!(
                "{}.{}.{}",
                header.version_major, header.version_minor, header.version_patch
            )
        }))
    }
}
