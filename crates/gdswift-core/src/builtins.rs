//! Declarations of built-in types.
//!
//! The shape follows the classification:
//!
//! ```text
//! public struct Vector2 {                public final class GString {
//!     public static let nativeSize = 8       public static let nativeSize = 8
//!                                            var handle: UnsafeMutableRawPointer?
//!     public var x: Double               }
//!     public var y: Double
//! }
//! ```

use crate::classify::{ClassificationRegistry, TypeClass};
use crate::doc::write_doc;
use crate::enums::{EnumScope, EnumSynthesizer};
use crate::naming::{escape_swift, snake_to_camel};
use crate::types::{TypeMapper, swift_type_name};
use crate::writer::SwiftWriter;
use gdswift_schema::{BuiltinClass, ClassDoc};

/// Built-ins that bridge to Swift primitives and get no declaration.
///
/// Revalidate when the engine API version changes.
pub const PRIMITIVE_BUILTINS: &[&str] = &["Nil", "bool", "int", "float"];

/// Emits one declaration per built-in type.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinEmitter<'a> {
    classification: &'a ClassificationRegistry,
    mapper: TypeMapper<'a>,
}

impl<'a> BuiltinEmitter<'a> {
    pub fn new(classification: &'a ClassificationRegistry) -> Self {
        Self {
            classification,
            mapper: TypeMapper::new(classification),
        }
    }

    /// Whether `name` gets a declaration of its own.
    pub fn is_emitted(name: &str) -> bool {
        !PRIMITIVE_BUILTINS.contains(&name)
    }

    /// Emit `builtin` with its nested enums, registered under `"<Name>."`.
    pub fn emit(
        &self,
        w: &mut SwiftWriter,
        builtin: &BuiltinClass,
        doc: Option<&ClassDoc>,
        enums: &mut EnumSynthesizer<'_>,
    ) {
        let name = builtin.name.as_str();
        let type_name = swift_type_name(name);
        let class = self
            .classification
            .classify(name)
            .unwrap_or(TypeClass::OpaqueHandle);

        if let Some(brief) = doc.and_then(|d| d.brief_description.as_deref()) {
            write_doc(w, Some(&type_name), brief);
        }

        let header = match class {
            TypeClass::Value => format!("public struct {type_name}"),
            TypeClass::OpaqueHandle => format!("public final class {type_name}"),
        };
        let prefix = format!("{name}.");
        let constants = doc.map(|d| d.constants.as_slice()).unwrap_or_default();

        w.block(&header, "", |w| {
            match self.classification.size_of(name) {
                Some(size) => w.line(&format!("public static let nativeSize = {size}")),
                None => tracing::warn!(builtin = name, "no native size recorded, emitting sizeless type"),
            }

            match class {
                TypeClass::Value => {
                    if let Some(members) = builtin.members.as_deref() {
                        w.blank();
                        for member in members {
                            w.line(&format!(
                                "public var {}: {}",
                                escape_swift(&snake_to_camel(&member.name)),
                                self.mapper.map(&member.type_name, None)
                            ));
                        }
                    }
                }
                TypeClass::OpaqueHandle => w.line("var handle: UnsafeMutableRawPointer?"),
            }

            if !builtin.enums().is_empty() {
                w.blank();
                let scope = EnumScope::class(&type_name, &prefix, constants);
                enums.generate(w, &scope, builtin.enums());
            }
        });
        tracing::debug!(builtin = name, ?class, enums = builtin.enums().len(), "emitted built-in");
    }
}
