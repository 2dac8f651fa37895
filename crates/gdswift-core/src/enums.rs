//! Enumeration and bitfield synthesis.
//!
//! A schema enum becomes one of two Swift declarations:
//!
//! ```text
//! public enum Side: Int {            public struct MethodFlags: OptionSet {
//!     /// Left side.                     public let rawValue: Int
//!     case left = 0 // SIDE_LEFT         public init(rawValue: Int) {
//!     case top = 1 // SIDE_TOP               self.rawValue = rawValue
//! }                                      }
//!                                        public static let normal = MethodFlags(rawValue: 1)
//!                                    }
//! ```
//!
//! Plain enums keep the first member of each value as a live case; later
//! members with the same value stay visible as commented-out cases. Bitfields
//! keep every member. Enums named `Variant.X` are declared inside
//! `extension Variant`.

use crate::doc::write_doc;
use crate::naming::enum_member_name;
use crate::types::swift_type_name;
use crate::writer::SwiftWriter;
use gdswift_schema::{DocConstant, EnumDefinition, EnumMember};
use std::collections::{BTreeMap, HashSet};

/// Namespace whose enums are declared as members of `Variant`.
pub const VARIANT_NAMESPACE: &str = "Variant.";

/// Enum whose schema carries legacy mask/alias entries.
pub const INLINE_ALIGNMENT: &str = "InlineAlignment";

/// `InlineAlignment` members that are not emitted at all.
///
/// The engine lists combined masks and aliases next to the real alignment
/// values; they cannot be expressed as cases. Revalidate when the engine API
/// version changes.
pub const INLINE_ALIGNMENT_SKIPPED: &[&str] = &[
    "INLINE_ALIGNMENT_TOP_TO",
    "INLINE_ALIGNMENT_TO_TOP",
    "INLINE_ALIGNMENT_IMAGE_MASK",
    "INLINE_ALIGNMENT_TEXT_MASK",
];

/// Every registered enum, keyed by registration prefix + schema name.
#[derive(Debug, Clone, Default)]
pub struct EnumIndex {
    enums: BTreeMap<String, EnumDefinition>,
}

impl EnumIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `def` under `key`, replacing an earlier registration.
    pub fn register(&mut self, key: impl Into<String>, def: EnumDefinition) {
        self.enums.insert(key.into(), def);
    }

    pub fn get(&self, key: &str) -> Option<&EnumDefinition> {
        self.enums.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.enums.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    /// Keys and definitions in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnumDefinition)> {
        self.enums.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Context an enum list is generated in.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumScope<'a> {
    /// Owning class, `None` for global enums.
    pub class: Option<&'a str>,
    /// Documentation for the scope's constants and enum members.
    pub docs: &'a [DocConstant],
    /// Registration prefix; `None` leaves the enums unregistered.
    pub prefix: Option<&'a str>,
}

impl<'a> EnumScope<'a> {
    /// Global scope: no class, registered under the bare schema name.
    pub fn global(docs: &'a [DocConstant]) -> Self {
        Self {
            class: None,
            docs,
            prefix: Some(""),
        }
    }

    /// Scope of `class`, registered under `"<class>."`.
    pub fn class(class: &'a str, prefix: &'a str, docs: &'a [DocConstant]) -> Self {
        Self {
            class: Some(class),
            docs,
            prefix: Some(prefix),
        }
    }

    fn doc_for(&self, member: &EnumMember) -> Option<&'a DocConstant> {
        self.docs.iter().find(|d| d.name == member.name)
    }
}

/// Emits enum and bitfield declarations and records them in an [`EnumIndex`].
pub struct EnumSynthesizer<'a> {
    index: &'a mut EnumIndex,
}

impl<'a> EnumSynthesizer<'a> {
    pub fn new(index: &'a mut EnumIndex) -> Self {
        Self { index }
    }

    /// Emit every definition in `values`, in order.
    pub fn generate(&mut self, w: &mut SwiftWriter, scope: &EnumScope<'_>, values: &[EnumDefinition]) {
        for def in values {
            self.generate_one(w, scope, def);
        }
    }

    /// Emit one definition and register it when the scope has a prefix.
    pub fn generate_one(&mut self, w: &mut SwiftWriter, scope: &EnumScope<'_>, def: &EnumDefinition) {
        match def.name.strip_prefix(VARIANT_NAMESPACE) {
            Some(local) => {
                w.block("extension Variant", "", |w| emit(w, scope, def, local));
            }
            None => emit(w, scope, def, &def.name),
        }

        if let Some(prefix) = scope.prefix {
            self.index.register(format!("{prefix}{}", def.name), def.clone());
        }
    }
}

fn emit(w: &mut SwiftWriter, scope: &EnumScope<'_>, def: &EnumDefinition, local_name: &str) {
    if def.is_bitfield() {
        emit_bitfield(w, scope, def, local_name);
    } else {
        emit_enum(w, scope, def, local_name);
    }
}

fn emit_bitfield(w: &mut SwiftWriter, scope: &EnumScope<'_>, def: &EnumDefinition, local_name: &str) {
    let type_name = swift_type_name(local_name);
    w.block(&format!("public struct {type_name}: OptionSet"), "", |w| {
        w.line("public let rawValue: Int");
        w.block("public init(rawValue: Int)", "", |w| {
            w.line("self.rawValue = rawValue");
        });
        for member in &def.values {
            if let Some(doc) = scope.doc_for(member) {
                write_doc(w, scope.class, &doc.text);
            }
            w.line(&format!(
                "public static let {} = {type_name}(rawValue: {})",
                enum_member_name(local_name, &member.name),
                member.value
            ));
        }
    });
}

fn emit_enum(w: &mut SwiftWriter, scope: &EnumScope<'_>, def: &EnumDefinition, local_name: &str) {
    let type_name = swift_type_name(local_name);
    w.block(&format!("public enum {type_name}: Int"), "", |w| {
        let mut used = HashSet::new();
        for member in &def.values {
            if local_name == INLINE_ALIGNMENT && INLINE_ALIGNMENT_SKIPPED.contains(&member.name.as_str()) {
                continue;
            }
            let marker = if used.insert(member.value) { "" } else { "// " };
            if let Some(doc) = scope.doc_for(member) {
                write_doc(w, scope.class, &doc.text);
            }
            w.line(&format!(
                "{marker}case {} = {} // {}",
                enum_member_name(local_name, &member.name),
                member.value,
                member.name
            ));
        }
    });
}
