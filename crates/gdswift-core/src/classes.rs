//! Declarations of engine classes.
//!
//! Only the class shell and its nested enums are emitted here; methods,
//! properties and signals belong to the binding generator.

use crate::doc::write_doc;
use crate::enums::{EnumScope, EnumSynthesizer};
use crate::registry::ReferenceTypeRegistry;
use crate::types::swift_type_name;
use crate::writer::SwiftWriter;
use gdswift_schema::{ApiClass, ClassDoc};

/// Base class of every engine class without a parent.
pub const ROOT_BASE: &str = "Wrapped";

/// Emits class shells and records each class as constructible.
pub struct ClassEmitter<'a> {
    reference_types: &'a mut ReferenceTypeRegistry,
}

impl<'a> ClassEmitter<'a> {
    pub fn new(reference_types: &'a mut ReferenceTypeRegistry) -> Self {
        Self { reference_types }
    }

    /// Emit `class` with its nested enums, registered under `"<Class>."`.
    pub fn emit(
        &mut self,
        w: &mut SwiftWriter,
        class: &ApiClass,
        doc: Option<&ClassDoc>,
        enums: &mut EnumSynthesizer<'_>,
    ) {
        let type_name = swift_type_name(&class.name);
        let base = class
            .inherits
            .as_deref()
            .map_or_else(|| ROOT_BASE.to_string(), swift_type_name);

        if let Some(brief) = doc.and_then(|d| d.brief_description.as_deref()) {
            write_doc(w, Some(&type_name), brief);
        }

        let prefix = format!("{}.", class.name);
        let constants = doc.map(|d| d.constants.as_slice()).unwrap_or_default();
        w.block(&format!("open class {type_name}: {base}"), "", |w| {
            let scope = EnumScope::class(&type_name, &prefix, constants);
            enums.generate(w, &scope, class.enums());
        });

        self.reference_types.register(&class.name);
        tracing::debug!(class = %class.name, %base, enums = class.enums().len(), "emitted class");
    }
}

#[cfg(test)]
#[path = "classes/classes_tests.rs"]
mod classes_tests;
