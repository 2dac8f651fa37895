//! Constructible reference types.
//!
//! Every engine class seen during generation is recorded here. At the end of
//! the run the registry is rendered as a dictionary literal that the runtime
//! uses to wrap a native object in the most derived Swift class:
//!
//! ```text
//! var godotFrameworkCtors: [String: Wrapped.Type] = [
//!     "Node": Node.self,
//!     "Object": Object.self,
//! ]
//! ```

use crate::types::swift_type_name;
use crate::writer::SwiftWriter;
use std::collections::BTreeMap;

/// Name of the generated lookup table.
pub const CTOR_TABLE: &str = "godotFrameworkCtors";

/// Schema class name to Swift type name, sorted by schema name.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTypeRegistry {
    types: BTreeMap<String, String>,
}

impl ReferenceTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name`; registering the same name twice keeps one entry.
    pub fn register(&mut self, name: &str) {
        self.types.insert(name.to_string(), swift_type_name(name));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Schema and Swift names in schema-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append the lookup table to `w`.
    pub fn render(&self, w: &mut SwiftWriter) {
        let declaration = format!("var {CTOR_TABLE}: [String: Wrapped.Type] = [");
        if self.types.is_empty() {
            w.line(&format!("{declaration}:]"));
            return;
        }

        w.line(&declaration);
        {
            let mut w = w.indent();
            for (name, swift_name) in &self.types {
                w.line(&format!("\"{name}\": {swift_name}.self,"));
            }
        }
        w.line("]");
    }
}
