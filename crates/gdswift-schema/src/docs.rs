//! Per-class documentation.
//!
//! The engine ships one XML file per class under `doc/classes/`, plus
//! `@GlobalScope.xml` for global constants and enums:
//!
//! ```text
//! <class name="@GlobalScope" version="4.2">
//!     <brief_description>Global scope constants and functions.</brief_description>
//!     <description>...</description>
//!     <constants>
//!         <constant name="SIDE_LEFT" value="0" enum="Side">
//!             Left side, usually used for [Control] or [StyleBox]-derived classes.
//!         </constant>
//!     </constants>
//! </class>
//! ```
//!
//! Documentation is best-effort. A generation run asks a [`DocSource`] for a
//! bundle by name and proceeds without doc comments when none comes back.

use crate::DocError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Documentation bundle of one class (or of the global scope).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDoc {
    pub name: String,
    pub brief_description: Option<String>,
    pub description: Option<String>,
    /// Constants and enum members in file order.
    pub constants: Vec<DocConstant>,
}

/// Documentation of one constant or enum member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocConstant {
    /// Schema identifier, matched exactly against enum member names.
    pub name: String,
    pub value: String,
    /// Owning enum, when the constant is an enum member.
    pub enum_name: Option<String>,
    pub text: String,
}

impl DocConstant {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }
}

impl ClassDoc {
    /// First constant whose identifier equals `name`.
    pub fn constant(&self, name: &str) -> Option<&DocConstant> {
        self.constants.iter().find(|c| c.name == name)
    }
}

/// Lookup of documentation bundles by class name.
pub trait DocSource {
    /// Return the bundle for `name` (a class name or [`crate::GLOBAL_SCOPE`]),
    /// or `None` when no documentation is available.
    fn class_doc(&self, name: &str) -> Option<ClassDoc>;
}

/// Documentation source that never has anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocs;

impl DocSource for NoDocs {
    fn class_doc(&self, _name: &str) -> Option<ClassDoc> {
        None
    }
}

/// Documentation held in memory, keyed by class name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocs {
    docs: HashMap<String, ClassDoc>,
}

impl InMemoryDocs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle, replacing any previous bundle of the same name.
    #[must_use]
    pub fn with(mut self, doc: ClassDoc) -> Self {
        self.docs.insert(doc.name.clone(), doc);
        self
    }
}

impl DocSource for InMemoryDocs {
    fn class_doc(&self, name: &str) -> Option<ClassDoc> {
        self.docs.get(name).cloned()
    }
}

/// Documentation read from an engine `doc/` directory.
#[derive(Debug, Clone)]
pub struct DocDirectory {
    root: PathBuf,
}

impl DocDirectory {
    /// `root` is the directory containing `classes/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the XML file documenting `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join("classes").join(format!("{name}.xml"))
    }

    /// Load one bundle, reporting failures instead of swallowing them.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(&self, name: &str) -> Result<Option<ClassDoc>, DocError> {
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(None);
        }
        load_file(&path).map(Some)
    }
}

impl DocSource for DocDirectory {
    fn class_doc(&self, name: &str) -> Option<ClassDoc> {
        match self.load(name) {
            Ok(Some(doc)) => Some(doc),
            Ok(None) => {
                tracing::debug!(class = name, "no documentation file");
                None
            }
            Err(e) => {
                tracing::warn!(class = name, "ignoring unreadable documentation: {}", e);
                None
            }
        }
    }
}

fn load_file(path: &Path) -> Result<ClassDoc, DocError> {
    let xml = std::fs::read_to_string(path)?;
    parse_class_doc(&xml)
}

/// Parse one class documentation file.
pub fn parse_class_doc(xml: &str) -> Result<ClassDoc, DocError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut doc: Option<ClassDoc> = None;
    let mut path: Vec<String> = Vec::new();
    // Text being collected for the innermost element of interest.
    let mut capture: Option<String> = None;
    let mut pending: Option<DocConstant> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                match (name.as_str(), parent_of(&path)) {
                    ("class", None) => doc = Some(class_from(e)?),
                    ("brief_description" | "description", Some("class")) => {
                        capture = Some(String::new());
                    }
                    ("constant", Some("constants")) => {
                        pending = Some(constant_from(e)?);
                        capture = Some(String::new());
                    }
                    _ => {}
                }
                path.push(name);
            }
            Ok(Event::Empty(ref e)) => {
                let is_constant = e.name().as_ref() == b"constant";
                if is_constant && parent_of(&path) == Some("constants") {
                    if let Some(doc) = doc.as_mut() {
                        doc.constants.push(constant_from(e)?);
                    }
                }
            }
            Ok(Event::Text(ref t)) => {
                if let Some(text) = capture.as_mut() {
                    text.push_str(std::str::from_utf8(t.as_ref())?);
                }
            }
            Ok(Event::GeneralRef(ref r)) => {
                if let Some(text) = capture.as_mut() {
                    let entity = std::str::from_utf8(&**r)?;
                    text.push_str(&resolve_entity(entity));
                }
            }
            Ok(Event::End(_)) => {
                let closed = path.pop();
                let Some(doc) = doc.as_mut() else {
                    continue;
                };
                match (closed.as_deref(), parent_of(&path)) {
                    (Some("brief_description"), Some("class")) => {
                        doc.brief_description = capture.take().map(|t| t.trim().to_string());
                    }
                    (Some("description"), Some("class")) => {
                        doc.description = capture.take().map(|t| t.trim().to_string());
                    }
                    (Some("constant"), Some("constants")) => {
                        if let Some(mut constant) = pending.take() {
                            constant.text = capture.take().unwrap_or_default().trim().to_string();
                            doc.constants.push(constant);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    doc.ok_or_else(|| DocError::InvalidStructure("no <class> element found".to_string()))
}

fn parent_of(path: &[String]) -> Option<&str> {
    path.last().map(String::as_str)
}

fn class_from(e: &BytesStart<'_>) -> Result<ClassDoc, DocError> {
    let mut doc = ClassDoc::default();
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"name" {
            doc.name = std::str::from_utf8(&attr.value)?.to_string();
        }
    }
    if doc.name.is_empty() {
        return Err(DocError::InvalidStructure(
            "<class> element without a name".to_string(),
        ));
    }
    Ok(doc)
}

fn constant_from(e: &BytesStart<'_>) -> Result<DocConstant, DocError> {
    let mut constant = DocConstant::default();
    for attr in e.attributes().flatten() {
        let value = std::str::from_utf8(&attr.value)?.to_string();
        match attr.key.as_ref() {
            b"name" => constant.name = value,
            b"value" => constant.value = value,
            b"enum" => constant.enum_name = Some(value),
            _ => {}
        }
    }
    Ok(constant)
}

/// Expand an entity reference (`lt`, `#38`, `#x26`) back to its text.
fn resolve_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "amp" => "&".to_string(),
        "quot" => "\"".to_string(),
        "apos" => "'".to_string(),
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse().ok()
            } else {
                None
            };
            match code.and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => format!("&{entity};"),
            }
        }
    }
}
