//! Routing of generated declarations into files.
//!
//! | File | Contents |
//! |------|----------|
//! | `generated-builtin/core-defs.swift` | global enums, constructor table |
//! | `generated-builtin/builtins.swift` | built-in types (single-file mode) |
//! | `generated-builtin/<Name>.swift` | one built-in type (per-type mode) |
//! | `generated/classes.swift` | engine classes (single-file mode) |
//! | `generated/<Name>.swift` | one engine class (per-type mode) |
//!
//! Every file starts with [`FILE_HEADER`]. Nothing touches the filesystem
//! until [`GeneratedOutput::write_to`] is called on a complete run.

use crate::config::OutputMode;
use crate::naming::to_pascal_case;
use crate::writer::SwiftWriter;
use crate::{GeneratorError, GeneratorResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Header written at the top of every generated file.
pub const FILE_HEADER: &str = "// This file is autogenerated, do not edit\nimport Foundation\n@_implementationOnly import GDExtension\n\n";

/// Directory holding the core definitions and the built-in types.
pub const BUILTIN_DIR: &str = "generated-builtin";

/// Directory holding the engine classes.
pub const CLASS_DIR: &str = "generated";

/// File holding global enums and the constructor table.
pub const CORE_DEFS_FILE: &str = "core-defs.swift";

/// A group of declarations that share an output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclarationGroup {
    Builtins,
    Classes,
}

impl DeclarationGroup {
    pub fn directory(self) -> &'static str {
        match self {
            DeclarationGroup::Builtins => BUILTIN_DIR,
            DeclarationGroup::Classes => CLASS_DIR,
        }
    }

    /// File name used in single-file mode.
    pub fn single_file_name(self) -> &'static str {
        match self {
            DeclarationGroup::Builtins => "builtins.swift",
            DeclarationGroup::Classes => "classes.swift",
        }
    }
}

/// Generated files keyed by path relative to the output root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedOutput {
    files: BTreeMap<PathBuf, String>,
}

impl GeneratedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: String) {
        self.files.insert(path.into(), text);
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Relative paths and file contents in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().map(|(p, t)| (p.as_path(), t.as_str()))
    }

    /// Write every file below `root`, creating directories as needed.
    pub fn write_to(&self, root: &Path) -> GeneratorResult<()> {
        for (relative, text) in &self.files {
            let path = root.join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
            }
            std::fs::write(&path, text).map_err(|e| GeneratorError::io(&path, e))?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "wrote file");
        }
        tracing::info!(files = self.files.len(), root = %root.display(), "output written");
        Ok(())
    }
}

/// Collects per-type declarations and lays them out per [`OutputMode`].
#[derive(Debug)]
pub struct OutputPartitioner {
    mode: OutputMode,
    groups: BTreeMap<DeclarationGroup, SwiftWriter>,
    output: GeneratedOutput,
}

impl OutputPartitioner {
    pub fn new(mode: OutputMode) -> Self {
        let mut groups = BTreeMap::new();
        if mode == OutputMode::SingleFile {
            for group in [DeclarationGroup::Builtins, DeclarationGroup::Classes] {
                groups.insert(group, SwiftWriter::with_header(FILE_HEADER));
            }
        }
        Self {
            mode,
            groups,
            output: GeneratedOutput::new(),
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Add the declarations of one type. `text` is written at depth zero.
    pub fn add(&mut self, group: DeclarationGroup, type_name: &str, text: &str) {
        match self.mode {
            OutputMode::SingleFile => {
                let w = self
                    .groups
                    .entry(group)
                    .or_insert_with(|| SwiftWriter::with_header(FILE_HEADER));
                push_raw(w, text);
            }
            OutputMode::PerType => {
                let path = Path::new(group.directory())
                    .join(format!("{}.swift", to_pascal_case(type_name)));
                self.output.insert(path, format!("{FILE_HEADER}{text}"));
            }
        }
    }

    /// Finish the run: `core` becomes `core-defs.swift`, group buffers
    /// become their single files.
    pub fn finish(mut self, core: SwiftWriter) -> GeneratedOutput {
        self.output.insert(
            Path::new(BUILTIN_DIR).join(CORE_DEFS_FILE),
            core.finish(),
        );
        for (group, w) in self.groups {
            self.output.insert(
                Path::new(group.directory()).join(group.single_file_name()),
                w.finish(),
            );
        }
        self.output
    }
}

/// Append already-indented text without re-indenting it.
fn push_raw(w: &mut SwiftWriter, text: &str) {
    let text = text.strip_suffix('\n').unwrap_or(text);
    if !text.is_empty() {
        w.line(text);
    }
}
