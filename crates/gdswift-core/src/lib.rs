//! gdswift-core - Swift declaration synthesis
//!
//! This crate turns a decoded engine API description into Swift source:
//! - [`naming`] normalizes schema identifiers into Swift identifiers
//! - [`classify`] splits built-ins into value types and opaque handles
//! - [`enums`] renders enumerations and option sets
//! - [`writer`] is the indentation-aware buffer every emitter writes into
//! - [`Generator`] runs all of it and returns the files to write
//!
//! # Example
//!
//! ```no_run
//! use gdswift_core::{Generator, GeneratorConfig};
//! use gdswift_schema::{DocDirectory, ExtensionApi};
//! use std::path::Path;
//!
//! let api = ExtensionApi::from_file("extension_api.json")?;
//! let docs = DocDirectory::new("godot/doc");
//!
//! let generation = Generator::new(&api, &docs, GeneratorConfig::default()).run()?;
//! generation.output.write_to(Path::new("Generated"))?;
//! # Ok::<(), gdswift_core::GeneratorError>(())
//! ```

pub mod builtins;
pub mod classes;
pub mod classify;
mod config;
pub mod doc;
pub mod enums;
mod error;
mod generator;
pub mod naming;
pub mod output;
pub mod registry;
pub mod types;
pub mod writer;

pub use classify::{ClassificationRegistry, TypeClass};
pub use config::{GeneratorConfig, OutputMode};
pub use enums::{EnumIndex, EnumScope, EnumSynthesizer};
pub use error::{GeneratorError, GeneratorResult};
pub use generator::{Generation, Generator};
pub use output::{GeneratedOutput, OutputPartitioner};
pub use registry::ReferenceTypeRegistry;
pub use writer::SwiftWriter;
