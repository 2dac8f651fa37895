//! Input model for gdswift
//!
//! This crate provides the two inputs a generation run consumes:
//! - [`ExtensionApi`], the engine's machine-readable API description
//!   (`extension_api.json`), decoded with serde
//! - [`DocSource`], a lookup of per-class human-readable documentation,
//!   backed by the engine's `doc/classes/*.xml` tree
//!
//! # Example
//!
//! ```no_run
//! use gdswift_schema::{DocDirectory, DocSource, ExtensionApi};
//!
//! let api = ExtensionApi::from_file("extension_api.json")?;
//! let docs = DocDirectory::new("godot/doc");
//!
//! println!("{} global enums", api.global_enums.len());
//! if let Some(global) = docs.class_doc("@GlobalScope") {
//!     println!("{} documented constants", global.constants.len());
//! }
//! # Ok::<(), gdswift_schema::SchemaError>(())
//! ```

mod api;
mod docs;
mod error;

pub use api::{
    ApiClass, ApiHeader, BuildConfigurationSizes, BuiltinClass, BuiltinMember, EnumDefinition,
    EnumMember, ExtensionApi, TypeSize,
};
pub use docs::{
    ClassDoc, DocConstant, DocDirectory, DocSource, InMemoryDocs, NoDocs, parse_class_doc,
};
pub use error::{DocError, SchemaError};

/// Result type for schema loading.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Documentation bundle name holding the global-scope constants.
pub const GLOBAL_SCOPE: &str = "@GlobalScope";
