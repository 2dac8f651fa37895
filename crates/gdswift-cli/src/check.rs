//! Check command implementation

use crate::config::{ConfigFile, Overrides};
use anyhow::{Context, Result};
use gdswift_core::ClassificationRegistry;
use gdswift_schema::ExtensionApi;
use std::path::PathBuf;

/// Validate the config and the API description it points at.
pub fn run(config_path: Option<PathBuf>, api: Option<PathBuf>) -> Result<()> {
    let config = ConfigFile::load(config_path.as_deref())?;
    config.validate()?;
    let settings = config.resolve(Overrides {
        api,
        ..Overrides::default()
    });

    println!("Checking API description: {}", settings.api.display());

    let api = ExtensionApi::from_file(&settings.api)
        .with_context(|| format!("Failed to load API description: {:?}", settings.api))?;
    let summary = Summary::of(&api, &settings.generator.build_configuration);

    if let Some(version) = api.version_name() {
        println!("✓ Engine: {}", version);
    }
    println!("✓ Global enums: {}", summary.global_enums);
    println!(
        "✓ Built-in types: {} ({} value, {} opaque)",
        summary.builtins, summary.value_types, summary.opaque_types
    );
    println!("✓ Classes: {}", summary.classes);
    if summary.has_sizes {
        println!("✓ Build configuration: {}", settings.generator.build_configuration);
    } else {
        println!(
            "! Build configuration {} not found, built-in sizes will be unset",
            settings.generator.build_configuration
        );
    }
    println!("\nAPI description is valid!");

    Ok(())
}

/// Counts reported by `gdswift check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub global_enums: usize,
    pub builtins: usize,
    pub value_types: usize,
    pub opaque_types: usize,
    pub classes: usize,
    pub has_sizes: bool,
}

impl Summary {
    pub fn of(api: &ExtensionApi, build_configuration: &str) -> Self {
        let classification =
            ClassificationRegistry::build(&api.builtin_classes, &api.builtin_class_sizes, build_configuration);
        let value_types = api
            .builtin_classes
            .iter()
            .filter(|b| classification.is_value_type(&b.name))
            .count();

        Self {
            global_enums: api.global_enums.len(),
            builtins: api.builtin_classes.len(),
            value_types,
            opaque_types: api.builtin_classes.len() - value_types,
            classes: api.classes.len(),
            has_sizes: api.sizes_for(build_configuration).is_some(),
        }
    }
}
