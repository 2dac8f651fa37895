//! Generate command implementation

use crate::config::{ConfigFile, Overrides, RunSettings};
use anyhow::{Context, Result};
use gdswift_core::Generator;
use gdswift_schema::{DocDirectory, DocSource, ExtensionApi, NoDocs};
use std::path::PathBuf;

/// Run the generate command
pub fn run(config_path: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    let config = ConfigFile::load(config_path.as_deref())?;
    config.validate()?;
    let settings = config.resolve(overrides);

    generate(&settings)?;

    println!("✓ Generated Swift declarations in {}", settings.output.display());
    Ok(())
}

/// Load inputs, generate everything in memory, then write it out.
pub fn generate(settings: &RunSettings) -> Result<()> {
    let api = ExtensionApi::from_file(&settings.api)
        .with_context(|| format!("Failed to load API description: {:?}", settings.api))?;

    let docs: Box<dyn DocSource> = match &settings.doc_root {
        Some(root) => {
            if !root.is_dir() {
                tracing::warn!(doc_root = %root.display(), "documentation directory not found, generating without docs");
            }
            Box::new(DocDirectory::new(root))
        }
        None => Box::new(NoDocs),
    };

    let generation = Generator::new(&api, docs.as_ref(), settings.generator.clone())
        .run()
        .context("Generation failed")?;

    generation
        .output
        .write_to(&settings.output)
        .with_context(|| format!("Failed to write output to {:?}", settings.output))?;

    Ok(())
}
