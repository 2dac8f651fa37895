//! gdswift.toml parsing and merging with command-line flags

use anyhow::{Context, Result};
use gdswift_core::{GeneratorConfig, OutputMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "gdswift.toml";

/// API description used when neither the file nor the flags name one.
pub const DEFAULT_API_FILE: &str = "extension_api.json";

/// Output directory used when neither the file nor the flags name one.
pub const DEFAULT_OUTPUT_DIR: &str = "Generated";

/// gdswift.toml structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub generator: GeneratorSection,
}

/// `[generator]` section; every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    #[serde(default)]
    pub api: Option<PathBuf>,

    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub doc_root: Option<PathBuf>,

    #[serde(default)]
    pub build_configuration: Option<String>,

    #[serde(default)]
    pub output_mode: Option<OutputMode>,
}

/// Values given on the command line; `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub doc_root: Option<PathBuf>,
    pub build_configuration: Option<String>,
    pub per_type: bool,
}

/// Fully resolved settings of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub api: PathBuf,
    pub output: PathBuf,
    pub doc_root: Option<PathBuf>,
    pub generator: GeneratorConfig,
}

impl ConfigFile {
    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse config from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load `explicit` if given, otherwise `./gdswift.toml` if it exists,
    /// otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    tracing::debug!(path = DEFAULT_CONFIG_FILE, "using config from working directory");
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        let section = &self.generator;

        if let Some(build_configuration) = &section.build_configuration {
            if build_configuration.trim().is_empty() {
                anyhow::bail!("build_configuration cannot be empty");
            }
        }

        for (key, path) in [
            ("api", &section.api),
            ("output", &section.output),
            ("doc_root", &section.doc_root),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                anyhow::bail!("{} cannot be an empty path", key);
            }
        }

        Ok(())
    }

    /// Merge the file with command-line overrides.
    pub fn resolve(&self, overrides: Overrides) -> RunSettings {
        let section = &self.generator;

        let mut generator = GeneratorConfig::new();
        if let Some(build_configuration) = overrides
            .build_configuration
            .or_else(|| section.build_configuration.clone())
        {
            generator = generator.with_build_configuration(build_configuration);
        }
        if overrides.per_type {
            generator = generator.with_output_mode(OutputMode::PerType);
        } else if let Some(mode) = section.output_mode {
            generator = generator.with_output_mode(mode);
        }

        RunSettings {
            api: overrides
                .api
                .or_else(|| section.api.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_API_FILE)),
            output: overrides
                .output
                .or_else(|| section.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            doc_root: overrides.doc_root.or_else(|| section.doc_root.clone()),
            generator,
        }
    }
}
