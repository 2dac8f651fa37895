//! Generation run configuration

use crate::classify::DEFAULT_BUILD_CONFIGURATION;
use crate::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};

/// How generated declarations are grouped into files.
///
/// Partitioning never changes declaration content, only where it lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// One file per declaration group (`builtins.swift`, `classes.swift`)
    #[default]
    SingleFile,
    /// One file per built-in and per class
    PerType,
}

/// Configuration of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Build configuration whose built-in sizes are recorded
    #[serde(default = "default_build_configuration")]
    pub build_configuration: String,

    /// File partitioning policy
    #[serde(default)]
    pub output_mode: OutputMode,
}

fn default_build_configuration() -> String {
    DEFAULT_BUILD_CONFIGURATION.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            build_configuration: default_build_configuration(),
            output_mode: OutputMode::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the build configuration
    #[must_use]
    pub fn with_build_configuration(mut self, build_configuration: impl Into<String>) -> Self {
        self.build_configuration = build_configuration.into();
        self
    }

    /// Set the output mode
    #[must_use]
    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    /// Reject configurations no run can use.
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.build_configuration.trim().is_empty() {
            return Err(GeneratorError::Config(
                "build_configuration must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
