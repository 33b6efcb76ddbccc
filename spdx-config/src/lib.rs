//! Shared configuration loader for the spdx tools.
//!
//! `defaults/spdx.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files and
//! command-line overrides on top of those defaults via [`Loader`] before
//! deserializing into [`SpdxConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use spdx_expr::{OutputFormat, ParseOptions};
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/spdx.default.toml");

/// Top-level configuration consumed by the spdx tools.
#[derive(Debug, Clone, Deserialize)]
pub struct SpdxConfig {
    pub parse: ParseConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Mirrors [`ParseOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub or_later_single_token: bool,
}

impl ParseConfig {
    pub fn options(&self) -> ParseOptions {
        ParseOptions {
            or_later_single_token: self.or_later_single_token,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A tracing `EnvFilter` directive, e.g. `warn` or `spdx_expr=debug`.
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SpdxConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SpdxConfig, ConfigError> {
    Loader::new().build()
}
