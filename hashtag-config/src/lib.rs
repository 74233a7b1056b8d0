//! Shared configuration loader for hashtag extraction.
//!
//! `defaults/hashtag.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Layers are applied in call order on top of those
//! defaults: TOML files, `HASHTAG_*` environment variables, then explicit overrides.
//! The result is checked before it is handed out as a [`HashtagConfig`].
//!
//! Environment keys use `_` after the prefix and `__` between sections, so
//! `HASHTAG_EXTRACT__OFFSETS=chars` sets `extract.offsets`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map, ValueKind};
use hashtag::{ExtractOptions, Extractor};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../defaults/hashtag.default.toml");

/// Prefix of environment variables read by [`Loader::with_env`].
pub const ENV_PREFIX: &str = "HASHTAG";

/// Top-level configuration consumed by applications that extract tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct HashtagConfig {
    pub extract: ExtractOptions,
}

impl HashtagConfig {
    /// An extractor using the `extract` section.
    pub fn extractor(&self) -> Extractor {
        Extractor::new(self.extract.clone())
    }

    /// Reject settings under which merged extraction could never report anything.
    fn validate(self) -> Result<Self, ConfigError> {
        if !self.extract.hashtags && !self.extract.mentions {
            return Err(ConfigError::Message(
                "extract: at least one of `hashtags` or `mentions` must be enabled".into(),
            ));
        }
        Ok(self)
    }
}

/// Layers extraction settings over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file. A missing file fails the build.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    /// Layer `HASHTAG_*` variables from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_source(None)
    }

    /// Apply a single key/value override, e.g. `("extract.offsets", "chars")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        debug!(key, "applying config override");
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all layers, deserialize and validate.
    pub fn build(self) -> Result<HashtagConfig, ConfigError> {
        self.builder
            .build()?
            .try_deserialize::<HashtagConfig>()?
            .validate()
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        debug!(path = %path.display(), required, "layering config file");
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// `vars` replaces the process environment when given.
    fn with_env_source(mut self, vars: Option<Map<String, String>>) -> Self {
        debug!(prefix = ENV_PREFIX, "layering environment");
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HashtagConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashtag::{OffsetUnit, TokenKind};
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.extract, ExtractOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("extract.offsets", "chars")
            .expect("override to apply")
            .set_override("extract.hashtags", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.extract.offsets, OffsetUnit::Chars);
        assert!(!config.extract.hashtags);
        assert!(config.extract.mentions);
    }

    #[test]
    fn layers_files_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[extract]\nmentions = false").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(config.extract.hashtags);
        assert!(!config.extract.mentions);
        assert_eq!(config.extract.offsets, OffsetUnit::Bytes);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/hashtag.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.extract, ExtractOptions::default());
    }

    #[test]
    fn missing_required_file_errors() {
        let result = Loader::new()
            .with_file("/nonexistent/hashtag.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_offset_unit() {
        let result = Loader::new()
            .set_override("extract.offsets", "graphemes")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    fn env(vars: &[(&str, &str)]) -> Map<String, String> {
        let mut map = Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        map
    }

    #[test]
    fn layers_environment_variables() {
        let config = Loader::new()
            .with_env_source(Some(env(&[
                ("HASHTAG_EXTRACT__OFFSETS", "chars"),
                ("HASHTAG_EXTRACT__MENTIONS", "false"),
                ("OTHER_EXTRACT__HASHTAGS", "false"),
            ])))
            .build()
            .expect("config to build");
        assert_eq!(config.extract.offsets, OffsetUnit::Chars);
        assert!(!config.extract.mentions);
        assert!(config.extract.hashtags);
    }

    #[test]
    fn overrides_win_over_environment() {
        let config = Loader::new()
            .with_env_source(Some(env(&[("HASHTAG_EXTRACT__OFFSETS", "chars")])))
            .set_override("extract.offsets", "bytes")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.extract.offsets, OffsetUnit::Bytes);
    }

    #[test]
    fn rejects_all_kinds_disabled() {
        let err = Loader::new()
            .set_override("extract.hashtags", false)
            .expect("override to apply")
            .set_override("extract.mentions", false)
            .expect("override to apply")
            .build()
            .expect_err("no kinds enabled");
        assert!(err.to_string().contains("at least one"), "{err}");
    }

    #[test]
    fn builds_configured_extractor() {
        let config = Loader::new()
            .set_override("extract.hashtags", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        let entities = config.extractor().extract_entities("#rust @alice");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, TokenKind::Mention);
    }
}
