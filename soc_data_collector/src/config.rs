//! Collector configuration.
//!
//! Values come from built-in defaults, an optional TOML file, environment
//! variables prefixed with `SOC_COLLECTOR__` and finally the command line,
//! each overriding the previous.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

/// Map entities whose name key starts with this are build sites.
pub const DEFAULT_BUILD_SITE_PREFIX: &str = "MapEntities/BuildSite";

#[derive(Debug, Deserialize)]
pub struct CollectorConfig {
    pub paths: PathConfig,
    pub output: OutputConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    /// The directory holding the extracted source tables.
    pub input: PathBuf,
    /// Where the collection JSON files are written.
    pub collections: PathBuf,
    /// Root of the per-category asset directories.
    pub public: PathBuf,
    /// The directory holding the extracted sprite sheets.
    pub images: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub minimize: bool,
    pub copy_images: bool,
    pub check_terms: bool,
}

#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    pub build_site_prefix: String,
}

/// Log filters, such as `default = "info"` and `soc_data_collector = "debug"`.
///
/// `RUST_LOG` is applied on top of these.
#[derive(Debug, Deserialize, Default)]
pub struct LogConfig {
    default: Option<Level>,
    #[serde(flatten)]
    modules: BTreeMap<String, Level>,
}

/// A level filter, named in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Level(LevelFilter);

impl TryFrom<String> for Level {
    type Error = log::ParseLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map(Level)
    }
}

impl LogConfig {
    /// Builds a logger with these filters.
    pub fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(self.default.map_or(LevelFilter::Info, |l| l.0));

        for (module, level) in &self.modules {
            builder.filter_module(module, level.0);
        }

        builder.parse_default_env();
        builder
    }
}

/// Values given on the command line. Unset values don't override anything.
#[derive(Debug, Default)]
pub struct Overrides {
    pub input: Option<String>,
    pub collections: Option<String>,
    pub public: Option<String>,
    pub images: Option<String>,
    pub minimize: bool,
    pub skip_images: bool,
    pub check_terms: bool,
}

/// Loads the configuration, optionally reading `file` first.
pub fn load(file: Option<&Path>, overrides: &Overrides) -> anyhow::Result<CollectorConfig> {
    let mut builder = config_rs::Config::builder()
        .set_default("paths.input", "out")?
        .set_default("paths.collections", "collections")?
        .set_default("paths.public", "public")?
        .set_default("paths.images", "out/images")?
        .set_default("output.minimize", false)?
        .set_default("output.copy_images", true)?
        .set_default("output.check_terms", false)?
        .set_default("source.build_site_prefix", DEFAULT_BUILD_SITE_PREFIX)?;

    if let Some(file) = file {
        builder = builder.add_source(config_rs::File::from(file));
    }

    let config = builder
        .add_source(config_rs::Environment::with_prefix("SOC_COLLECTOR").separator("__").try_parsing(true))
        .set_override_option("paths.input", overrides.input.clone())?
        .set_override_option("paths.collections", overrides.collections.clone())?
        .set_override_option("paths.public", overrides.public.clone())?
        .set_override_option("paths.images", overrides.images.clone())?
        .set_override_option("output.minimize", overrides.minimize.then_some(true))?
        .set_override_option("output.copy_images", overrides.skip_images.then_some(false))?
        .set_override_option("output.check_terms", overrides.check_terms.then_some(true))?
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = load(None, &Overrides::default()).unwrap();
        assert_eq!(config.paths.input, Path::new("out"));
        assert_eq!(config.paths.collections, Path::new("collections"));
        assert!(config.output.copy_images);
        assert!(!config.output.minimize);
        assert_eq!(config.source.build_site_prefix, DEFAULT_BUILD_SITE_PREFIX);
        assert!(config.log.default.is_none());
    }

    #[test]
    fn file_then_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("collector.toml");
        std::fs::write(&file, r#"
            [paths]
            input = "dump"
            public = "site/public"

            [output]
            minimize = true

            [log]
            default = "warn"
            soc_data_collector = "debug"
        "#).unwrap();

        let overrides = Overrides {
            input: Some("fresh_dump".to_owned()),
            skip_images: true,
            ..Overrides::default()
        };

        let config = load(Some(&file), &overrides).unwrap();
        assert_eq!(config.paths.input, Path::new("fresh_dump"));
        assert_eq!(config.paths.public, Path::new("site/public"));
        assert_eq!(config.paths.images, Path::new("out/images"));
        assert!(config.output.minimize);
        assert!(!config.output.copy_images);
        assert_eq!(config.log.default, Some(Level(LevelFilter::Warn)));
        assert_eq!(config.log.modules.get("soc_data_collector"), Some(&Level(LevelFilter::Debug)));
    }

    #[test]
    fn log_levels_ignore_case() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("collector.toml");
        std::fs::write(&file, "[log]\ndefault = \"OFF\"\nsoc_data = \"Trace\"\n").unwrap();

        let config = load(Some(&file), &Overrides::default()).unwrap();
        assert_eq!(config.log.default, Some(Level(LevelFilter::Off)));
        assert_eq!(config.log.modules.get("soc_data"), Some(&Level(LevelFilter::Trace)));
    }

    #[test]
    fn unknown_log_level_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("collector.toml");
        std::fs::write(&file, "[log]\ndefault = \"loud\"\n").unwrap();

        assert!(load(Some(&file), &Overrides::default()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Some(Path::new("does/not/exist.toml")), &Overrides::default()).is_err());
    }
}
