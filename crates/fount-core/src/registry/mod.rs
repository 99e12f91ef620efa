//! Named data source registry backed by a YAML configuration file.
//!
//! The registry maps source names to their configuration and hands out
//! normalized path specifications for the resolution pipeline. It is an
//! explicit object passed by reference to whoever needs it; there is no
//! process-wide registry state.

mod report;
mod schema;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

pub use report::{render_permanent_add, render_table};
pub use schema::{KeyFields, SourceConfig};

use crate::source::{self, PathSpec};

/// Registry of named source configurations.
///
/// A source may map to `null` in the configuration file; such sources are
/// listed but carry no usable configuration.
#[derive(Debug)]
pub struct SourceRegistry {
    /// Path to the configuration file
    conf_path: PathBuf,
    /// Root directory anchoring relative local paths
    sources_dir: PathBuf,
    /// Configured sources, in name order
    sources: BTreeMap<String, Option<SourceConfig>>,
}

impl SourceRegistry {
    /// Load the registry from a YAML configuration file.
    ///
    /// `sources_dir` is the root used to anchor relative local paths of
    /// sources flagged `local: true`.
    pub fn load(
        conf_path: impl Into<PathBuf>,
        sources_dir: impl Into<PathBuf>,
    ) -> anyhow::Result<Self> {
        let conf_path = conf_path.into();
        let content = std::fs::read_to_string(&conf_path).with_context(|| {
            format!("Failed to read sources configuration: {}", conf_path.display())
        })?;
        let sources = serde_yaml::from_str(&content).with_context(|| {
            format!("Failed to parse sources configuration: {}", conf_path.display())
        })?;

        Ok(Self {
            conf_path,
            sources_dir: sources_dir.into(),
            sources,
        })
    }

    /// Create an empty registry, for programmatic setups and tests.
    pub fn empty(conf_path: impl Into<PathBuf>, sources_dir: impl Into<PathBuf>) -> Self {
        Self {
            conf_path: conf_path.into(),
            sources_dir: sources_dir.into(),
            sources: BTreeMap::new(),
        }
    }

    /// Path to the configuration file this registry was loaded from.
    pub fn conf_path(&self) -> &Path {
        &self.conf_path
    }

    /// Root directory anchoring relative local paths.
    pub fn sources_dir(&self) -> &Path {
        &self.sources_dir
    }

    /// Check whether a source is configured.
    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Get a source's configuration, if it exists and is not `null`.
    pub fn get(&self, name: &str) -> Option<&SourceConfig> {
        self.sources.get(name)?.as_ref()
    }

    /// Iterate over sources in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&SourceConfig>)> {
        self.sources
            .iter()
            .map(|(name, config)| (name.as_str(), config.as_ref()))
    }

    /// Configured source names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Number of configured sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check whether no sources are configured.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Add a new source. Refuses to overwrite an existing one.
    pub fn add(&mut self, name: impl Into<String>, config: SourceConfig) -> anyhow::Result<()> {
        let name = name.into();
        if self.sources.contains_key(&name) {
            anyhow::bail!("Source {} already exists", name);
        }
        self.sources.insert(name, Some(config));
        Ok(())
    }

    /// Drop a source.
    pub fn drop(&mut self, name: &str) -> anyhow::Result<()> {
        if self.sources.remove(name).is_none() {
            anyhow::bail!("Source {} not in sources", name);
        }
        Ok(())
    }

    /// Set one option of an existing source.
    ///
    /// The typed options (`paths`, `key_fields`, `local`) are parsed from
    /// the given value; anything else lands in the source's free-form
    /// options. A source configured as `null` gains a default
    /// configuration first.
    pub fn update(
        &mut self,
        name: &str,
        option: &str,
        value: serde_yaml::Value,
    ) -> anyhow::Result<()> {
        let Some(slot) = self.sources.get_mut(name) else {
            anyhow::bail!("Source {} not in sources", name);
        };
        let config = slot.get_or_insert_with(SourceConfig::default);

        match option {
            "paths" => {
                config.paths = Some(serde_yaml::from_value(value).with_context(|| {
                    format!("Invalid paths value for source {}", name)
                })?);
            }
            "key_fields" => {
                config.key_fields = Some(serde_yaml::from_value(value).with_context(|| {
                    format!("Invalid key_fields value for source {}", name)
                })?);
            }
            "local" => {
                config.local = Some(serde_yaml::from_value(value).with_context(|| {
                    format!("Invalid local value for source {}", name)
                })?);
            }
            other => {
                config.extra.insert(other.to_string(), value);
            }
        }
        Ok(())
    }

    /// Normalized path specifications for a source, in failover order.
    ///
    /// Relative local paths are anchored to the sources root when the
    /// source is flagged `local: true`. Returns `None` when the source is
    /// unknown, `null`, or has no paths configured.
    pub fn paths(&self, name: &str) -> Option<Vec<PathSpec>> {
        let config = self.get(name)?;
        let should_anchor = config.local.unwrap_or(false);
        source::normalize(config.paths.clone(), &self.sources_dir, should_anchor)
    }
}
