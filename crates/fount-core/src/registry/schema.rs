//! On-disk schema of the sources configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::source::RawPaths;

/// The `key_fields` option: a single field name or a composite list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyFields {
    One(String),
    Many(Vec<String>),
}

impl KeyFields {
    /// Display form; composite keys are joined with `+`.
    pub fn join(&self) -> String {
        match self {
            Self::One(field) => field.clone(),
            Self::Many(fields) => fields.join("+"),
        }
    }
}

/// Configuration of one named source.
///
/// Only the options the core acts on are typed; everything else a source
/// carries (delimiter, headers, ...) is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Raw path specifications, normalized on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<RawPaths>,
    /// Fields forming the primary key of the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_fields: Option<KeyFields>,
    /// True when relative local paths are anchored to the sources root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
    /// Free-form per-source options.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}
