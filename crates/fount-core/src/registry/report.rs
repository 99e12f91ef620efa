//! Human-readable rendering of the registry.

use std::collections::BTreeMap;
use std::fmt::Write;

use super::SourceRegistry;
use super::schema::{KeyFields, SourceConfig};
use crate::source::{RawPathEntry, RawPaths};

const MISSING: &str = "<none>";
const RULE_WIDTH: usize = 80;

fn fmt_keys(keys: Option<&KeyFields>) -> String {
    keys.map_or_else(|| MISSING.to_string(), KeyFields::join)
}

fn fmt_entry(entry: &RawPathEntry) -> String {
    match entry {
        RawPathEntry::Plain(file) => file.clone(),
        RawPathEntry::Detailed {
            file,
            extract: None,
        } => file.clone(),
        RawPathEntry::Detailed {
            file,
            extract: Some(member),
        } => format!("{file} -> {member}"),
    }
}

fn entries_of(config: &SourceConfig) -> Vec<RawPathEntry> {
    match &config.paths {
        None => Vec::new(),
        Some(RawPaths::One(entry)) => vec![entry.clone()],
        Some(RawPaths::Many(entries)) => entries.clone(),
    }
}

/// Render the NAME | KEY | PATHS table over all configured sources.
///
/// The first path of each source is the default, numbered follow-up rows
/// are its failovers.
pub fn render_table(registry: &SourceRegistry) -> String {
    let conf_name = registry
        .conf_path()
        .file_name()
        .map_or_else(|| MISSING.to_string(), |name| name.to_string_lossy().into_owned());

    let mut out = String::new();
    let rule = "-".repeat(RULE_WIDTH);

    let _ = writeln!(
        out,
        "* Data sources from {} [{}]",
        registry.sources_dir().display(),
        conf_name
    );
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<20} | {:<25} | {}",
        "NAME", "KEY", "PATHS (DEFAULT + FAILOVERS)"
    );
    let _ = writeln!(out, "{rule}");

    for (name, config) in registry.iter() {
        let (keys, entries) = match config {
            Some(config) => (fmt_keys(config.key_fields.as_ref()), entries_of(config)),
            None => (MISSING.to_string(), Vec::new()),
        };

        let primary = entries
            .first()
            .map_or_else(|| MISSING.to_string(), fmt_entry);
        let _ = writeln!(out, "{name:<20} | {keys:<25} | .) {primary}");

        for (n, entry) in entries.iter().enumerate().skip(1) {
            let _ = writeln!(out, "{:<20} | {:<25} | {}) {}", "-", "-", n, fmt_entry(entry));
        }
    }

    let _ = write!(out, "{rule}");
    out
}

/// Render instructions for making an ad-hoc source configuration permanent.
///
/// Produces a YAML snippet to append to the configuration file, with
/// placeholders for the source name and its absolute file path.
pub fn render_permanent_add(registry: &SourceRegistry, options: &SourceConfig) -> String {
    let mut conf = options.clone();
    conf.paths = Some(RawPaths::One(RawPathEntry::Plain(
        "<INSERT_ABSOLUTE_FILE_PATH>".to_string(),
    )));
    conf.local = Some(false);

    let mut snippet = BTreeMap::new();
    snippet.insert("<INSERT_ANY_NAME>", &conf);
    let yaml = serde_yaml::to_string(&snippet).unwrap_or_default();

    let conf_path = registry.conf_path().display();
    format!(
        "* You can make this data source permanent!\n\
         * Edit {conf_path} with:\n\
         \n\
         $ cat >> {conf_path} << EOF\n\
         # ================ BEGIN ===============\n\
         \n\
         {yaml}\n\
         # ================  END  ===============\n\
         EOF\n\
         \n\
         * Replace the placeholders <INSERT_...> with:\n\
         $ vim {conf_path}\n"
    )
}
