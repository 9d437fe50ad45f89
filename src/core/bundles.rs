//! Bundle descriptors: the units that each get their own catalog per locale.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Entry point(s) of a bundle, relative to its module path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EntryRef {
    Single(String),
    Multiple(Vec<String>),
}

impl EntryRef {
    pub fn files(&self) -> Vec<&str> {
        match self {
            EntryRef::Single(file) => vec![file.as_str()],
            EntryRef::Multiple(files) => files.iter().map(String::as_str).collect(),
        }
    }
}

/// One translatable unit (e.g. a webpack chunk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDescriptor {
    /// Unique across a run; used as the catalog file-name stem.
    pub name: String,
    /// Walk the module graph from `entry` instead of scanning `module_file_path`.
    pub is_entry: bool,
    pub module_file_path: PathBuf,
    pub entry: Option<EntryRef>,
}

impl BundleDescriptor {
    pub fn from_file_path(name: impl Into<String>, module_file_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            is_entry: false,
            module_file_path: module_file_path.into(),
            entry: None,
        }
    }

    pub fn from_entry(
        name: impl Into<String>,
        module_file_path: impl Into<PathBuf>,
        entry: EntryRef,
    ) -> Self {
        Self {
            name: name.into(),
            is_entry: true,
            module_file_path: module_file_path.into(),
            entry: Some(entry),
        }
    }
}

/// Manifest record as written by the build tooling.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBundle {
    name: String,
    module_file_path: String,
    #[serde(default)]
    entry: Option<EntryRef>,
    #[serde(default)]
    is_entry: Option<bool>,
}

/// Load and validate the bundle manifest.
///
/// Relative module paths are resolved against `root_dir`.
pub fn load_bundles(path: &Path, root_dir: &Path) -> Result<Vec<BundleDescriptor>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bundle manifest: {}", path.display()))?;
    parse_bundles(&content, root_dir)
        .with_context(|| format!("Invalid bundle manifest: {}", path.display()))
}

pub fn parse_bundles(content: &str, root_dir: &Path) -> Result<Vec<BundleDescriptor>> {
    let raw: Vec<RawBundle> =
        serde_json::from_str(content).context("Expected a JSON array of bundles")?;

    let mut seen = HashSet::new();
    let mut bundles = Vec::with_capacity(raw.len());

    for bundle in raw {
        validate_name(&bundle.name)?;
        if !seen.insert(bundle.name.clone()) {
            bail!("Duplicate bundle name '{}'", bundle.name);
        }

        let is_entry = bundle.is_entry.unwrap_or(bundle.entry.is_some());
        if is_entry && bundle.entry.is_none() {
            bail!(
                "Bundle '{}' is marked as an entry bundle but has no 'entry'",
                bundle.name
            );
        }

        let module_file_path = Path::new(&bundle.module_file_path);
        let module_file_path = if module_file_path.is_absolute() {
            module_file_path.to_path_buf()
        } else {
            root_dir.join(module_file_path)
        };

        bundles.push(BundleDescriptor {
            name: bundle.name,
            is_entry,
            module_file_path,
            entry: bundle.entry,
        });
    }

    Ok(bundles)
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Bundle name must not be empty");
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        bail!("Bundle name '{}' cannot be used as a file name", name);
    }
    Ok(())
}
