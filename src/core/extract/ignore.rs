//! Ignore rules for extraction, evaluated relative to the project root.
//!
//! Entries containing a wildcard are glob patterns; anything else is a
//! literal path prefix (`plugins/legacy` skips everything below it).

use std::{
    borrow::Cow,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;

/// Check if an ignore entry is a glob rather than a literal path.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    root: PathBuf,
    globs: Vec<Pattern>,
    literal_paths: Vec<PathBuf>,
}

impl IgnoreRules {
    /// Compile `ignores` against `root`. The root is canonicalized so that
    /// canonical module paths and walked paths relativize the same way.
    pub fn new(root: &Path, ignores: &[String]) -> Result<Self> {
        let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let mut globs = Vec::new();
        let mut literal_paths = Vec::new();

        for entry in ignores {
            if is_glob_pattern(entry) {
                let pattern = Pattern::new(entry)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", entry))?;
                globs.push(pattern);
            } else {
                literal_paths.push(normalize_literal(entry));
            }
        }

        Ok(Self {
            root,
            globs,
            literal_paths,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty() && self.literal_paths.is_empty()
    }

    /// Whether `path` is skipped. Paths under the root are matched by their
    /// root-relative form, so directories above the root never match.
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.is_empty() {
            return false;
        }
        let relative = self.relative(path);

        if self
            .literal_paths
            .iter()
            .any(|literal| relative.starts_with(literal))
        {
            return true;
        }

        let relative_str = relative.to_string_lossy().replace('\\', "/");
        self.globs.iter().any(|p| p.matches(&relative_str))
    }

    fn relative<'p>(&self, path: &'p Path) -> Cow<'p, Path> {
        if let Ok(rel) = path.strip_prefix(&self.root) {
            return Cow::Borrowed(rel);
        }
        match fs::canonicalize(path) {
            Ok(canonical) => match canonical.strip_prefix(&self.root) {
                Ok(rel) => Cow::Owned(rel.to_path_buf()),
                Err(_) => Cow::Owned(canonical),
            },
            Err(_) => Cow::Borrowed(path),
        }
    }
}

/// `./plugins/legacy/` → `plugins/legacy`.
fn normalize_literal(entry: &str) -> PathBuf {
    Path::new(entry)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
