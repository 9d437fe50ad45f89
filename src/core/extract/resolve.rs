use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use super::parser::{SOURCE_EXTENSIONS, is_source_file};

/// Where an import specifier points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportTarget {
    /// A source module to follow.
    Source(PathBuf),
    /// Package imports and non-source assets (styles, images): not followed.
    Skipped,
    /// A relative specifier matching no file.
    Unresolved,
}

/// Resolve an import specifier found in `current_file`.
///
/// Only relative specifiers are followed. Resolution tries the exact path,
/// then each source extension, then an `index.*` file inside the directory.
pub fn resolve_import_path(current_file: &Path, import_path: &str) -> ImportTarget {
    if !import_path.starts_with('.') {
        return ImportTarget::Skipped;
    }
    let Some(base_dir) = current_file.parent() else {
        return ImportTarget::Unresolved;
    };
    resolve_candidate(&base_dir.join(import_path))
}

/// Resolve a path that may omit its extension or point at a directory.
pub fn resolve_candidate(candidate: &Path) -> ImportTarget {
    if candidate.is_file() {
        return if is_source_file(candidate) {
            ImportTarget::Source(normalize(candidate))
        } else {
            ImportTarget::Skipped
        };
    }

    for ext in SOURCE_EXTENSIONS {
        let with_ext = append_extension(candidate, ext);
        if with_ext.is_file() {
            return ImportTarget::Source(normalize(&with_ext));
        }
    }

    for ext in SOURCE_EXTENSIONS {
        let index_path = candidate.join(format!("index.{}", ext));
        if index_path.is_file() {
            return ImportTarget::Source(normalize(&index_path));
        }
    }

    ImportTarget::Unresolved
}

/// `foo.bar` + `js` → `foo.bar.js` (unlike `with_extension`, which would replace `.bar`).
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Canonical form used to visit each module once.
fn normalize(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
