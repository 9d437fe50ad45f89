use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{ignore::IgnoreRules, parser::is_source_file};

/// Result of scanning a module directory.
pub struct ScanResult {
    /// Source files in walk order (sorted by file name at each level).
    pub files: Vec<PathBuf>,
    /// Paths that could not be read, with the reason.
    pub skipped: Vec<String>,
}

/// Collect the source files under `root`, or `root` itself if it is a file.
pub fn scan_source_files(root: &Path, ignore: &IgnoreRules) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped.push(e.to_string());
                continue;
            }
        };
        let path = entry.path();

        if ignore.is_ignored(path) {
            continue;
        }

        if entry.file_type().is_file() && is_source_file(path) {
            files.push(path.to_path_buf());
        }
    }

    ScanResult { files, skipped }
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn names(result: &ScanResult, root: &Path) -> Vec<String> {
        result
            .files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_scan_sorted_source_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("views")).unwrap();
        File::create(root.join("b.js")).unwrap();
        File::create(root.join("a.vue")).unwrap();
        File::create(root.join("views/Page.ts")).unwrap();
        File::create(root.join("style.scss")).unwrap();

        let result = scan_source_files(root, &IgnoreRules::default());

        assert_eq!(names(&result, root), vec!["a.vue", "b.js", "views/Page.ts"]);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_scan_respects_ignores() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join("static")).unwrap();
        fs::create_dir_all(root.join("legacy")).unwrap();
        File::create(root.join("node_modules/pkg/index.js")).unwrap();
        File::create(root.join("static/bundle.js")).unwrap();
        File::create(root.join("legacy/old.js")).unwrap();
        File::create(root.join("app.js")).unwrap();

        let ignores = vec![
            "**/node_modules/**".to_string(),
            "**/static/**".to_string(),
            "legacy".to_string(),
        ];
        let rules = IgnoreRules::new(&root, &ignores).unwrap();
        let result = scan_source_files(&root, &rules);

        assert_eq!(names(&result, &root), vec!["app.js"]);
    }

    #[test]
    fn test_scan_single_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("strings.js");
        File::create(&file).unwrap();

        let result = scan_source_files(&file, &IgnoreRules::default());
        assert_eq!(result.files, vec![file]);
    }
}
