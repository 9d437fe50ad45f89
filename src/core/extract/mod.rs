//! Static extraction of message definitions from bundle sources.
//!
//! ## Module Structure
//!
//! - `parser`: swc parsing of JS/TS files and Vue `<script>` blocks
//! - `visitor`: AST visitor collecting definitions and import specifiers
//! - `resolve`: relative import resolution
//! - `scanner`: directory walking
//! - `ignore`: root-relative ignore rules

pub mod ignore;
pub mod parser;
pub mod resolve;
pub mod scanner;
pub mod visitor;

use std::{
    collections::{HashSet, VecDeque},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use swc_ecma_visit::VisitWith;

use crate::{
    core::{bundles::EntryRef, messages::MessageMap},
    logging::Logger,
};
use ignore::IgnoreRules;
use parser::{parse_script, script_sections};
use resolve::{ImportTarget, resolve_candidate, resolve_import_path};
use scanner::scan_source_files;
use visitor::MessageCollector;

/// Settings shared by every extraction of a run.
pub struct ExtractOptions<'a> {
    pub ignore: &'a IgnoreRules,
    pub verbose: bool,
    pub logger: &'a dyn Logger,
}

/// Finds the messages a bundle defines.
pub trait MessageExtractor {
    /// Walk the module graph rooted at `entry` (relative to `module_file_path`).
    fn extract_from_entry(
        &self,
        entry: &EntryRef,
        module_file_path: &Path,
        options: &ExtractOptions<'_>,
    ) -> Result<MessageMap>;

    /// Extract every source file at or below `module_file_path`.
    fn extract_from_file(
        &self,
        module_file_path: &Path,
        options: &ExtractOptions<'_>,
    ) -> Result<MessageMap>;
}

/// Messages and module references of one source file.
#[derive(Debug, Default)]
pub struct FileMessages {
    pub messages: MessageMap,
    pub imports: Vec<String>,
    /// Definitions whose value is not a static string.
    pub skipped: Vec<String>,
}

/// Parse one file and collect what it defines and imports.
pub fn analyze_file(path: &Path) -> Result<FileMessages> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;

    let mut collector = MessageCollector::new();
    for section in script_sections(&code, path) {
        let module = parse_script(section, path)?;
        module.visit_with(&mut collector);
    }

    Ok(FileMessages {
        messages: collector.messages,
        imports: collector.imports,
        skipped: collector.skipped,
    })
}

/// Verbose per-file report: one `parsed:` line plus a warning per skipped definition.
fn report_file(path: &Path, analysis: &FileMessages, options: &ExtractOptions<'_>) {
    if !options.verbose {
        return;
    }
    options.logger.debug(&format!(
        "parsed: {} ({} messages)",
        path.display(),
        analysis.messages.len()
    ));
    for label in &analysis.skipped {
        options.logger.warn(&format!(
            "{}: cannot read message definition '{}' statically",
            path.display(),
            label
        ));
    }
}

/// swc-backed extractor for JS, TS and Vue sources.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceExtractor;

impl MessageExtractor for SourceExtractor {
    fn extract_from_entry(
        &self,
        entry: &EntryRef,
        module_file_path: &Path,
        options: &ExtractOptions<'_>,
    ) -> Result<MessageMap> {
        let base_dir = if module_file_path.is_dir() {
            module_file_path
        } else {
            module_file_path.parent().unwrap_or(module_file_path)
        };

        let mut queue: VecDeque<PathBuf> = VecDeque::new();
        let mut visited: HashSet<PathBuf> = HashSet::new();

        for file in entry.files() {
            match resolve_candidate(&base_dir.join(file)) {
                ImportTarget::Source(path) => {
                    if visited.insert(path.clone()) {
                        queue.push_back(path);
                    }
                }
                _ => bail!(
                    "Entry file '{}' not found in {}",
                    file,
                    base_dir.display()
                ),
            }
        }

        let mut messages = MessageMap::new();
        while let Some(file) = queue.pop_front() {
            if options.ignore.is_ignored(&file) {
                continue;
            }

            let analysis = analyze_file(&file)?;
            report_file(&file, &analysis, options);

            for specifier in &analysis.imports {
                match resolve_import_path(&file, specifier) {
                    ImportTarget::Source(path) => {
                        if visited.insert(path.clone()) {
                            queue.push_back(path);
                        }
                    }
                    ImportTarget::Skipped => {}
                    ImportTarget::Unresolved => bail!(
                        "Cannot resolve module '{}' imported from {}",
                        specifier,
                        file.display()
                    ),
                }
            }
            messages.extend(analysis.messages);
        }

        Ok(messages)
    }

    fn extract_from_file(
        &self,
        module_file_path: &Path,
        options: &ExtractOptions<'_>,
    ) -> Result<MessageMap> {
        // Canonical walk root, so ignore rules see the same paths as for entry bundles.
        let module_file_path = fs::canonicalize(module_file_path).with_context(|| {
            format!("Module path does not exist: {}", module_file_path.display())
        })?;

        let scan = scan_source_files(&module_file_path, options.ignore);
        if !scan.skipped.is_empty() {
            if options.verbose {
                for reason in &scan.skipped {
                    options.logger.warn(&format!("Cannot access path: {}", reason));
                }
            }
            options.logger.warn(&format!(
                "{} path(s) under {} skipped due to access errors",
                scan.skipped.len(),
                module_file_path.display()
            ));
        }

        // Parse in parallel, merge in walk order so later files win deterministically.
        let results: Vec<Result<FileMessages>> =
            scan.files.par_iter().map(|file| analyze_file(file)).collect();

        let mut messages = MessageMap::new();
        for (file, result) in scan.files.iter().zip(results) {
            let analysis = result?;
            report_file(file, &analysis, options);
            messages.extend(analysis.messages);
        }
        Ok(messages)
    }
}
