//! Translated-string tables exported from the translation platform.
//!
//! Each non-default locale keeps its tables as CSV files under
//! `<locale data>/<locale folder>/LC_MESSAGES/`. Only the `Identifier` and
//! `Translation` columns matter here.

use std::{
    collections::{HashMap, hash_map::Entry},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::locales::to_locale;

/// Folder inside each locale directory holding tables and generated catalogs.
pub const MESSAGES_DIR: &str = "LC_MESSAGES";

/// One row of a translation table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslationRow {
    #[serde(rename = "Identifier")]
    pub identifier: String,
    #[serde(rename = "Translation")]
    pub translation: String,
}

impl TranslationRow {
    pub fn new(identifier: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            translation: translation.into(),
        }
    }
}

/// Supplies the translation table of a locale.
pub trait TranslationSource {
    fn parse_translations(
        &self,
        locale_data_folder: &Path,
        intl_code: &str,
    ) -> Result<Vec<TranslationRow>>;
}

/// Reads CSV exports from the locale's `LC_MESSAGES` folder.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvTranslationSource;

impl TranslationSource for CsvTranslationSource {
    fn parse_translations(
        &self,
        locale_data_folder: &Path,
        intl_code: &str,
    ) -> Result<Vec<TranslationRow>> {
        let dir = locale_data_folder
            .join(to_locale(intl_code))
            .join(MESSAGES_DIR);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut rows = Vec::new();
        for file in csv_files(&dir)? {
            rows.extend(parse_csv_file(&file)?);
        }
        Ok(rows)
    }
}

/// CSV files of a directory, sorted by file name.
fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn parse_csv_file(path: &Path) -> Result<Vec<TranslationRow>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {}", path.display()))?;
    parse_csv(&content).with_context(|| format!("Failed to parse translation file: {}", path.display()))
}

pub fn parse_csv(content: &str) -> Result<Vec<TranslationRow>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: TranslationRow = record?;
        rows.push(row);
    }
    Ok(rows)
}

/// Identifier → translation lookup built once per locale.
///
/// When a table repeats an identifier, the first row in file order wins.
#[derive(Debug, Default)]
pub struct TranslationIndex {
    translations: HashMap<String, String>,
}

impl TranslationIndex {
    pub fn from_rows(rows: Vec<TranslationRow>) -> Self {
        let mut translations = HashMap::with_capacity(rows.len());
        for row in rows {
            if let Entry::Vacant(slot) = translations.entry(row.identifier) {
                slot.insert(row.translation);
            }
        }
        Self { translations }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.translations.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
