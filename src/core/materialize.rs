//! Keeps the on-disk catalogs of a locale in line with the catalogs just built.
//!
//! Layout: `<locale data>/<locale folder>/LC_MESSAGES/<bundle>-messages.json`,
//! plus a `README.md` marker once any catalog of the locale was written.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{locales::LocaleDescriptor, messages::Catalog, translations::MESSAGES_DIR};

pub const MARKER_FILE_NAME: &str = "README.md";

pub const MARKER_CONTENT: &str =
    "The JSON messages files in this folder were generated by catgen\n";

/// File name of a bundle's catalog.
pub fn catalog_file_name(bundle: &str) -> String {
    format!("{}-messages.json", bundle)
}

/// `LC_MESSAGES` folder of a locale.
pub fn locale_messages_dir(locale_data_folder: &Path, locale: &LocaleDescriptor) -> PathBuf {
    locale_data_folder
        .join(locale.folder_name())
        .join(MESSAGES_DIR)
}

/// What syncing one catalog did on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogFileAction {
    Written(PathBuf),
    Removed(PathBuf),
    /// Empty catalog and no file to remove.
    Absent,
}

/// Pretty-printed JSON with keys in ascending order and 2-space indentation.
pub fn render_catalog(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")
}

/// Remove `path`, treating an already-absent file as success.
///
/// Returns whether a file was removed. Other I/O errors propagate.
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to remove file: {}", path.display())),
    }
}

/// Per-locale writer. Tracks whether any catalog was written so `finish`
/// knows whether to drop the marker file.
pub struct LocaleMaterializer {
    dir: PathBuf,
    dir_ready: bool,
    messages_exist: bool,
}

impl LocaleMaterializer {
    pub fn new(locale_data_folder: &Path, locale: &LocaleDescriptor) -> Self {
        Self {
            dir: locale_messages_dir(locale_data_folder, locale),
            dir_ready: false,
            messages_exist: false,
        }
    }

    fn ensure_dir(&mut self) -> Result<()> {
        if !self.dir_ready {
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;
            self.dir_ready = true;
        }
        Ok(())
    }

    /// Write a non-empty catalog over any existing file, or remove the stale
    /// file of an empty one.
    pub fn sync(&mut self, bundle: &str, catalog: &Catalog) -> Result<CatalogFileAction> {
        self.ensure_dir()?;
        let path = self.dir.join(catalog_file_name(bundle));

        if catalog.is_empty() {
            return Ok(if remove_if_exists(&path)? {
                CatalogFileAction::Removed(path)
            } else {
                CatalogFileAction::Absent
            });
        }

        fs::write(&path, render_catalog(catalog)?)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        self.messages_exist = true;
        Ok(CatalogFileAction::Written(path))
    }

    /// Write the marker if any catalog was written. An existing marker is
    /// left alone otherwise. Returns whether the marker was written.
    pub fn finish(self) -> Result<bool> {
        if !self.messages_exist {
            return Ok(false);
        }
        let path = self.dir.join(MARKER_FILE_NAME);
        fs::write(&path, MARKER_CONTENT)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(true)
    }
}
