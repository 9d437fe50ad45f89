//! Supported locales and locale-code normalization.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

/// One supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDescriptor {
    pub crowdin_code: String,
    pub intl_code: String,
    /// The source-text locale: its catalogs come from extracted defaults, not
    /// from a translation table.
    pub is_default: bool,
}

impl LocaleDescriptor {
    pub fn new(crowdin_code: impl Into<String>, intl_code: impl Into<String>) -> Self {
        Self {
            crowdin_code: crowdin_code.into(),
            intl_code: intl_code.into(),
            is_default: false,
        }
    }

    pub fn default_locale(crowdin_code: impl Into<String>, intl_code: impl Into<String>) -> Self {
        Self {
            is_default: true,
            ..Self::new(crowdin_code, intl_code)
        }
    }

    /// Folder name of this locale under the locale data root.
    pub fn folder_name(&self) -> String {
        to_locale(&self.intl_code)
    }
}

#[derive(Debug, Deserialize)]
struct RawLanguage {
    crowdin_code: String,
    intl_code: String,
}

/// Load the language info file, flagging the locale whose Intl code equals
/// `default_locale` (case-insensitive) as the default.
pub fn load_locales(path: &Path, default_locale: &str) -> Result<Vec<LocaleDescriptor>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read language info: {}", path.display()))?;
    parse_locales(&content, default_locale)
        .with_context(|| format!("Invalid language info: {}", path.display()))
}

pub fn parse_locales(content: &str, default_locale: &str) -> Result<Vec<LocaleDescriptor>> {
    let raw: Vec<RawLanguage> =
        serde_json::from_str(content).context("Expected a JSON array of languages")?;

    Ok(raw
        .into_iter()
        .map(|lang| LocaleDescriptor {
            is_default: lang.intl_code.eq_ignore_ascii_case(default_locale),
            crowdin_code: lang.crowdin_code,
            intl_code: lang.intl_code,
        })
        .collect())
}

/// Convert an Intl-style code into its folder-name form.
///
/// ```
/// use catgen::core::to_locale;
///
/// assert_eq!(to_locale("en"), "en");
/// assert_eq!(to_locale("pt-br"), "pt_BR");
/// assert_eq!(to_locale("es-419"), "es_419");
/// assert_eq!(to_locale("sr-latn"), "sr_Latn");
/// ```
pub fn to_locale(intl_code: &str) -> String {
    let Some((language, region)) = intl_code.split_once('-') else {
        return intl_code.to_lowercase();
    };

    let region = if region.chars().count() > 2 && !region.chars().all(|c| c.is_ascii_digit()) {
        let mut chars = region.chars();
        let first: String = chars
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();
        format!("{}{}", first, chars.as_str().to_lowercase())
    } else {
        region.to_uppercase()
    };

    format!("{}_{}", language.to_lowercase(), region)
}
