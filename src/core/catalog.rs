//! Catalog building: resolve each bundle's required identifiers for one locale.

use std::path::Path;

use anyhow::{Result, anyhow};

use crate::{
    core::{
        locales::LocaleDescriptor,
        messages::Catalog,
        requirements::{BundleRequirement, Requirements},
        translations::{TranslationIndex, TranslationSource},
    },
    logging::Logger,
};

/// A required identifier the locale's translation table does not provide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingTranslation {
    pub locale: String,
    pub bundle: String,
    pub identifier: String,
}

/// Where a locale's catalog values come from.
#[derive(Debug)]
pub enum LocaleSource {
    /// Source-text locale: values are the extracted default messages.
    Defaults,
    /// Translated locale: values are looked up in its translation table.
    Translations(TranslationIndex),
}

/// Catalog of one bundle for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleCatalog {
    pub bundle: String,
    pub catalog: Catalog,
    pub missing: Vec<MissingTranslation>,
}

/// Builds the catalogs of every bundle for a single locale.
///
/// The translation table is loaded once, when the builder is created.
pub struct CatalogBuilder<'a> {
    locale: &'a LocaleDescriptor,
    requirements: &'a Requirements,
    source: LocaleSource,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(
        locale: &'a LocaleDescriptor,
        requirements: &'a Requirements,
        locale_data_folder: &Path,
        translations: &dyn TranslationSource,
    ) -> Result<Self> {
        let source = if locale.is_default {
            LocaleSource::Defaults
        } else {
            let rows = translations.parse_translations(locale_data_folder, &locale.intl_code)?;
            LocaleSource::Translations(TranslationIndex::from_rows(rows))
        };
        Ok(Self::with_source(locale, requirements, source))
    }

    pub fn with_source(
        locale: &'a LocaleDescriptor,
        requirements: &'a Requirements,
        source: LocaleSource,
    ) -> Self {
        Self {
            locale,
            requirements,
            source,
        }
    }

    /// Resolve every required identifier of `bundle`.
    ///
    /// Identifiers without a translation are logged, recorded in `missing`
    /// and left out of the catalog. A required identifier without default
    /// text is an error: defaults and requirements come from the same
    /// extraction pass.
    pub fn build(&self, bundle: &BundleRequirement, logger: &dyn Logger) -> Result<BundleCatalog> {
        let mut catalog = Catalog::new();
        let mut missing = Vec::new();

        for id in &bundle.ids {
            match &self.source {
                LocaleSource::Defaults => {
                    let definition = self.requirements.default_text(id).ok_or_else(|| {
                        anyhow!(
                            "No default text for required message '{}' of bundle '{}'",
                            id,
                            bundle.name
                        )
                    })?;
                    catalog.insert(id.clone(), definition.message.clone());
                }
                LocaleSource::Translations(index) => match index.get(id) {
                    Some(translation) => {
                        catalog.insert(id.clone(), translation.to_string());
                    }
                    None => {
                        logger.error(&format!(
                            "Could not find translation for message {} in {} translation files",
                            id, self.locale.intl_code
                        ));
                        missing.push(MissingTranslation {
                            locale: self.locale.intl_code.clone(),
                            bundle: bundle.name.clone(),
                            identifier: id.clone(),
                        });
                    }
                },
            }
        }

        Ok(BundleCatalog {
            bundle: bundle.name.clone(),
            catalog,
            missing,
        })
    }

}
