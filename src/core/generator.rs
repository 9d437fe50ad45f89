//! The generation pipeline: collect requirements once, then build and write
//! every bundle's catalog for each locale in turn.

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    core::{
        bundles::BundleDescriptor,
        catalog::{CatalogBuilder, MissingTranslation},
        extract::{ExtractOptions, MessageExtractor, ignore::IgnoreRules},
        locales::LocaleDescriptor,
        materialize::{CatalogFileAction, LocaleMaterializer},
        requirements::collect_requirements,
        translations::TranslationSource,
    },
    logging::Logger,
};

/// Run-wide inputs besides bundles and locales.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub locale_data_folder: PathBuf,
    pub ignore: IgnoreRules,
    pub verbose: bool,
}

/// Counts and diagnostics of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub bundle_count: usize,
    pub locale_count: usize,
    pub catalogs_written: Vec<PathBuf>,
    pub catalogs_removed: Vec<PathBuf>,
    /// Locales whose marker file was (re)written.
    pub markers_written: Vec<String>,
    pub missing: Vec<MissingTranslation>,
}

/// Collaborators the pipeline delegates to.
pub struct Collaborators<'a> {
    pub extractor: &'a dyn MessageExtractor,
    pub translations: &'a dyn TranslationSource,
    pub logger: &'a dyn Logger,
}

pub fn generate(
    bundles: &[BundleDescriptor],
    locales: &[LocaleDescriptor],
    options: &GenerateOptions,
    collaborators: &Collaborators<'_>,
) -> Result<GenerateSummary> {
    let logger = collaborators.logger;
    let extract_options = ExtractOptions {
        ignore: &options.ignore,
        verbose: options.verbose,
        logger,
    };
    let requirements = collect_requirements(bundles, collaborators.extractor, &extract_options)?;

    let mut summary = GenerateSummary {
        bundle_count: requirements.required.len(),
        locale_count: locales.len(),
        ..Default::default()
    };

    for locale in locales {
        logger.info(&format!(
            "Building catalogs for crowdin code {} / Intl code {}",
            locale.crowdin_code, locale.intl_code
        ));

        let builder = CatalogBuilder::new(
            locale,
            &requirements,
            &options.locale_data_folder,
            collaborators.translations,
        )?;
        let mut materializer = LocaleMaterializer::new(&options.locale_data_folder, locale);

        for bundle in requirements.required.iter() {
            let built = builder.build(bundle, logger)?;
            match materializer.sync(&built.bundle, &built.catalog)? {
                CatalogFileAction::Written(path) => {
                    logger.debug(&format!("Wrote {}", path.display()));
                    summary.catalogs_written.push(path);
                }
                CatalogFileAction::Removed(path) => {
                    logger.debug(&format!("Removed stale {}", path.display()));
                    summary.catalogs_removed.push(path);
                }
                CatalogFileAction::Absent => {}
            }
            summary.missing.extend(built.missing);
        }

        if materializer.finish()? {
            summary.markers_written.push(locale.intl_code.clone());
        }
    }

    Ok(summary)
}
