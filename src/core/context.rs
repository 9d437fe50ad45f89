use std::path::{Component, Path, PathBuf};

use anyhow::Result;

use crate::{
    cli::args::GenerateArgs,
    config::{Config, load_config},
    core::{
        bundles::{BundleDescriptor, load_bundles},
        extract::{MessageExtractor, ignore::IgnoreRules},
        generator::{Collaborators, GenerateOptions, GenerateSummary, generate},
        locales::{LocaleDescriptor, load_locales},
        translations::TranslationSource,
    },
    logging::Logger,
};

/// Everything a generation run needs, resolved up front.
///
/// Configuration precedence: CLI flags > `.catgenrc.json` > defaults.
/// Relative paths in the configuration are resolved against `root_dir`.
pub struct GenerateContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub verbose: bool,
    pub bundles: Vec<BundleDescriptor>,
    pub locales: Vec<LocaleDescriptor>,
    pub ignore: IgnoreRules,
}

impl GenerateContext {
    pub fn new(args: &GenerateArgs) -> Result<Self> {
        let verbose = args.common.verbose;

        // The project root decides where the config file is searched.
        let root_dir = args
            .common
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .catgenrc.json found, using default configuration");
        }

        let mut config = config_result.config;

        if let Some(ref bundles) = args.bundles {
            config.bundles = bundles.to_string_lossy().to_string();
        }
        if let Some(ref languages) = args.languages {
            config.languages = languages.to_string_lossy().to_string();
        }
        if let Some(ref locale_data) = args.locale_data {
            config.locale_data_folder = locale_data.to_string_lossy().to_string();
        }
        if let Some(ref default_locale) = args.default_locale {
            config.default_locale = default_locale.clone();
        }
        config.ignores.extend(args.ignore.iter().cloned());

        // Overrides have not been validated yet.
        config.validate()?;

        Self::from_config(config, root_dir, verbose)
    }

    /// Load bundles and locales for an already resolved configuration.
    pub fn from_config(config: Config, root_dir: PathBuf, verbose: bool) -> Result<Self> {
        let bundles = load_bundles(&resolve_path(&root_dir, &config.bundles), &root_dir)?;
        let locales = load_locales(
            &resolve_path(&root_dir, &config.languages),
            &config.default_locale,
        )?;

        if verbose && !locales.iter().any(|l| l.is_default) {
            eprintln!(
                "Note: Default locale '{}' is not listed in {}",
                config.default_locale, config.languages
            );
        }

        let ignore = IgnoreRules::new(&root_dir, &config.ignores)?;

        Ok(Self {
            config,
            root_dir,
            verbose,
            bundles,
            locales,
            ignore,
        })
    }

    pub fn resolved_locale_data_folder(&self) -> PathBuf {
        resolve_path(&self.root_dir, &self.config.locale_data_folder)
    }

    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            locale_data_folder: self.resolved_locale_data_folder(),
            ignore: self.ignore.clone(),
            verbose: self.verbose,
        }
    }

    pub fn generate(
        &self,
        extractor: &dyn MessageExtractor,
        translations: &dyn TranslationSource,
        logger: &dyn Logger,
    ) -> Result<GenerateSummary> {
        generate(
            &self.bundles,
            &self.locales,
            &self.options(),
            &Collaborators {
                extractor,
                translations,
                logger,
            },
        )
    }
}

/// Resolve a configured path against the project root.
pub fn resolve_path(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    // With `--root .` keep the configured path as is ("./locale", not "././locale").
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
