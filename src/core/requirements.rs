//! Requirement collection: which message identifiers each bundle needs, and
//! the default-locale text of every identifier.

use anyhow::{Result, bail};

use crate::{
    core::{
        bundles::BundleDescriptor,
        extract::{ExtractOptions, MessageExtractor},
        messages::{MessageDefinition, MessageMap},
    },
};

/// Required identifiers of one bundle, in extraction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRequirement {
    pub name: String,
    pub ids: Vec<String>,
}

/// Bundle name → required identifiers, in bundle order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredMessageSet {
    bundles: Vec<BundleRequirement>,
}

impl RequiredMessageSet {
    /// Record a bundle's requirements. A repeated name replaces the earlier
    /// entry in place.
    fn insert(&mut self, name: &str, ids: Vec<String>) {
        match self.bundles.iter_mut().find(|b| b.name == name) {
            Some(existing) => existing.ids = ids,
            None => self.bundles.push(BundleRequirement {
                name: name.to_string(),
                ids,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.bundles
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.ids.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &BundleRequirement> {
        self.bundles.iter()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

/// Identifier → default-locale definition, merged across all bundles.
pub type DefaultMessageTable = MessageMap;

/// Output of the collection stage. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Requirements {
    pub required: RequiredMessageSet,
    pub defaults: DefaultMessageTable,
}

impl Requirements {
    pub fn default_text(&self, id: &str) -> Option<&MessageDefinition> {
        self.defaults.get(id)
    }
}

/// Extract every bundle and fold the results into `Requirements`.
///
/// Bundles are processed in order; when two bundles define the same
/// identifier, the later bundle's text wins. Extraction errors abort.
pub fn collect_requirements(
    bundles: &[BundleDescriptor],
    extractor: &dyn MessageExtractor,
    options: &ExtractOptions<'_>,
) -> Result<Requirements> {
    let logger = options.logger;
    bundles
        .iter()
        .try_fold(Requirements::default(), |mut acc, bundle| {
            logger.info(&format!("Gathering required string ids for {}", bundle.name));

            let messages = match (&bundle.entry, bundle.is_entry) {
                (Some(entry), true) => {
                    extractor.extract_from_entry(entry, &bundle.module_file_path, options)?
                }
                (None, true) => bail!(
                    "Bundle '{}' is marked as an entry bundle but has no 'entry'",
                    bundle.name
                ),
                (_, false) => extractor.extract_from_file(&bundle.module_file_path, options)?,
            };

            let ids: Vec<String> = messages.ids().map(str::to_string).collect();
            logger.info(&format!(
                "Gathered {} required string ids for {}",
                ids.len(),
                bundle.name
            ));

            acc.required.insert(&bundle.name, ids);
            acc.defaults.extend(messages);
            Ok(acc)
        })
}
